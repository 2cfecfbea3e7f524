use univera::directory::{
    compute_results, seed::seed_colleges, seed::seed_pgs, BudgetBucket, CollegeDetailView,
    CriteriaField, DirectoryView, EntityStore, FilterCriteria, InMemoryDirectory,
};

#[test]
fn mount_shows_everything_with_default_criteria() {
    let view = DirectoryView::new(seed_colleges());
    assert!(view.criteria().is_default());
    assert_eq!(view.results().len(), 4);
    assert_eq!(view.summary(), "Showing 4 of 4 colleges");
}

#[test]
fn each_edit_recomputes_synchronously() {
    let mut view = DirectoryView::new(seed_colleges());

    let shown = view
        .on_field_change(CriteriaField::State("Tamil Nadu".to_string()))
        .len();
    assert_eq!(shown, 2);

    let shown = view.on_field_change(CriteriaField::MinRating(4.6)).len();
    assert_eq!(shown, 1);
    assert_eq!(view.criteria().state(), "Tamil Nadu");
    assert_eq!(view.summary(), "Showing 1 of 4 colleges");
}

#[test]
fn reset_restores_defaults_and_full_results() {
    let mut view = DirectoryView::new(seed_pgs());
    view.on_field_change(CriteriaField::Budget(Some(BudgetBucket::Above20k)));
    assert!(view.results().is_empty());
    assert_eq!(view.summary(), "Showing 0 of 3 PGs");

    view.on_reset();
    assert_eq!(view.criteria(), &FilterCriteria::default());
    assert_eq!(view.results().len(), 3);
}

#[test]
fn rejected_criteria_show_nothing_until_next_edit() {
    let mut view = DirectoryView::new(seed_colleges());
    view.on_field_change(CriteriaField::City("Mumbai".to_string()));

    assert!(view.on_rejected_criteria().is_empty());
    assert!(view.criteria().is_default());
    assert_eq!(view.summary(), "Showing 0 of 4 colleges");

    view.on_field_change(CriteriaField::City("Delhi".to_string()));
    assert_eq!(view.summary(), "Showing 1 of 4 colleges");
}

#[test]
fn replacing_criteria_wholesale() {
    let mut view = DirectoryView::new(seed_pgs());
    let criteria = FilterCriteria::new()
        .with(CriteriaField::Kind("Co-ed".to_string()))
        .with(CriteriaField::Search("bangalore".to_string()));
    let results = view.replace_criteria(criteria.clone());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Tech Hub Co-living");
    assert_eq!(view.criteria(), &criteria);
}

#[test]
fn college_cards_project_lakhs_and_truncate_courses() {
    let colleges = seed_colleges();
    let criteria = FilterCriteria::new().with(CriteriaField::City("Mumbai".to_string()));
    let cards = compute_results(&colleges, &criteria);

    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.fees_lakhs.as_deref(), Some("2.5"));
    assert_eq!(card.avg_package_lakhs.as_deref(), Some("20.3"));
    assert_eq!(card.category, Some("Engineering"));
    assert_eq!(card.courses.shown, vec!["Computer Science", "Mechanical"]);
    assert_eq!(card.courses.overflow_label.as_deref(), Some("+2 more"));

    let source = colleges
        .iter()
        .find(|college| college.id == card.id)
        .expect("source college");
    assert_eq!(source.courses.len(), 4);
}

#[test]
fn detail_card_uses_wider_cap() {
    let college = seed_colleges().remove(0);
    let detail = CollegeDetailView::from(&college);

    assert_eq!(detail.courses.shown.len(), 4);
    assert!(detail.courses.overflow_label.is_none());
    assert_eq!(detail.facilities.shown.len(), 4);
    assert_eq!(detail.facilities.overflow_label.as_deref(), Some("+1 more"));
    assert_eq!(detail.highest_package_lakhs.as_deref(), Some("55.0"));
}

#[test]
fn pg_cards_group_rent_and_list_everything() {
    let pgs = seed_pgs();
    let cards = compute_results(&pgs, &FilterCriteria::default());

    assert_eq!(cards[0].rent.as_deref(), Some("12,000"));
    assert_eq!(cards[0].occupancy, Some("Boys"));
    assert_eq!(cards[2].facilities.shown.len(), 6);
    assert_eq!(cards[2].facilities.hidden, 0);
}

#[tokio::test]
async fn store_snapshot_feeds_both_views() {
    let directory = InMemoryDirectory::seeded();
    let store = EntityStore::load(&directory).await.expect("store loads");

    let mut colleges = store.college_view();
    let mut pgs = store.pg_view();
    colleges.on_field_change(CriteriaField::Search("technology".to_string()));
    pgs.on_field_change(CriteriaField::City("Delhi".to_string()));

    assert_eq!(colleges.results().len(), 3);
    assert_eq!(pgs.summary(), "Showing 1 of 3 PGs");
}
