use crate::infra::build_directory;
use clap::Args;
use std::sync::Arc;
use univera::config::AppConfig;
use univera::directory::{
    BadgeList, BudgetBucket, CollegeCardView, CriteriaField, DirectoryService, FilterCriteria,
    ListingPage, PgCardView,
};
use univera::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct CollegeSearchArgs {
    /// Case-insensitive text matched against name and location
    #[arg(long)]
    pub(crate) search: Option<String>,
    #[arg(long)]
    pub(crate) city: Option<String>,
    #[arg(long)]
    pub(crate) state: Option<String>,
    /// College category (Engineering, Medical, Arts, Commerce, Law)
    #[arg(long = "type")]
    pub(crate) kind: Option<String>,
    /// Only colleges offering this exact course
    #[arg(long)]
    pub(crate) course: Option<String>,
    /// Minimum annual fee in rupees
    #[arg(long)]
    pub(crate) min_fees: Option<u64>,
    /// Maximum annual fee in rupees
    #[arg(long)]
    pub(crate) max_fees: Option<u64>,
    #[arg(long)]
    pub(crate) min_rating: Option<f32>,
    /// Minimum average placement package in rupees
    #[arg(long)]
    pub(crate) min_package: Option<u64>,
    /// Print the result envelope as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl CollegeSearchArgs {
    pub(crate) fn criteria(&self) -> FilterCriteria {
        let text = [
            self.search.clone().map(CriteriaField::Search),
            self.city.clone().map(CriteriaField::City),
            self.state.clone().map(CriteriaField::State),
            self.kind.clone().map(CriteriaField::Kind),
            self.course.clone().map(CriteriaField::Course),
        ];
        let numeric = [
            self.min_fees.map(CriteriaField::MinFees),
            self.max_fees.map(CriteriaField::MaxFees),
            self.min_rating.map(CriteriaField::MinRating),
            self.min_package.map(CriteriaField::MinPackage),
        ];
        apply_changes(text.into_iter().chain(numeric))
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct PgSearchArgs {
    /// Case-insensitive text matched against name, location, and nearby colleges
    #[arg(long)]
    pub(crate) search: Option<String>,
    #[arg(long)]
    pub(crate) city: Option<String>,
    /// Occupancy (Boys, Girls, Co-ed)
    #[arg(long = "type")]
    pub(crate) kind: Option<String>,
    /// Budget bucket label or key (under_10k, 10k_15k, 15k_20k, above_20k)
    #[arg(long, value_parser = parse_budget)]
    pub(crate) budget: Option<BudgetBucket>,
    /// Minimum monthly rent in rupees
    #[arg(long)]
    pub(crate) min_rent: Option<u64>,
    /// Maximum monthly rent in rupees
    #[arg(long)]
    pub(crate) max_rent: Option<u64>,
    #[arg(long)]
    pub(crate) min_rating: Option<f32>,
    /// Print the result envelope as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl PgSearchArgs {
    pub(crate) fn criteria(&self) -> FilterCriteria {
        let changes = [
            self.search.clone().map(CriteriaField::Search),
            self.city.clone().map(CriteriaField::City),
            self.kind.clone().map(CriteriaField::Kind),
            self.budget.map(|bucket| CriteriaField::Budget(Some(bucket))),
            self.min_rent.map(CriteriaField::MinFees),
            self.max_rent.map(CriteriaField::MaxFees),
            self.min_rating.map(CriteriaField::MinRating),
        ];
        apply_changes(changes.into_iter())
    }
}

fn apply_changes(changes: impl Iterator<Item = Option<CriteriaField>>) -> FilterCriteria {
    changes
        .flatten()
        .fold(FilterCriteria::new(), |criteria, change| criteria.with(change))
}

fn parse_budget(raw: &str) -> Result<BudgetBucket, String> {
    raw.parse::<BudgetBucket>().map_err(|err| err.to_string())
}

pub(crate) async fn run_college_search(args: CollegeSearchArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let page = service.search_colleges(Some(args.criteria())).await?;
    if args.json {
        print_json(&page)
    } else {
        print!("{}", render_college_page(&page));
        Ok(())
    }
}

pub(crate) async fn run_pg_search(args: PgSearchArgs) -> Result<(), AppError> {
    let service = load_service()?;
    let page = service.search_pgs(Some(args.criteria())).await?;
    if args.json {
        print_json(&page)
    } else {
        print!("{}", render_pg_page(&page));
        Ok(())
    }
}

fn load_service() -> Result<DirectoryService<univera::directory::InMemoryDirectory>, AppError> {
    let config = AppConfig::load()?;
    let directory = build_directory(&config.directory)?;
    Ok(DirectoryService::new(Arc::new(directory)))
}

fn print_json<V: serde::Serialize>(page: &ListingPage<V>) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(page).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

fn badges(list: &BadgeList) -> String {
    let mut line = list.shown.join(", ");
    if let Some(overflow) = &list.overflow_label {
        line.push(' ');
        line.push_str(overflow);
    }
    line
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}

pub(crate) fn render_college_page(page: &ListingPage<CollegeCardView>) -> String {
    let mut out = format!("{}\n", page.summary);
    if page.results.is_empty() {
        out.push_str("No colleges match the current filters.\n");
        return out;
    }
    for card in &page.results {
        out.push_str(&format!(
            "- {} ({}) | {} | rating {}\n",
            card.name,
            card.location,
            card.category.unwrap_or("-"),
            or_dash(card.rating),
        ));
        out.push_str(&format!(
            "  Fees ₹{}L | Avg package ₹{}L | {}% placed\n",
            or_dash(card.fees_lakhs.as_deref()),
            or_dash(card.avg_package_lakhs.as_deref()),
            or_dash(card.placement_percentage),
        ));
        if !card.courses.shown.is_empty() {
            out.push_str(&format!("  Courses: {}\n", badges(&card.courses)));
        }
    }
    out
}

pub(crate) fn render_pg_page(page: &ListingPage<PgCardView>) -> String {
    let mut out = format!("{}\n", page.summary);
    if page.results.is_empty() {
        out.push_str("No PGs match the current filters.\n");
        return out;
    }
    for card in &page.results {
        out.push_str(&format!(
            "- {} ({}) | {} | rating {} | ₹{}/month\n",
            card.name,
            card.location,
            card.occupancy.unwrap_or("-"),
            or_dash(card.rating),
            or_dash(card.rent.as_deref()),
        ));
        if !card.facilities.shown.is_empty() {
            out.push_str(&format!("  Facilities: {}\n", badges(&card.facilities)));
        }
        if !card.nearby_colleges.shown.is_empty() {
            out.push_str(&format!("  Nearby: {}\n", badges(&card.nearby_colleges)));
        }
    }
    out
}
