use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::criteria::{BudgetBucket, CriteriaField, CriteriaParseError, FilterCriteria};
use super::domain::{College, EntityId, Pg, Role};
use super::service::DirectoryService;
use super::session::SessionProvider;
use super::store::{CollegeUpdate, DirectoryAdmin};
use crate::error::AppError;

/// Query string accepted by the college listing; every value arrives as raw text.
#[derive(Debug, Default, Deserialize)]
pub struct CollegeQuery {
    pub search: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub course: Option<String>,
    pub min_fees: Option<String>,
    pub max_fees: Option<String>,
    pub min_rating: Option<String>,
    pub min_package: Option<String>,
}

impl CollegeQuery {
    pub fn into_criteria(self) -> Result<FilterCriteria, CriteriaParseError> {
        let mut criteria = with_text_fields(
            FilterCriteria::new(),
            self.search,
            self.city,
            self.state,
            self.kind,
        );
        if let Some(course) = self.course {
            criteria = criteria.with(CriteriaField::Course(course));
        }
        if let Some(min) = parse_number("min_fees", self.min_fees)? {
            criteria = criteria.with(CriteriaField::MinFees(min));
        }
        if let Some(max) = parse_number("max_fees", self.max_fees)? {
            criteria = criteria.with(CriteriaField::MaxFees(max));
        }
        if let Some(rating) = parse_number("min_rating", self.min_rating)? {
            criteria = criteria.with(CriteriaField::MinRating(rating));
        }
        if let Some(package) = parse_number("min_package", self.min_package)? {
            criteria = criteria.with(CriteriaField::MinPackage(package));
        }
        Ok(criteria)
    }
}

/// Query string accepted by the PG listing. `budget` takes a bucket label or key and is applied
/// before the explicit rent bounds.
#[derive(Debug, Default, Deserialize)]
pub struct PgQuery {
    pub search: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub budget: Option<String>,
    pub min_rent: Option<String>,
    pub max_rent: Option<String>,
    pub min_rating: Option<String>,
}

impl PgQuery {
    pub fn into_criteria(self) -> Result<FilterCriteria, CriteriaParseError> {
        let mut criteria =
            with_text_fields(FilterCriteria::new(), self.search, self.city, None, self.kind);
        if let Some(raw) = self.budget.filter(|raw| !raw.trim().is_empty()) {
            let bucket = BudgetBucket::from_str(&raw)?;
            criteria = criteria.with(CriteriaField::Budget(Some(bucket)));
        }
        if let Some(min) = parse_number("min_rent", self.min_rent)? {
            criteria = criteria.with(CriteriaField::MinFees(min));
        }
        if let Some(max) = parse_number("max_rent", self.max_rent)? {
            criteria = criteria.with(CriteriaField::MaxFees(max));
        }
        if let Some(rating) = parse_number("min_rating", self.min_rating)? {
            criteria = criteria.with(CriteriaField::MinRating(rating));
        }
        Ok(criteria)
    }
}

fn with_text_fields(
    criteria: FilterCriteria,
    search: Option<String>,
    city: Option<String>,
    state: Option<String>,
    kind: Option<String>,
) -> FilterCriteria {
    let mut criteria = criteria;
    if let Some(search) = search {
        criteria = criteria.with(CriteriaField::Search(search));
    }
    if let Some(city) = city {
        criteria = criteria.with(CriteriaField::City(city));
    }
    if let Some(state) = state {
        criteria = criteria.with(CriteriaField::State(state));
    }
    if let Some(kind) = kind {
        criteria = criteria.with(CriteriaField::Kind(kind));
    }
    criteria
}

fn parse_number<T: FromStr>(
    field: &'static str,
    raw: Option<String>,
) -> Result<Option<T>, CriteriaParseError> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| CriteriaParseError::InvalidNumber { field, value }),
    }
}

fn accepted_criteria(
    parsed: Result<FilterCriteria, CriteriaParseError>,
) -> Option<FilterCriteria> {
    parsed
        .map_err(|error| debug!(%error, "listing query rejected"))
        .ok()
}

fn require_admin(session: &impl SessionProvider) -> Result<(), AppError> {
    match session.current_role() {
        Role::Admin => Ok(()),
        role => Err(AppError::Forbidden(role)),
    }
}

/// Router builder exposing listing search and admin maintenance endpoints.
pub fn directory_router<P>(service: Arc<DirectoryService<P>>) -> Router
where
    P: DirectoryAdmin + 'static,
{
    Router::new()
        .route(
            "/api/v1/colleges",
            get(list_colleges::<P>).post(create_college::<P>),
        )
        .route(
            "/api/v1/colleges/:college_id",
            get(college_detail::<P>)
                .patch(update_college::<P>)
                .delete(delete_college::<P>),
        )
        .route("/api/v1/pgs", get(list_pgs::<P>).post(create_pg::<P>))
        .with_state(service)
}

pub(crate) async fn list_colleges<P>(
    State(service): State<Arc<DirectoryService<P>>>,
    Query(query): Query<CollegeQuery>,
) -> Result<Response, AppError>
where
    P: DirectoryAdmin + 'static,
{
    let criteria = accepted_criteria(query.into_criteria());
    let page = service.search_colleges(criteria).await?;
    Ok(Json(page).into_response())
}

pub(crate) async fn list_pgs<P>(
    State(service): State<Arc<DirectoryService<P>>>,
    Query(query): Query<PgQuery>,
) -> Result<Response, AppError>
where
    P: DirectoryAdmin + 'static,
{
    let criteria = accepted_criteria(query.into_criteria());
    let page = service.search_pgs(criteria).await?;
    Ok(Json(page).into_response())
}

pub(crate) async fn college_detail<P>(
    State(service): State<Arc<DirectoryService<P>>>,
    Path(college_id): Path<String>,
) -> Result<Response, AppError>
where
    P: DirectoryAdmin + 'static,
{
    let id = EntityId(college_id);
    match service.college_detail(&id).await? {
        Some(detail) => Ok(Json(detail).into_response()),
        None => Ok(not_found(&id)),
    }
}

pub(crate) async fn create_college<P>(
    State(service): State<Arc<DirectoryService<P>>>,
    headers: HeaderMap,
    Json(college): Json<College>,
) -> Result<Response, AppError>
where
    P: DirectoryAdmin + 'static,
{
    require_admin(&headers)?;
    let id = service.add_college(college).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))).into_response())
}

pub(crate) async fn create_pg<P>(
    State(service): State<Arc<DirectoryService<P>>>,
    headers: HeaderMap,
    Json(pg): Json<Pg>,
) -> Result<Response, AppError>
where
    P: DirectoryAdmin + 'static,
{
    require_admin(&headers)?;
    let id = service.add_pg(pg).await?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id }))).into_response())
}

pub(crate) async fn update_college<P>(
    State(service): State<Arc<DirectoryService<P>>>,
    headers: HeaderMap,
    Path(college_id): Path<String>,
    Json(update): Json<CollegeUpdate>,
) -> Result<Response, AppError>
where
    P: DirectoryAdmin + 'static,
{
    require_admin(&headers)?;
    let id = EntityId(college_id);
    if service.update_college(id.clone(), update).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(not_found(&id))
    }
}

pub(crate) async fn delete_college<P>(
    State(service): State<Arc<DirectoryService<P>>>,
    headers: HeaderMap,
    Path(college_id): Path<String>,
) -> Result<Response, AppError>
where
    P: DirectoryAdmin + 'static,
{
    require_admin(&headers)?;
    let id = EntityId(college_id);
    if service.delete_college(id.clone()).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(not_found(&id))
    }
}

fn not_found(id: &EntityId) -> Response {
    let payload = json!({
        "error": format!("college {id} not found"),
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::ROLE_HEADER;
    use axum::http::HeaderValue;

    #[test]
    fn college_query_builds_criteria() {
        let query = CollegeQuery {
            city: Some("Mumbai".to_string()),
            min_fees: Some("100000".to_string()),
            min_rating: Some(" 4.5 ".to_string()),
            max_fees: Some(String::new()),
            ..CollegeQuery::default()
        };
        let criteria = query.into_criteria().expect("criteria parse");
        assert_eq!(criteria.city(), "Mumbai");
        assert_eq!(criteria.min_fees(), 100_000);
        assert_eq!(criteria.min_rating(), 4.5);
        assert_eq!(criteria.max_fees(), crate::directory::FEES_RANGE_MAX);
    }

    #[test]
    fn non_numeric_bound_is_rejected() {
        let query = CollegeQuery {
            min_package: Some("lots".to_string()),
            ..CollegeQuery::default()
        };
        assert_eq!(
            query.into_criteria(),
            Err(CriteriaParseError::InvalidNumber {
                field: "min_package",
                value: "lots".to_string(),
            })
        );
    }

    #[test]
    fn admin_gate_reports_the_callers_role() {
        let mut headers = HeaderMap::new();
        assert!(matches!(
            require_admin(&headers),
            Err(AppError::Forbidden(Role::Anonymous))
        ));

        headers.insert(ROLE_HEADER, HeaderValue::from_static("user"));
        assert!(matches!(
            require_admin(&headers),
            Err(AppError::Forbidden(Role::User))
        ));

        headers.insert(ROLE_HEADER, HeaderValue::from_static("admin"));
        assert!(require_admin(&headers).is_ok());
        assert!(require_admin(&Role::Admin).is_ok());
    }

    #[test]
    fn pg_budget_then_explicit_rent_bound() {
        let query = PgQuery {
            budget: Some("10k_15k".to_string()),
            max_rent: Some("12000".to_string()),
            ..PgQuery::default()
        };
        let criteria = query.into_criteria().expect("criteria parse");
        assert_eq!((criteria.min_fees(), criteria.max_fees()), (10_000, 12_000));
    }
}
