//! Filter, sort, and paginate over a store snapshot.
//!
//! Pure functions of (snapshot, filters) — no store mutation, no side
//! effects. All text predicates are case-insensitive substring matches
//! combined conjunctively.

use std::collections::BTreeSet;

use homepros_core::Service;
use serde::Serialize;

/// Default page size when the caller supplies none.
pub const DEFAULT_LIMIT: usize = 20;

const MAX_LIMIT: usize = 100;

/// Applies the default and bounds to a caller-supplied page size.
#[must_use]
pub fn normalize_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Sort order for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    RatingDesc,
    RatingAsc,
    NameAsc,
    /// Featured listings first, rating descending within each group.
    Featured,
    ReviewsDesc,
    /// Unset or unrecognized keys leave insertion order untouched.
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parses the wire value of a sort key. Anything unrecognized maps to
    /// [`SortKey::Unsorted`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("rating_desc") => Self::RatingDesc,
            Some("rating_asc") => Self::RatingAsc,
            Some("name_asc") => Self::NameAsc,
            Some("featured") => Self::Featured,
            Some("reviews_desc") => Self::ReviewsDesc,
            _ => Self::Unsorted,
        }
    }
}

/// Request-scoped search constraints.
///
/// Text filters holding an empty string behave as absent rather than
/// matching nothing.
#[derive(Debug, Clone)]
pub struct SearchFilters {
    pub query: Option<String>,
    pub industry: Option<String>,
    pub city: Option<String>,
    /// Inclusive lower bound: a record rated exactly this value matches.
    pub min_rating: Option<f64>,
    pub company_name: Option<String>,
    pub sort_by: SortKey,
    /// 1-based. Values below 1 are clamped to 1.
    pub page: usize,
    pub limit: usize,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            query: None,
            industry: None,
            city: None,
            min_rating: None,
            company_name: None,
            sort_by: SortKey::Unsorted,
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// One page of matches plus the global facet lists.
///
/// Field names serialize in the published API's camelCase.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub services: Vec<Service>,
    /// Pre-pagination match count.
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    /// Distinct industries across ALL non-duplicate records, sorted.
    /// Unaffected by the active filters.
    pub industries: Vec<String>,
    /// Distinct derived cities across ALL non-duplicate records, sorted,
    /// blanks excluded. Unaffected by the active filters.
    pub cities: Vec<String>,
}

/// Filters, sorts, and paginates `services` according to `filters`.
#[must_use]
pub fn search(services: &[Service], filters: &SearchFilters) -> SearchResult {
    let mut matched: Vec<&Service> = services
        .iter()
        .filter(|s| !s.duplicate)
        .filter(|s| matches_filters(s, filters))
        .collect();

    sort_matches(&mut matched, filters.sort_by);

    let total = matched.len();
    let limit = normalize_limit(Some(filters.limit));
    let page = filters.page.max(1);
    let total_pages = total.div_ceil(limit);

    let services_page: Vec<Service> = matched
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .cloned()
        .collect();

    SearchResult {
        services: services_page,
        total,
        page,
        total_pages,
        industries: industry_facets(services),
        cities: city_facets(services),
    }
}

/// Distinct sorted industries over the non-duplicate set.
#[must_use]
pub fn industry_facets(services: &[Service]) -> Vec<String> {
    services
        .iter()
        .filter(|s| !s.duplicate)
        .map(|s| s.industry.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct sorted derived cities over the non-duplicate set; records
/// without a derivable city contribute nothing.
#[must_use]
pub fn city_facets(services: &[Service]) -> Vec<String> {
    services
        .iter()
        .filter(|s| !s.duplicate)
        .filter_map(|s| s.city().map(ToOwned::to_owned))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_filters(service: &Service, filters: &SearchFilters) -> bool {
    if let Some(query) = present(&filters.query) {
        if !contains_ci(&service.industry, query) && !contains_ci(&service.title, query) {
            return false;
        }
    }

    if let Some(industry) = present(&filters.industry) {
        if !contains_ci(&service.industry, industry) {
            return false;
        }
    }

    if let Some(city) = present(&filters.city) {
        if !service.city().is_some_and(|c| contains_ci(c, city)) {
            return false;
        }
    }

    if let Some(min_rating) = filters.min_rating {
        if service.rating < min_rating {
            return false;
        }
    }

    if let Some(company_name) = present(&filters.company_name) {
        if !contains_ci(&service.title, company_name) {
            return false;
        }
    }

    true
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn sort_matches(matched: &mut [&Service], key: SortKey) {
    match key {
        SortKey::RatingDesc => matched.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::RatingAsc => matched.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::NameAsc => matched.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::Featured => matched.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then(b.rating.total_cmp(&a.rating))
        }),
        SortKey::ReviewsDesc => matched.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        SortKey::Unsorted => {}
    }
}
