//! The `Service` listing type and the small pure helpers the rest of the
//! workspace shares: city derivation, phone normalization, and source-flag
//! conversion.

use serde::{Deserialize, Serialize};

/// One business listing in the directory.
///
/// Ids come from the source sheet and are not guaranteed unique across
/// syncs. Rating and review count are display-only and pass through
/// unvalidated — a negative or >5.0 rating is accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub industry: String,
    pub rating: f64,
    pub reviews: i64,
    pub phone: String,
    pub address: String,
    pub website: Option<String>,
    pub maps_link: Option<String>,
    pub email: Option<String>,
    pub featured: bool,
    pub verified: bool,
    pub licensed: bool,
    /// Source-data exclusion marker. A duplicate record is suppressed from
    /// search results, facets, and counts, but still appears in the raw
    /// listing endpoint.
    pub duplicate: bool,
}

impl Service {
    /// Derived city for this listing. See [`derive_city`].
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        derive_city(&self.address)
    }
}

/// Extracts the city from a comma-delimited address string.
///
/// The city is by convention the second comma-delimited segment, trimmed.
/// Addresses with fewer than two segments have no derivable city.
#[must_use]
pub fn derive_city(address: &str) -> Option<&str> {
    let mut segments = address.split(',');
    segments.next()?;
    segments.next().map(str::trim).filter(|c| !c.is_empty())
}

/// Strips every non-digit character from a phone string.
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Converts a string-encoded source flag ("Yes"/"No", "true"/"false") to a
/// boolean. Used for the featured/verified/licensed columns so the rest of
/// the system never string-compares flags.
#[must_use]
pub fn source_flag(value: &str) -> bool {
    let value = value.trim();
    value.eq_ignore_ascii_case("yes") || value.eq_ignore_ascii_case("true")
}

/// The duplicate marker is true only when the cell case-insensitively
/// equals "true"; "Yes" does not mark a duplicate.
#[must_use]
pub fn duplicate_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
