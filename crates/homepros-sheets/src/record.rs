//! Header-driven mapping from parsed CSV rows to [`Service`] records.

use std::collections::HashMap;

use homepros_core::{duplicate_flag, source_flag, Service};

/// Maps a parsed CSV table (header row first) into service records.
///
/// Cells are looked up by header name, so column order in the sheet does
/// not matter and unknown columns are ignored. Every field has an explicit
/// default: missing or unparseable numbers become 0, missing text becomes
/// empty, and optional URL/email fields become `None` when blank. Rows
/// lacking both a non-empty title and a non-empty industry are dropped.
#[must_use]
pub fn records_from_table(table: &[Vec<String>]) -> Vec<Service> {
    let Some((header, rows)) = table.split_first() else {
        return Vec::new();
    };

    let index: HashMap<&str, usize> = header
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    rows.iter()
        .filter_map(|row| record_from_row(&index, row))
        .collect()
}

fn record_from_row(index: &HashMap<&str, usize>, row: &[String]) -> Option<Service> {
    let title = cell(index, row, "Title").to_string();
    let industry = cell(index, row, "Industry").to_string();
    if title.is_empty() && industry.is_empty() {
        return None;
    }

    Some(Service {
        id: cell(index, row, "S no").parse().unwrap_or(0),
        rating: cell(index, row, "Rating").parse().unwrap_or(0.0),
        reviews: cell(index, row, "Reviews").parse().unwrap_or(0),
        phone: cell(index, row, "Phone").to_string(),
        address: cell(index, row, "Address").to_string(),
        website: optional(cell(index, row, "Website")),
        maps_link: optional(cell(index, row, "Google Maps Link")),
        email: optional(cell(index, row, "Email")),
        featured: source_flag(cell(index, row, "Featured")),
        verified: source_flag(cell(index, row, "Verified")),
        licensed: source_flag(cell(index, row, "Licensed")),
        duplicate: duplicate_flag(cell(index, row, "duplicate")),
        title,
        industry,
    })
}

/// Cell for a named header, or empty when the column or cell is missing.
fn cell<'a>(index: &HashMap<&str, usize>, row: &'a [String], name: &str) -> &'a str {
    index
        .get(name)
        .and_then(|&i| row.get(i))
        .map_or("", String::as_str)
}

fn optional(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parse_table;

    const EXPORT: &str = "\
S no,Title,Rating,Reviews,Phone,Industry,Address,Website,Google Maps Link,Email,Featured,Verified,Licensed,duplicate
1,Elite Plumbing Services,4.8,127,(217) 555-0148,Plumber,412 Oak Street,https://elite.example.com,,info@elite.example.com,Yes,Yes,Yes,false
2,Bright Spark Electric,4.9,203,(217) 555-0192,Electrician,1501 Commerce Drive,,,,No,Yes,No,
3,Shadow Listing,3.1,4,(217) 555-0000,Plumber,Unknown,,,,No,No,No,TRUE
";

    #[test]
    fn maps_known_headers_to_typed_fields() {
        let records = records_from_table(&parse_table(EXPORT));
        assert_eq!(records.len(), 3);

        let elite = &records[0];
        assert_eq!(elite.id, 1);
        assert_eq!(elite.title, "Elite Plumbing Services");
        assert_eq!(elite.industry, "Plumber");
        assert!((elite.rating - 4.8).abs() < f64::EPSILON);
        assert_eq!(elite.reviews, 127);
        assert_eq!(elite.website.as_deref(), Some("https://elite.example.com"));
        assert_eq!(elite.maps_link, None);
        assert_eq!(elite.email.as_deref(), Some("info@elite.example.com"));
        assert!(elite.featured && elite.verified && elite.licensed);
        assert!(!elite.duplicate);
    }

    #[test]
    fn flags_convert_once_at_the_boundary() {
        let records = records_from_table(&parse_table(EXPORT));
        let spark = &records[1];
        assert!(!spark.featured);
        assert!(spark.verified);
        assert!(!spark.duplicate, "blank duplicate cell is not a duplicate");
        assert!(records[2].duplicate, "TRUE marks a duplicate");
    }

    #[test]
    fn unparseable_numbers_default_to_zero() {
        let raw = "S no,Title,Rating,Reviews,Industry\nabc,Acme Repair,high,many,Handyman\n";
        let records = records_from_table(&parse_table(raw));
        assert_eq!(records[0].id, 0);
        assert!((records[0].rating - 0.0).abs() < f64::EPSILON);
        assert_eq!(records[0].reviews, 0);
    }

    #[test]
    fn drops_rows_without_title_and_industry() {
        let raw = "S no,Title,Rating,Reviews,Industry\n1,,4.0,10,\n2,Acme,4.0,10,\n3,,4.0,10,Plumber\n";
        let records = records_from_table(&parse_table(raw));
        assert_eq!(records.len(), 2, "title-only and industry-only rows survive");
    }

    #[test]
    fn short_rows_and_unknown_headers_are_tolerated() {
        let raw = "Title,Industry,Mystery Column\nAcme,Plumber\n";
        let records = records_from_table(&parse_table(raw));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].phone, "");
        assert_eq!(records[0].website, None);
    }

    #[test]
    fn empty_table_yields_no_records() {
        assert!(records_from_table(&[]).is_empty());
        assert!(records_from_table(&parse_table("Title,Industry\n")).is_empty());
    }
}
