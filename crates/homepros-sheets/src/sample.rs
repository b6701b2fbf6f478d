//! Fixed demo listings used whenever the sheet export is unavailable.

use homepros_core::Service;

/// Returns the fixed 8-listing sample set (5 industries).
///
/// This is the fallback content for every ingestion failure, so the
/// directory always has something to serve.
#[must_use]
pub fn sample_services() -> Vec<Service> {
    vec![
        sample(
            1,
            "Elite Plumbing Services",
            "Plumber",
            4.8,
            127,
            "(217) 555-0148",
            "412 Oak Street, Springfield, IL 62704",
            Some("https://eliteplumbing.example.com"),
            true,
        ),
        sample(
            2,
            "Quick Fix Plumbing",
            "Plumber",
            4.4,
            89,
            "(217) 555-0114",
            "88 Canal Road, Riverton, IL 62561",
            None,
            false,
        ),
        sample(
            3,
            "Bright Spark Electric",
            "Electrician",
            4.9,
            203,
            "(217) 555-0192",
            "1501 Commerce Drive, Springfield, IL 62703",
            Some("https://brightspark.example.com"),
            true,
        ),
        sample(
            4,
            "Current Electrical Solutions",
            "Electrician",
            4.6,
            74,
            "(217) 555-0163",
            "230 Birch Avenue, Chatham, IL 62629",
            None,
            false,
        ),
        sample(
            5,
            "Comfort Zone Heating & Air",
            "HVAC Contractor",
            4.7,
            156,
            "(217) 555-0177",
            "901 Industrial Parkway, Springfield, IL 62702",
            Some("https://comfortzonehvac.example.com"),
            true,
        ),
        sample(
            6,
            "Polar Air Mechanical",
            "HVAC Contractor",
            4.5,
            61,
            "(217) 555-0139",
            "47 Frontage Road, Sherman, IL 62684",
            None,
            false,
        ),
        sample(
            7,
            "Summit Roofing Company",
            "Roofer",
            4.8,
            112,
            "(217) 555-0185",
            "66 Hilltop Lane, Rochester, IL 62563",
            None,
            false,
        ),
        sample(
            8,
            "GreenScape Lawn & Garden",
            "Landscaper",
            4.3,
            48,
            "(217) 555-0126",
            "310 Meadow Court, Auburn, IL 62615",
            None,
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: i64,
    title: &str,
    industry: &str,
    rating: f64,
    reviews: i64,
    phone: &str,
    address: &str,
    website: Option<&str>,
    featured: bool,
) -> Service {
    Service {
        id,
        title: title.to_string(),
        industry: industry.to_string(),
        rating,
        reviews,
        phone: phone.to_string(),
        address: address.to_string(),
        website: website.map(ToOwned::to_owned),
        maps_link: None,
        email: None,
        featured,
        verified: true,
        licensed: true,
        duplicate: false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn sample_set_has_eight_listings_across_five_industries() {
        let services = sample_services();
        assert_eq!(services.len(), 8);

        let industries: BTreeSet<&str> = services.iter().map(|s| s.industry.as_str()).collect();
        assert_eq!(industries.len(), 5);
    }

    #[test]
    fn sample_set_contains_the_two_plumbers() {
        let services = sample_services();
        let elite = services
            .iter()
            .find(|s| s.title == "Elite Plumbing Services")
            .expect("Elite Plumbing Services present");
        let quick = services
            .iter()
            .find(|s| s.title == "Quick Fix Plumbing")
            .expect("Quick Fix Plumbing present");
        assert!((elite.rating - 4.8).abs() < f64::EPSILON);
        assert!((quick.rating - 4.4).abs() < f64::EPSILON);
        assert_eq!(elite.industry, "Plumber");
        assert_eq!(quick.industry, "Plumber");
    }

    #[test]
    fn sample_addresses_all_derive_a_city() {
        for service in sample_services() {
            assert!(service.city().is_some(), "{} has no city", service.title);
        }
    }

    #[test]
    fn sample_set_has_no_duplicates() {
        assert!(sample_services().iter().all(|s| !s.duplicate));
    }
}
