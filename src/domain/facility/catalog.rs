//! Treatment facility listings.

use serde::{Deserialize, Serialize};

/// A treatment facility as returned by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Insurance providers the facility accepts.
    pub insurance: Vec<String>,
    /// Levels of care offered (Detox, IOP, PHP, ...).
    pub treatments: Vec<String>,
    pub rating: f32,
}

/// Search criteria for facility lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitySearch {
    pub query: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub insurance: Option<String>,
}

/// Fixed facility listing served until a search backend is connected.
pub fn sample_facilities() -> Vec<Facility> {
    vec![
        Facility {
            id: "1".to_string(),
            name: "Recovery Center of Excellence".to_string(),
            location: "Los Angeles, CA".to_string(),
            insurance: strings(&["Aetna", "Blue Cross", "Cigna"]),
            treatments: strings(&["Detox", "Inpatient", "IOP"]),
            rating: 4.8,
        },
        Facility {
            id: "2".to_string(),
            name: "Serenity Treatment Center".to_string(),
            location: "San Diego, CA".to_string(),
            insurance: strings(&["Blue Cross", "United Healthcare"]),
            treatments: strings(&["Outpatient", "IOP", "PHP"]),
            rating: 4.6,
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_listing_has_two_facilities() {
        let facilities = sample_facilities();

        assert_eq!(facilities.len(), 2);
        assert_eq!(facilities[0].name, "Recovery Center of Excellence");
        assert_eq!(facilities[1].location, "San Diego, CA");
    }

    #[test]
    fn search_filters_are_optional() {
        let search: FacilitySearch = serde_json::from_value(serde_json::json!({
            "query": "detox"
        }))
        .unwrap();

        assert_eq!(search.query, "detox");
        assert!(search.location.is_none());
        assert!(search.insurance.is_none());
    }
}
