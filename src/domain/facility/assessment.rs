//! Intake assessment for level-of-care placement.

use serde::{Deserialize, Serialize};

/// Answers collected during intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeAnswers {
    pub name: String,
    pub age: u32,
    /// Primary substance of concern.
    pub substance: String,
    pub usage_frequency: String,
    #[serde(default)]
    pub previous_treatment: bool,
}

/// ASAM dimension summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsamCriteria {
    pub dimension1: String,
    pub dimension2: String,
    pub dimension3: String,
    pub dimension4: String,
    pub dimension5: String,
    pub dimension6: String,
}

/// Recommended level of care and next steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub risk_level: String,
    pub recommended_care: Vec<String>,
    pub asam_criteria: AsamCriteria,
    pub next_steps: Vec<String>,
}

impl Assessment {
    /// Baseline moderate-risk assessment used until clinical scoring exists.
    pub fn baseline() -> Self {
        Self {
            risk_level: "Moderate".to_string(),
            recommended_care: vec![
                "Intensive Outpatient".to_string(),
                "Individual Therapy".to_string(),
            ],
            asam_criteria: AsamCriteria {
                dimension1: "Minimal risk of withdrawal".to_string(),
                dimension2: "No biomedical conditions requiring treatment".to_string(),
                dimension3: "Moderate emotional/behavioral conditions".to_string(),
                dimension4: "Ready for change".to_string(),
                dimension5: "Continued use risk without monitoring".to_string(),
                dimension6: "Supportive recovery environment with assistance".to_string(),
            },
            next_steps: vec![
                "Schedule assessment with treatment provider".to_string(),
                "Gather insurance information".to_string(),
                "Prepare list of current medications".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_treatment_defaults_to_false() {
        let answers: IntakeAnswers = serde_json::from_value(serde_json::json!({
            "name": "Sam",
            "age": 34,
            "substance": "Alcohol",
            "usage_frequency": "Daily"
        }))
        .unwrap();

        assert!(!answers.previous_treatment);
    }

    #[test]
    fn negative_age_is_rejected() {
        let result: Result<IntakeAnswers, _> = serde_json::from_value(serde_json::json!({
            "name": "Sam",
            "age": -1,
            "substance": "Alcohol",
            "usage_frequency": "Daily"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn baseline_recommends_intensive_outpatient() {
        let assessment = Assessment::baseline();

        assert_eq!(assessment.risk_level, "Moderate");
        assert_eq!(assessment.recommended_care[0], "Intensive Outpatient");
        assert_eq!(assessment.next_steps.len(), 3);
    }
}
