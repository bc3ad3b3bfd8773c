//! Insurance coverage verification results.

use serde::{Deserialize, Serialize};

/// Insurance details submitted for verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceQuery {
    pub provider: String,
    pub policy_number: String,
}

/// Coverage levels by service line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageBreakdown {
    pub inpatient: String,
    pub outpatient: String,
    pub detox: String,
    pub medication: String,
}

/// Verification outcome for addiction treatment coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub verified: bool,
    pub provider: String,
    pub policy_number: String,
    pub coverage: CoverageBreakdown,
    pub deductible: String,
    pub out_of_pocket_max: String,
}

impl CoverageReport {
    /// Standard coverage response used until a payer integration exists.
    pub fn standard(query: InsuranceQuery) -> Self {
        Self {
            verified: true,
            provider: query.provider,
            policy_number: query.policy_number,
            coverage: CoverageBreakdown {
                inpatient: "80%".to_string(),
                outpatient: "90%".to_string(),
                detox: "70%".to_string(),
                medication: "Covered with $20 copay".to_string(),
            },
            deductible: "$1,500 remaining".to_string(),
            out_of_pocket_max: "$5,000 per year".to_string(),
        }
    }
}
