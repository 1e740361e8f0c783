//! Policy DTOs

use domain_policy::Illustration;
use serde::Serialize;

pub const CALCULATED: &str = "Policy calculated successfully";

/// Body of a successful calculation
#[derive(Debug, Serialize)]
pub struct CalculateResponse {
    pub message: &'static str,
    pub policy: Illustration,
}

impl From<Illustration> for CalculateResponse {
    fn from(policy: Illustration) -> Self {
        Self {
            message: CALCULATED,
            policy,
        }
    }
}
