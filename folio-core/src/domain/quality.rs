//! Quality check domain types

use serde::{Deserialize, Serialize};

/// A checkable option in the data quality score demo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityCheck {
    pub id: String,
    pub label: String,

    /// Points added to the score while the option is checked
    pub weight: u32,
}
