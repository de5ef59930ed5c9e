use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Closed set of departments an employee can register under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
    ToSchema,
)]
pub enum Department {
    Developer,
    Designing,
    #[serde(rename = "Sales & Marketing")]
    #[strum(serialize = "Sales & Marketing")]
    SalesAndMarketing,
    #[serde(rename = "HR")]
    #[strum(serialize = "HR")]
    Hr,
}

impl Department {
    /// Comma-separated list of the accepted wire names, for error messages.
    pub fn valid_values() -> String {
        use strum::IntoEnumIterator;
        Self::iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
