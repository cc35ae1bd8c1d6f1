//! Review status shared by recipes and product sheets.

use serde::{Deserialize, Serialize};

/// Review lifecycle of an editable record.
///
/// Records move from `Draft` to `Validated`. Which one a save produces is
/// decided by the saving role (see `barkeep-auth`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReviewStatus {
    #[default]
    Draft,
    Validated,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Draft => "DRAFT",
            ReviewStatus::Validated => "VALIDATED",
        }
    }

    pub fn is_validated(&self) -> bool {
        *self == ReviewStatus::Validated
    }
}

impl core::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
