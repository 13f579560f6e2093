//! Harness run modes

use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

/// What a harness run does with the snapshot cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Run every case and compare with its expected outputs
    #[default]
    Compare,
    /// Run every case and overwrite its expected outputs
    Update,
    /// Create a new case from the project's current inputs
    Create,
}

impl Mode {
    /// Every mode, in the order they are listed to users
    pub const ALL: [Self; 3] = [Self::Compare, Self::Update, Self::Create];

    /// Mode token
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Update => "update",
            Self::Create => "create",
        }
    }

    /// Accepted tokens as `'compare', 'update', 'create'`
    #[must_use]
    pub fn accepted() -> String {
        Self::ALL
            .iter()
            .map(|m| format!("'{}'", m.as_str()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|m| m.as_str() == s).ok_or_else(|| HarnessError::InvalidMode {
            given: s.to_string(),
            accepted: Self::accepted(),
        })
    }
}
