/// View-level enums: sort direction and fetch status
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction the next name sort will apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// A to Z
    #[default]
    Ascending,
    /// Z to A
    Descending,
}

impl SortDirection {
    /// The other direction
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the sort trigger, describing the sort it will apply
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort A-Z",
            Self::Descending => "Sort Z-A",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// Outcome of the one startup fetch
///
/// The view is empty both while loading and after a failure; this status is
/// the only thing that tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

impl FetchStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}
