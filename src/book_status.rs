use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the possible circulation states of a catalog record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BookStatus {
    /// Book is on the shelf and can be borrowed
    #[default]
    Available,
    /// Book is currently lent out
    Borrowed,
    /// Book is held for a patron
    Reserved,
    /// Book is withdrawn for repair or processing
    UnderMaintenance,
}

impl BookStatus {
    /// Get the human-readable label shown to patrons
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Borrowed => "Borrowed",
            Self::Reserved => "Reserved",
            Self::UnderMaintenance => "Under Maintenance",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
