//! Navigation panels of the admin shell.

use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// A selectable section of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Inventory,
    Sales,
    Customers,
    Dashboard,
}

impl Panel {
    /// Sidebar order
    pub const ALL: [Panel; 4] = [
        Self::Inventory,
        Self::Sales,
        Self::Customers,
        Self::Dashboard,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Inventory => "inventory",
            Self::Sales => "sales",
            Self::Customers => "customers",
            Self::Dashboard => "dashboard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inventory => "Inventory",
            Self::Sales => "Sales",
            Self::Customers => "Customers",
            Self::Dashboard => "Dashboard",
        }
    }

    /// Only the inventory panel renders content; the rest are placeholders.
    pub fn has_content(self) -> bool {
        matches!(self, Self::Inventory)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Panel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown panel: {}", s)))
    }
}
