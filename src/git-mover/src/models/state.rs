//! Open/closed state of milestones and issues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// State of a single milestone or issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    Open,
    Closed,
}

impl ItemState {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which states a listing call should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl StateFilter {
    /// Returns the wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }

    /// Returns true if an item in `state` passes this filter.
    #[must_use]
    pub fn matches(self, state: ItemState) -> bool {
        match self {
            Self::Open => state == ItemState::Open,
            Self::Closed => state == ItemState::Closed,
            Self::All => true,
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown state filter.
#[derive(Debug, Error)]
#[error("unknown state '{0}', expected one of: open, closed, all")]
pub struct StateFilterError(String);

impl FromStr for StateFilter {
    type Err = StateFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "all" => Ok(Self::All),
            _ => Err(StateFilterError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_parse_state_filter() {
        assert_eq!("open".parse::<StateFilter>().unwrap(), StateFilter::Open);
        assert_eq!("ALL".parse::<StateFilter>().unwrap(), StateFilter::All);
        assert!("merged".parse::<StateFilter>().is_err());
    }

    #[test]
    fn filter_matches_states() {
        assert!(StateFilter::All.matches(ItemState::Closed));
        assert!(StateFilter::Open.matches(ItemState::Open));
        assert!(!StateFilter::Open.matches(ItemState::Closed));
        assert!(!StateFilter::Closed.matches(ItemState::Open));
    }
}
