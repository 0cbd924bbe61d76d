//! Side identifiers for the two-population model.

use std::fmt;

/// One of the two opposing populations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Faction {
    A,
    B,
}

impl Faction {
    pub const ALL: [Faction; 2] = [Faction::A, Faction::B];
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Faction::A => write!(f, "A"),
            Faction::B => write!(f, "B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_order() {
        assert_eq!(Faction::ALL, [Faction::A, Faction::B]);
        assert_eq!(Faction::A.to_string(), "A");
        assert_eq!(Faction::B.to_string(), "B");
    }
}
