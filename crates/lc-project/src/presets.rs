//! Built-in scenarios.

use crate::schema::{
    CoefficientsDef, CutoffDef, DisplayDef, FactionDef, FactionsDef, IntegrationDef, Scenario,
};
use crate::validate::LATEST_VERSION;
use lc_sim::DEFAULT_END_TIME;

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: &[&str] = &["test"];

/// Tanks against infantry with equal strength and effectiveness.
pub fn test_conditions() -> Scenario {
    Scenario {
        version: LATEST_VERSION,
        name: "Test conditions".to_string(),
        factions: FactionsDef {
            a: FactionDef {
                label: "Tanks".to_string(),
                initial: 100.0,
            },
            b: FactionDef {
                label: "Infantry".to_string(),
                initial: 100.0,
            },
        },
        coefficients: CoefficientsDef {
            alpha: 0.01,
            beta: 0.01,
            kt: 1.0,
            ki: 1.0,
        },
        integration: IntegrationDef {
            steps: 1000,
            end_time: DEFAULT_END_TIME,
        },
        cutoff: CutoffDef::default(),
        display: DisplayDef::default(),
    }
}

pub fn by_name(name: &str) -> Option<Scenario> {
    match name {
        "test" => Some(test_conditions()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_preset_resolves() {
        for name in PRESET_NAMES {
            assert!(by_name(name).is_some(), "{name}");
        }
        assert!(by_name("nope").is_none());
    }
}
