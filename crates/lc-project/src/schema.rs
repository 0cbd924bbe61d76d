//! Scenario schema definitions.

use lc_core::Faction;
use lc_sim::{
    CUTOFF_FRACTION, Coefficients, CutoffPolicy, DEFAULT_END_TIME, ForceState, SimulationConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub factions: FactionsDef,
    pub coefficients: CoefficientsDef,
    pub integration: IntegrationDef,
    #[serde(default)]
    pub cutoff: CutoffDef,
    #[serde(default)]
    pub display: DisplayDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactionsDef {
    pub a: FactionDef,
    pub b: FactionDef,
}

impl FactionsDef {
    pub fn get(&self, side: Faction) -> &FactionDef {
        match side {
            Faction::A => &self.a,
            Faction::B => &self.b,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactionDef {
    pub label: String,
    pub initial: f64,
}

/// Model coefficients under their conventional names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoefficientsDef {
    /// Attrition of side A per unit of B's force
    pub alpha: f64,
    /// Attrition of side B per unit of A's force
    pub beta: f64,
    /// Per-unit firepower of side A
    pub kt: f64,
    /// Per-unit firepower of side B
    pub ki: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IntegrationDef {
    pub steps: usize,
    #[serde(default = "default_end_time")]
    pub end_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CutoffDef {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_cutoff_fraction")]
    pub fraction: f64,
}

impl Default for CutoffDef {
    fn default() -> Self {
        Self {
            enabled: false,
            fraction: CUTOFF_FRACTION,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayDef {
    /// Label for the time axis and step log
    #[serde(default = "default_time_unit")]
    pub time_unit: String,
}

impl Default for DisplayDef {
    fn default() -> Self {
        Self {
            time_unit: default_time_unit(),
        }
    }
}

fn default_end_time() -> f64 {
    DEFAULT_END_TIME
}

fn default_cutoff_fraction() -> f64 {
    CUTOFF_FRACTION
}

fn default_time_unit() -> String {
    "min".to_string()
}

impl Scenario {
    /// Label of one side, as shown in reports and plots.
    pub fn label(&self, side: Faction) -> &str {
        &self.factions.get(side).label
    }

    pub fn coefficients(&self) -> Coefficients {
        Coefficients::new(
            self.coefficients.alpha,
            self.coefficients.beta,
            self.coefficients.kt,
            self.coefficients.ki,
        )
    }

    pub fn initial_state(&self) -> ForceState {
        ForceState::new(self.factions.a.initial, self.factions.b.initial)
    }

    /// Simulation inputs for this scenario. Does not validate.
    pub fn to_config(&self) -> SimulationConfig {
        SimulationConfig::new(
            self.initial_state(),
            self.coefficients(),
            self.integration.steps,
        )
        .with_end_time(self.integration.end_time)
        .with_cutoff(CutoffPolicy {
            enabled: self.cutoff.enabled,
            fraction: self.cutoff.fraction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
version: 1
name: Minimal
factions:
  a: { label: Tanks, initial: 100.0 }
  b: { label: Infantry, initial: 80.0 }
coefficients: { alpha: 0.01, beta: 0.02, kt: 1.0, ki: 1.5 }
integration: { steps: 500 }
"#;

    #[test]
    fn optional_sections_take_defaults() {
        let scenario: Scenario = serde_yaml::from_str(MINIMAL).unwrap();
        assert_eq!(scenario.integration.end_time, 800.0);
        assert_eq!(scenario.cutoff, CutoffDef::default());
        assert_eq!(scenario.display.time_unit, "min");
    }

    #[test]
    fn to_config_maps_fields() {
        let scenario: Scenario = serde_yaml::from_str(MINIMAL).unwrap();
        let cfg = scenario.to_config();
        assert_eq!(cfg.initial, ForceState::new(100.0, 80.0));
        assert_eq!(cfg.coefficients, Coefficients::new(0.01, 0.02, 1.0, 1.5));
        assert_eq!(cfg.step_count, 500);
        assert_eq!(cfg.end_time, 800.0);
        assert!(!cfg.cutoff.enabled);
        assert_eq!(scenario.label(Faction::B), "Infantry");
    }
}
