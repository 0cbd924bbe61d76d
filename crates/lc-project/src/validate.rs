//! Scenario validation logic.

use crate::schema::{FactionDef, Scenario};

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Check a scenario before running or saving it.
///
/// Zero or negative populations and coefficients are accepted; the model
/// handles them without special cases.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.name.trim().is_empty() {
        return Err(invalid("name", &scenario.name, "must not be empty"));
    }

    validate_faction("factions.a", &scenario.factions.a)?;
    validate_faction("factions.b", &scenario.factions.b)?;

    let coeffs = &scenario.coefficients;
    for (field, value) in [
        ("coefficients.alpha", coeffs.alpha),
        ("coefficients.beta", coeffs.beta),
        ("coefficients.kt", coeffs.kt),
        ("coefficients.ki", coeffs.ki),
    ] {
        require_finite(field, value)?;
    }

    if scenario.integration.steps == 0 {
        return Err(invalid("integration.steps", &0, "must be positive"));
    }

    let end_time = scenario.integration.end_time;
    if !end_time.is_finite() || end_time <= 0.0 {
        return Err(invalid(
            "integration.end_time",
            &end_time,
            "must be positive and finite",
        ));
    }

    let fraction = scenario.cutoff.fraction;
    if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
        return Err(invalid(
            "cutoff.fraction",
            &fraction,
            "must be within [0, 1]",
        ));
    }

    if scenario.display.time_unit.trim().is_empty() {
        return Err(invalid(
            "display.time_unit",
            &scenario.display.time_unit,
            "must not be empty",
        ));
    }

    Ok(())
}

fn validate_faction(prefix: &str, faction: &FactionDef) -> Result<(), ValidationError> {
    if faction.label.trim().is_empty() {
        return Err(invalid(
            &format!("{prefix}.label"),
            &faction.label,
            "must not be empty",
        ));
    }
    require_finite(&format!("{prefix}.initial"), faction.initial)
}

fn require_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, &value, "must be finite"))
    }
}

fn invalid(field: &str, value: &dyn ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
