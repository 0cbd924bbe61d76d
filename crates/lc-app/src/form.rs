//! Text-field scenario input shared by the GUI form and CLI flags.
//!
//! Frontends keep user input as strings; this module turns it into a
//! validated [`Scenario`] and reports problems per field.

use std::fmt;

use lc_project::{Scenario, ValidationError, presets, validate_scenario};

/// Editable fields of a scenario, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    LabelA,
    LabelB,
    Alpha,
    Beta,
    Kt,
    Ki,
    InitialA,
    InitialB,
    Steps,
    EndTime,
    CutoffFraction,
    TimeUnit,
}

impl FormField {
    pub const ALL: [FormField; 13] = [
        FormField::Name,
        FormField::LabelA,
        FormField::LabelB,
        FormField::Alpha,
        FormField::Beta,
        FormField::Kt,
        FormField::Ki,
        FormField::InitialA,
        FormField::InitialB,
        FormField::Steps,
        FormField::EndTime,
        FormField::CutoffFraction,
        FormField::TimeUnit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::LabelA => "Side A",
            FormField::LabelB => "Side B",
            FormField::Alpha => "alpha",
            FormField::Beta => "beta",
            FormField::Kt => "kt",
            FormField::Ki => "ki",
            FormField::InitialA => "Initial A",
            FormField::InitialB => "Initial B",
            FormField::Steps => "Steps",
            FormField::EndTime => "End time",
            FormField::CutoffFraction => "Cutoff fraction",
            FormField::TimeUnit => "Time unit",
        }
    }

    /// Location of the field in the scenario file.
    pub fn path(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::LabelA => "factions.a.label",
            FormField::LabelB => "factions.b.label",
            FormField::Alpha => "coefficients.alpha",
            FormField::Beta => "coefficients.beta",
            FormField::Kt => "coefficients.kt",
            FormField::Ki => "coefficients.ki",
            FormField::InitialA => "factions.a.initial",
            FormField::InitialB => "factions.b.initial",
            FormField::Steps => "integration.steps",
            FormField::EndTime => "integration.end_time",
            FormField::CutoffFraction => "cutoff.fraction",
            FormField::TimeUnit => "display.time_unit",
        }
    }

    fn from_path(path: &str) -> Option<FormField> {
        FormField::ALL.into_iter().find(|f| f.path() == path)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    /// None for problems not tied to one field
    pub field: Option<FormField>,
    pub message: String,
}

/// Every problem found in a form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormErrors {
    pub errors: Vec<FieldError>,
}

impl FormErrors {
    fn push(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: Some(field),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First message for `field`, if any.
    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == Some(field))
            .map(|e| e.message.as_str())
    }
}

impl From<ValidationError> for FormErrors {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::InvalidValue { field, .. } => FormField::from_path(field),
            ValidationError::UnsupportedVersion { .. } => None,
        };
        let message = match &err {
            ValidationError::InvalidValue { reason, .. } => reason.clone(),
            other => other.to_string(),
        };
        FormErrors {
            errors: vec![FieldError { field, message }],
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            match e.field {
                Some(field) => write!(f, "{}: {}", field.label(), e.message)?,
                None => write!(f, "{}", e.message)?,
            }
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

/// Raw text of every scenario field.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioForm {
    pub name: String,
    pub label_a: String,
    pub label_b: String,
    pub alpha: String,
    pub beta: String,
    pub kt: String,
    pub ki: String,
    pub initial_a: String,
    pub initial_b: String,
    pub steps: String,
    pub end_time: String,
    pub cutoff: bool,
    pub cutoff_fraction: String,
    pub time_unit: String,
}

impl Default for ScenarioForm {
    fn default() -> Self {
        Self::from_scenario(&presets::test_conditions())
    }
}

impl ScenarioForm {
    pub fn from_scenario(s: &Scenario) -> Self {
        Self {
            name: s.name.clone(),
            label_a: s.factions.a.label.clone(),
            label_b: s.factions.b.label.clone(),
            alpha: s.coefficients.alpha.to_string(),
            beta: s.coefficients.beta.to_string(),
            kt: s.coefficients.kt.to_string(),
            ki: s.coefficients.ki.to_string(),
            initial_a: s.factions.a.initial.to_string(),
            initial_b: s.factions.b.initial.to_string(),
            steps: s.integration.steps.to_string(),
            end_time: s.integration.end_time.to_string(),
            cutoff: s.cutoff.enabled,
            cutoff_fraction: s.cutoff.fraction.to_string(),
            time_unit: s.display.time_unit.clone(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::LabelA => &self.label_a,
            FormField::LabelB => &self.label_b,
            FormField::Alpha => &self.alpha,
            FormField::Beta => &self.beta,
            FormField::Kt => &self.kt,
            FormField::Ki => &self.ki,
            FormField::InitialA => &self.initial_a,
            FormField::InitialB => &self.initial_b,
            FormField::Steps => &self.steps,
            FormField::EndTime => &self.end_time,
            FormField::CutoffFraction => &self.cutoff_fraction,
            FormField::TimeUnit => &self.time_unit,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::LabelA => &mut self.label_a,
            FormField::LabelB => &mut self.label_b,
            FormField::Alpha => &mut self.alpha,
            FormField::Beta => &mut self.beta,
            FormField::Kt => &mut self.kt,
            FormField::Ki => &mut self.ki,
            FormField::InitialA => &mut self.initial_a,
            FormField::InitialB => &mut self.initial_b,
            FormField::Steps => &mut self.steps,
            FormField::EndTime => &mut self.end_time,
            FormField::CutoffFraction => &mut self.cutoff_fraction,
            FormField::TimeUnit => &mut self.time_unit,
        }
    }

    /// Parse every field, then validate the assembled scenario.
    pub fn parse(&self) -> Result<Scenario, FormErrors> {
        let mut errors = FormErrors::default();
        let mut number = |field: FormField| -> f64 {
            match parse_number(self.field(field)) {
                Ok(v) => v,
                Err(msg) => {
                    errors.push(field, msg);
                    f64::NAN
                }
            }
        };

        let alpha = number(FormField::Alpha);
        let beta = number(FormField::Beta);
        let kt = number(FormField::Kt);
        let ki = number(FormField::Ki);
        let initial_a = number(FormField::InitialA);
        let initial_b = number(FormField::InitialB);
        let end_time = number(FormField::EndTime);
        let cutoff_fraction = number(FormField::CutoffFraction);

        let steps = match parse_count(&self.steps) {
            Ok(v) => v,
            Err(msg) => {
                errors.push(FormField::Steps, msg);
                0
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        let mut scenario = presets::test_conditions();
        scenario.name = self.name.trim().to_string();
        scenario.factions.a.label = self.label_a.trim().to_string();
        scenario.factions.b.label = self.label_b.trim().to_string();
        scenario.factions.a.initial = initial_a;
        scenario.factions.b.initial = initial_b;
        scenario.coefficients.alpha = alpha;
        scenario.coefficients.beta = beta;
        scenario.coefficients.kt = kt;
        scenario.coefficients.ki = ki;
        scenario.integration.steps = steps;
        scenario.integration.end_time = end_time;
        scenario.cutoff.enabled = self.cutoff;
        scenario.cutoff.fraction = cutoff_fraction;
        scenario.display.time_unit = self.time_unit.trim().to_string();

        validate_scenario(&scenario)?;
        Ok(scenario)
    }
}

fn parse_number(text: &str) -> Result<f64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("required".to_string());
    }
    text.parse::<f64>()
        .map_err(|_| format!("'{text}' is not a number"))
}

fn parse_count(text: &str) -> Result<usize, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("required".to_string());
    }
    match text.parse::<usize>() {
        Ok(0) => Err("must be positive".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{text}' is not a positive whole number")),
    }
}

/// Per-field replacements applied on top of a base scenario.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioOverrides {
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub kt: Option<f64>,
    pub ki: Option<f64>,
    pub initial_a: Option<f64>,
    pub initial_b: Option<f64>,
    pub steps: Option<usize>,
    pub end_time: Option<f64>,
    pub cutoff: Option<bool>,
    pub cutoff_fraction: Option<f64>,
    pub label_a: Option<String>,
    pub label_b: Option<String>,
}

impl ScenarioOverrides {
    pub fn apply(&self, scenario: &mut Scenario) {
        fn set<T: Clone>(slot: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        set(&mut scenario.coefficients.alpha, &self.alpha);
        set(&mut scenario.coefficients.beta, &self.beta);
        set(&mut scenario.coefficients.kt, &self.kt);
        set(&mut scenario.coefficients.ki, &self.ki);
        set(&mut scenario.factions.a.initial, &self.initial_a);
        set(&mut scenario.factions.b.initial, &self.initial_b);
        set(&mut scenario.integration.steps, &self.steps);
        set(&mut scenario.integration.end_time, &self.end_time);
        set(&mut scenario.cutoff.enabled, &self.cutoff);
        set(&mut scenario.cutoff.fraction, &self.cutoff_fraction);
        set(&mut scenario.factions.a.label, &self.label_a);
        set(&mut scenario.factions.b.label, &self.label_b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_parses_to_preset() {
        let scenario = ScenarioForm::default().parse().unwrap();
        assert_eq!(scenario, presets::test_conditions());
    }

    #[test]
    fn whitespace_is_trimmed() {
        let mut form = ScenarioForm::default();
        form.alpha = "  0.02 ".to_string();
        form.steps = " 250".to_string();
        let scenario = form.parse().unwrap();
        assert_eq!(scenario.coefficients.alpha, 0.02);
        assert_eq!(scenario.integration.steps, 250);
    }

    #[test]
    fn parse_errors_are_collected_per_field() {
        let mut form = ScenarioForm::default();
        form.alpha = "abc".to_string();
        form.initial_b = String::new();
        form.steps = "-5".to_string();

        let errors = form.parse().unwrap_err();
        assert_eq!(errors.errors.len(), 3);
        assert_eq!(
            errors.error_for(FormField::Alpha),
            Some("'abc' is not a number")
        );
        assert_eq!(errors.error_for(FormField::InitialB), Some("required"));
        assert!(errors.error_for(FormField::Steps).is_some());
        assert!(errors.error_for(FormField::Beta).is_none());
        assert!(errors.to_string().starts_with("alpha: "));
    }

    #[test]
    fn zero_steps_is_a_field_error() {
        let mut form = ScenarioForm::default();
        form.steps = "0".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.error_for(FormField::Steps), Some("must be positive"));
    }

    #[test]
    fn validation_errors_map_back_to_fields() {
        let mut form = ScenarioForm::default();
        form.end_time = "-1".to_string();
        let errors = form.parse().unwrap_err();
        assert_eq!(
            errors.error_for(FormField::EndTime),
            Some("must be positive and finite")
        );

        let mut form = ScenarioForm::default();
        form.label_b = "   ".to_string();
        let errors = form.parse().unwrap_err();
        assert!(errors.error_for(FormField::LabelB).is_some());
    }

    #[test]
    fn every_field_has_a_unique_path() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_path(field.path()), Some(field));
        }
    }

    #[test]
    fn field_accessors_agree() {
        let mut form = ScenarioForm::default();
        for field in FormField::ALL {
            *form.field_mut(field) = format!("x-{}", field.path());
        }
        for field in FormField::ALL {
            assert_eq!(form.field(field), format!("x-{}", field.path()));
        }
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let mut scenario = presets::test_conditions();
        let overrides = ScenarioOverrides {
            beta: Some(0.05),
            steps: Some(10),
            cutoff: Some(true),
            label_a: Some("Armor".to_string()),
            ..Default::default()
        };
        overrides.apply(&mut scenario);

        assert_eq!(scenario.coefficients.alpha, 0.01);
        assert_eq!(scenario.coefficients.beta, 0.05);
        assert_eq!(scenario.integration.steps, 10);
        assert!(scenario.cutoff.enabled);
        assert_eq!(scenario.factions.a.label, "Armor");
        assert_eq!(scenario.factions.b.label, "Infantry");
    }

    #[test]
    fn round_trips_through_form() {
        let mut scenario = presets::test_conditions();
        scenario.coefficients.kt = 1.0 / 3.0;
        scenario.cutoff.enabled = true;
        let parsed = ScenarioForm::from_scenario(&scenario).parse().unwrap();
        assert_eq!(parsed, scenario);
    }
}
