use egui::Color32;
use lc_app::{FormErrors, FormField, ScenarioForm};

const GROUPS: [(&str, &[FormField]); 4] = [
    (
        "Model parameters",
        &[FormField::Alpha, FormField::Beta, FormField::Kt, FormField::Ki],
    ),
    ("Initial strength", &[FormField::InitialA, FormField::InitialB]),
    (
        "Integration",
        &[FormField::Steps, FormField::EndTime, FormField::CutoffFraction],
    ),
    (
        "Labels",
        &[
            FormField::Name,
            FormField::LabelA,
            FormField::LabelB,
            FormField::TimeUnit,
        ],
    ),
];

#[derive(Default)]
pub struct ParamsView;

impl ParamsView {
    /// Draw the scenario form. Returns true when Enter was pressed in a field.
    pub fn show(&mut self, ui: &mut egui::Ui, form: &mut ScenarioForm, errors: &FormErrors) -> bool {
        let mut submitted = false;

        for (title, fields) in GROUPS {
            ui.strong(title);
            egui::Grid::new(title)
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    for &field in fields {
                        ui.label(field_label(form, field));
                        let response = ui.add(
                            egui::TextEdit::singleline(form.field_mut(field)).desired_width(120.0),
                        );
                        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                            submitted = true;
                        }
                        ui.end_row();

                        if let Some(message) = errors.error_for(field) {
                            ui.label("");
                            ui.colored_label(Color32::RED, message);
                            ui.end_row();
                        }
                    }
                });
            ui.add_space(6.0);
        }

        ui.checkbox(&mut form.cutoff, "Stop at cutoff");

        for error in errors.errors.iter().filter(|e| e.field.is_none()) {
            ui.colored_label(Color32::RED, &error.message);
        }

        submitted
    }
}

fn field_label(form: &ScenarioForm, field: FormField) -> String {
    match field {
        FormField::InitialA => format!("{}:", form.label_a),
        FormField::InitialB => format!("{}:", form.label_b),
        other => format!("{}:", other.label()),
    }
}
