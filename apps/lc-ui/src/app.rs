use std::path::{Path, PathBuf};

use egui_file_dialog::{DialogMode, FileDialog};
use lc_app::{FormErrors, RunReport, ScenarioForm, StepEntry};

use crate::views::{ParamsView, PlotView, ResultsView};

pub struct LanchesterApp {
    form: ScenarioForm,
    form_errors: FormErrors,
    report: Option<RunReport>,
    step_log: String,
    rows: Vec<StepEntry>,
    status: Option<String>,
    show_description: bool,
    scenario_path: Option<PathBuf>,
    file_dialog: FileDialog,
    file_dialog_action: Option<FileDialogAction>,
    last_directory: Option<PathBuf>,
    params_view: ParamsView,
    plot_view: PlotView,
    results_view: ResultsView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FileDialogAction {
    Open,
    Save,
    ExportCsv,
}

impl LanchesterApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            form: ScenarioForm::default(),
            form_errors: FormErrors::default(),
            report: None,
            step_log: String::new(),
            rows: Vec::new(),
            status: None,
            show_description: false,
            scenario_path: None,
            file_dialog: FileDialog::new(),
            file_dialog_action: None,
            last_directory: None,
            params_view: ParamsView,
            plot_view: PlotView,
            results_view: ResultsView::default(),
        }
    }

    fn run(&mut self) {
        let scenario = match self.form.parse() {
            Ok(scenario) => scenario,
            Err(errors) => {
                self.status = Some(format!("Invalid input: {errors}"));
                self.form_errors = errors;
                return;
            }
        };
        self.form_errors = FormErrors::default();

        match lc_app::run_scenario(&scenario) {
            Ok(report) => {
                self.step_log = lc_app::step_log(
                    &report.result,
                    [
                        scenario.factions.a.label.as_str(),
                        scenario.factions.b.label.as_str(),
                    ],
                    &scenario.display.time_unit,
                );
                self.rows = lc_app::table_rows(&report.result);
                self.status = Some(format!(
                    "{} samples, {}",
                    report.summary.sample_count,
                    lc_app::outcome_text(&scenario, report.summary.outcome)
                ));
                self.report = Some(report);
            }
            Err(e) => {
                tracing::warn!(error = %e, "run failed");
                self.status = Some(format!("Run failed: {e}"));
            }
        }
    }

    fn reset_to_test_conditions(&mut self) {
        let cutoff = self.form.cutoff;
        self.form = ScenarioForm::default();
        self.form.cutoff = cutoff;
        self.scenario_path = None;
        self.run();
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_directory = Some(parent.to_path_buf());
        }
    }

    fn open_scenario(&mut self, path: PathBuf) {
        match lc_project::load(&path) {
            Ok(scenario) => {
                self.remember_directory(&path);
                self.form = ScenarioForm::from_scenario(&scenario);
                self.form_errors = FormErrors::default();
                self.status = Some(format!("Opened {}", path.display()));
                self.scenario_path = Some(path);
                self.run();
            }
            Err(e) => {
                self.status = Some(format!("Failed to load scenario: {e}"));
            }
        }
    }

    fn save_scenario_as(&mut self, path: PathBuf) {
        let scenario = match self.form.parse() {
            Ok(scenario) => scenario,
            Err(errors) => {
                self.status = Some(format!("Cannot save: {errors}"));
                self.form_errors = errors;
                return;
            }
        };
        match lc_project::save(&path, &scenario) {
            Ok(()) => {
                self.remember_directory(&path);
                self.status = Some(format!("Saved {}", path.display()));
                self.scenario_path = Some(path);
            }
            Err(e) => {
                self.status = Some(format!("Failed to save scenario: {e}"));
            }
        }
    }

    fn export_csv(&mut self, path: PathBuf) {
        let Some(report) = self.report.as_ref() else {
            self.status = Some("Nothing to export, run the model first".to_string());
            return;
        };
        let csv = lc_app::to_csv(&report.result);
        match lc_app::export::write_to(&path, &csv) {
            Ok(()) => {
                self.status = Some(format!(
                    "Wrote {} samples to {}",
                    report.result.len(),
                    path.display()
                ));
                self.remember_directory(&path);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open").clicked() {
                self.file_dialog_action = Some(FileDialogAction::Open);
                let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
                let _ = self
                    .file_dialog
                    .open(DialogMode::SelectFile, true, initial_dir);
            }

            if ui.button("Save").clicked() {
                match self.scenario_path.clone() {
                    Some(path) => self.save_scenario_as(path),
                    None => {
                        self.file_dialog_action = Some(FileDialogAction::Save);
                        self.file_dialog.save_file();
                    }
                }
            }

            ui.add_enabled_ui(self.report.is_some(), |ui| {
                if ui.button("Export CSV").clicked() {
                    self.file_dialog_action = Some(FileDialogAction::ExportCsv);
                    self.file_dialog.save_file();
                }
            });

            ui.separator();

            if ui.button("Run").clicked() {
                self.run();
            }
            if ui.button("Test conditions").clicked() {
                self.reset_to_test_conditions();
            }
            ui.checkbox(&mut self.form.cutoff, "Cutoff");

            ui.separator();
            ui.toggle_value(&mut self.show_description, "Description");
        });
    }
}

impl eframe::App for LanchesterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            match self.file_dialog_action.take() {
                Some(FileDialogAction::Open) => self.open_scenario(path),
                Some(FileDialogAction::Save) => self.save_scenario_as(path),
                Some(FileDialogAction::ExportCsv) => self.export_csv(path),
                None => {}
            }
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_deref().unwrap_or("Ready"));
        });

        let mut submitted = false;
        egui::SidePanel::left("parameters")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Scenario");
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    submitted = self.params_view.show(ui, &mut self.form, &self.form_errors);
                });
            });
        if submitted {
            self.run();
        }

        egui::TopBottomPanel::bottom("results")
            .resizable(true)
            .default_height(260.0)
            .show(ctx, |ui| {
                self.results_view
                    .show(ui, self.report.as_ref(), &self.step_log, &self.rows);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_view.show(ui, self.report.as_ref());
        });

        egui::Window::new("Model description")
            .open(&mut self.show_description)
            .default_width(520.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(lc_app::MODEL_DESCRIPTION);
                });
            });
    }
}
