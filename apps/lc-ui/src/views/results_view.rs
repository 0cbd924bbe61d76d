use egui::RichText;
use egui_extras::{Column, TableBuilder};
use lc_app::{RunReport, StepEntry};

#[derive(Default)]
pub struct ResultsView {
    tab: ResultsTab,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum ResultsTab {
    #[default]
    Steps,
    Table,
}

impl ResultsView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        report: Option<&RunReport>,
        step_log: &str,
        rows: &[StepEntry],
    ) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, ResultsTab::Steps, "Steps");
            ui.selectable_value(&mut self.tab, ResultsTab::Table, "Table");
            if let Some(report) = report {
                ui.separator();
                ui.label(lc_app::outcome_text(&report.scenario, report.summary.outcome));
            }
        });
        ui.separator();

        let Some(report) = report else {
            ui.label("No results yet");
            return;
        };

        match self.tab {
            ResultsTab::Steps => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(RichText::new(step_log).monospace());
                    });
            }
            ResultsTab::Table => show_table(ui, report, rows),
        }
    }
}

fn show_table(ui: &mut egui::Ui, report: &RunReport, rows: &[StepEntry]) {
    let scenario = &report.scenario;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(60.0).at_least(40.0)) // Step
        .column(Column::initial(110.0).at_least(80.0)) // Time
        .column(Column::initial(140.0).at_least(80.0)) // Side A
        .column(Column::remainder().at_least(80.0)) // Side B
        .header(22.0, |mut header| {
            header.col(|ui| {
                ui.strong("Step");
            });
            header.col(|ui| {
                ui.strong(format!("Time ({})", scenario.display.time_unit));
            });
            header.col(|ui| {
                ui.strong(&scenario.factions.a.label);
            });
            header.col(|ui| {
                ui.strong(&scenario.factions.b.label);
            });
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let entry = rows[row.index()];
                row.col(|ui| {
                    ui.label(entry.step.to_string());
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", entry.time));
                });
                row.col(|ui| {
                    ui.label(format!("{:.4}", entry.a));
                });
                row.col(|ui| {
                    ui.label(format!("{:.4}", entry.b));
                });
            });
        });
}
