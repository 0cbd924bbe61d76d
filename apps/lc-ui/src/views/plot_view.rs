use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use lc_app::RunReport;
use lc_core::Faction;

#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn show(&mut self, ui: &mut egui::Ui, report: Option<&RunReport>) {
        let Some(report) = report else {
            ui.label("Press Run to simulate the engagement");
            return;
        };

        let scenario = &report.scenario;
        let x_label = format!("Time ({})", scenario.display.time_unit);
        let height = ((ui.available_height() - ui.spacing().item_spacing.y) / 2.0).max(120.0);

        for side in Faction::ALL {
            let label = scenario.label(side);
            let points: PlotPoints = report.result.iter().map(|s| [s.t, s.get(side)]).collect();
            let color = match side {
                Faction::A => Color32::from_rgb(31, 119, 180),
                Faction::B => Color32::from_rgb(255, 127, 14),
            };

            Plot::new(("population_plot", side))
                .height(height)
                .legend(Legend::default())
                .include_y(0.0)
                .x_axis_label(x_label.clone())
                .y_axis_label(format!("{label} strength"))
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(points).name(label).color(color));
                });
        }
    }
}
