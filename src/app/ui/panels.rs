use std::path::Path;

use eframe::egui::{self, Align, Context, Layout};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        catalog_path: &Path,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        let summary = self.explorer.summary();

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("facet-sphere");
                    ui.separator();
                    ui.label(format!("catalog: {}", catalog_path.display()));
                    ui.label(format!("artifacts: {}", summary.total));
                    ui.label(format!("matching: {}", summary.matching));
                    ui.label(format!("gathered: {}", summary.gathered));
                    let reload_button =
                        ui.add_enabled(!is_loading, egui::Button::new("Reload catalog"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.checkbox(&mut self.show_labels, "Labels");
                        ui.checkbox(&mut self.show_shell, "Cluster shell");
                        ui.checkbox(&mut self.auto_rotate, "Auto-rotate");
                        ui.label(format!("mapping rev {}", self.motion.revision()));
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("wizard")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                self.draw_wizard(ui);
                ui.separator();
                self.draw_details(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if is_loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Reloading artifact catalog...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                } else {
                    self.draw_scene(ui);
                }
            });
    }
}
