use eframe::egui::{self, RichText, Ui};
use facet_sphere::FacetKey;

use super::super::render_utils::legend_entries;
use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Facets");
        ui.add_space(4.0);

        let summary = self.explorer.summary();
        ui.label(format!(
            "{} of {} artifacts match, {} of {} facets active",
            summary.matching,
            summary.total,
            summary.active_facets,
            FacetKey::COUNT
        ));

        let has_active = self.explorer.filter_state().has_active();
        if ui
            .add_enabled(has_active, egui::Button::new("Reset filters"))
            .clicked()
        {
            self.explorer.reset_all();
        }
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("facet_controls_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for key in FacetKey::ALL {
                    self.draw_facet_options(ui, key);
                }

                ui.separator();
                ui.label(RichText::new("Colour by shape").strong());
                for (value, color) in legend_entries() {
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                        ui.painter().circle_filled(rect.center(), 5.0, color);
                        ui.label(value);
                    });
                }
            });
    }

    fn draw_facet_options(&mut self, ui: &mut Ui, key: FacetKey) {
        let counts = self.explorer.option_counts(key);
        let selected = self.explorer.filter_state().get(key).map(str::to_owned);

        let title = match &selected {
            Some(value) => format!("{}: {value}", key.label()),
            None => key.label().to_owned(),
        };

        egui::CollapsingHeader::new(title)
            .id_salt(("facet", key.name()))
            .default_open(key == FacetKey::Shape)
            .show(ui, |ui| {
                for (value, count) in counts {
                    let mut checked = selected.as_deref() == Some(value);
                    let response = ui.add_enabled(
                        count > 0 || checked,
                        egui::Checkbox::new(&mut checked, format!("{value}  ({count})")),
                    );
                    if response.changed() {
                        self.explorer.set_facet(key, value);
                    }
                }

                if selected.is_some() && ui.small_button("Clear").clicked() {
                    self.explorer.clear_facet(key);
                }
            });
    }
}
