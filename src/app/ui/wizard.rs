use eframe::egui::{self, Color32, RichText, Ui};
use facet_sphere::{Advance, FacetKey, WizardView};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_wizard(&mut self, ui: &mut Ui) {
        ui.heading("Guided selection");
        ui.add_space(4.0);

        let view = self.explorer.wizard_view();
        let active = self.explorer.filter_state().active_count();
        ui.add(
            egui::ProgressBar::new(view.progress)
                .text(format!("{active} of {} facets chosen", FacetKey::COUNT)),
        );
        self.draw_step_indicator(ui, &view);
        ui.add_space(6.0);

        if view.completed {
            self.draw_wizard_summary(ui);
        } else {
            self.draw_wizard_step(ui, &view);
        }
    }

    fn draw_step_indicator(&self, ui: &mut Ui, view: &WizardView) {
        ui.horizontal_wrapped(|ui| {
            for key in FacetKey::ALL {
                let committed = self.explorer.filter_state().is_active(key);
                let mut text = RichText::new(format!(
                    "{}{}",
                    key.index() + 1,
                    if committed { " ✔" } else { "" }
                ));
                text = text.small();
                if !view.completed && key == view.facet_key {
                    text = text.strong().color(Color32::from_rgb(255, 244, 170));
                }
                ui.label(text).on_hover_text(key.label());
            }
        });
    }

    fn draw_wizard_step(&mut self, ui: &mut Ui, view: &WizardView) {
        let key = view.facet_key;
        ui.label(
            RichText::new(format!(
                "Step {} of {}: {}",
                view.current_step + 1,
                FacetKey::COUNT,
                key.label()
            ))
            .strong(),
        );
        match &view.committed_value {
            Some(value) => ui.label(format!("Committed: {value}")),
            None => ui.label("Nothing committed for this step yet."),
        };

        egui::ScrollArea::vertical()
            .id_salt("wizard_options_scroll")
            .max_height(220.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for &value in key.vocabulary() {
                    let is_candidate = view.candidate.as_deref() == Some(value);
                    if ui.selectable_label(is_candidate, value).clicked() {
                        self.explorer.wizard_select(value);
                    }
                }
            });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(view.candidate.is_some(), egui::Button::new("Confirm"))
                .clicked()
            {
                self.explorer.wizard_confirm();
            }
            if ui
                .add_enabled(view.confirmed, egui::Button::new("Reselect"))
                .clicked()
            {
                self.explorer.wizard_reselect();
            }
        });
        ui.horizontal(|ui| {
            if ui
                .add_enabled(view.can_retreat, egui::Button::new("Prev"))
                .clicked()
            {
                self.explorer.wizard_prev();
            }
            let next_label = if view.current_step + 1 == FacetKey::COUNT {
                "Finish"
            } else {
                "Next"
            };
            if ui
                .add_enabled(view.can_advance, egui::Button::new(next_label))
                .clicked()
                && self.explorer.wizard_next() == Advance::Rejected
            {
                log::warn!("wizard refused to advance from step {}", view.current_step);
            }
            if ui.button("Start over").clicked() {
                self.explorer.wizard_reset();
            }
        });
    }

    fn draw_wizard_summary(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Selection complete").strong());
        for key in FacetKey::ALL {
            let value = self.explorer.filter_state().get(key).unwrap_or("-");
            ui.label(format!("{}: {value}", key.label()));
        }

        let summary = self.explorer.summary();
        ui.label(format!("{} artifacts gathered", summary.gathered));
        if !self.explorer.can_generate() {
            ui.label("No facet is committed; nothing to hand over.");
        }

        ui.horizontal(|ui| {
            if ui.button("Back").clicked() {
                self.explorer.wizard_prev();
            }
            if ui.button("Start over").clicked() {
                self.explorer.wizard_reset();
            }
        });
    }
}
