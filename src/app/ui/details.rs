use std::sync::Arc;

use eframe::egui::{self, RichText, Ui};
use facet_sphere::FacetKey;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Artifact Details");
        ui.add_space(6.0);

        let Some(shown_id) = self.hovered.clone().or_else(|| self.selected.clone()) else {
            ui.label("Hover or click an artifact in the scene.");
            return;
        };

        let catalog = Arc::clone(self.explorer.catalog());
        let Some(artifact) = catalog.get(&shown_id) else {
            ui.label("Selected artifact is not part of the loaded catalog.");
            return;
        };

        ui.label(RichText::new(artifact.name.as_str()).strong());
        ui.small(format!("id {}", artifact.id));
        ui.add_space(6.0);

        for key in FacetKey::ALL {
            let value = artifact.facet(key).unwrap_or("-");
            ui.label(format!("{}: {value}", key.label()));
        }

        let targets = self.explorer.targets();
        if let Some(entry) = targets.get(&artifact.id) {
            let status = match entry.slot {
                Some(slot) => {
                    format!("gathered, slot {} of {}", slot + 1, targets.gathered_count())
                }
                None if targets.filter_active() => "outside the current cluster".to_owned(),
                None => "dispersed".to_owned(),
            };
            ui.label(format!("Position: {status}"));
        }

        if let Some(description) = &artifact.description {
            ui.separator();
            ui.label(description.as_str());
        }

        if artifact.thumbnail.is_some() || !artifact.images.is_empty() {
            ui.separator();
            if let Some(thumbnail) = &artifact.thumbnail {
                ui.small(format!("thumbnail: {thumbnail}"));
            }
            if !artifact.images.is_empty() {
                ui.small(format!("{} images", artifact.images.len()));
            }
        }

        if !artifact.related.is_empty() {
            ui.separator();
            ui.label(RichText::new("Related artifacts").strong());
            egui::ScrollArea::vertical()
                .id_salt("related_artifacts_scroll")
                .max_height(160.0)
                .show(ui, |ui| {
                    for related_id in &artifact.related {
                        let Some(related) = catalog.get(related_id) else {
                            ui.label(format!("{related_id} (not in catalog)"));
                            continue;
                        };
                        if ui
                            .link(related.name.as_str())
                            .on_hover_text(related.id.as_str())
                            .clicked()
                        {
                            self.set_selected(Some(related.id.clone()));
                        }
                    }
                });
        }
    }
}
