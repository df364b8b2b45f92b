use eframe::egui::{self, Ui};

use super::super::render_utils::circle_visible;
use super::super::ViewModel;

const ORBIT_SENSITIVITY: f32 = 0.008;
const MAX_PITCH: f32 = 1.45;

impl ViewModel {
    pub(in crate::app) fn handle_scene_orbit(&mut self, response: &egui::Response) {
        if !response.dragged_by(egui::PointerButton::Primary) {
            return;
        }

        let delta = response.drag_delta();
        self.camera.yaw += delta.x * ORBIT_SENSITIVITY;
        self.camera.pitch =
            (self.camera.pitch + delta.y * ORBIT_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub(in crate::app) fn handle_scene_zoom(&mut self, ui: &Ui, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.camera.zoom = (self.camera.zoom * zoom_factor).clamp(0.3, 6.0);
    }

    pub(in crate::app) fn hovered_index(&self, ui: &Ui, rect: egui::Rect) -> Option<usize> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        if !rect.contains(pointer) {
            return None;
        }

        self.view_scratch
            .screen_points
            .iter()
            .enumerate()
            .filter_map(|(index, point)| {
                let point = (*point)?;
                if !circle_visible(rect, point.position, point.radius) {
                    return None;
                }
                (point.position.distance(pointer) <= point.radius.max(4.0))
                    .then_some((index, point.depth))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        if self.selected == selected {
            return;
        }
        log::debug!("selected artifact {selected:?}");
        self.selected = selected;
    }
}
