use std::sync::Arc;

use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Stroke, Ui};
use facet_sphere::{Emphasis, FacetKey, Position3D};
use facet_sphere::util::short_label;

use super::super::render_utils::{
    blend_color, circle_visible, depth_fade, draw_background, label_anchor, project,
    projected_radius, shape_color, with_opacity,
};
use super::super::ViewModel;

const AUTO_ROTATE_SPEED: f32 = 0.12;
const LABEL_CHARS: usize = 14;
const SHELL_COLOR: Color32 = Color32::from_rgba_premultiplied(25, 40, 55, 90);
const HIGHLIGHT: Color32 = Color32::from_rgb(255, 244, 170);

impl ViewModel {
    fn update_screen_points(&mut self, rect: Rect) {
        let camera = self.camera;
        let scratch = &mut self.view_scratch;

        scratch.screen_points.clear();
        scratch.screen_points.extend(
            self.motion
                .points()
                .iter()
                .map(|point| project(rect, camera, point.position, point.scale)),
        );

        scratch.draw_order.clear();
        scratch.draw_order.extend(
            scratch
                .screen_points
                .iter()
                .enumerate()
                .filter_map(|(index, point)| point.map(|_| index)),
        );
        let screen_points = &scratch.screen_points;
        scratch.draw_order.sort_by(|a, b| {
            let depth = |index: usize| screen_points[index].map_or(0.0, |point| point.depth);
            depth(*b).total_cmp(&depth(*a))
        });
    }

    fn draw_shell(&self, painter: &egui::Painter, rect: Rect, radius: f64) {
        let Some(center) = project(rect, self.camera, Position3D::ORIGIN, 1.0) else {
            return;
        };
        let screen_radius = projected_radius(rect, self.camera, radius);
        painter.circle_stroke(center.position, screen_radius, Stroke::new(1.2, SHELL_COLOR));
        painter.circle_filled(
            center.position,
            screen_radius,
            Color32::from_rgba_unmultiplied(70, 110, 150, 14),
        );
    }

    pub(in crate::app) fn draw_scene(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect);

        self.handle_scene_orbit(&response);
        self.handle_scene_zoom(ui, &response);

        let frame_delta_seconds = ui
            .ctx()
            .input(|input| input.stable_dt)
            .clamp(1.0 / 240.0, 1.0 / 20.0);
        let interaction_active = response.dragged();
        if self.auto_rotate && !interaction_active {
            self.camera.yaw = (self.camera.yaw + AUTO_ROTATE_SPEED * frame_delta_seconds)
                .rem_euclid(std::f32::consts::TAU);
        }

        let targets = self.explorer.targets();
        self.motion.retarget(&targets);
        let moving = self.motion.step(frame_delta_seconds);
        if moving || interaction_active || self.auto_rotate {
            ui.ctx().request_repaint();
        }

        if self.show_shell
            && let Some(radius) = targets.cluster_radius()
        {
            self.draw_shell(&painter, rect, radius);
        }

        self.update_screen_points(rect);
        let hovered_index = self.hovered_index(ui, rect);
        let catalog = Arc::clone(self.explorer.catalog());

        for &index in &self.view_scratch.draw_order {
            let (Some(point), Some(screen)) = (
                self.motion.points().get(index),
                self.view_scratch.screen_points[index],
            ) else {
                continue;
            };
            if !circle_visible(rect, screen.position, screen.radius) {
                continue;
            }

            let artifact = catalog.get(&point.id);
            let base = shape_color(artifact.and_then(|artifact| artifact.facet(FacetKey::Shape)));
            let mut fill = with_opacity(depth_fade(base, screen.depth), point.opacity);
            if point.emphasis == Emphasis::Dimmed {
                fill = blend_color(fill, Color32::from_rgba_unmultiplied(40, 46, 54, 200), 0.55);
            }

            let is_selected = self.selected.as_deref() == Some(point.id.as_str());
            let is_hovered = hovered_index == Some(index);
            painter.circle_filled(screen.position, screen.radius, fill);
            if is_selected || is_hovered {
                painter.circle_stroke(
                    screen.position,
                    screen.radius + 2.0,
                    Stroke::new(if is_selected { 2.0 } else { 1.2 }, HIGHLIGHT),
                );
            }

            let show_label = is_selected
                || is_hovered
                || (self.show_labels && point.emphasis == Emphasis::Gathered);
            if show_label && let Some(artifact) = artifact {
                painter.text(
                    label_anchor(screen),
                    Align2::LEFT_CENTER,
                    short_label(&artifact.name, LABEL_CHARS),
                    FontId::proportional(12.0),
                    with_opacity(Color32::from_rgb(225, 230, 236), point.opacity),
                );
            }
        }

        let hovered_id = hovered_index
            .and_then(|index| self.motion.points().get(index))
            .map(|point| point.id.clone());
        if let Some(id) = &hovered_id
            && let Some(artifact) = catalog.get(id)
        {
            response.clone().on_hover_ui_at_pointer(|ui| {
                ui.strong(artifact.name.as_str());
                for key in FacetKey::ALL {
                    if let Some(value) = artifact.facet(key) {
                        ui.label(format!("{}: {value}", key.label()));
                    }
                }
            });
        }

        if response.clicked() {
            self.set_selected(hovered_id.clone());
        }
        self.hovered = hovered_id;

        if catalog.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "The catalog is empty.",
                FontId::proportional(16.0),
                Color32::from_gray(180),
            );
        }
    }
}
