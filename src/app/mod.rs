use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Pos2};
use facet_sphere::{Catalog, Explorer, SpatialLayout, WizardOptions, load_catalog};

mod motion;
mod render_utils;
mod scene;
mod ui;

use motion::Motion;

pub struct FacetSphereApp {
    catalog_path: PathBuf,
    layout: SpatialLayout,
    wizard_options: WizardOptions,
    state: AppState,
    reload_rx: Option<Receiver<Result<Catalog, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Catalog, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    explorer: Explorer,
    motion: Motion,
    camera: Camera,
    hovered: Option<String>,
    selected: Option<String>,
    auto_rotate: bool,
    show_shell: bool,
    show_labels: bool,
    view_scratch: ViewScratch,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Camera {
    yaw: f32,
    pitch: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.6,
            pitch: 0.35,
            zoom: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ScreenPoint {
    position: Pos2,
    radius: f32,
    depth: f32,
}

#[derive(Default)]
struct ViewScratch {
    screen_points: Vec<Option<ScreenPoint>>,
    draw_order: Vec<usize>,
}

impl FacetSphereApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        catalog_path: PathBuf,
        layout: SpatialLayout,
        wizard_options: WizardOptions,
    ) -> Self {
        let state = Self::start_load(catalog_path.clone());
        Self {
            catalog_path,
            layout,
            wizard_options,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(catalog_path: PathBuf) -> Receiver<Result<Catalog, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_catalog(&catalog_path).map_err(|error| {
                log::error!("{error:#}");
                format!("{error:#}")
            });
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(catalog_path: PathBuf) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(catalog_path),
        }
    }

    fn ready(&self, catalog: Catalog) -> AppState {
        AppState::Ready(Box::new(ViewModel::new(
            catalog,
            self.layout,
            self.wizard_options,
        )))
    }
}

impl eframe::App for FacetSphereApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;
        let mut loaded = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                match rx.try_recv() {
                    Ok(result) => loaded = Some(result),
                    Err(TryRecvError::Empty) => ctx.request_repaint(),
                    Err(TryRecvError::Disconnected) => {
                        transition =
                            Some(AppState::Error("Background load worker disconnected".to_owned()));
                    }
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading artifact catalog...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                let catalog_path = self.catalog_path.display().to_string();
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load artifact catalog");
                    ui.add_space(6.0);
                    ui.label(format!("catalog: {catalog_path}"));
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.catalog_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(
                    ctx,
                    &self.catalog_path,
                    &mut reload_requested,
                    is_reloading,
                );

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.catalog_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => loaded = Some(result),
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                            ctx.request_repaint();
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "Background load worker disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(result) = loaded {
            transition = Some(match result {
                Ok(catalog) => self.ready(catalog),
                Err(error) => AppState::Error(error),
            });
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }
}

impl ViewModel {
    fn new(catalog: Catalog, layout: SpatialLayout, wizard_options: WizardOptions) -> Self {
        let explorer = Explorer::new(Arc::new(catalog), layout, wizard_options);
        let motion = Motion::new(&explorer.targets());

        Self {
            explorer,
            motion,
            camera: Camera::default(),
            hovered: None,
            selected: None,
            auto_rotate: true,
            show_shell: true,
            show_labels: true,
            view_scratch: ViewScratch::default(),
        }
    }
}
