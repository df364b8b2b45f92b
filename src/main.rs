mod app;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use eframe::egui;
use facet_sphere::{LayoutConfig, SpatialLayout, WizardOptions};

const FALLBACK_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Artifact catalog as a JSON array (or an object with an "artifacts" array).
    #[arg(long, default_value = "demos/catalog.json")]
    catalog: PathBuf,
    #[arg(long, default_value_t = 1.5)]
    min_radius: f64,
    #[arg(long, default_value_t = 0.4)]
    radius_scale: f64,
    /// Half-width of the cube that dispersed artifacts are scattered in.
    #[arg(long, default_value_t = 15.0)]
    scatter_extent: f64,
    /// Move the wizard on as soon as a facet receives its first value.
    #[arg(long)]
    auto_advance: bool,
    /// TTF/OTF font with Hangul glyphs.
    #[arg(long)]
    font: Option<PathBuf>,
}

fn install_font(ctx: &egui::Context, path: &Path) -> Result<()> {
    let data = std::fs::read(path)
        .with_context(|| format!("failed to read font {}", path.display()))?;

    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert("catalog".to_owned(), Arc::new(egui::FontData::from_owned(data)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("catalog".to_owned());
    }
    ctx.set_fonts(fonts);

    log::info!("using font {}", path.display());
    Ok(())
}

fn install_hangul_font(ctx: &egui::Context, requested: Option<&Path>) {
    if let Some(path) = requested {
        if let Err(error) = install_font(ctx, path) {
            log::warn!("{error:#}");
        } else {
            return;
        }
    }

    let fallback = FALLBACK_FONT_PATHS
        .iter()
        .map(Path::new)
        .find(|path| path.is_file());
    match fallback {
        Some(path) => {
            if let Err(error) = install_font(ctx, path) {
                log::warn!("{error:#}");
            }
        }
        None => log::warn!("no Hangul font found; pass --font to render Korean labels"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let layout = SpatialLayout::new(LayoutConfig {
        scatter_extent: args.scatter_extent,
        min_radius: args.min_radius,
        radius_scale: args.radius_scale,
    })
    .context("invalid layout configuration")?;
    let wizard_options = WizardOptions {
        advance_on_first_confirm: args.auto_advance,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "facet-sphere",
        options,
        Box::new(move |cc| {
            install_hangul_font(&cc.egui_ctx, args.font.as_deref());
            Ok(Box::new(app::FacetSphereApp::new(
                cc,
                args.catalog.clone(),
                layout,
                wizard_options,
            )))
        }),
    )
    .map_err(|error| anyhow!("viewer exited with an error: {error}"))
}
