use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2};
use facet_sphere::{FacetKey, Position3D};
use facet_sphere::util::split_values;

use super::{Camera, ScreenPoint};

/// Distance from the orbit centre to the eye at zoom 1.
pub(super) const CAMERA_DISTANCE: f32 = 48.0;
const NEAR_PLANE: f32 = 1.0;
/// World-space radius of a point at emphasis scale 1.
pub(super) const POINT_WORLD_RADIUS: f32 = 0.32;

const SHAPE_PALETTE: [Color32; 7] = [
    Color32::from_rgb(236, 112, 99),
    Color32::from_rgb(245, 176, 65),
    Color32::from_rgb(88, 214, 141),
    Color32::from_rgb(93, 173, 226),
    Color32::from_rgb(175, 122, 197),
    Color32::from_rgb(72, 201, 176),
    Color32::from_rgb(240, 128, 180),
];
const UNKNOWN_SHAPE: Color32 = Color32::from_rgb(150, 160, 170);

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn with_opacity(color: Color32, opacity: f32) -> Color32 {
    let opacity = opacity.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * opacity) as u8,
    )
}

pub(super) fn depth_fade(color: Color32, depth: f32) -> Color32 {
    let far = CAMERA_DISTANCE * 1.6;
    let t = ((depth - NEAR_PLANE) / far).clamp(0.0, 1.0);
    blend_color(color, BACKGROUND, t * 0.55)
}

pub(super) const BACKGROUND: Color32 = Color32::from_rgb(19, 23, 29);

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, BACKGROUND);

    let center = rect.center();
    let step = rect.width().min(rect.height()) * 0.12;
    if step < 4.0 {
        return;
    }
    for ring in 1..=4 {
        painter.circle_stroke(
            center,
            step * ring as f32,
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 40)),
        );
    }
}

fn rotate(camera: Camera, point: Position3D) -> (f32, f32, f32) {
    let (x, y, z) = (point.x as f32, point.y as f32, point.z as f32);

    let (sin_yaw, cos_yaw) = camera.yaw.sin_cos();
    let x1 = x * cos_yaw + z * sin_yaw;
    let z1 = -x * sin_yaw + z * cos_yaw;

    let (sin_pitch, cos_pitch) = camera.pitch.sin_cos();
    let y2 = y * cos_pitch - z1 * sin_pitch;
    let z2 = y * sin_pitch + z1 * cos_pitch;

    (x1, y2, z2)
}

fn focal_length(rect: Rect, camera: Camera) -> f32 {
    rect.width().min(rect.height()) * 0.9 * camera.zoom
}

/// Perspective projection onto `rect`; `None` behind the near plane.
pub(super) fn project(
    rect: Rect,
    camera: Camera,
    point: Position3D,
    scale: f32,
) -> Option<ScreenPoint> {
    let (x, y, z) = rotate(camera, point);
    let depth = CAMERA_DISTANCE - z;
    if depth <= NEAR_PLANE {
        return None;
    }

    let perspective = focal_length(rect, camera) / depth;
    Some(ScreenPoint {
        position: rect.center() + Vec2::new(x * perspective, -y * perspective),
        radius: (POINT_WORLD_RADIUS * scale * perspective).clamp(1.5, 40.0),
        depth,
    })
}

/// Screen radius of a sphere of `radius` centred on the orbit origin.
pub(super) fn projected_radius(rect: Rect, camera: Camera, radius: f64) -> f32 {
    focal_length(rect, camera) * radius as f32 / CAMERA_DISTANCE
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

pub(super) fn shape_color(shape: Option<&str>) -> Color32 {
    let Some(first) = shape.and_then(|raw| split_values(raw).next()) else {
        return UNKNOWN_SHAPE;
    };

    FacetKey::Shape
        .vocabulary()
        .iter()
        .position(|value| *value == first)
        .map(|index| SHAPE_PALETTE[index % SHAPE_PALETTE.len()])
        .unwrap_or(UNKNOWN_SHAPE)
}

pub(super) fn legend_entries() -> impl Iterator<Item = (&'static str, Color32)> {
    FacetKey::Shape
        .vocabulary()
        .iter()
        .enumerate()
        .map(|(index, value)| (*value, SHAPE_PALETTE[index % SHAPE_PALETTE.len()]))
}

pub(super) fn label_anchor(point: ScreenPoint) -> Pos2 {
    pos2(point.position.x + point.radius + 4.0, point.position.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn origin_projects_to_center() {
        let projected =
            project(rect(), Camera::default(), Position3D::ORIGIN, 1.0).expect("in front");
        assert!((projected.position - rect().center()).length() < 1e-3);
        assert!((projected.depth - CAMERA_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn points_behind_the_eye_are_culled() {
        let camera = Camera {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
        };
        let behind = Position3D::new(0.0, 0.0, f64::from(CAMERA_DISTANCE) + 5.0);
        assert!(project(rect(), camera, behind, 1.0).is_none());
    }

    #[test]
    fn nearer_points_draw_larger() {
        let camera = Camera {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
        };
        let near = project(rect(), camera, Position3D::new(0.0, 0.0, 10.0), 1.0).expect("near");
        let far = project(rect(), camera, Position3D::new(0.0, 0.0, -10.0), 1.0).expect("far");
        assert!(near.radius > far.radius);
        assert!(near.depth < far.depth);
    }

    #[test]
    fn shape_color_uses_first_listed_shape() {
        assert_eq!(shape_color(Some("사각형, 원형")), shape_color(Some("사각형")));
        assert_ne!(shape_color(Some("원형")), shape_color(Some("사각형")));
        assert_eq!(shape_color(None), UNKNOWN_SHAPE);
        assert_eq!(shape_color(Some("별형")), UNKNOWN_SHAPE);
    }
}
