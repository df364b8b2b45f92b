use std::collections::HashMap;

use facet_sphere::{Emphasis, Position3D, TargetMapping};

/// Fraction of the remaining distance covered per second.
pub(super) const RETARGET_RATE: f32 = 2.0;
const SETTLE_DISTANCE: f64 = 1e-3;
const SETTLE_SCALE: f32 = 1e-3;

#[derive(Clone, Debug)]
pub(super) struct MovingPoint {
    pub(super) id: String,
    pub(super) position: Position3D,
    pub(super) target: Position3D,
    pub(super) scale: f32,
    pub(super) target_scale: f32,
    pub(super) opacity: f32,
    pub(super) target_opacity: f32,
    pub(super) emphasis: Emphasis,
}

impl MovingPoint {
    fn is_settled(&self) -> bool {
        self.position.distance(self.target) <= SETTLE_DISTANCE
            && (self.scale - self.target_scale).abs() <= SETTLE_SCALE
            && (self.opacity - self.target_opacity).abs() <= SETTLE_SCALE
    }

    fn snap(&mut self) {
        self.position = self.target;
        self.scale = self.target_scale;
        self.opacity = self.target_opacity;
    }
}

/// Animated positions trailing the latest published target mapping.
///
/// A new mapping only replaces the targets; whatever is mid-flight keeps its
/// current position and bends toward the new destination.
#[derive(Debug, Default)]
pub(super) struct Motion {
    points: Vec<MovingPoint>,
    index_by_id: HashMap<String, usize>,
    revision: u64,
}

impl Motion {
    pub(super) fn new(mapping: &TargetMapping) -> Self {
        let mut motion = Self::default();
        motion.retarget(mapping);
        for point in &mut motion.points {
            point.snap();
        }
        motion
    }

    pub(super) fn points(&self) -> &[MovingPoint] {
        &self.points
    }

    pub(super) fn revision(&self) -> u64 {
        self.revision
    }

    pub(super) fn retarget(&mut self, mapping: &TargetMapping) {
        if mapping.revision() == self.revision && !self.points.is_empty() {
            return;
        }

        for entry in mapping.iter() {
            let target = entry.target();
            let target_scale = entry.emphasis.scale();
            let target_opacity = entry.emphasis.opacity();

            match self.index_by_id.get(&entry.id) {
                Some(&index) => {
                    let point = &mut self.points[index];
                    point.target = target;
                    point.target_scale = target_scale;
                    point.target_opacity = target_opacity;
                    point.emphasis = entry.emphasis;
                }
                None => {
                    self.index_by_id.insert(entry.id.clone(), self.points.len());
                    self.points.push(MovingPoint {
                        id: entry.id.clone(),
                        position: entry.dispersed,
                        target,
                        scale: target_scale,
                        target_scale,
                        opacity: target_opacity,
                        target_opacity,
                        emphasis: entry.emphasis,
                    });
                }
            }
        }

        self.revision = mapping.revision();
    }

    pub(super) fn step(&mut self, delta_seconds: f32) -> bool {
        let t = (delta_seconds.max(0.0) * RETARGET_RATE).min(1.0);
        let mut moving = false;

        for point in &mut self.points {
            if point.is_settled() {
                point.snap();
                continue;
            }

            point.position = point.position.lerp(point.target, f64::from(t));
            point.scale += (point.target_scale - point.scale) * t;
            point.opacity += (point.target_opacity - point.opacity) * t;
            if point.is_settled() {
                point.snap();
            } else {
                moving = true;
            }
        }

        moving
    }
}

#[cfg(test)]
mod tests {
    use facet_sphere::{
        Artifact, Catalog, ClusterStateController, FacetKey, FilterState, SpatialLayout,
    };

    use super::*;

    fn index_of(motion: &Motion, id: &str) -> usize {
        motion
            .points()
            .iter()
            .position(|point| point.id == id)
            .expect("point exists")
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Artifact::new("1").with_facet(FacetKey::Shape, "원형"),
            Artifact::new("2").with_facet(FacetKey::Shape, "사각형"),
        ])
        .expect("unique ids")
    }

    #[test]
    fn starts_settled_on_dispersed_positions() {
        let mut controller = ClusterStateController::new(SpatialLayout::default());
        let mapping = controller.refresh(&catalog(), &FilterState::new());
        let mut motion = Motion::new(&mapping);

        assert_eq!(motion.points().len(), 2);
        for point in motion.points() {
            assert_eq!(point.position, controller.layout().dispersed_position(&point.id));
        }
        assert!(!motion.step(1.0 / 60.0));
    }

    #[test]
    fn eases_toward_new_targets_without_jumping() {
        let catalog = catalog();
        let mut controller = ClusterStateController::new(SpatialLayout::default());
        let mut motion = Motion::new(&controller.refresh(&catalog, &FilterState::new()));

        let state = FilterState::new().with(FacetKey::Shape, "원형");
        let gathered = controller.refresh(&catalog, &state);
        motion.retarget(&gathered);
        let index = index_of(&motion, "1");
        let start = motion.points()[index].position;
        let goal = gathered.get("1").expect("entry 1").target();

        assert!(motion.step(0.1));
        let after_one = motion.points()[index].position;
        let expected = start.lerp(goal, 0.2);
        assert!(after_one.distance(expected) < 1e-6);

        for _ in 0..600 {
            motion.step(1.0 / 60.0);
        }
        assert_eq!(motion.points()[index].position, goal);
        assert_eq!(motion.points()[index].scale, Emphasis::Gathered.scale());
    }

    #[test]
    fn long_frames_do_not_overshoot() {
        let catalog = catalog();
        let mut controller = ClusterStateController::new(SpatialLayout::default());
        let mut motion = Motion::new(&controller.refresh(&catalog, &FilterState::new()));
        let state = FilterState::new().with(FacetKey::Shape, "원형");
        let gathered = controller.refresh(&catalog, &state);
        motion.retarget(&gathered);

        motion.step(5.0);
        let index = index_of(&motion, "1");
        assert_eq!(
            motion.points()[index].position,
            gathered.get("1").expect("entry 1").target()
        );
    }

    #[test]
    fn retarget_tracks_revision() {
        let catalog = catalog();
        let mut controller = ClusterStateController::new(SpatialLayout::default());
        let mut motion = Motion::new(&controller.refresh(&catalog, &FilterState::new()));
        assert_eq!(motion.revision(), 1);

        let state = FilterState::new().with(FacetKey::Shape, "사각형");
        let next = controller.refresh(&catalog, &state);
        motion.retarget(&next);
        assert_eq!(motion.revision(), 2);
        let index = index_of(&motion, "2");
        assert_eq!(motion.points()[index].emphasis, Emphasis::Gathered);
        assert_eq!(motion.points()[index].target_opacity, 1.0);
    }
}
