use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::{scramble, stable_seed, unit_interval};

const AXIS_SALTS: [u64; 3] = [0x5851_f42d_4c95_7f2d, 0x1405_7b7e_f767_814f, 0x2545_f491_4f6c_dd1d];

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position3D {
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    pub fn lerp(self, target: Self, t: f64) -> Self {
        self + (target - self) * t
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Position3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Position3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Half side of the cube that dispersed artifacts are scattered in.
    pub scatter_extent: f64,
    /// Lower bound on the cluster sphere radius.
    pub min_radius: f64,
    /// Radius grows as `cbrt(count) * radius_scale`.
    pub radius_scale: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scatter_extent: 15.0,
            min_radius: 1.5,
            radius_scale: 0.4,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutConfigError {
    #[error("scatter extent must be a positive finite number, got {0}")]
    ScatterExtent(f64),
    #[error("minimum cluster radius must be a positive finite number, got {0}")]
    MinRadius(f64),
    #[error("cluster radius scale must be a non-negative finite number, got {0}")]
    RadiusScale(f64),
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        if !self.scatter_extent.is_finite() || self.scatter_extent <= 0.0 {
            return Err(LayoutConfigError::ScatterExtent(self.scatter_extent));
        }
        if !self.min_radius.is_finite() || self.min_radius <= 0.0 {
            return Err(LayoutConfigError::MinRadius(self.min_radius));
        }
        if !self.radius_scale.is_finite() || self.radius_scale < 0.0 {
            return Err(LayoutConfigError::RadiusScale(self.radius_scale));
        }
        Ok(())
    }
}

/// Dispersed positions depend on the artifact id alone; gathered positions are
/// slots on a spherical Fibonacci lattice sized to the current cluster.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpatialLayout {
    config: LayoutConfig,
}

impl SpatialLayout {
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn dispersed_position(&self, id: &str) -> Position3D {
        let seed = stable_seed(id);
        let extent = self.config.scatter_extent;
        let axis = |salt: u64| (unit_interval(scramble(seed, salt)) * 2.0 - 1.0) * extent;

        Position3D::new(axis(AXIS_SALTS[0]), axis(AXIS_SALTS[1]), axis(AXIS_SALTS[2]))
    }

    pub fn cluster_radius(&self, count: usize) -> f64 {
        ((count as f64).cbrt() * self.config.radius_scale).max(self.config.min_radius)
    }

    pub fn gathered_positions(&self, count: usize) -> Vec<Position3D> {
        if count == 0 {
            return Vec::new();
        }

        let n = count as f64;
        let radius = self.cluster_radius(count);
        let golden_turn = PI * (1.0 + 5.0_f64.sqrt());

        (0..count)
            .map(|index| {
                let i = index as f64;
                let phi = (1.0 - 2.0 * i / n).clamp(-1.0, 1.0).acos();
                let theta = golden_turn * i;
                Position3D::new(
                    radius * phi.sin() * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                    radius * phi.cos(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> SpatialLayout {
        SpatialLayout::default()
    }

    #[test]
    fn dispersed_position_depends_only_on_id() {
        let layout = layout();
        let first = layout.dispersed_position("관-0031");
        for _ in 0..8 {
            assert_eq!(layout.dispersed_position("관-0031"), first);
        }

        let other = SpatialLayout::new(LayoutConfig::default()).expect("default config is valid");
        assert_eq!(other.dispersed_position("관-0031"), first);
    }

    #[test]
    fn dispersed_position_stays_inside_cube() {
        let layout = layout();
        for index in 0..500 {
            let position = layout.dispersed_position(&format!("artifact-{index}"));
            for value in position.to_array() {
                assert!((-15.0..=15.0).contains(&value), "{value} outside scatter cube");
            }
        }
    }

    #[test]
    fn dispersed_axes_are_decorrelated() {
        let layout = layout();
        let collapsed = (0..200)
            .map(|index| layout.dispersed_position(&format!("item{index}")))
            .filter(|p| p.x == p.y && p.y == p.z)
            .count();
        assert_eq!(collapsed, 0);
    }

    #[test]
    fn gathered_positions_have_requested_length() {
        let layout = layout();
        for count in [0, 1, 2, 3, 17, 128] {
            assert_eq!(layout.gathered_positions(count).len(), count);
        }
    }

    #[test]
    fn single_member_cluster_sits_at_min_radius() {
        let positions = layout().gathered_positions(1);
        assert_eq!(positions.len(), 1);
        assert!((positions[0].length() - 1.5).abs() < 1e-12);
        assert!(positions[0].z > 0.0);
    }

    #[test]
    fn gathered_positions_never_coincide() {
        let layout = layout();
        for count in [2, 5, 64, 300] {
            let positions = layout.gathered_positions(count);
            for i in 0..positions.len() {
                for j in (i + 1)..positions.len() {
                    assert!(
                        positions[i].distance(positions[j]) > 0.0,
                        "slots {i} and {j} coincide for count {count}"
                    );
                }
            }
        }
    }

    #[test]
    fn gathered_positions_lie_on_one_shell() {
        let layout = layout();
        let positions = layout.gathered_positions(250);
        let radius = layout.cluster_radius(250);
        for position in positions {
            assert!((position.length() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn cluster_radius_is_monotonic_and_floored() {
        let layout = layout();
        let mut previous = 0.0;
        for count in 0..2_000 {
            let radius = layout.cluster_radius(count);
            assert!(radius >= 1.5);
            assert!(radius >= previous);
            previous = radius;
        }
        assert!(layout.cluster_radius(1_000) > 1.5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = LayoutConfig {
            min_radius: 0.0,
            ..LayoutConfig::default()
        };
        assert_eq!(
            SpatialLayout::new(config).err(),
            Some(LayoutConfigError::MinRadius(0.0))
        );

        let config = LayoutConfig {
            radius_scale: f64::NAN,
            ..LayoutConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LayoutConfigError::RadiusScale(_))
        ));
    }
}
