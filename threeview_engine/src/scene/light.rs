/// Key light casting the model's shadow.

use glam::Vec3;
use crate::framing::FramingResult;

/// Shadow map parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    /// Shadow map width and height in texels
    pub map_size: u32,
    pub bias: f32,
    /// Blur radius in texels
    pub radius: f32,
    /// Half extent of the orthographic shadow camera
    pub range: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            map_size: 1024,
            bias: -0.0005,
            radius: 4.0,
            range: 1.0,
            near: 0.1,
            far: 10.0,
        }
    }
}

/// Directional key light
///
/// Switched off (zero intensity) until a model has been framed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyLight {
    pub position: Vec3,
    pub target: Vec3,
    pub intensity: f32,
    pub cast_shadow: bool,
    pub shadow: ShadowSettings,
}

impl KeyLight {
    /// Intensity of a framed key light
    pub const FRAMED_INTENSITY: f32 = 3.0;

    /// Key light placed by a framing result.
    pub fn from_framing(framing: &FramingResult) -> Self {
        Self {
            position: framing.light_position,
            target: framing.look_at_target,
            intensity: Self::FRAMED_INTENSITY,
            cast_shadow: true,
            shadow: ShadowSettings {
                range: 2.0 * framing.radius,
                near: framing.near,
                far: framing.far,
                ..ShadowSettings::default()
            },
        }
    }

    /// Normalized direction from the light towards its target
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

impl Default for KeyLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 0.0),
            target: Vec3::ZERO,
            intensity: 0.0,
            cast_shadow: false,
            shadow: ShadowSettings::default(),
        }
    }
}
