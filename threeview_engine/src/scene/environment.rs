/// Image-based lighting for the scene.

/// How the environment image is projected around the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvironmentMapping {
    /// Latitude-longitude panorama sampled for reflections
    #[default]
    EquirectangularReflection,
}

/// Decoded HDR environment used for reflections and ambient light.
///
/// It lights the scene but is never drawn as the background.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentMap {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub mapping: EnvironmentMapping,
}

impl EnvironmentMap {
    pub fn equirectangular(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            mapping: EnvironmentMapping::EquirectangularReflection,
        }
    }
}
