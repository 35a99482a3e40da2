/// Per-view output settings: tone mapping, exposure and shadow maps.

/// Tone mapping operator applied to the view output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToneMapping {
    /// Linear output, no curve
    #[default]
    None,
    /// ACES filmic curve
    AcesFilmic,
}

/// Exposure of the shaded color view
pub const DEFAULT_TONE_MAPPING_EXPOSURE: f32 = 0.8;

/// How a view turns the lit scene into pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub tone_mapping: ToneMapping,
    /// Multiplier applied before the tone mapping curve
    pub exposure: f32,
    /// Render shadow maps for shadow-casting meshes
    pub shadows: bool,
}

impl RenderSettings {
    /// Shaded output: ACES filmic at exposure 0.8 with shadow maps.
    pub fn shaded() -> Self {
        Self {
            tone_mapping: ToneMapping::AcesFilmic,
            exposure: DEFAULT_TONE_MAPPING_EXPOSURE,
            shadows: true,
        }
    }

    /// Linear output without shadows, for views feeding analysis passes
    pub fn flat() -> Self {
        Self {
            tone_mapping: ToneMapping::None,
            exposure: 1.0,
            shadows: false,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::flat()
    }
}
