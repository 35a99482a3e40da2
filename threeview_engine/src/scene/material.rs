/// Scene-wide material overrides.

/// Material replacing every mesh material for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialOverride {
    /// Linear depth between the camera near and far planes
    Depth,
    /// View-space normals encoded as RGB
    Normal,
}

impl MaterialOverride {
    pub fn name(&self) -> &'static str {
        match self {
            MaterialOverride::Depth => "depth",
            MaterialOverride::Normal => "normal",
        }
    }
}
