/// View kinds and per-view configuration.

use std::fmt;
use std::sync::Arc;
use bitflags::bitflags;
use crate::renderer::{RenderSettings, RenderTarget};
use crate::scene::MaterialOverride;

/// Kind of a view. The declaration order is the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKind {
    /// Interactive shaded view
    Color,
    /// Edge lines through the post-process pipeline
    Line,
    Depth,
    Normal,
}

impl ViewKind {
    /// Every kind in render order
    pub const ALL: [ViewKind; 4] = [ViewKind::Color, ViewKind::Line, ViewKind::Depth, ViewKind::Normal];

    pub fn index(&self) -> usize {
        match self {
            ViewKind::Color => 0,
            ViewKind::Line => 1,
            ViewKind::Depth => 2,
            ViewKind::Normal => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewKind::Color => "color",
            ViewKind::Line => "line",
            ViewKind::Depth => "depth",
            ViewKind::Normal => "normal",
        }
    }

    /// Parse a view name as produced by `name()`.
    pub fn from_name(name: &str) -> Option<ViewKind> {
        ViewKind::ALL.into_iter().find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Clear color of the view target. The normal view clears to the
    /// encoding of a camera-facing normal (#8080ff).
    pub fn clear_color(&self) -> [f32; 4] {
        match self {
            ViewKind::Normal => [128.0 / 255.0, 128.0 / 255.0, 1.0, 1.0],
            _ => [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Material override the view starts with
    pub fn default_override(&self) -> Option<MaterialOverride> {
        match self {
            ViewKind::Depth => Some(MaterialOverride::Depth),
            ViewKind::Normal => Some(MaterialOverride::Normal),
            _ => None,
        }
    }

    /// Output settings the view starts with. Only the color view is tone
    /// mapped and shadowed; the line view feeds edge detection.
    pub fn default_render_settings(&self) -> RenderSettings {
        match self {
            ViewKind::Color => RenderSettings::shaded(),
            _ => RenderSettings::flat(),
        }
    }

    pub fn mask(&self) -> ViewMask {
        match self {
            ViewKind::Color => ViewMask::COLOR,
            ViewKind::Line => ViewMask::LINE,
            ViewKind::Depth => ViewMask::DEPTH,
            ViewKind::Normal => ViewMask::NORMAL,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Set of views
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ViewMask: u8 {
        const COLOR = 1 << 0;
        const LINE = 1 << 1;
        const DEPTH = 1 << 2;
        const NORMAL = 1 << 3;
    }
}

impl ViewMask {
    /// Kinds in the mask, in render order
    pub fn kinds(&self) -> impl Iterator<Item = ViewKind> + '_ {
        ViewKind::ALL.into_iter().filter(move |kind| self.contains(kind.mask()))
    }
}

/// One view: a render target plus how the scene is drawn into it
#[derive(Clone)]
pub struct View {
    kind: ViewKind,
    material_override: Option<MaterialOverride>,
    render_settings: RenderSettings,
    uses_pipeline: bool,
    target: Option<Arc<dyn RenderTarget>>,
}

impl View {
    pub(crate) fn new(kind: ViewKind) -> Self {
        Self {
            kind,
            material_override: kind.default_override(),
            render_settings: kind.default_render_settings(),
            uses_pipeline: kind == ViewKind::Line,
            target: None,
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn material_override(&self) -> Option<MaterialOverride> {
        self.material_override
    }

    pub fn render_settings(&self) -> RenderSettings {
        self.render_settings
    }

    /// Drawn through the post-process pipeline when one exists
    pub fn uses_pipeline(&self) -> bool {
        self.uses_pipeline
    }

    /// Render target; `None` only while a resize is being applied
    pub fn target(&self) -> Option<&Arc<dyn RenderTarget>> {
        self.target.as_ref()
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.kind.clear_color()
    }

    pub(crate) fn set_material_override(&mut self, material: Option<MaterialOverride>) {
        self.material_override = material;
    }

    pub(crate) fn set_render_settings(&mut self, settings: RenderSettings) {
        self.render_settings = settings;
    }

    pub(crate) fn set_target(&mut self, target: Option<Arc<dyn RenderTarget>>) {
        self.target = target;
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("kind", &self.kind)
            .field("material_override", &self.material_override)
            .field("render_settings", &self.render_settings)
            .field("uses_pipeline", &self.uses_pipeline)
            .field("target", &self.target.as_ref().map(|t| (t.width(), t.height())))
            .finish()
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
