/// ViewSet - the four fixed views, their render targets and the line
/// pipeline owner.
///
/// All targets share one canvas size. `resize` releases every target before
/// allocating the new ones and invalidates the pipeline; the pipeline itself
/// is rebuilt by the orchestrator at the start of the next frame.

use std::sync::Arc;
use crate::canvas::CanvasSize;
use crate::error::{Error, Result};
use crate::pipeline::{PipelineConfig, PostProcessor};
use crate::renderer::{Renderer, RenderSettings, RenderTarget, RenderTargetDesc};
use crate::scene::MaterialOverride;
use crate::engine_debug;
use super::{View, ViewKind, ViewMask};

pub struct ViewSet {
    views: Vec<View>,
    multi_view: bool,
    size: CanvasSize,
    post: PostProcessor,
}

impl ViewSet {
    /// Create the four views and allocate their targets.
    ///
    /// # Errors
    ///
    /// `InitializationFailed` if a render target cannot be created.
    pub fn new(
        renderer: &mut dyn Renderer,
        size: CanvasSize,
        multi_view: bool,
        pipeline_config: PipelineConfig,
    ) -> Result<Self> {
        let mut set = Self {
            views: ViewKind::ALL.into_iter().map(View::new).collect(),
            multi_view,
            size,
            post: PostProcessor::new(pipeline_config),
        };
        set.allocate_targets(renderer)
            .map_err(|e| Error::InitializationFailed(format!("view targets: {}", e)))?;
        Ok(set)
    }

    pub fn size(&self) -> &CanvasSize {
        &self.size
    }

    pub fn view(&self, kind: ViewKind) -> &View {
        &self.views[kind.index()]
    }

    pub fn views(&self) -> &[View] {
        &self.views
    }

    pub fn target(&self, kind: ViewKind) -> Option<&Arc<dyn RenderTarget>> {
        self.view(kind).target()
    }

    /// Resize every target to `size` and invalidate the pipeline.
    ///
    /// On allocation failure the affected views stay without a target and
    /// the caller is expected to resize back to a working size.
    pub fn resize(&mut self, renderer: &mut dyn Renderer, size: CanvasSize) -> Result<()> {
        self.release_targets();
        self.size = size;
        self.post.invalidate();
        self.allocate_targets(renderer)?;
        engine_debug!(
            "threeview::ViewSet",
            "Resized views to {}x{} (ratio {})",
            size.width(), size.height(), size.pixel_ratio()
        );
        Ok(())
    }

    pub fn set_material_override(&mut self, kind: ViewKind, material: Option<MaterialOverride>) {
        self.views[kind.index()].set_material_override(material);
    }

    pub fn set_render_settings(&mut self, kind: ViewKind, settings: RenderSettings) {
        self.views[kind.index()].set_render_settings(settings);
    }

    pub fn multi_view(&self) -> bool {
        self.multi_view
    }

    pub fn set_multi_view(&mut self, multi_view: bool) {
        self.multi_view = multi_view;
    }

    /// Views drawn by a frame, in render order.
    ///
    /// The color view is always visible; the others only in multi-view mode.
    pub fn visible_views(&self) -> impl Iterator<Item = &View> + '_ {
        let mask = self.visible_mask();
        self.views.iter().filter(move |v| mask.contains(v.kind().mask()))
    }

    pub fn visible_mask(&self) -> ViewMask {
        if self.multi_view { ViewMask::all() } else { ViewMask::COLOR }
    }

    pub fn is_visible(&self, kind: ViewKind) -> bool {
        self.visible_mask().contains(kind.mask())
    }

    pub fn post_processor(&self) -> &PostProcessor {
        &self.post
    }

    pub fn post_processor_mut(&mut self) -> &mut PostProcessor {
        &mut self.post
    }

    /// Rebuild the pipeline if invalidated.
    pub fn ensure_pipeline(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        self.post.ensure(renderer, &self.size)
    }

    fn release_targets(&mut self) {
        for view in &mut self.views {
            view.set_target(None);
        }
    }

    fn allocate_targets(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        let width = self.size.physical_width();
        let height = self.size.physical_height();
        for view in &mut self.views {
            let desc = RenderTargetDesc::color(format!("view:{}", view.kind()), width, height)
                .with_clear_color(view.clear_color());
            view.set_target(Some(renderer.create_render_target(&desc)?));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "view_set_tests.rs"]
mod tests;
