/// Orchestrator - drives frames across the four views.
///
/// Frames are event driven: settings changes, input, resizes and asset
/// loads request a render. A request arriving while a frame is in flight is
/// latched and served by the next `tick`, so bursts collapse into one frame.
/// Resizes are latched the same way and applied only at the start of a
/// frame.

use std::sync::{Arc, Mutex, MutexGuard};
use rustc_hash::FxHashSet;

use crate::asset::{
    encode_png, AssetFeatures, AssetLoader, AssetPreparer, AssetSource, DecodedAsset,
    DefaultPreparer, LoadOutcome, LoadTicket, UploadStatus, Uploader,
};
use crate::camera::{CameraRig, CameraState, RenderCamera};
use crate::canvas::CanvasSize;
use crate::config::ViewerConfig;
use crate::error::{Error, Result};
use crate::framing::{compute_framing, FramingResult};
use crate::pipeline::{CameraBinding, EdgeOperator, PipelineConfig, ViewLockMode};
use crate::renderer::{DrawParams, RenderSettings, Renderer, Viewport};
use crate::scene::{KeyLight, MaterialOverride, Scene, SceneNode};
use crate::session::{SessionRecord, SessionState};
use crate::view::{ViewKind, ViewSet};
use crate::{engine_bail, engine_debug, engine_err, engine_error, engine_info, engine_trace, engine_warn};

const SOURCE: &str = "threeview::Orchestrator";

/// Frame state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    Idle,
    RenderingFrame,
}

/// What one frame did
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameReport {
    pub frame_index: u64,
    /// Views drawn, in render order
    pub rendered: Vec<ViewKind>,
    /// The line view went through the post-process pipeline
    pub pipeline_used: bool,
    /// A latched resize was applied before drawing
    pub resized: bool,
}

fn lock_renderer<'a>(
    renderer: &'a Arc<Mutex<dyn Renderer>>,
) -> Result<MutexGuard<'a, dyn Renderer + 'static>> {
    renderer
        .lock()
        .map_err(|_| engine_err!(SOURCE, "Renderer lock poisoned"))
}

pub struct Orchestrator {
    renderer: Arc<Mutex<dyn Renderer>>,
    config: ViewerConfig,
    scene: Scene,
    rig: CameraRig,
    views: ViewSet,

    // Sizing
    requested_size: CanvasSize,
    resize_dirty: bool,
    layout_offset: u32,

    // Frame state
    state: FrameState,
    render_requested: bool,
    /// Requests only latch while a restore is assembling its frame
    holding_renders: bool,
    frame_index: u64,
    current_frame: FrameReport,
    last_report: Option<FrameReport>,

    // Pipeline inputs
    operator: EdgeOperator,
    lock_mode: ViewLockMode,

    // Assets
    loader: AssetLoader,
    source: Box<dyn AssetSource>,
    preparer: Box<dyn AssetPreparer>,
    uploader: Option<Box<dyn Uploader>>,
    features: AssetFeatures,
    asset_reference: Option<String>,
    known_models: FxHashSet<String>,
    framing: Option<FramingResult>,
}

impl Orchestrator {
    /// Create the views and cameras. Nothing is rendered until the first
    /// request.
    ///
    /// # Errors
    ///
    /// `InitializationFailed` for an unusable initial canvas or camera, or
    /// if the view targets cannot be allocated.
    pub fn new(
        renderer: Arc<Mutex<dyn Renderer>>,
        source: Box<dyn AssetSource>,
        config: ViewerConfig,
    ) -> Result<Self> {
        let size = config
            .canvas_size()
            .map_err(|e| Error::InitializationFailed(format!("canvas: {}", e)))?;
        let camera = CameraState::new(
            config.initial_camera_position,
            config.initial_camera_target,
            config.initial_near,
            config.initial_far,
            size.aspect(),
            config.fov,
        )
        .map_err(|e| Error::InitializationFailed(format!("camera: {}", e)))?;

        let mut rig = CameraRig::new(camera);
        rig.set_distance_limits(config.min_orbit_distance, config.max_orbit_distance);
        for kind in ViewKind::ALL {
            rig.register_view(kind);
        }

        let pipeline_config = config.pipeline_config();
        let views = {
            let mut guard = lock_renderer(&renderer)?;
            let views = ViewSet::new(&mut *guard, size, config.multi_view, pipeline_config)?;
            views
        };

        let mut scene = Scene::new();
        scene.set_helpers_enabled(config.show_helpers);

        engine_info!(
            SOURCE,
            "Orchestrator created: canvas {}, multi-view {}, {} / {:?}",
            size.label(), config.multi_view, config.edge_operator, config.view_lock_mode
        );

        let mut orchestrator = Self {
            renderer,
            scene,
            rig,
            views,
            requested_size: size,
            resize_dirty: false,
            layout_offset: config.layout_offset,
            state: FrameState::Idle,
            render_requested: false,
            holding_renders: false,
            frame_index: 0,
            current_frame: FrameReport::default(),
            last_report: None,
            operator: config.edge_operator,
            lock_mode: config.view_lock_mode,
            loader: AssetLoader::new(),
            source,
            preparer: Box::new(DefaultPreparer),
            uploader: None,
            features: AssetFeatures::default(),
            asset_reference: None,
            known_models: FxHashSet::default(),
            framing: None,
            config,
        };

        if let Some(url) = orchestrator.config.environment_asset.clone() {
            match orchestrator.source.fetch_environment(&url) {
                Ok(environment) => {
                    orchestrator.scene.set_environment(Some(environment));
                }
                Err(e) => engine_warn!(SOURCE, "Environment '{}' unavailable, rendering without one: {}", url, e),
            }
        }
        Ok(orchestrator)
    }

    /// Replace the asset preparation step
    pub fn with_preparer(mut self, preparer: Box<dyn AssetPreparer>) -> Self {
        self.preparer = preparer;
        self
    }

    /// Attach the remote store used by `save_asset` and `send_view`
    pub fn with_uploader(mut self, uploader: Box<dyn Uploader>) -> Self {
        self.uploader = Some(uploader);
        self
    }

    // ===== ACCESSORS =====

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Latest requested canvas size (applied at the next frame)
    pub fn canvas_size(&self) -> &CanvasSize {
        &self.requested_size
    }

    /// Canvas size the view targets currently have
    pub fn applied_size(&self) -> &CanvasSize {
        self.views.size()
    }

    pub fn resize_pending(&self) -> bool {
        self.resize_dirty
    }

    pub fn render_requested(&self) -> bool {
        self.render_requested
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn last_report(&self) -> Option<&FrameReport> {
        self.last_report.as_ref()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn views(&self) -> &ViewSet {
        &self.views
    }

    pub fn edge_operator(&self) -> EdgeOperator {
        self.operator
    }

    pub fn view_lock_mode(&self) -> ViewLockMode {
        self.lock_mode
    }

    pub fn framing(&self) -> Option<&FramingResult> {
        self.framing.as_ref()
    }

    pub fn features(&self) -> AssetFeatures {
        self.features
    }

    /// Morph-target controls make sense for the loaded model
    pub fn morph_controls_available(&self) -> bool {
        self.features.has_morph_targets
    }

    pub fn asset_reference(&self) -> Option<&str> {
        self.asset_reference.as_deref()
    }

    // ===== FRAMES =====

    /// Ask for a frame. Renders immediately when idle, otherwise latches
    /// the request for the next tick.
    pub fn request_render(&mut self) -> Result<Option<FrameReport>> {
        self.render_requested = true;
        if self.state == FrameState::RenderingFrame {
            engine_trace!(SOURCE, "Render requested mid-frame, deferred");
            return Ok(None);
        }
        self.render_frame().map(Some)
    }

    /// Host per-frame callback. Renders if a request is pending or
    /// auto-animation is on.
    pub fn tick(&mut self) -> Result<Option<FrameReport>> {
        if self.state == FrameState::RenderingFrame {
            return Ok(None);
        }
        if self.render_requested || self.config.auto_animate {
            return self.render_frame().map(Some);
        }
        Ok(None)
    }

    /// Run one complete frame.
    pub fn render_frame(&mut self) -> Result<FrameReport> {
        self.begin_frame()?;
        let drawn = self.draw_views();
        let report = self.end_frame();
        drawn.map(|_| report)
    }

    /// Enter `RenderingFrame`: apply a latched resize, sync cameras and
    /// rebuild the pipeline if needed.
    pub fn begin_frame(&mut self) -> Result<()> {
        if self.state == FrameState::RenderingFrame {
            engine_bail!(InvalidResource => SOURCE, "Frame {} already in progress", self.frame_index);
        }

        let handle = self.renderer.clone();
        let mut guard = lock_renderer(&handle)?;
        let renderer: &mut dyn Renderer = &mut *guard;

        self.state = FrameState::RenderingFrame;
        self.render_requested = false;
        self.frame_index += 1;

        let mut resized = false;
        if self.resize_dirty {
            self.resize_dirty = false;
            let previous = *self.views.size();
            match self.views.resize(renderer, self.requested_size) {
                Ok(()) => resized = true,
                Err(e) => {
                    engine_warn!(SOURCE, "Resize to {} failed, keeping {}: {}",
                        self.requested_size.label(), previous.label(), e);
                    self.requested_size = previous;
                    if let Err(e) = self.views.resize(renderer, previous) {
                        engine_error!(SOURCE, "Could not restore view targets: {}", e);
                    }
                }
            }
        }

        self.rig.set_aspect(self.views.size().aspect());
        self.rig.sync_independent_cameras(self.lock_mode);

        if self.views.ensure_pipeline(renderer).is_err() {
            engine_debug!(SOURCE, "Frame {} draws the line view without its pipeline", self.frame_index);
        }

        self.current_frame = FrameReport {
            frame_index: self.frame_index,
            resized,
            ..FrameReport::default()
        };
        Ok(())
    }

    /// Draw every visible view in render order.
    ///
    /// A view that fails to draw is logged and skipped; the others still
    /// render.
    pub fn draw_views(&mut self) -> Result<()> {
        if self.state != FrameState::RenderingFrame {
            engine_bail!(InvalidResource => SOURCE, "draw_views called outside a frame");
        }

        let handle = self.renderer.clone();
        let mut guard = lock_renderer(&handle)?;
        let renderer: &mut dyn Renderer = &mut *guard;

        let mode = self.lock_mode;
        let helpers = self.scene.helpers_enabled();
        let mut rendered = Vec::new();
        let mut pipeline_used = false;

        for view in self.views.visible_views() {
            let kind = view.kind();
            let Some(target) = view.target() else {
                engine_warn!(SOURCE, "View '{}' has no render target, skipped", kind);
                continue;
            };
            let params = DrawParams {
                material_override: view.material_override(),
                include_helpers: kind == ViewKind::Color && helpers,
                clear_color: view.clear_color(),
                render_settings: view.render_settings(),
            };
            let viewport = Viewport::full(target.width(), target.height());

            if view.uses_pipeline() {
                if let Some(pipeline) = self.views.post_processor().pipeline() {
                    let state = match pipeline.camera_binding() {
                        CameraBinding::Interactive => self.rig.interactive(),
                        CameraBinding::View(bound) => self.rig.resolve(bound, ViewLockMode::Independent),
                    };
                    let camera = RenderCamera::from_state(state, viewport);
                    match pipeline.render(renderer, &self.scene, &camera, &params, target) {
                        Ok(()) => {
                            pipeline_used = true;
                            rendered.push(kind);
                            continue;
                        }
                        Err(e) => engine_warn!(SOURCE, "Line pipeline failed, drawing directly: {}", e),
                    }
                }
            }

            let camera = RenderCamera::from_state(self.rig.resolve(kind, mode), viewport);
            match renderer.draw_scene(target, &self.scene, &camera, &params) {
                Ok(()) => rendered.push(kind),
                Err(e) => engine_error!(SOURCE, "Drawing view '{}' failed: {}", kind, e),
            }
        }

        self.current_frame.rendered = rendered;
        self.current_frame.pipeline_used = pipeline_used;
        Ok(())
    }

    /// Leave `RenderingFrame` and return the frame report.
    ///
    /// Requests latched during the frame stay pending for the next tick.
    pub fn end_frame(&mut self) -> FrameReport {
        self.state = FrameState::Idle;
        let report = std::mem::take(&mut self.current_frame);
        engine_trace!(SOURCE, "Frame {} drew {:?}", report.frame_index, report.rendered);
        self.last_report = Some(report.clone());
        report
    }

    /// Request a render, logging instead of propagating draw errors.
    fn refresh(&mut self) {
        if self.holding_renders {
            self.render_requested = true;
            return;
        }
        if let Err(e) = self.request_render() {
            engine_warn!(SOURCE, "Render after update failed: {}", e);
        }
    }

    // ===== SIZE =====

    /// Request a new logical canvas size.
    ///
    /// Returns false if both dimensions are unchanged. The view targets are
    /// resized at the start of the next frame.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` for a zero width or height; the previous size is
    /// kept.
    pub fn set_canvas_size(&mut self, width: u32, height: u32) -> Result<bool> {
        let size = match CanvasSize::new(width, height, self.requested_size.pixel_ratio()) {
            Ok(size) => size,
            Err(e) => {
                engine_warn!(SOURCE, "Canvas size rejected, keeping {}: {}", self.requested_size.label(), e);
                return Err(e);
            }
        };
        if size.same_dimensions(&self.requested_size) {
            return Ok(false);
        }
        self.request_size(size);
        Ok(true)
    }

    /// Change the device pixel ratio of every target.
    pub fn set_pixel_ratio(&mut self, pixel_ratio: f32) -> Result<()> {
        let size = self.requested_size.with_pixel_ratio(pixel_ratio)?;
        if size != self.requested_size {
            self.request_size(size);
        }
        Ok(())
    }

    /// Host layout notification: the widget is now `widget_width` wide.
    ///
    /// The layout offset is subtracted and the height follows the current
    /// aspect ratio.
    pub fn host_update(&mut self, widget_width: u32) -> Result<bool> {
        let width = widget_width.saturating_sub(self.layout_offset);
        let size = match self.requested_size.with_width_keep_aspect(width) {
            Ok(size) => size,
            Err(e) => {
                engine_warn!(SOURCE, "Host width {} rejected: {}", widget_width, e);
                return Err(e);
            }
        };
        self.set_canvas_size(size.width(), size.height())
    }

    pub fn layout_offset(&self) -> u32 {
        self.layout_offset
    }

    pub fn set_layout_offset(&mut self, offset: u32) {
        self.layout_offset = offset;
    }

    fn request_size(&mut self, size: CanvasSize) {
        engine_debug!(SOURCE, "Canvas resize requested: {} -> {}", self.requested_size.label(), size.label());
        self.requested_size = size;
        self.resize_dirty = true;
        self.refresh();
    }

    // ===== SETTINGS =====

    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            operator: self.operator,
            view_lock_mode: self.lock_mode,
            enabled: self.config.use_line_composer && self.views.multi_view(),
        }
    }

    fn apply_pipeline_config(&mut self) {
        let config = self.pipeline_config();
        if self.views.post_processor_mut().set_config(config) {
            engine_debug!(SOURCE, "Line pipeline invalidated: {:?}", config);
        }
        self.refresh();
    }

    pub fn set_edge_operator(&mut self, operator: EdgeOperator) {
        self.operator = operator;
        self.apply_pipeline_config();
    }

    pub fn set_view_lock_mode(&mut self, mode: ViewLockMode) {
        self.lock_mode = mode;
        self.apply_pipeline_config();
    }

    /// Show or hide the line, depth and normal views
    pub fn set_multi_view(&mut self, multi_view: bool) {
        self.views.set_multi_view(multi_view);
        self.apply_pipeline_config();
    }

    /// Route the line view through the edge pipeline or draw it directly
    pub fn set_line_composer(&mut self, enabled: bool) {
        self.config.use_line_composer = enabled;
        self.apply_pipeline_config();
    }

    pub fn set_show_helpers(&mut self, show: bool) {
        self.scene.set_helpers_enabled(show);
        self.refresh();
    }

    pub fn set_material_override(&mut self, kind: ViewKind, material: Option<MaterialOverride>) {
        self.views.set_material_override(kind, material);
        self.refresh();
    }

    /// Tone mapping, exposure and shadow maps of one view
    pub fn set_render_settings(&mut self, kind: ViewKind, settings: RenderSettings) {
        self.views.set_render_settings(kind, settings);
        self.refresh();
    }

    pub fn set_auto_animate(&mut self, enabled: bool) {
        self.config.auto_animate = enabled;
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.rig.set_fov(fov);
        self.refresh();
    }

    // ===== INPUT =====

    /// Pointer drag on the interactive view, in pixels
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.rig.orbit(dx, dy);
        self.refresh();
    }

    /// Pointer drag on one view's own camera (`Independent` mode)
    pub fn orbit_view(&mut self, kind: ViewKind, dx: f32, dy: f32) {
        self.rig.orbit_view(kind, dx, dy);
        self.refresh();
    }

    /// Wheel input: scale the camera distance by `factor`
    pub fn dolly(&mut self, factor: f32) {
        self.rig.dolly(factor);
        self.refresh();
    }

    // ===== ASSETS =====

    /// Start a load, cancelling any load still in flight.
    pub fn begin_load(&mut self, name: &str) -> LoadTicket {
        engine_debug!(SOURCE, "Loading '{}'", name);
        self.loader.begin(name)
    }

    /// Complete a load started with `begin_load`.
    ///
    /// A cancelled or superseded ticket leaves the scene untouched. A
    /// decode failure loads the placeholder asset instead.
    pub fn finish_load(&mut self, ticket: &LoadTicket, decoded: Result<DecodedAsset>) -> LoadOutcome {
        if !self.loader.accept(ticket) {
            engine_debug!(SOURCE, "Load of '{}' superseded, result dropped", ticket.name());
            return LoadOutcome::Cancelled;
        }

        let installed = decoded.and_then(|asset| self.install_asset(asset));
        match installed {
            Ok(features) => LoadOutcome::Loaded(features),
            Err(e) => {
                engine_warn!(SOURCE, "Could not load '{}', using placeholder: {}", ticket.name(), e);
                self.load_placeholder()
            }
        }
    }

    /// Decode an in-memory file and install it.
    ///
    /// The session asset reference is cleared until the file is saved with
    /// `save_asset`.
    pub fn load_bytes(&mut self, bytes: &[u8], name: &str) -> LoadOutcome {
        let ticket = self.begin_load(name);
        let decoded = self.source.decode(bytes, name);
        let outcome = self.finish_load(&ticket, decoded);
        if matches!(outcome, LoadOutcome::Loaded(_)) {
            self.asset_reference = None;
        }
        outcome
    }

    /// Fetch a file by URL and install it; the URL becomes the session
    /// asset reference.
    pub fn load_url(&mut self, url: &str) -> LoadOutcome {
        let ticket = self.begin_load(url);
        let decoded = self.source.fetch(url);
        let outcome = self.finish_load(&ticket, decoded);
        if matches!(outcome, LoadOutcome::Loaded(_)) {
            self.asset_reference = Some(url.to_string());
        }
        outcome
    }

    /// Load the configured placeholder asset.
    pub fn load_placeholder(&mut self) -> LoadOutcome {
        let url = self.config.placeholder_asset.clone();
        let installed = self.source.fetch(&url).and_then(|asset| self.install_asset(asset));
        match installed {
            Ok(_) => {
                self.asset_reference = None;
                LoadOutcome::Placeholder
            }
            Err(e) => {
                engine_error!(SOURCE, "Placeholder '{}' failed to load: {}", url, e);
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Replace the scene model with `asset` and frame it.
    fn install_asset(&mut self, mut asset: DecodedAsset) -> Result<AssetFeatures> {
        if asset.bounds().map_or(true, |b| b.bounding_sphere_radius() <= 0.0) {
            return Err(Error::DecodeFailure(format!("'{}' has no usable geometry", asset.name)));
        }

        // old model and helpers go before the new model is inserted
        self.scene.clear();

        let features = self.preparer.prepare(&mut asset);
        let bounds = asset
            .bounds()
            .ok_or_else(|| Error::DecodeFailure(format!("'{}' lost its geometry during preparation", asset.name)))?;

        let mut node = SceneNode::model(asset.name.clone(), asset.root_transform, bounds, asset.nodes.len());
        node.cast_shadow = asset.nodes.iter().any(|n| n.cast_shadow);
        self.scene.set_model(node);

        let world = self
            .scene
            .model_bounds()
            .ok_or_else(|| Error::DecodeFailure(format!("'{}' was not inserted", asset.name)))?;
        let framing = compute_framing(&world, world.bounding_sphere_radius());

        self.scene.set_key_light(KeyLight::from_framing(&framing));
        if self.config.bounds_helper {
            self.scene.add_helper(SceneNode::bounds_helper("bounds", world));
        }
        self.scene.set_clips(asset.clips);

        if !self.rig.apply_framing(&framing) {
            engine_warn!(SOURCE, "No views registered, framing of '{}' skipped", asset.name);
        }
        self.framing = Some(framing);
        self.features = features;

        engine_info!(
            SOURCE,
            "Loaded '{}': {} meshes, radius {:.3}, planes {:.3}..{:.3}",
            asset.name, asset.nodes.len(), framing.radius, framing.near, framing.far
        );
        self.refresh();
        Ok(features)
    }

    /// Replace the scene environment map.
    ///
    /// If `url` cannot be fetched the configured default environment is
    /// tried instead. If that fails too, the current environment is kept
    /// and the error returned.
    pub fn load_environment(&mut self, url: &str) -> Result<()> {
        let fetched = match self.source.fetch_environment(url) {
            Ok(environment) => Ok(environment),
            Err(e) => match self.config.environment_asset.clone().filter(|default| default != url) {
                Some(default) => {
                    engine_warn!(SOURCE, "Environment '{}' failed, using '{}': {}", url, default, e);
                    self.source.fetch_environment(&default)
                }
                None => Err(e),
            },
        };

        match fetched {
            Ok(environment) => {
                engine_info!(SOURCE, "Environment '{}' ({}x{})", environment.name, environment.width, environment.height);
                self.scene.set_environment(Some(environment));
                self.refresh();
                Ok(())
            }
            Err(e) => {
                engine_warn!(SOURCE, "No environment loaded, keeping the current one: {}", e);
                Err(e)
            }
        }
    }

    /// Remove the model and helpers and cancel any load in flight.
    pub fn clear_scene(&mut self) {
        self.loader.cancel();
        self.scene.clear();
        self.features = AssetFeatures::default();
        self.framing = None;
        self.asset_reference = None;
        self.refresh();
    }

    // ===== UPLOAD =====

    /// Names already present on the remote store
    pub fn set_known_models<I: IntoIterator<Item = String>>(&mut self, names: I) {
        self.known_models = names.into_iter().collect();
    }

    pub fn is_known_model(&self, name: &str) -> bool {
        self.known_models.contains(name)
    }

    /// Upload a locally loaded model.
    ///
    /// Returns `Ok(None)` if the name is already on the store. On success
    /// the stored path becomes the session asset reference.
    ///
    /// # Errors
    ///
    /// `UploadFailure` (logged as a warning); the model stays local.
    pub fn save_asset(&mut self, bytes: &[u8], filename: &str) -> Result<Option<String>> {
        if self.known_models.contains(filename) {
            engine_debug!(SOURCE, "'{}' already on the store, upload skipped", filename);
            return Ok(None);
        }
        let subfolder = self.config.upload_subfolder.clone();
        let Some(uploader) = self.uploader.as_mut() else {
            engine_warn!(SOURCE, "No uploader attached, '{}' stays local", filename);
            return Err(Error::UploadFailure("no uploader attached".to_string()));
        };

        match uploader.upload(bytes, filename, &subfolder) {
            Ok(path) => {
                engine_info!(SOURCE, "Uploaded '{}' to '{}'", filename, path);
                self.known_models.insert(filename.to_string());
                self.asset_reference = Some(path.clone());
                Ok(Some(path))
            }
            Err(e) => {
                engine_warn!(SOURCE, "Upload of '{}' failed, model stays local: {}", filename, e);
                Err(upload_failure(e))
            }
        }
    }

    /// Render a frame and encode the target of `kind` as PNG.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the view is hidden.
    pub fn capture_view(&mut self, kind: ViewKind) -> Result<Vec<u8>> {
        if !self.views.is_visible(kind) {
            engine_bail!(InvalidResource => SOURCE, "View '{}' is hidden, nothing to capture", kind);
        }
        if self.state == FrameState::Idle {
            self.render_frame()?;
        }

        let handle = self.renderer.clone();
        let guard = lock_renderer(&handle)?;
        let target = self
            .views
            .target(kind)
            .ok_or_else(|| Error::InvalidResource(format!("view '{}' has no render target", kind)))?;
        let pixels = guard.read_pixels(target)?;
        encode_png(target.width(), target.height(), &pixels)
    }

    /// Capture `kind` and upload it as `filename`.
    pub fn send_view(&mut self, kind: ViewKind, filename: &str) -> Result<UploadStatus> {
        let png = self.capture_view(kind)?;
        let Some(uploader) = self.uploader.as_mut() else {
            engine_warn!(SOURCE, "No uploader attached, capture '{}' dropped", filename);
            return Err(Error::UploadFailure("no uploader attached".to_string()));
        };
        match uploader.upload_image(&png, filename) {
            Ok(status) => {
                if !status.is_stored() {
                    engine_warn!(SOURCE, "Capture '{}' rejected: {:?}", filename, status);
                }
                Ok(status)
            }
            Err(e) => {
                engine_warn!(SOURCE, "Capture upload '{}' failed: {}", filename, e);
                Err(upload_failure(e))
            }
        }
    }

    // ===== SESSION =====

    pub fn snapshot(&self) -> SessionState {
        SessionState {
            canvas_size: self.requested_size,
            layout_offset: self.layout_offset,
            asset_reference: self.asset_reference.clone(),
            camera_state: Some(self.rig.save_state()),
        }
    }

    /// Restore a snapshot and render once.
    ///
    /// The referenced asset is loaded first; a stored camera then replaces
    /// its framing. Without a stored camera the asset framing is kept. No
    /// frame is drawn before the stored pose is in place.
    pub fn restore(&mut self, session: SessionState) -> Result<()> {
        self.layout_offset = session.layout_offset;
        if !session.canvas_size.same_dimensions(&self.requested_size)
            || session.canvas_size.pixel_ratio() != self.requested_size.pixel_ratio()
        {
            self.requested_size = session.canvas_size;
            self.resize_dirty = true;
        }

        self.holding_renders = true;
        if let Some(reference) = session.asset_reference.as_deref() {
            if self.asset_reference.as_deref() != Some(reference) {
                self.load_url(reference);
            }
        }
        self.holding_renders = false;

        // the stored pose goes over the freshly framed camera; clip planes
        // belong to the loaded asset
        match session.camera_state {
            Some(camera) => {
                let mut state = *self.rig.interactive();
                state.set_pose(camera.position(), camera.orientation(), camera.target());
                self.rig.restore_state(state);
            }
            None => match self.framing {
                Some(framing) => {
                    self.rig.apply_framing(&framing);
                }
                None => self.rig.reset(self.config.initial_camera_position, self.config.initial_camera_target),
            },
        }

        self.request_render().map(|_| ())
    }

    pub fn session_record(&self) -> SessionRecord {
        self.snapshot().to_record()
    }

    /// Restore from the persisted record.
    pub fn restore_record(&mut self, record: &SessionRecord) -> Result<()> {
        let session = SessionState::from_record(record, &self.snapshot(), self.rig.interactive());
        self.restore(session)
    }
}

fn upload_failure(error: Error) -> Error {
    match error {
        Error::UploadFailure(_) => error,
        other => Error::UploadFailure(other.to_string()),
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
