//! Camera module - camera state, render camera and the multi-view rig.
//!
//! `CameraState` is the high-level pose the user drives; `RenderCamera` is
//! the passive matrix container handed to the renderer for one draw.

mod camera_state;
mod render_camera;
mod camera_rig;

pub use camera_state::CameraState;
pub use render_camera::RenderCamera;
pub use camera_rig::{CameraRig, ViewCamera, DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE, DEFAULT_ORBIT_SENSITIVITY};
