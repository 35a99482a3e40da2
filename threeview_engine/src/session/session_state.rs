/// Session snapshots and their persisted JSON record.
///
/// The engine never writes files: hosts store the JSON produced by
/// `SessionRecord::to_json` and hand it back on reload.

use glam::{Quat, Vec3};
use serde::{Deserialize, Deserializer, Serialize};
use crate::camera::CameraState;
use crate::canvas::CanvasSize;
use crate::error::{Error, Result};
use crate::engine_warn;

/// In-memory snapshot of the persisted viewer state
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub canvas_size: CanvasSize,
    pub layout_offset: u32,
    /// Path of the active model on the remote store
    pub asset_reference: Option<String>,
    /// `None` means "frame the asset by default"
    pub camera_state: Option<CameraState>,
}

impl SessionState {
    /// Persisted shape of this snapshot
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            size: SizeRecord {
                w: self.canvas_size.width(),
                h: self.canvas_size.height(),
                r: Some(self.canvas_size.aspect()),
                offset: self.layout_offset,
            },
            current_model_path: self.asset_reference.clone(),
            camera: self.camera_state.as_ref().map(|state| CameraRecord {
                position: state.position(),
                orientation: state.orientation(),
                target: state.target(),
            }),
        }
    }

    /// Snapshot from a persisted record.
    ///
    /// An unusable stored size keeps `current.canvas_size`. The stored `r`
    /// is the aspect ratio and only cross-checks `w / h`; the device pixel
    /// ratio always comes from `current`. The camera pose is applied on top
    /// of `current_camera`, which provides the clip planes, aspect and field
    /// of view.
    pub fn from_record(record: &SessionRecord, current: &SessionState, current_camera: &CameraState) -> Self {
        let pixel_ratio = current.canvas_size.pixel_ratio();
        let canvas_size = match CanvasSize::new(record.size.w, record.size.h, pixel_ratio) {
            Ok(size) => {
                if let Some(stored) = record.size.r {
                    if !stored.is_finite() || (stored - size.aspect()).abs() > ASPECT_TOLERANCE * size.aspect() {
                        engine_warn!("threeview::SessionState",
                            "Stored aspect {} disagrees with {}, using the dimensions", stored, size.label());
                    }
                }
                size
            }
            Err(e) => {
                engine_warn!("threeview::SessionState", "Stored canvas size ignored: {}", e);
                current.canvas_size
            }
        };

        let camera_state = record.camera.as_ref().and_then(|camera| {
            if !camera.is_finite() {
                engine_warn!("threeview::SessionState", "Stored camera ignored: non-finite pose");
                return None;
            }
            let mut state = *current_camera;
            state.set_pose(camera.position, camera.orientation, camera.target);
            Some(state)
        });

        Self {
            canvas_size,
            layout_offset: record.size.offset,
            asset_reference: record.current_model_path.clone().filter(|path| !path.is_empty()),
            camera_state,
        }
    }
}

// ===== PERSISTED RECORD =====

/// Relative difference between `r` and `w / h` still accepted silently
const ASPECT_TOLERANCE: f32 = 0.01;

fn default_offset() -> u32 {
    10
}

/// `{w, h, r, offset}` where `r` is the aspect ratio `w / h`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeRecord {
    pub w: u32,
    pub h: u32,
    #[serde(default)]
    pub r: Option<f32>,
    #[serde(default = "default_offset")]
    pub offset: u32,
}

/// Camera pose as persisted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraRecord {
    pub position: Vec3,
    pub orientation: Quat,
    pub target: Vec3,
}

impl CameraRecord {
    fn is_finite(&self) -> bool {
        self.position.is_finite() && self.orientation.is_finite() && self.target.is_finite()
            && self.orientation.length_squared() > 0.0
    }
}

/// Vector written either as `[x, y, z]` or as `{x, y, z}`
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredVec3 {
    Array([f32; 3]),
    Object { x: f32, y: f32, z: f32 },
}

impl From<StoredVec3> for Vec3 {
    fn from(stored: StoredVec3) -> Self {
        match stored {
            StoredVec3::Array(v) => Vec3::from_array(v),
            StoredVec3::Object { x, y, z } => Vec3::new(x, y, z),
        }
    }
}

/// Quaternion written as `[x, y, z, w]`, `{x, y, z, w}` or `{_x, _y, _z, _w}`
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredQuat {
    Array([f32; 4]),
    Object {
        #[serde(alias = "_x")]
        x: f32,
        #[serde(alias = "_y")]
        y: f32,
        #[serde(alias = "_z")]
        z: f32,
        #[serde(alias = "_w")]
        w: f32,
    },
}

impl From<StoredQuat> for Quat {
    fn from(stored: StoredQuat) -> Self {
        match stored {
            StoredQuat::Array([x, y, z, w]) | StoredQuat::Object { x, y, z, w } => Quat::from_xyzw(x, y, z, w),
        }
    }
}

#[derive(Deserialize)]
struct StoredCamera {
    position: StoredVec3,
    #[serde(alias = "quaternion")]
    orientation: StoredQuat,
    target: StoredVec3,
}

impl From<StoredCamera> for CameraRecord {
    fn from(stored: StoredCamera) -> Self {
        Self {
            position: stored.position.into(),
            orientation: stored.orientation.into(),
            target: stored.target.into(),
        }
    }
}

impl<'de> Deserialize<'de> for CameraRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        StoredCamera::deserialize(deserializer).map(CameraRecord::from)
    }
}

/// A camera entry that does not parse means "frame the asset by default";
/// it never rejects the rest of the record.
fn lenient_camera<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<CameraRecord>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match serde_json::from_value::<CameraRecord>(value) {
        Ok(camera) => Some(camera),
        Err(e) => {
            engine_warn!("threeview::SessionState", "Stored camera ignored: {}", e);
            None
        }
    }))
}

/// Persisted session record
///
/// ```json
/// { "size": { "w": 512, "h": 512, "r": 1, "offset": 10 },
///   "currentModelPath": "ThreeViewModels/head.glb",
///   "camera": { "position": [0, 0, 5], "orientation": [0, 0, 0, 1], "target": [0, 0, 0] } }
/// ```
///
/// Cameras saved as `{ "position": {"x", "y", "z"}, "quaternion": {"_x", "_y", "_z", "_w"}, ... }`
/// load too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub size: SizeRecord,
    #[serde(rename = "currentModelPath", alias = "currentModel", default)]
    pub current_model_path: Option<String>,
    #[serde(default, deserialize_with = "lenient_camera")]
    pub camera: Option<CameraRecord>,
}

impl SessionRecord {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::InvalidResource(format!("session record serialization: {}", e)))
    }

    /// # Errors
    ///
    /// `InvalidResource` for malformed JSON or a missing `size`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidResource(format!("session record: {}", e)))
    }
}

#[cfg(test)]
#[path = "session_state_tests.rs"]
mod tests;
