//! Session module - snapshots of the viewer state the host persists.

mod session_state;

pub use session_state::{SessionState, SessionRecord, SizeRecord, CameraRecord};
