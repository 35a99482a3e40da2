//! Orchestrator module - frame driving, asset loading and session glue.

mod orchestrator;

pub use orchestrator::{Orchestrator, FrameState, FrameReport};
