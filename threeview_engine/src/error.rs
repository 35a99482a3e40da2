//! Error types for the ThreeView engine
//!
//! This module defines the error types used throughout the engine,
//! covering the renderer backend, asset handling, the post-process
//! pipeline and canvas sizing.
//!
//! None of these errors is fatal to the render loop: callers recover by
//! falling back to the best available state (placeholder asset, direct
//! rendering, previous canvas size).

use std::fmt;

/// Result type for ThreeView engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// ThreeView engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (GPU device, lock poisoning, etc.)
    BackendError(String),

    /// Invalid resource (render target, shader, session record, etc.)
    InvalidResource(String),

    /// Initialization failed (orchestrator, view set, renderer)
    InitializationFailed(String),

    /// Malformed or undecodable asset
    DecodeFailure(String),

    /// A post-process shader stage failed to compile or link
    ShaderBuildFailure(String),

    /// Remote upload of an asset or capture failed
    UploadFailure(String),

    /// Zero canvas width or height requested
    InvalidDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::DecodeFailure(msg) => write!(f, "Decode failure: {}", msg),
            Error::ShaderBuildFailure(msg) => write!(f, "Shader build failure: {}", msg),
            Error::UploadFailure(msg) => write!(f, "Upload failure: {}", msg),
            Error::InvalidDimension { width, height } => {
                write!(f, "Invalid dimension: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
