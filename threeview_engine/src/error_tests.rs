//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("Renderer lock poisoned".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("Renderer lock poisoned"));
}

#[test]
fn test_decode_failure_display() {
    let err = Error::DecodeFailure("truncated glb header".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Decode failure"));
    assert!(display.contains("truncated glb header"));
}

#[test]
fn test_shader_build_failure_display() {
    let err = Error::ShaderBuildFailure("canny_gradient".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Shader build failure"));
    assert!(display.contains("canny_gradient"));
}

#[test]
fn test_upload_failure_display() {
    let err = Error::UploadFailure("status 500".to_string());
    assert_eq!(format!("{}", err), "Upload failure: status 500");
}

#[test]
fn test_invalid_dimension_display() {
    let err = Error::InvalidDimension { width: 0, height: 512 };
    assert_eq!(format!("{}", err), "Invalid dimension: 0x512");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidDimension { width: 0, height: 0 };
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::InitializationFailed("views".to_string()));
    assert!(debug.contains("InitializationFailed"));

    let debug = format!("{:?}", Error::InvalidResource("target".to_string()));
    assert!(debug.contains("InvalidResource"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::ShaderBuildFailure("threshold".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::ShaderBuildFailure("exposure".to_string()));
}

#[test]
fn test_result_propagation() {
    fn inner() -> Result<u32> {
        Err(Error::DecodeFailure("bad".to_string()))
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }

    assert!(matches!(outer(), Err(Error::DecodeFailure(_))));
}
