/// Shader trait and shader descriptor

/// Descriptor for creating a full-screen post-process shader
#[derive(Debug, Clone)]
pub struct ShaderDesc {
    /// Debug label, also used to report build failures
    pub label: String,
    /// WGSL source
    pub source: &'static str,
    /// Fragment entry point function name
    pub entry_point: String,
}

/// Shader resource trait
///
/// Implemented by backend-specific shader types. The shader is destroyed
/// when the last `Arc` is dropped.
pub trait Shader: Send + Sync {
    /// Debug label given at creation
    fn label(&self) -> &str;
}
