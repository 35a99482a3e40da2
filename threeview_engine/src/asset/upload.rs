/// Remote file store collaborator.

use crate::error::Result;

/// Outcome of an image upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Stored,
    Rejected { code: u16 },
}

impl UploadStatus {
    pub fn is_stored(&self) -> bool {
        matches!(self, UploadStatus::Stored)
    }
}

/// Uploads models and captured images
pub trait Uploader: Send {
    /// Store a model file, returning its remote path
    ///
    /// # Errors
    ///
    /// `UploadFailure` when the store cannot be reached or refuses the file.
    fn upload(&mut self, bytes: &[u8], filename: &str, subfolder: &str) -> Result<String>;

    /// Store a PNG image
    fn upload_image(&mut self, png_bytes: &[u8], filename: &str) -> Result<UploadStatus>;
}
