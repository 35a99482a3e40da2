//! Asset module - collaborators the orchestrator loads, prepares and
//! uploads models through, plus PNG capture encoding.

mod source;
mod loader;
mod upload;
mod capture;

pub use source::{AssetSource, AssetPreparer, DefaultPreparer, DecodedAsset, MeshNode, AssetFeatures};
pub use loader::{AssetLoader, LoadTicket, LoadOutcome};
pub use upload::{Uploader, UploadStatus};
pub use capture::encode_png;
