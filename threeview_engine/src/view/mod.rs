//! View module - the four fixed views and their render targets.

mod view;
mod view_set;

pub use view::{View, ViewKind, ViewMask};
pub use view_set::ViewSet;
