pub mod api;
pub mod controller;
pub mod view;

pub use controller::{upload_document, UploadController, UploadError};
pub use view::{UploadOverlay, UploadView};
