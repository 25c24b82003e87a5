pub mod response;

pub use response::UploadPdfResponse;

use crate::usecases::common::UseCaseMetadata;

/// Name of the multipart field carrying the PDF binary
pub const FILE_FIELD: &str = "file";

pub struct UploadPdf;

impl UseCaseMetadata for UploadPdf {
    fn usecase_index() -> &'static str {
        "u001"
    }

    fn usecase_name() -> &'static str {
        "upload_pdf"
    }

    fn display_name() -> &'static str {
        "Upload New PDF"
    }

    fn endpoint() -> &'static str {
        "/upload-pdf"
    }

    fn description() -> &'static str {
        "Upload your PDF and ask questions to get instant answers from your documents"
    }
}
