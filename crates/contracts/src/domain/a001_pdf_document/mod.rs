pub mod aggregate;

pub use aggregate::{DocumentName, PdfDocument, PDF_MEDIA_TYPE};
