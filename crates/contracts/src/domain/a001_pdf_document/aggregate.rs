use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type a file must declare to be accepted for upload
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Имя документа (имя файла), уникально в пределах сессии
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentName(String);

impl DocumentName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AggregateId for DocumentName {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        String::from_string(s).map(DocumentName)
    }
}

impl fmt::Display for DocumentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocumentName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl PartialEq<str> for DocumentName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DocumentName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Загруженный PDF документ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfDocument {
    pub name: DocumentName,
    /// Number of fragments the backend split the document into, when reported
    #[serde(default)]
    pub num_chunks: Option<u32>,
}

impl PdfDocument {
    pub fn new(name: impl Into<DocumentName>) -> Self {
        Self {
            name: name.into(),
            num_chunks: None,
        }
    }

    pub fn with_chunks(mut self, num_chunks: Option<u32>) -> Self {
        self.num_chunks = num_chunks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_name_rejects_blank_ids() {
        assert!(DocumentName::from_string("   ").is_err());
        assert_eq!(
            DocumentName::from_string("a.pdf").unwrap(),
            DocumentName::new("a.pdf")
        );
    }

    #[test]
    fn test_document_from_owned_file_name() {
        let file_name = String::from("scan 01.pdf");
        let doc = PdfDocument::new(file_name);
        assert_eq!(doc.name, "scan 01.pdf");
        assert_eq!(doc.num_chunks, None);
    }

    #[test]
    fn test_document_name_serializes_as_plain_string() {
        let doc = PdfDocument::new("report.pdf").with_chunks(Some(12));
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["name"], "report.pdf");
        assert_eq!(json["num_chunks"], 12);
    }
}
