//! Set of uploaded documents and the active one.

use contracts::domain::a001_pdf_document::{DocumentName, PdfDocument};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// Caller tried to activate a document that was never registered
    #[error("document '{0}' is not registered")]
    InvalidSelection(String),
}

/// Documents in first-seen order. Exactly one is active while non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentRegistry {
    documents: Vec<PdfDocument>,
    active: Option<usize>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the document if its name is new, refresh it otherwise; in both cases activate it.
    pub fn register(&mut self, document: PdfDocument) -> &DocumentName {
        let index = match self.position(document.name.as_str()) {
            Some(index) => {
                if document.num_chunks.is_some() {
                    self.documents[index].num_chunks = document.num_chunks;
                }
                index
            }
            None => {
                self.documents.push(document);
                self.documents.len() - 1
            }
        };
        self.active = Some(index);
        &self.documents[index].name
    }

    /// Activate an already registered document.
    pub fn select(&mut self, name: &str) -> Result<&DocumentName, RegistryError> {
        let index = self
            .position(name)
            .ok_or_else(|| RegistryError::InvalidSelection(name.to_string()))?;
        self.active = Some(index);
        Ok(&self.documents[index].name)
    }

    pub fn active_document(&self) -> Option<&PdfDocument> {
        self.active.and_then(|index| self.documents.get(index))
    }

    pub fn active_name(&self) -> Option<&DocumentName> {
        self.active_document().map(|doc| &doc.name)
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active_name().is_some_and(|active| active == name)
    }

    pub fn documents(&self) -> &[PdfDocument] {
        &self.documents
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.documents.iter().position(|doc| doc.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str) -> PdfDocument {
        PdfDocument::new(name)
    }

    fn assert_active_is_member(registry: &DocumentRegistry) {
        match registry.active_name() {
            Some(name) => assert!(registry.contains(name.as_str())),
            None => assert!(registry.is_empty()),
        }
    }

    #[test]
    fn test_empty_registry_has_no_active_document() {
        let registry = DocumentRegistry::new();
        assert!(registry.active_document().is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_appends_in_first_seen_order_and_activates() {
        let mut registry = DocumentRegistry::new();
        registry.register(doc("a.pdf"));
        registry.register(doc("b.pdf"));

        let names: Vec<_> = registry.documents().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
        assert!(registry.is_active("b.pdf"));
    }

    #[test]
    fn test_reregister_does_not_duplicate() {
        let mut registry = DocumentRegistry::new();
        registry.register(doc("a.pdf"));
        registry.register(doc("b.pdf"));
        registry.register(doc("a.pdf").with_chunks(Some(4)));

        assert_eq!(registry.len(), 2);
        assert!(registry.is_active("a.pdf"));
        assert_eq!(registry.documents()[0].num_chunks, Some(4));
    }

    #[test]
    fn test_select_unknown_is_invalid_selection() {
        let mut registry = DocumentRegistry::new();
        registry.register(doc("a.pdf"));

        let err = registry.select("missing.pdf").unwrap_err();
        assert_eq!(err, RegistryError::InvalidSelection("missing.pdf".to_string()));
        assert!(registry.is_active("a.pdf"));
    }

    #[test]
    fn test_select_keeps_contents() {
        let mut registry = DocumentRegistry::new();
        registry.register(doc("a.pdf"));
        registry.register(doc("b.pdf"));
        let before = registry.documents().to_vec();

        registry.select("a.pdf").unwrap();
        assert_eq!(registry.documents(), before.as_slice());
        assert!(registry.is_active("a.pdf"));
    }

    #[test]
    fn test_exactly_one_active_over_mixed_sequence() {
        let mut registry = DocumentRegistry::new();
        let script = [
            ("register", "a.pdf"),
            ("register", "b.pdf"),
            ("select", "a.pdf"),
            ("select", "nope.pdf"),
            ("register", "c.pdf"),
            ("register", "b.pdf"),
            ("select", "c.pdf"),
        ];
        for (op, name) in script {
            match op {
                "register" => {
                    registry.register(doc(name));
                }
                _ => {
                    let _ = registry.select(name);
                }
            }
            assert!(registry.active_name().is_some());
            assert_active_is_member(&registry);
        }
        assert_eq!(registry.len(), 3);
        assert!(registry.is_active("c.pdf"));
    }
}
