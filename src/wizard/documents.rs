use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;

use crate::wizard::product::ProductConfig;

/// How the applicant supplies supporting documents: one shared Google Drive
/// folder link, or individual per-document uploads.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMethod {
    Gdrive,
    Manual,
}

/// In-memory reference to an uploaded document. Only metadata is retained;
/// the prototype never transfers or stores the file bytes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub file_name: String,
    pub extension: String,
    pub size: u64,
}

/// Document state of one draft. Switching `method` is a pure toggle: the
/// inactive method's data stays in memory, matching the prototype.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSet {
    pub method: DocumentMethod,
    pub manual: IndexMap<String, Option<FileRef>>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DocumentError {
    UnknownDocument(String),
}

impl DocumentSet {
    pub fn new() -> Self {
        DocumentSet {
            method: DocumentMethod::Gdrive,
            manual: IndexMap::new(),
        }
    }

    pub fn set_method(&mut self, method: DocumentMethod) {
        self.method = method;
    }

    /// Assigns or clears the reference for a catalog document. A cleared
    /// document keeps its key with a `None` value, like the original's
    /// `{docId: null}` entries.
    pub fn set_file(
        &mut self,
        config: &ProductConfig,
        doc_id: &str,
        file: Option<FileRef>,
    ) -> Result<(), DocumentError> {
        if config.document(doc_id).is_none() {
            return Err(DocumentError::UnknownDocument(doc_id.to_string()));
        }
        self.manual.insert(doc_id.to_string(), file);
        Ok(())
    }

    pub fn file(&self, doc_id: &str) -> Option<&FileRef> {
        self.manual.get(doc_id).and_then(|f| f.as_ref())
    }
}

impl Default for DocumentSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Advisory filter matching the prototype's `image/*,.pdf` file inputs.
pub fn is_allowed_extension(ext: &str) -> bool {
    matches!(ext, "jpg" | "jpeg" | "png" | "webp" | "pdf")
}

pub fn extension_from_content_type(content_type: &str) -> Option<String> {
    match content_type {
        "image/jpeg" | "image/jpg" => Some("jpg".to_string()),
        "image/png" => Some("png".to_string()),
        "image/webp" => Some("webp".to_string()),
        "application/pdf" => Some("pdf".to_string()),
        _ => None,
    }
}
