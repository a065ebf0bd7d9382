use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::wizard::documents::{DocumentSet, FileRef};
use crate::wizard::product::{ProductConfig, ProductType};

#[derive(Debug, PartialEq, Eq)]
pub enum DraftError {
    UnknownField(String),
    UnknownDocument(String),
    NotOnReviewStep,
}

/// One in-progress application: the step index, the flat form record, and
/// the document state. Held only in memory; a restart discards it, the way
/// a page refresh discarded the prototype's wizard progress.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub product: ProductType,
    pub current_step: usize,
    pub form_data: IndexMap<String, String>,
    pub documents: DocumentSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Draft {
    pub fn new(product: ProductType) -> Self {
        let now = Utc::now();
        Draft {
            product,
            current_step: 1,
            form_data: IndexMap::new(),
            documents: DocumentSet::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn config(&self) -> &'static ProductConfig {
        self.product.config()
    }

    /// Advances one step, clamped to the product's last step. There is no
    /// validation gate here: the prototype let Next advance with empty
    /// required fields, and that behavior is kept.
    pub fn go_next(&mut self) {
        self.current_step = (self.current_step + 1).min(self.config().total_steps());
        self.touch();
    }

    pub fn go_previous(&mut self) {
        self.current_step = (self.current_step - 1).max(1);
        self.touch();
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.config().total_steps()
    }

    /// Merges one field into the form record. Values stay strings; numeric
    /// inputs arrive as numeric-looking strings, as in the original.
    pub fn set_field(&mut self, name: &str, value: String) -> Result<(), DraftError> {
        if self.config().field(name).is_none() {
            return Err(DraftError::UnknownField(name.to_string()));
        }
        self.form_data.insert(name.to_string(), value);
        self.touch();
        Ok(())
    }

    pub fn set_file(&mut self, doc_id: &str, file: Option<FileRef>) -> Result<(), DraftError> {
        self.documents
            .set_file(self.product.config(), doc_id, file)
            .map_err(|e| match e {
                super::documents::DocumentError::UnknownDocument(id) => {
                    DraftError::UnknownDocument(id)
                }
            })?;
        self.touch();
        Ok(())
    }

    /// Read-only echo of the product's review subset, grouped the way the
    /// review step displays it. Untouched fields render as empty strings.
    pub fn summary(&self) -> Vec<SummaryView> {
        self.config()
            .summary
            .iter()
            .map(|group| SummaryView {
                title: group.title,
                fields: group
                    .fields
                    .iter()
                    .map(|name| {
                        let label = self
                            .config()
                            .field(name)
                            .map(|f| f.label)
                            .unwrap_or(name);
                        FieldView {
                            name,
                            label,
                            value: self.form_data.get(*name).cloned().unwrap_or_default(),
                        }
                    })
                    .collect(),
            })
            .collect()
    }

    /// Terminal action of the wizard. Only valid on the review step, and a
    /// deliberate stub beyond that: nothing is persisted or mutated.
    pub fn submit(&self) -> Result<(), DraftError> {
        if !self.is_final_step() {
            return Err(DraftError::NotOnReviewStep);
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
}
