//! Multipart body for adding and editing voices.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};

use crate::{Error, Result};

/// Request for adding a new voice or editing an existing one.
///
/// Sent as `multipart/form-data`: a `name` field, optional `description`
/// and `labels` fields, and one `files` part per sample path.
///
/// # Example
///
/// ```
/// use elevenlabs_rs::models::AddEditVoiceRequest;
///
/// let request = AddEditVoiceRequest::new("Narrator")
///     .with_description("Calm, low voice")
///     .with_label("accent", "british")
///     .with_file("samples/narrator-1.mp3");
/// assert_eq!(request.files.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddEditVoiceRequest {
    /// Voice name (required by the API)
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional labels, sent as a JSON object
    pub labels: BTreeMap<String, String>,
    /// Audio sample files to upload
    pub files: Vec<PathBuf>,
}

impl AddEditVoiceRequest {
    /// Create a request with the given voice name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add a sample file.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Text fields in the order they are written to the form.
    pub(crate) fn text_fields(&self) -> Result<Vec<(&'static str, String)>> {
        let mut fields = vec![("name", self.name.clone())];
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            fields.push(("description", description.to_string()));
        }
        if !self.labels.is_empty() {
            fields.push(("labels", serde_json::to_string(&self.labels)?));
        }
        Ok(fields)
    }

    /// Build the multipart form, reading every sample file.
    ///
    /// Fails with [`Error::FileAccess`] on the first file that cannot be
    /// read; no form is returned in that case.
    pub(crate) async fn to_form(&self) -> Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.text_fields()? {
            form = form.text(name, value);
        }

        for path in &self.files {
            let data = tokio::fs::read(path).await.map_err(|source| Error::FileAccess {
                path: path.clone(),
                source,
            })?;
            form = form.part("files", Part::bytes(data).file_name(base_name(path)));
        }

        Ok(form)
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
