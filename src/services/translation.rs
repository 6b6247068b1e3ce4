//! Translation lookup for user-facing messages.
//!
//! The shell resolves audio error codes to display text through the
//! [`Translator`] trait. The production implementation,
//! [`CatalogTranslator`], serves keys from a YAML catalog of nested string
//! maps flattened to dotted keys:
//!
//! ```yaml
//! audio:
//!   errors:
//!     deviceBusy: "The audio device is in use by another application."
//! ```
//!
//! becomes the entry `audio.errors.deviceBusy`. Lookup itself is in-memory;
//! the trait is async because callers suspend on resolution and alternative
//! backends (remote catalogs) are expected to block.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::fs;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

/// Errors from translation resolution and catalog loading.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("no translation for key: {key}")]
    MissingKey { key: String },

    #[error("failed to read translation catalog {path}: {source}")]
    CatalogRead {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translation catalog: {source}")]
    CatalogParse {
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Asynchronous key-to-text resolution.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Resolve a dotted catalog key to display text, suspending the caller
    /// until resolution completes.
    async fn translate(&self, key: &str) -> Result<String, TranslationError>;
}

/// Catalog-backed translator loaded from YAML.
///
/// Keys preserve catalog order for predictable diagnostics dumps.
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
    entries: IndexMap<String, String>,
}

impl CatalogTranslator {
    /// Load a catalog from a YAML file.
    pub fn from_file<P: AsRef<Utf8Path>>(path: P) -> Result<Self, TranslationError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| TranslationError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        let translator = Self::from_yaml(&contents)?;
        tracing::info!(
            "Loaded translation catalog from {} ({} entries)",
            path,
            translator.len()
        );
        Ok(translator)
    }

    /// Parse a catalog from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, TranslationError> {
        let root: serde_yaml_ng::Value = serde_yaml_ng::from_str(yaml)
            .map_err(|source| TranslationError::CatalogParse { source })?;

        let mut entries = IndexMap::new();
        flatten_into("", &root, &mut entries);
        Ok(Self { entries })
    }

    /// Number of flattened entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CatalogTranslator {
    /// Built-in catalog covering the known audio error codes, used when no
    /// catalog file is configured.
    fn default() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(
            "audio.errors.missingSpeaker".to_string(),
            "No audio output device was found. Connect a speaker or headset and try again."
                .to_string(),
        );
        entries.insert(
            "audio.errors.missingMicrophone".to_string(),
            "No microphone was detected. Connect one and check your input settings.".to_string(),
        );
        entries.insert(
            "audio.errors.deviceBusy".to_string(),
            "The audio device is in use by another application.".to_string(),
        );
        entries.insert(
            "audio.errors.recordingFailed".to_string(),
            "Recording could not be started. Check your audio device and try again.".to_string(),
        );
        entries.insert(
            "audio.errors.playbackFailed".to_string(),
            "Playback failed. Check your audio output device.".to_string(),
        );
        Self { entries }
    }
}

#[async_trait]
impl Translator for CatalogTranslator {
    async fn translate(&self, key: &str) -> Result<String, TranslationError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| TranslationError::MissingKey {
                key: key.to_string(),
            })
    }
}

/// Flatten nested string maps into dotted keys. Non-string leaves and
/// non-string keys are skipped.
fn flatten_into(prefix: &str, value: &serde_yaml_ng::Value, out: &mut IndexMap<String, String>) {
    match value {
        serde_yaml_ng::Value::Mapping(mapping) => {
            for (key, nested) in mapping {
                let Some(key) = key.as_str() else {
                    tracing::debug!("skipping non-string catalog key under '{}'", prefix);
                    continue;
                };
                let path = if prefix.is_empty() {
                    key.to_string()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(&path, nested, out);
            }
        }
        serde_yaml_ng::Value::String(text) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), text.clone());
            }
        }
        _ => {
            tracing::debug!("skipping non-string catalog value at '{}'", prefix);
        }
    }
}
