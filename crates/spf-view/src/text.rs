//! Display-string resolution.
//!
//! Localized labels come from an external catalog keyed by message id.
//! A missing entry resolves to the id itself, so an empty catalog still
//! produces readable (untranslated) text.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Message ids used by the view.
pub mod keys {
    /// Label of a status badge for a task that has just been issued
    pub const INITIATED: &str = "Initiated";
    /// Label of a status badge that reached its terminal state
    pub const COMPLETED: &str = "Completed";
    /// Notification shown after a successful package search
    pub const PACKAGE_GENERATED: &str = "Package was generated with success.";
    /// Notification shown when a background task fails without a reason
    pub const TASK_FAILED: &str = "Task failed";
}

/// Resolves a message id to display text.
pub trait TextResolver {
    /// Display text for `key`.
    fn resolve<'a>(&'a self, key: &'a str) -> Cow<'a, str>;
}

/// Resolver that returns every id unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityText;

impl TextResolver for IdentityText {
    fn resolve<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

/// Errors raised while loading a [`MessageCatalog`].
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Catalog path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a flat TOML table of strings.
    #[error("Invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Message catalog loaded from a flat TOML table:
///
/// ```toml
/// "Completed" = "Concluído"
/// "Package was generated with success." = "Pacote gerado com sucesso."
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    entries: HashMap<String, String>,
}

impl MessageCatalog {
    /// Parse a catalog from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] if the source is not a table of strings.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let entries: HashMap<String, String> = toml::from_str(source)?;
        Ok(Self { entries })
    }

    /// Load a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read and
    /// [`CatalogError::Parse`] if it is not a table of strings.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), entries = catalog.len(), "loaded message catalog");
        Ok(catalog)
    }

    /// Add or replace one translation.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Number of translations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no translations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextResolver for MessageCatalog {
    fn resolve<'a>(&'a self, key: &'a str) -> Cow<'a, str> {
        match self.entries.get(key) {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Borrowed(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_falls_back_to_id() {
        let catalog = MessageCatalog::default();
        assert_eq!(catalog.resolve(keys::COMPLETED), "Completed");
    }

    #[test]
    fn test_toml_catalog() {
        let catalog = MessageCatalog::from_toml_str(
            r#"
            "Completed" = "Concluído"
            "Package was generated with success." = "Pacote gerado com sucesso."
            "#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve(keys::COMPLETED), "Concluído");
        assert_eq!(catalog.resolve(keys::TASK_FAILED), "Task failed");
    }

    #[test]
    fn test_nested_tables_are_rejected() {
        let err = MessageCatalog::from_toml_str("[section]\nkey = \"v\"").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pt.toml");
        std::fs::write(&path, "\"Task failed\" = \"Tarefa falhou\"\n").unwrap();

        let catalog = MessageCatalog::load(&path).unwrap();
        assert_eq!(catalog.resolve(keys::TASK_FAILED), "Tarefa falhou");

        let missing = MessageCatalog::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, CatalogError::Io { .. }));
    }
}
