//! Response bodies for search, download listing and upload.
//!
//! Field names match the backend's JSON keys; they are the contract with
//! the server and must not be renamed.

use crate::PayloadError;
use crate::lenient;
use serde::{Deserialize, Serialize};

/// One catalog entry returned by a package search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    /// Package name
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Package version
    #[serde(deserialize_with = "lenient::text")]
    pub version: String,
    /// Raw creation timestamp, formatted by the view
    #[serde(deserialize_with = "lenient::text")]
    pub created: String,
    /// Where the generated bundle can be downloaded
    #[serde(deserialize_with = "lenient::text")]
    pub uri: String,
}

impl SearchResult {
    /// Decode a search response.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Malformed`] if `json` is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::malformed("search", e))
    }
}

/// A generated package offered for download.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocPackage {
    /// Display name of the bundle
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Download location
    #[serde(deserialize_with = "lenient::text")]
    pub uri: String,
    /// Raw creation timestamp, shown as received
    #[serde(deserialize_with = "lenient::text")]
    pub created: String,
}

/// Download-candidate listing: packages found for a PID, or the reasons
/// none were.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadListing {
    /// Candidate packages in backend order
    #[serde(deserialize_with = "lenient::or_default")]
    pub doc_pkgs: Vec<DocPackage>,
    /// Problems reported by the backend, in order
    #[serde(deserialize_with = "lenient::text_list")]
    pub errors: Vec<String>,
}

impl DownloadListing {
    /// Decode a listing response.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Malformed`] if `json` is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::malformed("listing", e))
    }

    /// Decode a listing carried inside another document (the `data` field
    /// of a finished task).
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Malformed`] if `value` is not an object.
    pub fn from_value(value: serde_json::Value) -> Result<Self, PayloadError> {
        serde_json::from_value(value).map_err(|e| PayloadError::malformed("listing", e))
    }
}

/// File reference inside an upload report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRef {
    /// File name as stored
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    /// Where the stored file can be fetched
    #[serde(deserialize_with = "lenient::text")]
    pub uri: String,
}

/// One article file ingested from an uploaded package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleFile {
    /// Journal ISSN
    #[serde(deserialize_with = "lenient::text")]
    pub issn: String,
    /// Journal acronym
    #[serde(deserialize_with = "lenient::text")]
    pub acron: String,
    /// Article PID
    #[serde(deserialize_with = "lenient::text")]
    pub pid: String,
    /// Article file version
    #[serde(deserialize_with = "lenient::text")]
    pub version: String,
    /// The stored file
    #[serde(deserialize_with = "lenient::or_default")]
    pub file: FileRef,
}

/// Upload report: every article file found in one uploaded package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadBatch {
    /// Name of the uploaded package, shared by every row
    #[serde(deserialize_with = "lenient::text")]
    pub package_file: String,
    /// Raw batch timestamp, shared by every row
    #[serde(deserialize_with = "lenient::text")]
    pub datetime: String,
    /// Files in backend order
    #[serde(deserialize_with = "lenient::or_default")]
    pub article_files: Vec<ArticleFile>,
}

impl UploadBatch {
    /// Decode an upload response.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Malformed`] if `json` is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::malformed("upload", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_decodes_contract_fields() {
        let listing = DownloadListing::from_json(
            r#"{"doc_pkgs":[{"name":"pkgA","uri":"/d/1","created":"2023-01-01"}],"errors":[]}"#,
        )
        .unwrap();
        assert_eq!(listing.doc_pkgs.len(), 1);
        assert_eq!(listing.doc_pkgs[0].name, "pkgA");
        assert_eq!(listing.doc_pkgs[0].uri, "/d/1");
        assert!(listing.errors.is_empty());
    }

    #[test]
    fn test_missing_and_null_fields_decode_empty() {
        let listing = DownloadListing::from_json(r#"{"doc_pkgs":null}"#).unwrap();
        assert!(listing.doc_pkgs.is_empty());
        assert!(listing.errors.is_empty());

        let search = SearchResult::from_json(r#"{"name":"pkg","version":null}"#).unwrap();
        assert_eq!(search.name, "pkg");
        assert_eq!(search.version, "");
        assert_eq!(search.uri, "");
    }

    #[test]
    fn test_error_entries_of_any_type_are_kept() {
        let listing =
            DownloadListing::from_json(r#"{"doc_pkgs":[],"errors":["a",404,null]}"#).unwrap();
        assert_eq!(listing.errors, ["a", "404", ""]);

        let listing = DownloadListing::from_json(r#"{"errors":null}"#).unwrap();
        assert!(listing.errors.is_empty());
    }

    #[test]
    fn test_scalars_keep_json_spelling() {
        let search = SearchResult::from_json(r#"{"name":"pkg","version":3}"#).unwrap();
        assert_eq!(search.version, "3");
    }

    #[test]
    fn test_backend_ordinal_is_ignored() {
        let listing =
            DownloadListing::from_json(r#"{"doc_pkgs":[{"ordinal":7,"name":"x"}]}"#).unwrap();
        assert_eq!(listing.doc_pkgs[0].name, "x");
    }

    #[test]
    fn test_upload_nested_file() {
        let batch = UploadBatch::from_json(
            r#"{
                "package_file": "pkg.zip",
                "datetime": "2023-05-02T10:00:00Z",
                "article_files": [
                    {"issn":"1234-5678","acron":"abc","pid":"S0001","version":"1",
                     "file":{"name":"a.xml","uri":"/f/a.xml"}},
                    {"issn":"1234-5678","acron":"abc","pid":"S0002","file":null}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(batch.article_files.len(), 2);
        assert_eq!(batch.article_files[0].file.uri, "/f/a.xml");
        assert_eq!(batch.article_files[1].file, FileRef::default());
    }

    #[test]
    fn test_not_json_is_rejected() {
        let err = UploadBatch::from_json("<html>").unwrap_err();
        assert!(err.to_string().contains("upload"));
    }
}
