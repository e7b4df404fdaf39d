//! Wire payloads for the SPF package workflow.
//!
//! Every response the backend hands to the browser view is described here:
//! catalog search results, download-candidate listings, upload reports and
//! the task-status envelope polled while a package is being generated.
//!
//! Decoding is deliberately lenient. A missing or `null` field decodes to an
//! empty value so the view renders a blank cell instead of failing; only a
//! document that is not JSON at all (or not an object) is rejected.

pub mod payload;
pub mod severity;
pub mod task;

mod lenient;

// Re-exports
pub use payload::{ArticleFile, DocPackage, DownloadListing, FileRef, SearchResult, UploadBatch};
pub use severity::Severity;
pub use task::{TaskStatus, TaskStatusResponse};

/// Errors raised while decoding a backend response.
#[derive(thiserror::Error, Debug)]
pub enum PayloadError {
    /// The document is not valid JSON or its top level has the wrong shape.
    #[error("Malformed {kind} payload: {source}")]
    Malformed {
        /// Which response shape was being decoded (e.g. `"listing"`).
        kind: &'static str,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    pub(crate) fn malformed(kind: &'static str, source: serde_json::Error) -> Self {
        Self::Malformed { kind, source }
    }
}
