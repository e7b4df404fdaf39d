//! Response Dispatch - One entry point per completed request
//!
//! External event handlers call the [`Dispatcher`] with already-resolved
//! responses. Every completion hides the loading indicator *before* any
//! feedback is rendered, so the trigger is usable again by the time the
//! results or errors appear.
//!
//! Responses are rendered in arrival order. Two overlapping responses for
//! the same table both append their rows; clearing in between is the
//! caller's responsibility.

use crate::badge;
use crate::dom::Element;
use crate::format::{ChronoDateFormatter, DateFormatter};
use crate::message;
use crate::page::Page;
use crate::table::{ListingOutcome, ResultTableRenderer};
use crate::text::{IdentityText, TextResolver, keys};
use serde_json::Value;
use spf_schema::{DownloadListing, SearchResult, TaskStatus, TaskStatusResponse, UploadBatch};
use tracing::{debug, warn};

/// Default journal base URI
pub const DEFAULT_JOURNAL_URI: &str = "/journal/";

/// What a task-status poll led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Task still running; keep polling
    Pending,
    /// Task finished and its listing was rendered
    Done(ListingOutcome),
    /// Task failed; one danger notification was appended
    Failed,
}

/// Routes completed responses to the renderers.
pub struct Dispatcher {
    text: Box<dyn TextResolver>,
    dates: Box<dyn DateFormatter>,
    journal_uri: String,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("journal_uri", &self.journal_uri)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Dispatcher with untranslated labels and the default date pattern.
    pub fn new() -> Self {
        Self {
            text: Box::new(IdentityText),
            dates: Box::new(ChronoDateFormatter::default()),
            journal_uri: DEFAULT_JOURNAL_URI.to_string(),
        }
    }

    /// Builder: resolve labels through `text`.
    pub fn with_text(mut self, text: impl TextResolver + 'static) -> Self {
        self.text = Box::new(text);
        self
    }

    /// Builder: format timestamps through `dates`.
    pub fn with_dates(mut self, dates: impl DateFormatter + 'static) -> Self {
        self.dates = Box::new(dates);
        self
    }

    /// Builder: base URI journal and article links hang off.
    pub fn with_journal_uri(mut self, journal_uri: impl Into<String>) -> Self {
        self.journal_uri = journal_uri.into();
        self
    }

    /// Base URI for journal and article links
    pub fn journal_uri(&self) -> &str {
        &self.journal_uri
    }

    /// Resolver used for every display label
    pub fn text(&self) -> &dyn TextResolver {
        self.text.as_ref()
    }

    fn renderer(&self) -> ResultTableRenderer<'_> {
        ResultTableRenderer::new(self.text.as_ref(), self.dates.as_ref())
    }

    /// A request was issued from the page trigger.
    pub fn request_started(&self, page: &mut Page) {
        page.progress().show();
    }

    /// A package search returned its result.
    pub fn search_completed(&self, page: &mut Page, result: &SearchResult) {
        page.progress().hide();
        self.renderer().render_search(&mut page.results(), result);
    }

    /// A download-candidate listing arrived.
    pub fn listing_completed(&self, page: &mut Page, listing: &DownloadListing) -> ListingOutcome {
        page.progress().hide();
        self.renderer().render_listing(&mut page.results(), listing)
    }

    /// An upload was ingested. Returns the number of rows appended.
    pub fn upload_completed(&self, page: &mut Page, batch: &UploadBatch) -> usize {
        page.progress().hide();
        self.renderer()
            .render_upload(&mut page.uploads(), batch, &self.journal_uri)
    }

    /// A request failed outright; `text` is shown as a danger notification.
    pub fn request_failed(&self, page: &mut Page, text: &str) {
        page.progress().hide();
        warn!(error = text, "request failed");
        page.messages.append(message::create_error(text));
    }

    /// A task-status poll answered. While the task runs nothing changes.
    /// On success the listing in `data` is rendered and `status_cell`, if
    /// given, is marked completed; on failure the reason is shown.
    pub fn task_polled(
        &self,
        page: &mut Page,
        response: &TaskStatusResponse,
        status_cell: Option<&mut Element>,
    ) -> PollOutcome {
        if !response.status.is_terminal() {
            debug!(status = %response.status, "task still running");
            return PollOutcome::Pending;
        }

        if response.status != TaskStatus::Success {
            let reason = self.failure_text(&response.data);
            self.request_failed(page, &reason);
            return PollOutcome::Failed;
        }

        let listing = match &response.data {
            Value::Null => Ok(DownloadListing::default()),
            data => DownloadListing::from_value(data.clone()),
        };
        match listing {
            Ok(listing) => {
                let outcome = self.listing_completed(page, &listing);
                if let Some(cell) = status_cell {
                    badge::mark_completed(cell, self.text.as_ref());
                }
                PollOutcome::Done(outcome)
            }
            Err(e) => {
                warn!(error = %e, "finished task returned an unusable result");
                let reason = self.text.resolve(keys::TASK_FAILED).into_owned();
                self.request_failed(page, &reason);
                PollOutcome::Failed
            }
        }
    }

    fn failure_text(&self, data: &Value) -> String {
        match data {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Null | Value::String(_) => self.text.resolve(keys::TASK_FAILED).into_owned(),
            other => other.to_string(),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
