//! Result Tables - Materialize response payloads as table rows
//!
//! Three response shapes feed the tables:
//!
//! - **Search**: one package, one row, one success notification.
//! - **Download listing**: one row per candidate, or one danger
//!   notification per backend error when there are no candidates.
//! - **Upload**: one row per ingested article file.
//!
//! A table container is shown only when its response has at least one
//! item. Rows are appended in payload order; nothing is reordered or
//! deduplicated.

use crate::dom::Element;
use crate::format::DateFormatter;
use crate::message;
use crate::page::TableBinding;
use crate::text::{TextResolver, keys};
use spf_schema::{ArticleFile, DownloadListing, SearchResult, Severity, UploadBatch};
use tracing::{debug, warn};

/// Label of the download link in a search row
pub const DOWNLOAD_LABEL: &str = "ZIP";

/// Path segment between a journal and an article PID
pub const ARTICLE_SEGMENT: &str = "/a/";

/// Cell with an anchor opening `uri` in a new browsing context.
pub fn link_cell(text: &str, uri: &str) -> Element {
    let mut link = Element::new("a")
        .with_classes(&["link"])
        .with_attr("href", uri)
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener");
    link.set_text(text);

    let mut cell = Element::new("td");
    cell.append(link);
    cell
}

/// Cell with plain text.
pub fn text_cell(text: &str) -> Element {
    let mut cell = Element::new("td");
    cell.set_text(text);
    cell
}

/// Journal page: base URI followed by the acronym.
pub fn journal_link(journal_uri: &str, acron: &str) -> String {
    format!("{journal_uri}{acron}")
}

/// Article page: journal page, fixed segment, PID.
pub fn article_link(journal_uri: &str, acron: &str, pid: &str) -> String {
    format!("{journal_uri}{acron}{ARTICLE_SEGMENT}{pid}")
}

/// What a download listing turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOutcome {
    /// The table was shown with this many rows
    Rows(usize),
    /// No candidates; this many error notifications were appended
    Errors(usize),
}

/// Renders response payloads into table bindings.
pub struct ResultTableRenderer<'a> {
    text: &'a dyn TextResolver,
    dates: &'a dyn DateFormatter,
}

impl std::fmt::Debug for ResultTableRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultTableRenderer").finish_non_exhaustive()
    }
}

impl<'a> ResultTableRenderer<'a> {
    /// Create a renderer resolving labels through `text` and formatting
    /// timestamps through `dates`.
    pub fn new(text: &'a dyn TextResolver, dates: &'a dyn DateFormatter) -> Self {
        Self { text, dates }
    }

    /// Append the searched package as one row and replace any earlier
    /// notifications with a single success message.
    pub fn render_search(&self, view: &mut TableBinding<'_>, result: &SearchResult) {
        view.messages.clear();

        let mut row = Element::new("tr");
        row.append(text_cell(&result.name));
        row.append(text_cell(&result.version));
        row.append(text_cell(&self.dates.format(&result.created)));
        row.append(link_cell(DOWNLOAD_LABEL, &result.uri));
        view.body.append(row);
        view.container.show();

        let text = self.text.resolve(keys::PACKAGE_GENERATED);
        view.messages
            .append(message::create_message(&text, Severity::Success));
        debug!(name = %result.name, version = %result.version, "rendered search result");
    }

    /// Render a download listing: candidates as numbered rows, or the
    /// backend errors as notifications when there are none. Never both.
    pub fn render_listing(
        &self,
        view: &mut TableBinding<'_>,
        listing: &DownloadListing,
    ) -> ListingOutcome {
        if listing.doc_pkgs.is_empty() {
            let count = message::append_errors(view.messages, &listing.errors);
            if count > 0 {
                warn!(count, "no download candidates, surfaced backend errors");
            }
            return ListingOutcome::Errors(count);
        }

        view.container.show();
        for (ordinal, pkg) in (1..).zip(&listing.doc_pkgs) {
            let mut row = Element::new("tr");
            row.append(text_cell(&ordinal.to_string()));
            row.append(link_cell(&pkg.name, &pkg.uri));
            row.append(text_cell(&pkg.created));
            view.body.append(row);
        }
        debug!(rows = listing.doc_pkgs.len(), "rendered download listing");
        ListingOutcome::Rows(listing.doc_pkgs.len())
    }

    /// Render one row per article file of an upload batch. Returns the
    /// number of rows appended.
    pub fn render_upload(
        &self,
        view: &mut TableBinding<'_>,
        batch: &UploadBatch,
        journal_uri: &str,
    ) -> usize {
        if batch.article_files.is_empty() {
            debug!(package = %batch.package_file, "upload reported no article files");
            return 0;
        }

        view.container.show();
        let datetime = self.dates.format(&batch.datetime);
        for file in &batch.article_files {
            view.body
                .append(upload_row(&batch.package_file, file, journal_uri, &datetime));
        }
        debug!(
            rows = batch.article_files.len(),
            package = %batch.package_file,
            "rendered upload batch"
        );
        batch.article_files.len()
    }
}

fn upload_row(package_file: &str, file: &ArticleFile, journal_uri: &str, datetime: &str) -> Element {
    let mut row = Element::new("tr");
    row.append(text_cell(package_file));
    row.append(text_cell(&file.issn));
    row.append(link_cell(&file.acron, &journal_link(journal_uri, &file.acron)));
    row.append(link_cell(
        &file.pid,
        &article_link(journal_uri, &file.acron, &file.pid),
    ));
    row.append(link_cell(&file.file.name, &file.file.uri));
    row.append(text_cell(&file.version));
    row.append(text_cell(datetime));
    row
}
