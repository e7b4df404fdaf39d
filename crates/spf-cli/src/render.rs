//! Payload replay and output formatting

use crate::{Cli, Commands, Format};
use anyhow::{Context, Result};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;
use crossterm::style::Stylize;
use spf_schema::{DownloadListing, SearchResult, Severity, TaskStatusResponse, UploadBatch};
use spf_view::text::keys;
use spf_view::{ChronoDateFormatter, Dispatcher, Element, MessageCatalog, Page, badge, message};
use std::fmt::Write;
use std::path::Path;
use tracing::info;

const SEARCH_HEADER: [&str; 4] = ["name", "version", "created", "download"];
const LISTING_HEADER: [&str; 3] = ["#", "package", "created"];
const UPLOAD_HEADER: [&str; 7] = ["package", "issn", "journal", "pid", "file", "version", "date"];

/// Replay the payload named by `cli` and return the rendered output.
///
/// # Errors
///
/// Fails if the catalog or payload cannot be read, the date pattern is
/// invalid, or the payload is not a JSON document.
pub fn run(cli: &Cli) -> Result<String> {
    let dispatcher = dispatcher(cli)?;
    let payload = read_payload(cli.command.payload())?;
    let mut page = Page::new();
    let mut status_cell = None;

    dispatcher.request_started(&mut page);
    match &cli.command {
        Commands::Search { .. } => {
            let result = SearchResult::from_json(&payload)?;
            dispatcher.search_completed(&mut page, &result);
        }
        Commands::Listing { .. } => {
            let listing = DownloadListing::from_json(&payload)?;
            let outcome = dispatcher.listing_completed(&mut page, &listing);
            info!(?outcome, "listing rendered");
        }
        Commands::Upload { .. } => {
            let batch = UploadBatch::from_json(&payload)?;
            let rows = dispatcher.upload_completed(&mut page, &batch);
            info!(rows, "upload rendered");
        }
        Commands::Status { .. } => {
            let response = TaskStatusResponse::from_json(&payload)?;
            let mut cell = badge::pending_cell(&dispatcher.text().resolve(keys::INITIATED));
            let outcome = dispatcher.task_polled(&mut page, &response, Some(&mut cell));
            info!(?outcome, status = %response.status, "task poll rendered");
            status_cell = Some(cell);
        }
    }

    Ok(match cli.format {
        Format::Html => html(&page, status_cell.as_ref()),
        Format::Text => text(&page, &cli.command, status_cell.as_ref()),
    })
}

fn dispatcher(cli: &Cli) -> Result<Dispatcher> {
    let dates = ChronoDateFormatter::new(&cli.date_format)?;
    let mut dispatcher = Dispatcher::new()
        .with_dates(dates)
        .with_journal_uri(&cli.journal_uri);
    if let Some(path) = &cli.catalog {
        dispatcher = dispatcher.with_text(MessageCatalog::load(path)?);
    }
    Ok(dispatcher)
}

fn read_payload(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload {}", path.display()))
}

fn html(page: &Page, status_cell: Option<&Element>) -> String {
    let mut out = page.to_html();
    if let Some(cell) = status_cell {
        let mut row = Element::new("tr");
        row.append(cell.clone());
        out.push_str(&row.to_html());
        out.push('\n');
    }
    out
}

fn text(page: &Page, command: &Commands, status_cell: Option<&Element>) -> String {
    let mut out = String::new();

    if page.indicator().is_visible() {
        let _ = writeln!(out, "{} {}", "●".red(), "waiting for the task to finish".dark_grey());
    }
    if let Some(cell) = status_cell {
        let label = cell.text_content();
        let styled = if badge::is_completed(cell) {
            label.green()
        } else {
            label.yellow()
        };
        let _ = writeln!(out, "status: {styled}");
    }
    for alert in page.messages.child_elements() {
        let _ = writeln!(out, "{}", notification_line(alert));
    }

    if page.results.is_visible() {
        let header: &[&str] = if matches!(command, Commands::Search { .. }) {
            &SEARCH_HEADER
        } else {
            &LISTING_HEADER
        };
        let _ = writeln!(out, "{}", table(header, &page.results_body));
    }
    if page.upload_results.is_visible() {
        let _ = writeln!(out, "{}", table(&UPLOAD_HEADER, &page.upload_body));
    }
    out
}

fn notification_line(alert: &Element) -> String {
    let body = alert.text_content();
    match message::severity_of(alert).unwrap_or_default() {
        Severity::Success => format!("{} {}", "✓".green(), body.green()),
        Severity::Warning => format!("{} {}", "⚠".yellow(), body.yellow()),
        Severity::Danger => format!("{} {}", "✗".red(), body.red()),
    }
}

fn table(header: &[&str], body: &Element) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header.to_vec());
    for row in body.child_elements() {
        table.add_row(row.child_elements().map(cell_text).collect::<Vec<_>>());
    }
    table
}

/// Cell text, with the link target appended for hyperlink cells.
fn cell_text(cell: &Element) -> String {
    let text = cell.text_content();
    match cell.child_elements().find_map(|a| a.attr("href")) {
        Some(href) => format!("{text} <{href}>"),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spf_view::table::link_cell;

    #[test]
    fn test_cell_text_shows_link_target() {
        assert_eq!(cell_text(&link_cell("pkgA", "/d/1")), "pkgA </d/1>");
        let mut plain = Element::new("td");
        plain.set_text("2023-01-01");
        assert_eq!(cell_text(&plain), "2023-01-01");
    }

    #[test]
    fn test_table_has_one_line_per_row() {
        let mut body = Element::new("tbody");
        for name in ["a", "b"] {
            let mut row = Element::new("tr");
            row.append(link_cell(name, "/x"));
            body.append(row);
        }
        let rendered = table(&["package"], &body).to_string();
        assert!(rendered.contains("a </x>"));
        assert!(rendered.contains("b </x>"));
    }
}
