//! spf-view - Response-to-view synchronization for the SPF package workflow
//!
//! The browser side of the package workflow receives resolved backend
//! responses and turns them into visible feedback: notifications, a
//! loading indicator, result tables and status badges. This crate holds
//! that logic, written against an in-memory element tree so it can run
//! (and be tested) without a live document.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Dispatcher  │  one entry point per completed request
//! └──────┬───────┘
//!        │ hides indicator, then renders
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │ ResultTable  │────▶│   message    │  notifications
//! │   Renderer   │     └──────────────┘
//! └──────┬───────┘
//!        │ writes into
//!        ▼
//! ┌──────────────┐
//! │     Page     │  named anchors (tables, messages, indicator, trigger)
//! └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`dom`] - Element tree and HTML serialization
//! - [`page`] - Anchor ids and view bindings
//! - [`message`] - Notification construction and dismissal
//! - [`progress`] - Indicator / trigger pair
//! - [`table`] - Search, download and upload tables
//! - [`badge`] - Status badge transitions
//! - [`text`] - Display-string resolution
//! - [`format`] - Timestamp formatting
//! - [`dispatch`] - Response routing and task polling
//!
//! # Example
//!
//! ```
//! use spf_schema::DownloadListing;
//! use spf_view::{Dispatcher, Page};
//!
//! let dispatcher = Dispatcher::new();
//! let mut page = Page::new();
//!
//! dispatcher.request_started(&mut page);
//! let listing = DownloadListing::from_json(
//!     r#"{"doc_pkgs":[{"name":"pkgA","uri":"/d/1","created":"2023-01-01"}],"errors":[]}"#,
//! )
//! .unwrap();
//! dispatcher.listing_completed(&mut page, &listing);
//!
//! assert!(page.results.is_visible());
//! assert!(page.progress().state().control_enabled);
//! ```

pub mod badge;
pub mod dispatch;
pub mod dom;
pub mod format;
pub mod message;
pub mod page;
pub mod progress;
pub mod table;
pub mod text;

// Re-exports
pub use dispatch::{Dispatcher, PollOutcome};
pub use dom::{Element, Node};
pub use format::{ChronoDateFormatter, DateFormatter, RawDates};
pub use page::{Page, TableBinding};
pub use progress::{ProgressController, ProgressPair};
pub use table::{ListingOutcome, ResultTableRenderer};
pub use text::{IdentityText, MessageCatalog, TextResolver};
