//! View Bindings - The named anchors the renderers write into
//!
//! The surrounding page exposes a fixed set of element ids. They are the
//! contract with the page markup and must stay exactly as they are.
//! [`Page`] owns one element per anchor and lends out disjoint bindings,
//! so each component receives exactly the handles it mutates.

use crate::dom::Element;
use crate::progress::ProgressController;

/// Anchor ids shared with the page markup.
pub mod ids {
    /// Notification container
    pub const MESSAGES: &str = "baseMessages";
    /// Button that issues the request
    pub const TRIGGER: &str = "btnSearchPackage";
    /// Loading indicator
    pub const LOADING: &str = "searchPackageLoading";
    /// Container around the search / download results table
    pub const RESULTS: &str = "resultSearchPackages";
    /// Body of the search / download results table
    pub const RESULTS_BODY: &str = "resultSearchPackagesTableBody";
    /// Container around the upload results table
    pub const UPLOAD_RESULTS: &str = "resultUploadPackages";
    /// Body of the upload results table
    pub const UPLOAD_RESULTS_BODY: &str = "resultUploadPackagesTableBody";
}

/// Handles one table renderer call needs.
#[derive(Debug)]
pub struct TableBinding<'a> {
    /// Container shown once the table has rows
    pub container: &'a mut Element,
    /// Table body rows are appended to
    pub body: &'a mut Element,
    /// Notification container
    pub messages: &'a mut Element,
}

/// Every anchor of the package page, in its initial state: tables hidden,
/// indicator hidden, trigger enabled.
///
/// The indicator and trigger are only reachable mutably through
/// [`Page::progress`], which changes them together.
#[derive(Debug, Clone)]
pub struct Page {
    /// Notification container
    pub messages: Element,
    trigger: Element,
    indicator: Element,
    /// Results container
    pub results: Element,
    /// Results table body
    pub results_body: Element,
    /// Upload results container
    pub upload_results: Element,
    /// Upload results table body
    pub upload_body: Element,
}

impl Page {
    /// Fresh page with every anchor in its initial state.
    pub fn new() -> Self {
        let mut spinner = Element::new("div")
            .with_classes(&["spinner-border", "text-primary"])
            .with_attr("role", "status");
        spinner.append(Element::new("span").with_classes(&["visually-hidden"]));

        let mut indicator = Element::new("div").with_id(ids::LOADING).hidden();
        indicator.append(spinner);

        let mut trigger = Element::new("button")
            .with_id(ids::TRIGGER)
            .with_classes(&["btn", "btn-primary"])
            .with_attr("type", "submit");
        trigger.set_text("Search");

        Self {
            messages: Element::new("div").with_id(ids::MESSAGES),
            trigger,
            indicator,
            results: Element::new("div").with_id(ids::RESULTS).hidden(),
            results_body: Element::new("tbody").with_id(ids::RESULTS_BODY),
            upload_results: Element::new("div").with_id(ids::UPLOAD_RESULTS).hidden(),
            upload_body: Element::new("tbody").with_id(ids::UPLOAD_RESULTS_BODY),
        }
    }

    /// Binding for the search / download results table.
    pub fn results(&mut self) -> TableBinding<'_> {
        TableBinding {
            container: &mut self.results,
            body: &mut self.results_body,
            messages: &mut self.messages,
        }
    }

    /// Binding for the upload results table.
    pub fn uploads(&mut self) -> TableBinding<'_> {
        TableBinding {
            container: &mut self.upload_results,
            body: &mut self.upload_body,
            messages: &mut self.messages,
        }
    }

    /// Request trigger button
    pub fn trigger(&self) -> &Element {
        &self.trigger
    }

    /// Loading indicator
    pub fn indicator(&self) -> &Element {
        &self.indicator
    }

    /// Controller for the indicator / trigger pair.
    pub fn progress(&mut self) -> ProgressController<'_> {
        ProgressController::new(&mut self.indicator, &mut self.trigger)
    }

    /// Serialize every anchor, nesting each table body inside its container.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for el in [&self.messages, &self.indicator, &self.trigger] {
            out.push_str(&el.to_html());
            out.push('\n');
        }
        for (container, body) in [
            (&self.results, &self.results_body),
            (&self.upload_results, &self.upload_body),
        ] {
            let mut table = Element::new("table").with_classes(&["table", "table-sm"]);
            table.append(body.clone());
            let mut wrapped = container.clone();
            wrapped.append(table);
            out.push_str(&wrapped.to_html());
            out.push('\n');
        }
        out
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
