//! Loading indicator and trigger control, toggled as one pair.
//!
//! The indicator is visible exactly when the trigger is disabled. Callers
//! use [`ProgressController::show`] when a request starts and
//! [`ProgressController::hide`] when its response arrives. There is no
//! toggle.

use crate::dom::Element;

const DISABLED: &str = "disabled";

/// Observed state of an indicator / control pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressPair {
    /// Whether the loading indicator is displayed
    pub indicator_visible: bool,
    /// Whether the trigger accepts input
    pub control_enabled: bool,
}

impl ProgressPair {
    /// Whether the pair is complementary.
    pub fn is_consistent(self) -> bool {
        self.indicator_visible != self.control_enabled
    }
}

/// Drives a loading indicator and the control that triggered the request.
#[derive(Debug)]
pub struct ProgressController<'a> {
    indicator: &'a mut Element,
    control: &'a mut Element,
}

impl<'a> ProgressController<'a> {
    /// Bind an indicator to its control.
    pub fn new(indicator: &'a mut Element, control: &'a mut Element) -> Self {
        Self { indicator, control }
    }

    /// Request outstanding: show the indicator, disable the control.
    pub fn show(&mut self) {
        self.indicator.show();
        self.control.set_attr(DISABLED, DISABLED);
    }

    /// Request settled: hide the indicator, re-enable the control.
    pub fn hide(&mut self) {
        self.indicator.hide();
        self.control.remove_attr(DISABLED);
    }

    /// Current state of the pair.
    pub fn state(&self) -> ProgressPair {
        ProgressPair {
            indicator_visible: self.indicator.is_visible(),
            control_enabled: !self.control.has_attr(DISABLED),
        }
    }
}
