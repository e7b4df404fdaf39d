//! Status badges for long-running items.
//!
//! A tracked item starts with a warning-colored badge and moves once, to
//! the success-colored "Completed" badge. There is no way back.

use crate::dom::Element;
use crate::text::{TextResolver, keys};

/// Class of a badge still in progress
pub const PENDING_CLASS: &str = "bg-warning";
/// Class of a badge in its terminal state
pub const COMPLETED_CLASS: &str = "bg-success";

/// Status cell for an item that has not finished yet.
pub fn pending_cell(label: &str) -> Element {
    let mut cell = Element::new("td").with_classes(&["badge", PENDING_CLASS]);
    cell.set_text(label);
    cell
}

/// Move a status cell to its terminal state. Applying it again changes
/// nothing.
pub fn mark_completed(cell: &mut Element, text: &dyn TextResolver) {
    cell.set_text(text.resolve(keys::COMPLETED));
    cell.remove_class(PENDING_CLASS);
    cell.add_class(COMPLETED_CLASS);
}

/// Whether the cell already shows the terminal state
pub fn is_completed(cell: &Element) -> bool {
    cell.has_class(COMPLETED_CLASS) && !cell.has_class(PENDING_CLASS)
}
