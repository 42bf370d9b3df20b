//! Error rendering
//!
//! Rendering is two writes per failed field: the error classes go on the field
//! itself, and the joined messages go into the element whose `pluto-input`
//! attribute points at the field (`pluto-input="#<id>"`). Error state is only
//! ever added, never cleared.

use crate::result::ErrorMap;

/// Attribute that links a display region to the field it reports on
pub const DISPLAY_ATTRIBUTE: &str = "pluto-input";

/// Selector of the display region for a field
pub fn display_selector(field_id: &str) -> String {
    format!("[{}=\"#{}\"]", DISPLAY_ATTRIBUTE, field_id)
}

/// The write side of the document
pub trait ErrorSurface {
    /// Add classes to the element with this id; false if there is no such element
    fn add_classes(&self, field_id: &str, classes: &[String]) -> bool;

    /// Replace the text of the field's display region; false if there is none
    fn set_display_text(&self, field_id: &str, text: &str) -> bool;
}

/// Render every entry of the map, returning how many fields were found
///
/// Entries whose field or display region is missing are skipped.
pub fn render_errors<S: ErrorSurface + ?Sized>(
    errors: &ErrorMap,
    classes: &[String],
    surface: &S,
) -> usize {
    let mut rendered = 0;

    for (field_id, messages) in errors.iter() {
        if surface.add_classes(field_id, classes) {
            rendered += 1;
        }
        surface.set_display_text(field_id, &messages.join("\n"));
    }

    rendered
}
