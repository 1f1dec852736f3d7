//! Form rendering module
//!
//! - `field_renderer`: one bordered input per field descriptor
//! - `form_panel`: the active form with progress and submit button

mod field_renderer;
mod form_panel;

pub use form_panel::draw_form;
