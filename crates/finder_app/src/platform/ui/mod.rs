//! Terminal form: focus and key handling, the algorithm picker, and rendering.

pub mod form;
pub mod picker;
pub mod render;
