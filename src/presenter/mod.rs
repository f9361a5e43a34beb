//! Presentation adapter between the form signals and the widgets

mod binding;
mod view;

pub use binding::*;
pub use view::*;
