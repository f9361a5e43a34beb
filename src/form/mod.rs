//! Sign-up form inputs, validation rules and the signal graph tying them together

mod formatter;
mod input_state;
mod signup_form;
mod validators;

pub use formatter::*;
pub use input_state::*;
pub use signup_form::*;
pub use validators::*;
