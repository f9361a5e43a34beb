//! Line-oriented front end for the sign-up form

mod app;
mod command;
mod view;

pub use app::*;
pub use command::*;
pub use view::*;
