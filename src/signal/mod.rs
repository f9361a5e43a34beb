//! Reactive primitives: current-value cells and their subscriptions

mod current_value;
mod subscription;

pub use current_value::*;
pub use subscription::*;
