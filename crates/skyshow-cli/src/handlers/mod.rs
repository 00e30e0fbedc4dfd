//! Command handlers for the Skyshow CLI

mod completions;
mod inspect;
mod validate;

pub use completions::handle_completions;
pub use inspect::handle_inspect;
pub use validate::handle_validate;
