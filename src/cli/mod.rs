//! Line-oriented text menu over the project and task services.
//!
//! The menu collects primitive inputs, calls exactly one service or updater
//! operation per action, and prints the outcome. Errors are printed and the
//! loop continues; only I/O failure or end of input stops it.

mod error;
mod menu;
mod services;


pub use error::MenuError;
pub use menu::Menu;
pub use services::Services;
