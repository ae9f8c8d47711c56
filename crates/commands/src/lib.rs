//! Command surface over binding tags.
//!
//! * [`Session`] — `bind`, `bindtags`, `destroy`, and event delivery for one application
//! * [`parse_list`] / [`format_list`] — the list words `bindtags` reads and prints

pub mod error;
pub mod list;
pub mod session;

pub use error::{CommandError, Result};
pub use list::{ListError, format_list, parse_list};
pub use session::{BindRequest, CommandOutput, Session};
