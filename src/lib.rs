//! # Propfile
//!
//! A Rust parser and layout-preserving editor for line-oriented `.properties`
//! configuration files.
//!
//! The format is the familiar flat key-value convention: `key = value` lines,
//! `#`/`!` comments, and values continued across physical lines with a
//! trailing backslash. This crate parses a source into both a flat map for
//! lookups and an ordered line model for writing, so a file can be loaded,
//! edited, and saved back with its comments and untouched lines intact.
//!
//! ## Features
//!
//! - **Layout preservation**: comments, plain lines, and untouched properties
//!   keep their shape when the file is written back
//! - **Multi-line values**: trailing-backslash continuations are joined with
//!   single spaces, and unmutated entries keep their multi-line shape
//! - **Escape-aware splitting**: `\=` keeps an equals sign inside a key, and
//!   `\\` at end of line means a literal backslash rather than a continuation
//! - **Typed accessors**: int, float, bool, and comma-separated list coercion
//!   on read
//! - **Change notifications**: listeners observe every add and update, in
//!   mutation order
//! - **JSON import/export** (optional): the flat map as a JSON object
//!
//! ## Optional Features
//!
//! ### `json` Feature
//!
//! Enable the `json` feature to convert between the flat map and JSON:
//!
//! ```toml
//! [dependencies]
//! propfile = { version = "0.1.0", features = ["json"] }
//! ```
//!
//! This provides [`Properties::to_json`] and [`Properties::from_json`].
//!
//! ## Example
//!
//! ```rust
//! use propfile::Properties;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut props = Properties::new();
//! props.parse("# server settings\nhost = example.com\nport = 8080\nflags = a, b, c\n");
//!
//! assert_eq!(props.get("host"), Some("example.com"));
//! assert_eq!(props.get_int("port")?, 8080);
//! assert_eq!(props.get_list("flags")?, vec!["a", "b", "c"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Editing and writing back
//!
//! Updates keep their line in place; new keys append at the end. Everything
//! else renders exactly as it was read:
//!
//! ```rust
//! use propfile::Properties;
//!
//! let mut props = Properties::new();
//! props.parse("# retries\nattempts = 3\n");
//!
//! props.set("attempts", "5");
//! props.set("backoff", "250");
//!
//! assert_eq!(props.serialize(), "# retries\nattempts = 5\n\nbackoff = 250\n");
//! ```
//!
//! ## Watching changes
//!
//! ```rust
//! use propfile::{Properties, PropertyEvent};
//!
//! let mut props = Properties::new();
//! props.on_change_fn("audit", |event| {
//!     if let PropertyEvent::Added { key, .. } = event {
//!         println!("added {key}");
//!     }
//! });
//! props.set("greeting", "hello");
//! ```

// Module declarations
mod coerce;
mod document;
mod error;
mod events;
mod line;
mod parser;
mod scanner;
mod store;

// Feature-gated modules
#[cfg(feature = "json")]
mod json;

// Public API exports
pub use coerce::{parse_bool, parse_float, parse_int, parse_list};
pub use document::PropertyDocument;
pub use error::{ParseResult, PropertiesError};
pub use events::{FunctionListener, Listener, ListenerSet, PropertyEvent};
pub use line::Line;
pub use parser::PropertiesParser;
pub use store::Properties;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
