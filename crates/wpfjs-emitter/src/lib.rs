//! Code-behind to JavaScript lowering engine.
//!
//! Takes a read-only syntax tree of a UI code-behind file plus the list of
//! named visual nodes in its markup, and writes an equivalent JavaScript
//! module built from nested closures:
//!
//! ```javascript
//! (function(App){
//!     var slider;
//!     document.addEventListener('DOMContentLoaded', function(){ ... }, false);
//!     (function(Main){
//!         Main.Main = function() { ... };
//!         Main.Tick = function(x) { ... };
//!     })(App.Main = App.Main || {});
//!     App.Main.Main();
//! })(window.App = window.App || {});
//! ```
//!
//! The walk is a single depth-first pass writing straight into the caller's
//! sink. Scope depth travels down the recursion as an immutable
//! [`EmitContext`] value.

pub mod context;
pub use context::EmitContext;

pub mod error;
pub use error::EmitError;

pub mod node_names;
pub use node_names::NodeNameList;

pub mod options;
pub use options::EmitOptions;

pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod emitter;
pub use emitter::{Emitter, UNSUPPORTED_MARKER, emit_to_string};

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod context_tests;
#[cfg(test)]
#[path = "tests/source_writer_tests.rs"]
mod source_writer_tests;
#[cfg(test)]
#[path = "tests/node_names_tests.rs"]
mod node_names_tests;
