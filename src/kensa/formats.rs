//! Output formats for parsed query trees
//!
//! Every format implements [Formatter] and is looked up by name through [FormatRegistry].
//!
//!     json      The `{ name, children }` shape tree visualizations consume (pretty printed).
//!     yaml      Same structure as json, for reading by eye.
//!     treeviz   One line per node, nesting drawn with box characters.

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
