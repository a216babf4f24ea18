//! # godb-parser
//!
//! Line-oriented parsing of OBO ontology files.
//!
//! Two layers:
//! - **Stanza parsing** ([`stanza`]): splits raw lines into one
//!   [`StanzaRecord`] per `[Term]` block, lazily and in a single pass. Header
//!   lines before the first stanza are captured into an [`OboHeader`].
//! - **Tag normalization** ([`normalize`]): interprets `def`, `synonym`,
//!   `is_a`, `relationship` and `alt_id` values into typed pieces.
//!
//! Malformed lines never fail the parse; only I/O errors do.
//!
//! # Examples
//!
//! ```
//! use godb_parser::parse_str;
//!
//! let text = "format-version: 1.2\n\n[Term]\nid: GO:0000001\nis_a: GO:0000002 ! parent\n";
//! let mut stanzas = parse_str(text);
//! let record = stanzas.next().unwrap().unwrap();
//! assert_eq!(record.id(), Some("GO:0000001"));
//! assert_eq!(record.is_a(), ["GO:0000002"]);
//! assert_eq!(stanzas.header().format_version(), Some("1.2"));
//! ```

pub mod error;
mod line;
pub mod normalize;
mod quoted;
pub mod stanza;
pub mod tag;

pub use error::ParserError;
pub use normalize::{
    ParsedSynonym, normalize_definition, parse_alt_id, parse_is_a, parse_relationship,
    parse_synonym,
};
pub use stanza::{OboHeader, StanzaRecord, Stanzas, open, parse_str, read_stanzas};
pub use tag::{MultiTag, ScalarTag, Tag};
