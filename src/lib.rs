//! Source-file metadata for a static site generator.
//!
//! Each content file is a `key: value` header, a `---` line, then a body.
//! [`parse_source_file`] turns one file into a [`Metadata`] record, filling
//! in the output path and title from the filename when the header omits
//! them. Files named `YYYY-MM-DD-slug` are blog entries and land under a
//! dated path (`blog/2012/01/01/slug.html`). Records are gathered into an
//! [`Index`], which merges records sharing a basename.

pub mod collect;
pub mod config;
pub mod error;
pub mod index;
pub mod metadata;
pub mod naming;
pub mod parser;

pub use config::Config;
pub use error::{CollectError, ParseError};
pub use index::Index;
pub use metadata::Metadata;
pub use naming::{classify, deduce_title, BlogEntry, FileKind};
pub use parser::{parse_source, parse_source_file};
