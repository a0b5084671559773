//! gly - chant notation parser and gabc converter
//!
//! A library for reading gly, a lightweight line-oriented notation for
//! chant scores, into a structured document and converting it to gabc and
//! LaTeX previews.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod list;
pub mod output;
pub mod parser;
pub mod preview;
pub mod render;
pub mod types;

pub use discovery::{expand_paths, load_config, Config};
pub use error::{GlyError, Result};
pub use list::{ListFormat, Lister};
pub use parser::{Parser, DEFAULT_SYLLABLE_SEPARATOR};
pub use preview::{PreviewGenerator, PreviewOptions};
pub use render::{document_to_gly, score_to_gabc, DocumentGabcConvertor, GabcOptions};
pub use types::{ConstructionError, Document, Headers, Markup, Score, Unit, Word};
