//! Core domain types for gly.
//!
//! This module contains the document model produced by the parser and
//! consumed read-only by the renderers:
//! - `Document` - ordered scores and markup blocks plus a document header
//! - `Score` - one movement: headers, lyric words and music chunks
//! - `Word` - a lyric word split into syllables
//! - `Markup` - verbatim free text carried between scores

mod document;
mod headers;
mod markup;
mod score;
mod word;

pub use document::{ConstructionError, Document, Unit};
pub use headers::Headers;
pub use markup::Markup;
pub use score::Score;
pub use word::Word;
