//! Renderers consuming parsed documents.

pub mod gabc;
pub mod gly;

pub use gabc::{score_to_gabc, DocumentGabcConvertor, GabcOptions};
pub use gly::document_to_gly;
