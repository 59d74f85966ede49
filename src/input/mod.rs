//! Input pipeline: file format detection and text extraction

pub mod extractor;

pub use extractor::{Extractor, FileFormat};
