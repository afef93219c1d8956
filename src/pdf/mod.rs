//! PDF decoding layer
//!
//! Thin wrapper over PDFium that turns a document into positioned text
//! blocks. Everything downstream of this module is pure.

mod reader;

pub use reader::{PdfReader, TextBlock};
