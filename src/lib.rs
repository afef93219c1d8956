//! ADT-1 field extractor library
//!
//! This crate extracts structured auditor-appointment data from MCA Form
//! ADT-1 PDFs:
//! - `pdf`: decode the document into positioned text blocks (PDFium)
//! - `extract`: sequence blocks, associate label/value pairs, normalize dates
//! - `summary`: optional natural-language summary via a chat-completions call

pub mod config;
pub mod error;
pub mod extract;
pub mod pdf;
pub mod record;
pub mod summary;

pub use config::{RunConfig, SummaryConfig};
pub use error::{Error, Result};
pub use extract::extract_record;
pub use pdf::{PdfReader, TextBlock};
pub use record::ExtractedRecord;
pub use summary::Summarizer;
