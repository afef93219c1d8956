//! Field extraction pipeline
//!
//! Three passes over the decoded pages: blocks → reading-order sequence →
//! label/value association → normalized record. The whole pipeline is pure;
//! all I/O stays in the caller.

pub mod associate;
pub mod fields;
pub mod normalize;
pub mod sequence;

pub use associate::associate;
pub use normalize::{normalize, reformat_date};
pub use sequence::reading_order;

use crate::pdf::TextBlock;
use crate::record::ExtractedRecord;

/// Run the full extraction pipeline over decoded page blocks.
pub fn extract_record(pages: &[Vec<TextBlock>]) -> ExtractedRecord {
    let texts = reading_order(pages);
    tracing::debug!(blocks = texts.len(), sequence = ?texts, "reading-order sequence");

    let mut record = associate(&texts);
    normalize(&mut record);
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(top: f32, left: f32, text: &str) -> TextBlock {
        TextBlock {
            top,
            left,
            text: text.to_string(),
        }
    }

    #[test]
    fn zero_blocks_yield_all_empty_record() {
        assert_eq!(extract_record(&[]), ExtractedRecord::default());
        assert_eq!(extract_record(&[Vec::new()]), ExtractedRecord::default());
    }

    #[test]
    fn pipeline_sequences_associates_and_normalizes() {
        // Deliberately out of visual order; the sequencer restores it
        let page = vec![
            block(300.0, 40.0, "29/09/2023"),
            block(100.0, 40.0, "Name of the company"),
            block(120.0, 40.0, "ABC Pvt Ltd"),
            block(280.0, 40.0, "Date of appointment"),
        ];
        let record = extract_record(&[page]);
        assert_eq!(record.company_name, "ABC Pvt Ltd");
        assert_eq!(record.appointment_date, "2023-09-29");
    }
}
