//! Block Sequencer: page blocks to one reading-order text sequence

use crate::pdf::TextBlock;

/// Flatten per-page blocks into a single reading-order sequence of trimmed,
/// non-empty texts.
///
/// Each page is sorted by rounded `(top, left)`; rounding absorbs sub-pixel
/// vertical jitter between blocks on the same visual line. The sort is stable,
/// so blocks at identical rounded positions keep decoder emission order.
/// Pages contribute in page order; empty pages contribute nothing.
pub fn reading_order(pages: &[Vec<TextBlock>]) -> Vec<String> {
    let mut texts = Vec::new();

    for page in pages {
        let mut blocks: Vec<&TextBlock> = page.iter().collect();
        blocks.sort_by_key(|b| (b.top.round() as i64, b.left.round() as i64));

        for block in blocks {
            let trimmed = block.text.trim();
            if !trimmed.is_empty() {
                texts.push(trimmed.to_string());
            }
        }
    }

    texts
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
    fn sorts_top_to_bottom_then_left_to_right() {
        let page = vec![
            block(100.0, 50.0, "third"),
            block(10.0, 200.0, "second"),
            block(10.0, 20.0, "first"),
        ];
        assert_eq!(reading_order(&[page]), ["first", "second", "third"]);
    }

    #[test]
    fn rounding_merges_sub_pixel_jitter() {
        // 20.4 and 20.6 round to different rows; 20.4 and 19.8 both round to 20
        let page = vec![
            block(20.4, 300.0, "right"),
            block(19.8, 10.0, "left"),
        ];
        assert_eq!(reading_order(&[page]), ["left", "right"]);
    }

    #[test]
    fn identical_rounded_position_keeps_emission_order() {
        let page = vec![
            block(10.2, 30.1, "a"),
            block(9.9, 29.8, "b"),
        ];
        assert_eq!(reading_order(&[page]), ["a", "b"]);
    }

    #[test]
    fn drops_whitespace_only_blocks() {
        let page = vec![
            block(10.0, 10.0, "  \n\t "),
            block(20.0, 10.0, "  kept  "),
        ];
        assert_eq!(reading_order(&[page]), ["kept"]);
    }

    #[test]
    fn pages_concatenate_in_page_order() {
        let page1 = vec![block(500.0, 10.0, "page one")];
        let page2 = vec![block(10.0, 10.0, "page two")];
        assert_eq!(reading_order(&[page1, page2]), ["page one", "page two"]);
    }

    #[test]
    fn empty_pages_contribute_nothing() {
        let pages = vec![Vec::new(), vec![block(10.0, 10.0, "only")], Vec::new()];
        assert_eq!(reading_order(&pages), ["only"]);
    }

    #[test]
    fn no_pages_yields_empty_sequence() {
        assert!(reading_order(&[]).is_empty());
    }
}
