//! PDF reader wrapper for PDFium

use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use std::path::Path;

/// A positioned text fragment, as emitted by the PDF layout decoder.
///
/// `top` and `left` are offsets in points from the page's top-left corner, so
/// ascending `top` runs down the page. Immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub top: f32,
    pub left: f32,
    pub text: String,
}

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// PDF reader using PDFium
///
/// Decodes the whole document upfront into per-page block lists.
pub struct PdfReader {
    page_count: u32,
    pages: Vec<Vec<TextBlock>>,
}

impl PdfReader {
    /// Open a PDF from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::PdfNotFound {
                path: path.display().to_string(),
            });
        }

        let data = std::fs::read(path)?;
        Self::open_bytes(&data)
    }

    /// Open a PDF from bytes
    pub fn open_bytes(data: &[u8]) -> Result<Self> {
        // Validate the header before touching PDFium so malformed input fails
        // loudly even where no PDFium library is installed
        if data.len() < 4 || &data[0..4] != b"%PDF" {
            return Err(Error::InvalidPdf {
                reason: "Not a valid PDF file".to_string(),
            });
        }

        let pdfium = create_pdfium()?;

        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| Error::Pdfium {
                reason: format!("{}", e),
            })?;

        let pages = Self::extract_all_page_blocks(&document)?;

        Ok(Self {
            page_count: document.pages().len() as u32,
            pages,
        })
    }

    /// Get the number of pages
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Per-page text blocks, in page order
    pub fn pages(&self) -> &[Vec<TextBlock>] {
        &self.pages
    }

    /// Consume the reader, keeping only the decoded blocks
    pub fn into_pages(self) -> Vec<Vec<TextBlock>> {
        self.pages
    }

    fn extract_all_page_blocks(document: &PdfDocument) -> Result<Vec<Vec<TextBlock>>> {
        let doc_pages = document.pages();
        let mut pages = Vec::with_capacity(doc_pages.len() as usize);

        for index in 0..doc_pages.len() {
            let page = doc_pages.get(index).map_err(|e| Error::Pdfium {
                reason: format!("Failed to get page {}: {}", index + 1, e),
            })?;

            pages.push(Self::extract_page_blocks(&page));
        }

        Ok(pages)
    }

    /// Extract one page's text as positioned line blocks.
    ///
    /// PDFium reports character positions with the origin at the bottom-left;
    /// blocks are flipped to top-left offsets so ascending `top` is reading
    /// order.
    fn extract_page_blocks(page: &PdfPage) -> Vec<TextBlock> {
        let text_obj = match page.text() {
            Ok(t) => t,
            Err(_) => return Vec::new(),
        };

        let page_height = page.height().value;

        // Collect all characters with top-left-origin positions
        let mut chars_with_pos: Vec<(char, f32, f32)> = Vec::new();

        for segment in text_obj.segments().iter() {
            if let Ok(chars) = segment.chars() {
                for char_result in chars.iter() {
                    if let Some(c) = char_result.unicode_char() {
                        if let Ok(bounds) = char_result.loose_bounds() {
                            let left = bounds.left().value;
                            let top = page_height - bounds.top().value;
                            chars_with_pos.push((c, left, top));
                        }
                    }
                }
            }
        }

        if chars_with_pos.is_empty() {
            return Vec::new();
        }

        // Sort by top ascending, then left ascending
        chars_with_pos.sort_by(|a, b| {
            let top_cmp = a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal);
            if top_cmp == std::cmp::Ordering::Equal {
                a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal)
            } else {
                top_cmp
            }
        });

        // Group into line blocks by vertical proximity.
        // Tolerance of ~5 points accounts for slight variations within a line
        const TOP_TOLERANCE: f32 = 5.0;

        let mut lines: Vec<(f32, Vec<(char, f32)>)> = Vec::new();
        let mut current_line: Vec<(char, f32)> = Vec::new();
        let mut current_top: Option<f32> = None;

        for (c, left, top) in chars_with_pos {
            match current_top {
                Some(cur) if (cur - top).abs() <= TOP_TOLERANCE => {
                    current_line.push((c, left));
                }
                _ => {
                    if let Some(cur) = current_top {
                        lines.push((cur, std::mem::take(&mut current_line)));
                    }
                    current_line = vec![(c, left)];
                    current_top = Some(top);
                }
            }
        }
        if let Some(cur) = current_top {
            lines.push((cur, current_line));
        }

        // Each line becomes one block: chars joined left to right, with a
        // space inserted across word-sized gaps
        const SPACE_THRESHOLD: f32 = 10.0;

        let mut blocks = Vec::with_capacity(lines.len());
        for (top, mut line) in lines {
            line.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            let left = line.first().map(|(_, x)| *x).unwrap_or(0.0);
            let mut text = String::with_capacity(line.len());
            let mut prev_x: Option<f32> = None;

            for (c, x) in line {
                if let Some(px) = prev_x {
                    if x - px > SPACE_THRESHOLD && c != ' ' {
                        text.push(' ');
                    }
                }
                text.push(c);
                prev_x = Some(x);
            }

            blocks.push(TextBlock { top, left, text });
        }

        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Error paths below fail before PDFium initialization, so they run
    // without a PDFium library installed

    #[test]
    fn open_missing_file_fails_loudly() {
        let result = PdfReader::open("/nonexistent/path/form.pdf");
        assert!(matches!(result, Err(Error::PdfNotFound { .. })));
    }

    #[test]
    fn open_bytes_rejects_non_pdf_data() {
        let result = PdfReader::open_bytes(b"Hello World");
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }

    #[test]
    fn open_bytes_rejects_truncated_header() {
        let result = PdfReader::open_bytes(b"%P");
        assert!(matches!(result, Err(Error::InvalidPdf { .. })));
    }
}
