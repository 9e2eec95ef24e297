//! PDF text extraction.
//!
//! `pdf-extract` walks pages in document order and concatenates their text;
//! no page separator is inserted beyond what the document itself carries.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to parse PDF: {0}")]
    Parse(#[from] pdf_extract::OutputError),

    #[error("PDF contained no extractable text")]
    Empty,
}

/// Extracts the concatenated plain text of every page in `bytes`.
///
/// Never returns a partial result: a document that cannot be parsed is an
/// error, and one that parses to nothing but whitespace is `Empty` rather
/// than a blank prompt downstream.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)?;
    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a valid single-font PDF with one page per entry in `pages`,
    /// including a correct xref table so strict parsers accept it.
    fn minimal_pdf(pages: &[&str]) -> Vec<u8> {
        let n = pages.len();
        let font_obj = 3 + 2 * n;
        let mut objects: Vec<(usize, String)> = Vec::new();

        let kids = (0..n)
            .map(|i| format!("{} 0 R", 3 + 2 * i))
            .collect::<Vec<_>>()
            .join(" ");

        objects.push((1, "<< /Type /Catalog /Pages 2 0 R >>".to_string()));
        objects.push((2, format!("<< /Type /Pages /Kids [{kids}] /Count {n} >>")));

        for (i, text) in pages.iter().enumerate() {
            let page_obj = 3 + 2 * i;
            let content_obj = 4 + 2 * i;
            objects.push((
                page_obj,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                     /Resources << /Font << /F1 {font_obj} 0 R >> >> \
                     /Contents {content_obj} 0 R >>"
                ),
            ));
            let stream = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            objects.push((
                content_obj,
                format!("<< /Length {} >>\nstream\n{stream}\nendstream", stream.len()),
            ));
        }

        objects.push((
            font_obj,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ));

        let mut out = String::from("%PDF-1.4\n");
        let mut offsets = vec![0usize; objects.len() + 1];
        for (num, body) in &objects {
            offsets[*num] = out.len();
            out.push_str(&format!("{num} 0 obj\n{body}\nendobj\n"));
        }
        let xref_offset = out.len();
        out.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        out.push_str("0000000000 65535 f \n");
        for num in 1..=objects.len() {
            out.push_str(&format!("{:010} 00000 n \n", offsets[num]));
        }
        out.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF",
            objects.len() + 1
        ));
        out.into_bytes()
    }

    #[test]
    fn test_extracts_text_from_single_page() {
        let pdf = minimal_pdf(&["Hello World"]);
        let text = extract_text(&pdf).unwrap();
        assert!(text.contains("Hello World"), "got: {text:?}");
    }

    #[test]
    fn test_pages_concatenate_in_document_order() {
        let pdf = minimal_pdf(&["Alpha", "Beta"]);
        let text = extract_text(&pdf).unwrap();
        let first = text.find("Alpha").expect("first page text missing");
        let second = text.find("Beta").expect("second page text missing");
        assert!(first < second, "page order not preserved: {text:?}");
    }

    #[test]
    fn test_corrupt_bytes_return_parse_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_empty_input_is_an_error_not_empty_text() {
        assert!(extract_text(&[]).is_err());
    }

    #[test]
    fn test_parse_error_message_is_human_readable() {
        let err = extract_text(b"%PDF-garbage").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
