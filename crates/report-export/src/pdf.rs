use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use audit_core::{AuditError, AuditResult};
use printpdf::{BuiltinFont, Mm, PdfDocument};

// US Letter, text drawn top-to-bottom with fixed leading.
const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const MARGIN_MM: f32 = 14.0;
const LEADING_MM: f32 = 5.0;
const FONT_SIZE_PT: f32 = 11.0;

/// Lines per page under the fixed leading and margins.
fn lines_per_page() -> usize {
    ((PAGE_HEIGHT_MM - 2.0 * MARGIN_MM) / LEADING_MM) as usize
}

/// Split the summary into page-sized line chunks.
fn layout_pages(text: &str) -> Vec<Vec<&str>> {
    let capacity = lines_per_page().max(1);
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines.chunks(capacity).map(|chunk| chunk.to_vec()).collect()
}

/// Render the executive summary as a paginated PDF document.
pub fn write_summary_pdf(path: &Path, summary_text: &str) -> AuditResult<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        "Executive Summary",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AuditError::Export(e.to_string()))?;

    let pages = layout_pages(summary_text);
    for (i, page_lines) in pages.iter().enumerate() {
        let layer = if i == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
        for line in page_lines {
            layer.use_text(*line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
            y -= LEADING_MM;
        }
    }

    let file = File::create(path).map_err(|e| AuditError::Export(e.to_string()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AuditError::Export(e.to_string()))?;
    tracing::debug!(pages = pages.len(), path = %path.display(), "wrote summary pdf");
    Ok(())
}
