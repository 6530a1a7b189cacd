// datacheck-core/src/infrastructure/adapters/pdf.rs

use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::path::Path;
use tracing::{debug, instrument};

use crate::domain::report::{ReportDocument, ReportElement};
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;
use crate::ports::document::DocumentWriter;

/// Courier glyphs are all 600/1000 em wide.
const COURIER_ADVANCE_EM: f32 = 0.6;
const MM_PER_PT: f32 = 25.4 / 72.0;

/// A4 portrait with a single monospaced font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
    /// Distance from the bottom edge below which no line may start.
    pub break_margin_mm: f32,
    pub font_size_pt: f32,
    pub line_height_mm: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_mm: 10.0,
            break_margin_mm: 20.0,
            font_size_pt: 12.0,
            line_height_mm: 10.0,
        }
    }
}

/// A line of text at its final position, `x` from the left edge and
/// `baseline` from the bottom edge (PDF user space).
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x_mm: f32,
    pub baseline_mm: f32,
}

impl PageGeometry {
    fn text_width_mm(&self, text: &str) -> f32 {
        text.chars().count() as f32 * COURIER_ADVANCE_EM * self.font_size_pt * MM_PER_PT
    }

    /// Flows the document top to bottom, opening a new page whenever the
    /// next line would cross the break margin.
    pub fn paginate(&self, document: &ReportDocument) -> Vec<Vec<PlacedLine>> {
        let mut pages = vec![Vec::new()];
        let mut cursor = self.margin_mm;
        let limit = self.height_mm - self.break_margin_mm;
        // Vertically centre the glyphs inside the line box
        let baseline_offset = self.line_height_mm / 2.0 + 0.3 * self.font_size_pt * MM_PER_PT;

        for element in &document.elements {
            let (text, centered) = match element {
                ReportElement::Gap(mm) => {
                    cursor += mm;
                    continue;
                }
                ReportElement::Title(t) => (t, true),
                ReportElement::Line(t) => (t, false),
            };

            if cursor + self.line_height_mm > limit {
                pages.push(Vec::new());
                cursor = self.margin_mm;
            }

            let x_mm = if centered {
                let usable = self.width_mm - 2.0 * self.margin_mm;
                self.margin_mm + ((usable - self.text_width_mm(text)) / 2.0).max(0.0)
            } else {
                self.margin_mm
            };

            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine {
                    text: text.clone(),
                    x_mm,
                    baseline_mm: self.height_mm - (cursor + baseline_offset),
                });
            }
            cursor += self.line_height_mm;
        }

        pages
    }
}

#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    geometry: PageGeometry,
}

impl PdfWriter {
    pub fn new(geometry: PageGeometry) -> Self {
        Self { geometry }
    }

    pub fn render_bytes(&self, document: &ReportDocument) -> Result<Vec<u8>, printpdf::Error> {
        let g = &self.geometry;
        let pages = g.paginate(document);

        let (doc, first_page, first_layer) =
            PdfDocument::new(&document.title, Mm(g.width_mm), Mm(g.height_mm), "Layer 1");
        let font = doc.add_builtin_font(BuiltinFont::Courier)?;

        for (i, lines) in pages.iter().enumerate() {
            let (page, layer) = if i == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(g.width_mm), Mm(g.height_mm), "Layer 1")
            };
            let layer = doc.get_page(page).get_layer(layer);
            for line in lines {
                layer.use_text(
                    line.text.clone(),
                    g.font_size_pt,
                    Mm(line.x_mm),
                    Mm(line.baseline_mm),
                    &font,
                );
            }
        }

        debug!(pages = pages.len(), "PDF laid out");
        doc.save_to_bytes()
    }
}

impl DocumentWriter for PdfWriter {
    #[instrument(skip(self, document), fields(path = %output_path.display()))]
    fn write(
        &self,
        document: &ReportDocument,
        output_path: &Path,
    ) -> Result<(), InfrastructureError> {
        let report_err = |reason: String| InfrastructureError::ReportWrite {
            path: output_path.to_path_buf(),
            reason,
        };

        let bytes = self
            .render_bytes(document)
            .map_err(|e| report_err(e.to_string()))?;
        atomic_write(output_path, bytes).map_err(|e| report_err(e.to_string()))
    }
}
