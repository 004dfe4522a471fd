//! PDF rendering of a laid-out document.

use crate::layout::{
    Align, FontFace, LaidOutDocument, PAGE_HEIGHT, PAGE_WIDTH, char_width, lay_out_script,
};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use storycraft_core::Script;
use storycraft_error::{ExportError, ExportErrorKind, StorycraftResult};

struct Fonts {
    courier: IndirectFontRef,
    courier_bold: IndirectFontRef,
    times: IndirectFontRef,
    times_bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, face: FontFace) -> &IndirectFontRef {
        match face {
            FontFace::Courier => &self.courier,
            FontFace::CourierBold => &self.courier_bold,
            FontFace::TimesRoman => &self.times,
            FontFace::TimesBold => &self.times_bold,
        }
    }
}

fn render_err(e: printpdf::Error) -> ExportError {
    ExportError::new(ExportErrorKind::Render(e.to_string()))
}

/// Render a laid-out document into PDF bytes.
///
/// Layout uses a top-left origin; PDF puts the origin bottom-left, so `y`
/// flips here and nowhere else.
pub fn render_pdf(document: &LaidOutDocument, title: &str) -> StorycraftResult<Vec<u8>> {
    let (pdf, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");

    let fonts = Fonts {
        courier: pdf.add_builtin_font(BuiltinFont::Courier).map_err(render_err)?,
        courier_bold: pdf
            .add_builtin_font(BuiltinFont::CourierBold)
            .map_err(render_err)?,
        times: pdf
            .add_builtin_font(BuiltinFont::TimesRoman)
            .map_err(render_err)?,
        times_bold: pdf
            .add_builtin_font(BuiltinFont::TimesBold)
            .map_err(render_err)?,
    };

    let mut page_refs = vec![(first_page, first_layer)];
    for _ in 1..document.pages.len() {
        page_refs.push(pdf.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content"));
    }

    for (page, (page_index, layer_index)) in document.pages.iter().zip(page_refs) {
        let layer = pdf.get_page(page_index).get_layer(layer_index);
        for line in &page.lines {
            if line.text.is_empty() {
                continue;
            }
            let x = match line.align {
                Align::Left => line.x,
                Align::Center => {
                    let width = line.text.chars().count() as f32 * char_width(line.face, line.size);
                    line.x - width / 2.0
                }
            };
            layer.use_text(
                line.text.clone(),
                line.size,
                Mm(x),
                Mm(PAGE_HEIGHT - line.y),
                fonts.get(line.face),
            );
        }
    }

    Ok(pdf.save_to_bytes().map_err(render_err)?)
}

/// Lay out and render a script in one step.
pub fn export_script(script: &Script) -> StorycraftResult<Vec<u8>> {
    let document = lay_out_script(script);
    tracing::debug!(
        title = %script.title(),
        pages = document.pages.len(),
        "Rendering screenplay PDF"
    );
    render_pdf(&document, script.title())
}
