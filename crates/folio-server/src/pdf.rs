//! Minimal single-page PDF writer using the base-14 Times faces.
//!
//! Output is plain PDF 1.4 with an uncompressed content stream. Nothing
//! time- or randomness-dependent is written, so identical drawing calls give
//! identical bytes.

use std::fmt::Write as _;

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Font {
    Roman,
    Bold,
    Italic,
}

impl Font {
    const ALL: [Font; 3] = [Font::Roman, Font::Bold, Font::Italic];

    fn resource(self) -> &'static str {
        match self {
            Font::Roman => "F1",
            Font::Bold => "F2",
            Font::Italic => "F3",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Font::Roman => "Times-Roman",
            Font::Bold => "Times-Bold",
            Font::Italic => "Times-Italic",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            Font::Roman => &TIMES_ROMAN,
            Font::Bold => &TIMES_BOLD,
            Font::Italic => &TIMES_ITALIC,
        }
    }

    /// Advance width of one WinAnsi byte in 1/1000 em.
    fn glyph_width(self, byte: u8) -> u16 {
        match byte {
            32..=126 => self.widths()[(byte - 32) as usize],
            0x95 => 350,             // bullet
            0x96 => 500,             // en dash
            0x97 => 1000,            // em dash
            0x91..=0x94 => 333,      // curly quotes
            _ => 500,
        }
    }
}

/// Width of `text` in points at `size`, with `spacing` extra points per glyph.
pub fn text_width(text: &str, font: Font, size: f32, spacing: f32) -> f32 {
    let bytes = encode(text);
    let units: u32 = bytes.iter().map(|&b| font.glyph_width(b) as u32).sum();
    units as f32 * size / 1000.0 + spacing * bytes.len() as f32
}

/// Map text to WinAnsiEncoding. Characters with no slot become `?`.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

fn escape_string(bytes: &[u8], out: &mut String) {
    out.push('(');
    for &b in bytes {
        match b {
            b'(' | b')' | b'\\' => {
                out.push('\\');
                out.push(b as char);
            }
            32..=126 => out.push(b as char),
            _ => {
                let _ = write!(out, "\\{:03o}", b);
            }
        }
    }
    out.push(')');
}

/// Fixed-precision number formatting so output never depends on float
/// printing quirks.
fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
struct LinkAnnotation {
    rect: [f32; 4],
    uri: String,
}

/// Drawing surface for one page. Coordinates are in points from the top-left
/// corner; conversion to PDF's bottom-left origin happens here.
#[derive(Clone, Debug, Default)]
pub struct Page {
    ops: String,
    links: Vec<LinkAnnotation>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw `text` with its baseline at `baseline_y` (from the top).
    pub fn text(&mut self, x: f32, baseline_y: f32, font: Font, size: f32, spacing: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        let y = PAGE_HEIGHT - baseline_y;
        let _ = write!(self.ops, "BT /{} {} Tf ", font.resource(), num(size));
        if spacing != 0.0 {
            let _ = write!(self.ops, "{} Tc ", num(spacing));
        }
        let _ = write!(self.ops, "1 0 0 1 {} {} Tm ", num(x), num(y));
        escape_string(&encode(text), &mut self.ops);
        self.ops.push_str(" Tj");
        if spacing != 0.0 {
            self.ops.push_str(" 0 Tc");
        }
        self.ops.push_str(" ET\n");
    }

    /// Horizontal rule at `y` (from the top).
    pub fn rule(&mut self, x0: f32, x1: f32, y: f32, thickness: f32) {
        let py = PAGE_HEIGHT - y;
        let _ = writeln!(
            self.ops,
            "{} w {} {} m {} {} l S",
            num(thickness),
            num(x0),
            num(py),
            num(x1),
            num(py)
        );
    }

    /// Clickable URI area. `top`/`bottom` are measured from the page top.
    pub fn link(&mut self, x0: f32, top: f32, x1: f32, bottom: f32, uri: &str) {
        self.links.push(LinkAnnotation {
            rect: [x0, PAGE_HEIGHT - bottom, x1, PAGE_HEIGHT - top],
            uri: uri.to_string(),
        });
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Serialize the page as a complete PDF file.
    pub fn finish(self) -> Vec<u8> {
        let mut w = ObjectWriter::new();

        // 1 catalog, 2 pages, 3 page, 4 content, 5..=7 fonts, then annotations
        let font_base = 5;
        let annot_base = font_base + Font::ALL.len();

        w.object(1, "<< /Type /Catalog /Pages 2 0 R >>".as_bytes());
        w.object(2, "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".as_bytes());

        let mut fonts = String::new();
        for (i, f) in Font::ALL.iter().enumerate() {
            let _ = write!(fonts, "/{} {} 0 R ", f.resource(), font_base + i);
        }
        let mut annots = String::new();
        if !self.links.is_empty() {
            annots.push_str(" /Annots [");
            for i in 0..self.links.len() {
                let _ = write!(annots, "{} 0 R ", annot_base + i);
            }
            annots.push(']');
        }
        let page = format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Resources << /Font << {}>> >> /Contents 4 0 R{} >>",
            num(PAGE_WIDTH),
            num(PAGE_HEIGHT),
            fonts,
            annots
        );
        w.object(3, page.as_bytes());

        let mut content = format!("<< /Length {} >>\nstream\n", self.ops.len()).into_bytes();
        content.extend_from_slice(self.ops.as_bytes());
        content.extend_from_slice(b"\nendstream");
        w.object(4, &content);

        for (i, f) in Font::ALL.iter().enumerate() {
            let body = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                f.base_font()
            );
            w.object(font_base + i, body.as_bytes());
        }

        for (i, link) in self.links.iter().enumerate() {
            let mut uri = String::new();
            escape_string(link.uri.as_bytes(), &mut uri);
            let [x0, y0, x1, y1] = link.rect;
            let body = format!(
                "<< /Type /Annot /Subtype /Link /Rect [{} {} {} {}] /Border [0 0 0] /A << /S /URI /URI {} >> >>",
                num(x0),
                num(y0),
                num(x1),
                num(y1),
                uri
            );
            w.object(annot_base + i, body.as_bytes());
        }

        w.finish(1)
    }
}

/// Appends numbered objects and builds the cross-reference table.
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut buf = Vec::with_capacity(16 * 1024);
        buf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    /// Objects must be written in order starting at 1.
    fn object(&mut self, id: usize, body: &[u8]) {
        debug_assert_eq!(id, self.offsets.len() + 1);
        self.offsets.push(self.buf.len());
        self.buf.extend_from_slice(format!("{} 0 obj\n", id).as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref = self.buf.len();
        let size = self.offsets.len() + 1;
        let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", size);
        for off in &self.offsets {
            let _ = write!(table, "{:010} 00000 n \n", off);
        }
        let _ = write!(
            table,
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, root, xref
        );
        self.buf.extend_from_slice(table.as_bytes());
        self.buf
    }
}

// Advance widths for ASCII 32..=126 from the standard Adobe metrics.
#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 333, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444,
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722,
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500,
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500,
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541,
];

#[rustfmt::skip]
const TIMES_BOLD: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 333, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[rustfmt::skip]
const TIMES_ITALIC: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 333, 333, 333, 500, 675, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 675, 675, 675, 500,
    920, 611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833, 667, 722,
    611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556, 389, 278, 389, 422, 500,
    333, 500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722, 500, 500,
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389, 400, 275, 400, 541,
];
