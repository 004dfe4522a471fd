//! Screenplay page layout.
//!
//! Flows a script onto fixed-size pages in a millimetre coordinate system
//! (210x297, top-left origin, y grows downward). The layout stage is pure:
//! it produces positioned, font-tagged text lines; PDF bytes come later.
//!
//! Pagination measures actual wrapped line counts — a long dialogue line
//! wraps to several physical lines and advances the cursor accordingly.

use crate::classify::{ClassifiedLine, CueKind, classify_dialogue};
use storycraft_core::Script;

/// Page width in layout units (mm).
pub const PAGE_WIDTH: f32 = 210.0;
/// Page height in layout units (mm).
pub const PAGE_HEIGHT: f32 = 297.0;
/// Outer margin on all sides.
pub const MARGIN: f32 = 20.0;
/// Usable width for full-width blocks.
pub const CONTENT_WIDTH: f32 = 170.0;

/// Body font size in points.
pub const BODY_SIZE: f32 = 12.0;
/// Title-page title size in points.
pub const TITLE_SIZE: f32 = 24.0;
/// Title-page attribution size in points.
pub const ATTRIBUTION_SIZE: f32 = 14.0;

/// Safety band reserved before a scene header, so headers never end a page.
const HEADER_SAFETY: f32 = MARGIN * 3.0;
/// Fixed spacing after a scene's content, before the next header.
const SCENE_GAP: f32 = 15.0;
/// Spacing after the header and description blocks.
const BLOCK_GAP: f32 = 5.0;
/// Extra lead above a character cue, separating speakers visually.
const CUE_LEAD: f32 = 4.0;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Font faces the layout can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Courier,
    CourierBold,
    TimesRoman,
    TimesBold,
}

impl FontFace {
    /// Average glyph advance as a fraction of the font size.
    ///
    /// Courier is genuinely monospace at 0.6 em; the Times figure is an
    /// approximation used only for centering on the title page.
    fn width_factor(self) -> f32 {
        match self {
            FontFace::Courier | FontFace::CourierBold => 0.6,
            FontFace::TimesRoman | FontFace::TimesBold => 0.5,
        }
    }
}

/// Vertical advance per wrapped line, in layout units.
pub fn line_advance(size: f32) -> f32 {
    size * 0.4
}

/// Glyph advance for the face at the given size, in layout units.
pub fn char_width(face: FontFace, size: f32) -> f32 {
    size * face.width_factor() * MM_PER_PT
}

/// Horizontal alignment of a placed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `x` is the left edge
    Left,
    /// `x` is the center of the line
    Center,
}

/// One positioned line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub face: FontFace,
    pub align: Align,
}

/// One laid-out page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

/// The paginated document, ready for binary export.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutDocument {
    pub pages: Vec<Page>,
}

/// Wrap text to the given width with greedy word wrapping.
///
/// Embedded newlines force breaks; words longer than a full line are
/// hard-broken. Wholly blank text produces no lines at all.
pub fn wrap_text(text: &str, max_width: f32, face: FontFace, size: f32) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let columns = (max_width / char_width(face, size)).floor().max(1.0) as usize;
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        wrap_segment(segment, columns, &mut lines);
    }
    lines
}

fn wrap_segment(segment: &str, columns: usize, lines: &mut Vec<String>) {
    if segment.trim().is_empty() {
        // Preserve intentional blank lines inside a block.
        lines.push(String::new());
        return;
    }
    let mut current = String::new();
    for word in segment.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();
        if !current.is_empty() && current_len + 1 + word_len <= columns {
            current.push(' ');
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if word_len <= columns {
            current.push_str(word);
        } else {
            // Hard-break an overlong word into full-width chunks.
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(columns) {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current = chunk.iter().collect();
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
}

/// Column assignment for a classified dialogue line: left edge, wrap width,
/// and extra lead above the block.
fn column(kind: CueKind) -> (f32, f32, f32) {
    match kind {
        CueKind::CharacterCue => (80.0, 100.0, CUE_LEAD),
        CueKind::Parenthetical => (65.0, 80.0, 0.0),
        CueKind::DialogueBody => (50.0, 110.0, 0.0),
    }
}

struct Cursor {
    pages: Vec<Page>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: MARGIN,
        }
    }

    fn page_break(&mut self) {
        self.pages.push(Page::default());
        self.y = MARGIN;
    }

    /// Block-level overflow check: start a new page when the cursor plus
    /// the caller's safety band would run past the bottom.
    fn ensure_room(&mut self, safety: f32) {
        if self.y > PAGE_HEIGHT - safety {
            self.page_break();
        }
    }

    fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Place an absolutely positioned line, bypassing the cursor.
    fn place_fixed(&mut self, text: &str, x: f32, y: f32, face: FontFace, size: f32, align: Align) {
        self.pages
            .last_mut()
            .expect("cursor always holds a page")
            .lines
            .push(TextLine {
                text: text.to_string(),
                x,
                y,
                size,
                face,
                align,
            });
    }

    /// Wrap and flow a block at the cursor, breaking mid-block when a
    /// wrapped line would land past the bottom margin.
    fn place_block(&mut self, text: &str, x: f32, width: f32, face: FontFace, size: f32) {
        for line in wrap_text(text, width, face, size) {
            if self.y > PAGE_HEIGHT - MARGIN {
                self.page_break();
            }
            self.place_fixed(&line, x, self.y, face, size, Align::Left);
            self.advance(line_advance(size));
        }
    }
}

/// Flow a script onto pages: title page first, then scene content.
pub fn lay_out_script(script: &Script) -> LaidOutDocument {
    let mut cursor = Cursor::new();

    cursor.place_fixed(
        script.title(),
        PAGE_WIDTH / 2.0,
        120.0,
        FontFace::TimesBold,
        TITLE_SIZE,
        Align::Center,
    );
    if !script.author().trim().is_empty() {
        cursor.place_fixed(
            &format!("By {}", script.author()),
            PAGE_WIDTH / 2.0,
            130.0,
            FontFace::TimesRoman,
            ATTRIBUTION_SIZE,
            Align::Center,
        );
    }
    cursor.page_break();

    for scene in script.scenes() {
        let header = format!(
            "{}. {} - {}",
            scene.scene_number(),
            scene.location().to_uppercase(),
            scene.time_of_day().to_uppercase()
        );
        cursor.ensure_room(HEADER_SAFETY);
        cursor.place_block(&header, MARGIN, CONTENT_WIDTH, FontFace::CourierBold, BODY_SIZE);
        cursor.advance(BLOCK_GAP);

        cursor.ensure_room(MARGIN);
        cursor.place_block(
            scene.description(),
            MARGIN,
            CONTENT_WIDTH,
            FontFace::Courier,
            BODY_SIZE,
        );
        cursor.advance(BLOCK_GAP);

        for ClassifiedLine { kind, text } in classify_dialogue(scene.dialogue()) {
            let (x, width, lead) = column(kind);
            cursor.ensure_room(MARGIN);
            cursor.advance(lead);
            cursor.place_block(text, x, width, FontFace::Courier, BODY_SIZE);
        }

        cursor.advance(SCENE_GAP);
    }

    LaidOutDocument {
        pages: cursor.pages,
    }
}
