//! Dialogue classification and screenplay PDF layout.
//!
//! Raw scene dialogue carries no structure; [`classify`] recovers character
//! cues, parentheticals, and dialogue lines heuristically, and the layout
//! engine flows them onto paginated pages with screenplay-standard columns.
//! [`export_script`] renders the result to PDF bytes.

mod classify;
mod layout;
mod pdf;
mod slug;

pub use classify::{ClassifiedLine, CueKind, classify, classify_dialogue, is_character_cue, is_parenthetical};
pub use layout::{
    Align, BODY_SIZE, CONTENT_WIDTH, FontFace, LaidOutDocument, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
    Page, TextLine, char_width, lay_out_script, line_advance, wrap_text,
};
pub use pdf::{export_script, render_pdf};
pub use slug::{export_file_name, slugify_title};
