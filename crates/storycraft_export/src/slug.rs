//! Export file naming.

use storycraft_core::Script;

/// Collapse every whitespace run in a title to a single underscore.
pub fn slugify_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// Download name for a script's exported PDF.
pub fn export_file_name(script: &Script) -> String {
    format!("{}.pdf", slugify_title(script.title()))
}
