//! Heuristic classification of raw dialogue lines.
//!
//! Scene dialogue arrives as freeform text: blank lines separate beats,
//! short all-caps lines name speakers, parenthesized lines are stage
//! direction, everything else is spoken dialogue. There is no grammar; the
//! predicates below encode the positional/typographic conventions as
//! observed, including their known edge cases (a cue longer than 34
//! characters or containing a numeral, like "AGENT 47", falls through to
//! dialogue body).

/// Category of a dialogue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueKind {
    /// All-caps line naming the speaker of the following dialogue
    CharacterCue,
    /// Stage-direction fragment wrapped in parentheses
    Parenthetical,
    /// Spoken dialogue (the safe default for anything ambiguous)
    DialogueBody,
}

/// Character-cue window: at least 2 and at most 34 characters.
const CUE_LEN: std::ops::RangeInclusive<usize> = 2..=34;

/// Whether a trimmed line reads as a character cue.
///
/// Fully uppercase, no parenthesis, no digit, and short enough to be a name
/// rather than an all-caps action line.
pub fn is_character_cue(line: &str) -> bool {
    line.to_uppercase() == line
        && !line.contains('(')
        && !line.chars().any(|c| c.is_ascii_digit())
        && CUE_LEN.contains(&line.chars().count())
}

/// Whether a trimmed line is a parenthetical.
pub fn is_parenthetical(line: &str) -> bool {
    line.starts_with('(') && line.ends_with(')')
}

/// Classify one trimmed dialogue line.
///
/// Pure and total: arbitrary text never fails, it classifies as
/// [`CueKind::DialogueBody`].
pub fn classify(line: &str) -> CueKind {
    if is_character_cue(line) {
        CueKind::CharacterCue
    } else if is_parenthetical(line) {
        CueKind::Parenthetical
    } else {
        CueKind::DialogueBody
    }
}

/// One classified line of dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    pub kind: CueKind,
    pub text: &'a str,
}

/// Split a dialogue block into classified lines.
///
/// Lines are trimmed and blank lines dropped before classification.
pub fn classify_dialogue(dialogue: &str) -> Vec<ClassifiedLine<'_>> {
    dialogue
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| ClassifiedLine {
            kind: classify(line),
            text: line,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_all_caps_names_are_cues() {
        assert_eq!(classify("JANE"), CueKind::CharacterCue);
        assert_eq!(classify("DETECTIVE MACK"), CueKind::CharacterCue);
    }

    #[test]
    fn parenthesized_lines_are_parentheticals() {
        assert_eq!(classify("(smiling)"), CueKind::Parenthetical);
        assert_eq!(classify("(beat)"), CueKind::Parenthetical);
    }

    #[test]
    fn prose_is_dialogue_body() {
        assert_eq!(classify("It is now."), CueKind::DialogueBody);
    }

    #[test]
    fn long_all_caps_action_lines_are_not_cues() {
        let action = "A LONG ALL CAPS ACTION LINE DESCRIBING THE ROOM IN DETAIL";
        assert!(action.chars().count() > 34);
        assert_eq!(classify(action), CueKind::DialogueBody);
    }

    #[test]
    fn cue_length_window_is_inclusive_at_34() {
        let at_34 = "A".repeat(34);
        let at_35 = "A".repeat(35);
        assert_eq!(classify(&at_34), CueKind::CharacterCue);
        assert_eq!(classify(&at_35), CueKind::DialogueBody);
    }

    #[test]
    fn single_character_is_not_a_cue() {
        assert_eq!(classify("A"), CueKind::DialogueBody);
        assert_eq!(classify("AB"), CueKind::CharacterCue);
    }

    #[test]
    fn digits_disqualify_a_cue() {
        // Known heuristic limitation: numbered names read as dialogue.
        assert_eq!(classify("AGENT 47"), CueKind::DialogueBody);
    }

    #[test]
    fn parenthesis_disqualifies_a_cue() {
        assert_eq!(classify("JANE (CONT'D)"), CueKind::DialogueBody);
    }

    #[test]
    fn classification_is_stable() {
        let text = "JANE\n(smiling)\nIt is now.";
        let first = classify_dialogue(text);
        let second = classify_dialogue(text);
        assert_eq!(first, second);
    }

    #[test]
    fn blank_lines_are_dropped_and_lines_trimmed() {
        let lines = classify_dialogue("  JANE  \n\n   \nHello there.\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "JANE");
        assert_eq!(lines[0].kind, CueKind::CharacterCue);
        assert_eq!(lines[1].kind, CueKind::DialogueBody);
    }
}
