//! Sentence segmentation and line reformatting.
//!
//! Both passes are deliberately naive: abbreviations, quotations and decimal
//! numbers are split like any other terminator.

use tracing::debug;

/// Characters that end a sentence for [`segment`].
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split `text` into sentences on `.`, `!` and `?`.
///
/// Terminators are dropped, runs of terminators never yield empty entries,
/// and any trailing unterminated text becomes the last sentence. Whitespace
/// inside a sentence is kept exactly as it appeared.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(segment("Hello. World!"), vec!["Hello", " World"]);
/// assert!(segment("...").is_empty());
/// ```
pub fn segment(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut sentence = String::new();

    for c in text.chars() {
        if TERMINATORS.contains(&c) {
            if !sentence.is_empty() {
                sentences.push(std::mem::take(&mut sentence));
            }
        } else {
            sentence.push(c);
        }
    }
    if !sentence.is_empty() {
        sentences.push(sentence);
    }

    debug!(count = sentences.len(), "Segmented text");
    sentences
}

/// Put every period-terminated sentence on its own line.
///
/// Each `.` becomes `". \n"` and the spaces or tabs that followed it are
/// absorbed by the line break. `!` and `?` are left alone.
pub fn reformat(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut after_period = false;

    for c in text.chars() {
        if after_period && (c == ' ' || c == '\t') {
            continue;
        }
        after_period = c == '.';
        if after_period {
            out.push_str(". \n");
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_two_sentences() {
        assert_eq!(segment("Hello. World!"), vec!["Hello", " World"]);
    }

    #[test]
    fn test_segment_without_terminator() {
        assert_eq!(segment("No terminator here"), vec!["No terminator here"]);
    }

    #[test]
    fn test_segment_only_terminators() {
        assert!(segment("...").is_empty());
        assert!(segment("?!.").is_empty());
    }

    #[test]
    fn test_segment_empty_input() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_segment_collapses_terminator_runs() {
        assert_eq!(segment("Wait?! Really... Yes."), vec!["Wait", " Really", " Yes"]);
    }

    #[test]
    fn test_segment_preserves_whitespace_and_newlines() {
        assert_eq!(
            segment("  First line\nstill first.\n\tSecond  "),
            vec!["  First line\nstill first", "\n\tSecond  "]
        );
    }

    #[test]
    fn test_segment_keeps_whitespace_only_spans_between_terminators() {
        // A buffer holding only a space is non-empty, so it is emitted.
        assert_eq!(segment("A. . B"), vec!["A", " ", " B"]);
    }

    #[test]
    fn test_segment_count_bounded_by_terminator_runs() {
        let samples = [
            "One. Two! Three?",
            "a..b..c",
            "no end",
            "!!!lead",
            "x.y.z.",
        ];
        for text in samples {
            let mut runs = 0;
            let mut in_run = false;
            for c in text.chars() {
                let is_term = TERMINATORS.contains(&c);
                if is_term && !in_run {
                    runs += 1;
                }
                in_run = is_term;
            }
            assert!(segment(text).len() <= runs + 1, "too many sentences for {text:?}");
        }
    }

    #[test]
    fn test_segment_handles_multibyte_text() {
        assert_eq!(segment("Café au lait. Ça va?"), vec!["Café au lait", " Ça va"]);
    }

    #[test]
    fn test_reformat_periods_only() {
        assert_eq!(reformat("A. B. C."), "A. \nB. \nC. \n");
    }

    #[test]
    fn test_reformat_ignores_other_terminators() {
        assert_eq!(reformat("Stop! Go? Now."), "Stop! Go? Now. \n");
    }

    #[test]
    fn test_reformat_keeps_existing_newlines() {
        assert_eq!(reformat("One.\nTwo"), "One. \n\nTwo");
    }

    #[test]
    fn test_reformat_empty() {
        assert_eq!(reformat(""), "");
    }
}
