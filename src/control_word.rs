/// The control words that introduce embedded font data.
/// The content of the group such a control word lives in is scanned as opaque data.
pub const KNOWN_CONTROL_WORDS: [&str; 4] = ["fname", "fontemb", "fontfile", "falt"];

/// Returns true if `word` is one of the [`KNOWN_CONTROL_WORDS`].
///
/// The `word` is the keyword of a control word without its leading backslash, parameter and
/// delimiter. The comparison is case-sensitive.
#[inline]
pub fn is_known(word: &str) -> bool {
    KNOWN_CONTROL_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_words() {
        for word in KNOWN_CONTROL_WORDS {
            assert!(is_known(word), "{word} should be known");
        }
    }

    #[test]
    fn test_unknown_words() {
        for word in ["fonttbl", "FNAME", "", "fontembx", "font", "f", "\\fontemb"] {
            assert!(!is_known(word), "{word:?} should not be known");
        }
    }
}
