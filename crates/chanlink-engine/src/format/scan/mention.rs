/// Channel mention syntax with owned delimiter constant.
///
/// The sigil and the word-boundary rule live here; the scanner never
/// hardcodes `~`.
pub struct ChannelMention;

impl ChannelMention {
    /// The tilde sigil that introduces a channel mention.
    pub const SIGIL: u8 = b'~';

    /// True when a mention may open after the given preceding byte.
    ///
    /// A sigil in the middle of a word (`foo~bar`, `2~3`) is literal text,
    /// so word bytes (ASCII letters, digits, underscore) block an opening.
    /// `None` means start of input, which always opens.
    pub fn opens_after(prev: Option<u8>) -> bool {
        !prev.is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
    }
}

/// The set of characters legal inside a channel name.
///
/// ASCII letters and digits are always included; `punctuation` holds the
/// additional bytes allowed. The default is hyphen, underscore and period,
/// the conventional channel-name alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameAlphabet {
    punctuation: Vec<u8>,
}

impl Default for NameAlphabet {
    fn default() -> Self {
        Self {
            punctuation: vec![b'-', b'_', b'.'],
        }
    }
}

impl NameAlphabet {
    /// An alphabet allowing the given punctuation bytes alongside ASCII
    /// letters and digits.
    pub fn with_punctuation(punctuation: impl Into<Vec<u8>>) -> Self {
        Self {
            punctuation: punctuation.into(),
        }
    }

    /// True if `byte` may appear in a channel name.
    pub fn contains(&self, byte: u8) -> bool {
        byte.is_ascii_alphanumeric() || self.punctuation.contains(&byte)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_at_start_of_input() {
        assert!(ChannelMention::opens_after(None));
    }

    #[test]
    fn opens_after_whitespace_and_punctuation() {
        assert!(ChannelMention::opens_after(Some(b' ')));
        assert!(ChannelMention::opens_after(Some(b'(')));
        assert!(ChannelMention::opens_after(Some(b'-')));
        assert!(ChannelMention::opens_after(Some(b'.')));
        assert!(ChannelMention::opens_after(Some(b'~')));
    }

    #[test]
    fn word_bytes_block_an_opening() {
        assert!(!ChannelMention::opens_after(Some(b'a')));
        assert!(!ChannelMention::opens_after(Some(b'Z')));
        assert!(!ChannelMention::opens_after(Some(b'0')));
        assert!(!ChannelMention::opens_after(Some(b'_')));
    }

    #[test]
    fn multibyte_continuation_bytes_do_not_block() {
        // The trailing byte of a multibyte character is never ASCII.
        assert!(ChannelMention::opens_after(Some(0xA9)));
    }

    #[test]
    fn default_alphabet_covers_conventional_names() {
        let alphabet = NameAlphabet::default();
        for byte in [b'a', b'z', b'A', b'Z', b'0', b'9', b'-', b'_', b'.'] {
            assert!(alphabet.contains(byte), "{:?} should be legal", byte as char);
        }
        for byte in [b' ', b'!', b',', b'~', b'/', 0xC3] {
            assert!(!alphabet.contains(byte), "{byte:#x} should not be legal");
        }
    }

    #[test]
    fn custom_alphabet_narrows_punctuation() {
        let alphabet = NameAlphabet::with_punctuation(vec![b'-']);
        assert!(alphabet.contains(b'-'));
        assert!(!alphabet.contains(b'.'));
        assert!(!alphabet.contains(b'_'));
    }
}
