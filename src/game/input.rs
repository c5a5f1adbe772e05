//! Key events the game understands

/// A key press routed to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// An ASCII letter, normalized to uppercase
    Letter(char),
    Backspace,
    Enter,
}

impl KeyInput {
    /// Map a single character; only ASCII letters are accepted
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self::Letter(ch.to_ascii_uppercase()))
    }

    /// Map a key name as produced by the on-screen keyboard
    /// (`"A"`..`"Z"`, `"Enter"`, `"Backspace"`)
    #[must_use]
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => Some(Self::Enter),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Self::from_char(ch),
                    _ => None,
                }
            }
        }
    }

    /// Keys that spell out `word`, optionally followed by `Enter`
    pub fn typed(word: &str, submit: bool) -> impl Iterator<Item = Self> + '_ {
        word.chars()
            .filter_map(Self::from_char)
            .chain(submit.then_some(Self::Enter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_uppercased() {
        assert_eq!(KeyInput::from_char('q'), Some(KeyInput::Letter('Q')));
        assert_eq!(KeyInput::from_key_name("z"), Some(KeyInput::Letter('Z')));
    }

    #[test]
    fn non_letters_rejected() {
        assert_eq!(KeyInput::from_char('1'), None);
        assert_eq!(KeyInput::from_char('é'), None);
        assert_eq!(KeyInput::from_key_name("Shift"), None);
        assert_eq!(KeyInput::from_key_name(""), None);
    }

    #[test]
    fn special_keys_by_name() {
        assert_eq!(KeyInput::from_key_name("Enter"), Some(KeyInput::Enter));
        assert_eq!(KeyInput::from_key_name("Backspace"), Some(KeyInput::Backspace));
    }

    #[test]
    fn typed_word_with_submit() {
        let keys: Vec<KeyInput> = KeyInput::typed("ab1", true).collect();
        assert_eq!(
            keys,
            [KeyInput::Letter('A'), KeyInput::Letter('B'), KeyInput::Enter]
        );
    }
}
