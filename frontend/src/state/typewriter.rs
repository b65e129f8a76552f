pub const TYPE_MS: u32 = 100;
pub const DELETE_MS: u32 = 50;
pub const WORD_PAUSE_MS: u32 = 2_000;

/// Types a word one character at a time, holds it, deletes it, moves on.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<String>,
    word: usize,
    chars: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            word: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advances one character and returns the text to show plus the delay
    /// before the next tick.
    pub fn tick(&mut self) -> (String, u32) {
        let Some(current) = self.words.get(self.word) else {
            return (String::new(), WORD_PAUSE_MS);
        };
        let len = current.chars().count();

        if self.deleting {
            self.chars = self.chars.saturating_sub(1);
        } else {
            self.chars = (self.chars + 1).min(len);
        }
        let text: String = current.chars().take(self.chars).collect();

        let mut delay = if self.deleting { DELETE_MS } else { TYPE_MS };
        if !self.deleting && self.chars == len {
            delay = WORD_PAUSE_MS;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.word = (self.word + 1) % self.words.len();
        }
        (text, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_pauses_deletes_and_moves_on() {
        let mut tw = Typewriter::new(["ab", "c"]);
        assert_eq!(tw.tick(), ("a".to_string(), TYPE_MS));
        assert_eq!(tw.tick(), ("ab".to_string(), WORD_PAUSE_MS));
        assert_eq!(tw.tick(), ("a".to_string(), DELETE_MS));
        assert_eq!(tw.tick(), ("".to_string(), DELETE_MS));
        assert_eq!(tw.tick(), ("c".to_string(), WORD_PAUSE_MS));
        assert_eq!(tw.tick(), ("".to_string(), DELETE_MS));
        assert_eq!(tw.tick(), ("a".to_string(), TYPE_MS));
    }

    #[test]
    fn no_words_is_inert() {
        let mut tw = Typewriter::new(Vec::<String>::new());
        assert_eq!(tw.tick(), (String::new(), WORD_PAUSE_MS));
    }
}
