/// Single-open accordion: opening one entry closes the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// Enter and Space activate a focused toggle button.
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_entry_open() {
        let mut faq = Accordion::default();
        faq.toggle(1);
        assert!(faq.is_open(1));
        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));
        faq.toggle(3);
        assert!(!faq.is_open(3));
    }

    #[test]
    fn keyboard_activation() {
        assert!(is_toggle_key("Enter"));
        assert!(is_toggle_key(" "));
        assert!(!is_toggle_key("Tab"));
    }
}
