//! Auto-detect versus explicit format selection.
//!
//! Every tool accepts input in one of several notations. In [`SelectionMode::Auto`]
//! the selector re-runs the classifier whenever the input changes; in
//! [`SelectionMode::Manual`] the user's choice is frozen and input changes do not
//! reclassify. Switching back to Auto immediately reclassifies the current input.

/// Which side of the auto/manual control the selector is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode<F> {
    Auto,
    Manual(F),
}

/// Two-state format selector shared by every tool.
#[derive(Debug, Clone)]
pub struct FormatSelector<F: Copy> {
    mode: SelectionMode<F>,
    detected: Option<F>,
}

impl<F: Copy> Default for FormatSelector<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Copy> FormatSelector<F> {
    /// Starts in Auto with nothing detected.
    pub fn new() -> Self {
        Self {
            mode: SelectionMode::Auto,
            detected: None,
        }
    }

    /// Starts in Manual with a fixed format, or Auto when `format` is `None`.
    pub fn from_choice(format: Option<F>) -> Self {
        match format {
            Some(f) => Self {
                mode: SelectionMode::Manual(f),
                detected: None,
            },
            None => Self::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode<F> {
        self.mode
    }

    pub fn is_auto(&self) -> bool {
        matches!(self.mode, SelectionMode::Auto)
    }

    /// The format currently in effect.
    pub fn current(&self) -> Option<F> {
        match self.mode {
            SelectionMode::Auto => self.detected,
            SelectionMode::Manual(f) => Some(f),
        }
    }

    /// Feed new input. Reclassifies only in Auto mode.
    pub fn on_input<C>(&mut self, text: &str, classify: C) -> Option<F>
    where
        C: FnOnce(&str) -> Option<F>,
    {
        if self.is_auto() {
            self.detected = classify(text);
        }
        self.current()
    }

    /// Freeze the selection to a user-chosen format.
    pub fn choose(&mut self, format: F) {
        self.mode = SelectionMode::Manual(format);
    }

    /// Return to Auto and reclassify `text` straight away.
    pub fn set_auto<C>(&mut self, text: &str, classify: C) -> Option<F>
    where
        C: FnOnce(&str) -> Option<F>,
    {
        self.mode = SelectionMode::Auto;
        self.detected = classify(text);
        self.detected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Option<u8> {
        text.parse().ok()
    }

    #[test]
    fn test_auto_reclassifies_on_input() {
        let mut selector = FormatSelector::new();
        assert_eq!(selector.on_input("3", classify), Some(3));
        assert_eq!(selector.on_input("7", classify), Some(7));
        assert_eq!(selector.on_input("x", classify), None);
    }

    #[test]
    fn test_manual_ignores_input() {
        let mut selector = FormatSelector::new();
        selector.choose(1u8);
        assert_eq!(selector.on_input("9", classify), Some(1));
        assert_eq!(selector.mode(), SelectionMode::Manual(1));
    }

    #[test]
    fn test_switch_to_auto_reclassifies_immediately() {
        let mut selector = FormatSelector::from_choice(Some(1u8));
        assert_eq!(selector.on_input("5", classify), Some(1));
        assert_eq!(selector.set_auto("5", classify), Some(5));
        assert!(selector.is_auto());
        assert_eq!(selector.current(), Some(5));
    }
}
