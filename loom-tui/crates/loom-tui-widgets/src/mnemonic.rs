//! Labels with an `&`-marked mnemonic character.

/// A label parsed from `&`-markup.
///
/// `&` marks the next character as the mnemonic and `&&` is a literal
/// ampersand. Only the first marker counts; later markers are dropped and
/// their character kept as plain text.
///
/// ```
/// use loom_tui_widgets::MnemonicLabel;
///
/// let label = MnemonicLabel::parse("Save &As...");
/// assert_eq!(label.raw(), "Save As...");
/// assert_eq!(label.shortcut(), Some('A'));
/// assert_eq!(label.shortcut_index(), Some(5));
///
/// let plain = MnemonicLabel::parse("Fish && Chips");
/// assert_eq!(plain.raw(), "Fish & Chips");
/// assert_eq!(plain.shortcut(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MnemonicLabel {
    raw: String,
    shortcut: Option<char>,
    /// Char position of the shortcut within `raw`.
    shortcut_index: Option<usize>,
}

impl MnemonicLabel {
    /// Parses `label`.
    pub fn parse(label: &str) -> Self {
        let mut raw = String::with_capacity(label.len());
        let mut shortcut = None;
        let mut shortcut_index = None;
        let mut position = 0;

        let mut chars = label.chars();
        while let Some(c) = chars.next() {
            if c == '&' {
                match chars.next() {
                    Some('&') => {
                        raw.push('&');
                        position += 1;
                    }
                    Some(marked) => {
                        if shortcut.is_none() {
                            shortcut = Some(marked);
                            shortcut_index = Some(position);
                        }
                        raw.push(marked);
                        position += 1;
                    }
                    // Trailing marker.
                    None => {}
                }
            } else {
                raw.push(c);
                position += 1;
            }
        }

        Self {
            raw,
            shortcut,
            shortcut_index,
        }
    }

    /// The label with markup removed.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Number of characters in the raw label.
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Returns true for an empty label.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The mnemonic character as written.
    pub fn shortcut(&self) -> Option<char> {
        self.shortcut
    }

    /// Char index of the mnemonic within [`MnemonicLabel::raw`].
    pub fn shortcut_index(&self) -> Option<usize> {
        self.shortcut_index
    }

    /// Returns true if `c` selects this label, ignoring ASCII case.
    pub fn matches(&self, c: char) -> bool {
        self.shortcut.is_some_and(|s| s.eq_ignore_ascii_case(&c))
    }
}

impl From<&str> for MnemonicLabel {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}
