//! Rule Catalog
//!
//! Static table of every checkable condition: its configuration key, the
//! category it belongs to (if any) and the default message.
//!
//! Rule identity travels in two forms:
//! - structured, as a [`RuleKey`] (built-in validators)
//! - textual, as a code like `"WARNING.INVALID_BUTTON_POSITION"` or
//!   `"blockNameIsRequired"` (supplemental linters, legacy config keys)
//!
//! [`RuleKey::from_code`] is the single place textual codes are turned
//! into catalog entries.

use std::fmt;

/// Configuration namespace grouping related rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleCategory {
    Warning,
    Text,
    Grid,
}

impl RuleCategory {
    pub const ALL: [RuleCategory; 3] = [RuleCategory::Warning, RuleCategory::Text, RuleCategory::Grid];

    /// Name used as the configuration key
    pub fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Warning => "warning",
            RuleCategory::Text => "text",
            RuleCategory::Grid => "grid",
        }
    }

    /// Case-insensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One checkable condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKey {
    BlockNameIsRequired,
    UppercaseNamesIsForbidden,
    InvalidButtonPosition,
    InvalidButtonSize,
    InvalidPlaceholderSize,
    TextSizesShouldBeEqual,
    InvalidH2Position,
    InvalidH3Position,
    SeveralH1,
    TooMuchMarketingBlocks,
}

impl RuleKey {
    pub const ALL: [RuleKey; 10] = [
        RuleKey::BlockNameIsRequired,
        RuleKey::UppercaseNamesIsForbidden,
        RuleKey::InvalidButtonPosition,
        RuleKey::InvalidButtonSize,
        RuleKey::InvalidPlaceholderSize,
        RuleKey::TextSizesShouldBeEqual,
        RuleKey::InvalidH2Position,
        RuleKey::InvalidH3Position,
        RuleKey::SeveralH1,
        RuleKey::TooMuchMarketingBlocks,
    ];

    /// Key inside the rule's configuration namespace
    pub fn as_str(self) -> &'static str {
        match self {
            RuleKey::BlockNameIsRequired => "blockNameIsRequired",
            RuleKey::UppercaseNamesIsForbidden => "uppercaseNamesIsForbidden",
            RuleKey::InvalidButtonPosition => "invalidButtonPosition",
            RuleKey::InvalidButtonSize => "invalidButtonSize",
            RuleKey::InvalidPlaceholderSize => "invalidPlaceholderSize",
            RuleKey::TextSizesShouldBeEqual => "textSizesShouldBeEqual",
            RuleKey::InvalidH2Position => "invalidH2Position",
            RuleKey::InvalidH3Position => "invalidH3Position",
            RuleKey::SeveralH1 => "severalH1",
            RuleKey::TooMuchMarketingBlocks => "tooMuchMarketingBlocks",
        }
    }

    /// `None` for flat rules configured at the top level
    pub fn category(self) -> Option<RuleCategory> {
        match self {
            RuleKey::BlockNameIsRequired | RuleKey::UppercaseNamesIsForbidden => None,
            RuleKey::InvalidButtonPosition
            | RuleKey::InvalidButtonSize
            | RuleKey::InvalidPlaceholderSize
            | RuleKey::TextSizesShouldBeEqual => Some(RuleCategory::Warning),
            RuleKey::InvalidH2Position | RuleKey::InvalidH3Position | RuleKey::SeveralH1 => {
                Some(RuleCategory::Text)
            }
            RuleKey::TooMuchMarketingBlocks => Some(RuleCategory::Grid),
        }
    }

    /// Message used when a problem carries no message of its own
    pub fn message(self) -> &'static str {
        match self {
            RuleKey::BlockNameIsRequired => "Field named 'block' is required!",
            RuleKey::UppercaseNamesIsForbidden => "Uppercase properties are forbidden!",
            RuleKey::InvalidButtonPosition => {
                "Button in a 'warning' block must not precede the placeholder"
            }
            RuleKey::InvalidButtonSize => {
                "Button in a 'warning' block must be one size larger than the text"
            }
            RuleKey::InvalidPlaceholderSize => {
                "Placeholder in a 'warning' block must be of size s, m or l"
            }
            RuleKey::TextSizesShouldBeEqual => {
                "All texts in a 'warning' block must have the same size"
            }
            RuleKey::InvalidH2Position => {
                "Second-level heading must not precede the first-level heading"
            }
            RuleKey::InvalidH3Position => {
                "Third-level heading must not precede a second-level heading"
            }
            RuleKey::SeveralH1 => "First-level heading must be unique on the page",
            RuleKey::TooMuchMarketingBlocks => {
                "Marketing blocks must not take more than half of the grid columns"
            }
        }
    }

    /// Stable identifier: `blockNameIsRequired` or `warning.invalidButtonPosition`
    pub fn identifier(self) -> String {
        match self.category() {
            Some(category) => format!("{}.{}", category, self.as_str()),
            None => self.as_str().to_string(),
        }
    }

    /// Find a rule by (category, key), tolerating any casing and `_`/`-`
    /// word separators in `key`
    pub fn find(category: Option<RuleCategory>, key: &str) -> Option<RuleKey> {
        let folded = fold_key(key);
        Self::ALL
            .into_iter()
            .find(|rule| rule.category() == category && fold_key(rule.as_str()) == folded)
    }

    /// Normalize a textual rule code into a catalog entry
    ///
    /// `"CATEGORY.KEY"` resolves inside the category, a code without a dot
    /// resolves among flat rules only. Anything unresolvable is `None`.
    pub fn from_code(code: &str) -> Option<RuleKey> {
        let code = code.trim();
        match code.split_once('.') {
            Some((category, key)) => Self::find(Some(RuleCategory::from_name(category)?), key),
            None => Self::find(None, code),
        }
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

/// Lower-case and drop word separators so `INVALID_H2_POSITION`,
/// `invalid-h2-position` and `invalidH2Position` compare equal
fn fold_key(key: &str) -> String {
    key.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
