use crate::io::configuration::IMAGE_MARKER;
use crate::puzzle::resolved::Resolved;
use std::borrow::Cow;
use std::fmt;

/// One input of a rebus resolution
///
/// Either literal text, possibly marked as an image reference, or the
/// result of an earlier resolution used as a building block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    /// Literal letters or an image reference
    Literal {
        /// Text with the image marker removed
        text: String,
        /// Whether the text was written with the image marker
        image_marked: bool,
    },
    /// Word produced by an earlier resolution
    Resolved(Resolved),
}

impl Operand {
    /// Build a literal operand, recognising a leading image marker
    pub fn literal(raw: &str) -> Self {
        match raw.strip_prefix(IMAGE_MARKER) {
            Some(text) => Self::Literal {
                text: text.to_string(),
                image_marked: true,
            },
            None => Self::Literal {
                text: raw.to_string(),
                image_marked: false,
            },
        }
    }

    /// Build an image-marked operand from an unmarked name
    pub fn image(name: &str) -> Self {
        Self::Literal {
            text: name.to_string(),
            image_marked: true,
        }
    }

    /// Letters this operand contributes, without marker
    pub fn letters(&self) -> &str {
        match self {
            Self::Literal { text, .. } => text,
            Self::Resolved(resolved) => resolved.word(),
        }
    }

    /// Identifier used for image lexicon lookups
    ///
    /// Literals are keyed exactly as written, marker included.
    /// Resolved values are never image identifiers.
    pub fn lexicon_key(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Literal {
                text,
                image_marked: true,
            } => Some(Cow::Owned(format!("{IMAGE_MARKER}{text}"))),
            Self::Literal {
                text,
                image_marked: false,
            } => Some(Cow::Borrowed(text)),
            Self::Resolved(_) => None,
        }
    }

    /// Check for an empty literal
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Literal { text, .. } => text.is_empty(),
            Self::Resolved(_) => false,
        }
    }

    /// Check if the operand was written as an image reference
    pub const fn is_image_marked(&self) -> bool {
        matches!(
            self,
            Self::Literal {
                image_marked: true,
                ..
            }
        )
    }
}

impl Default for Operand {
    fn default() -> Self {
        Self::Literal {
            text: String::new(),
            image_marked: false,
        }
    }
}

impl From<&str> for Operand {
    fn from(raw: &str) -> Self {
        Self::literal(raw)
    }
}

impl From<String> for Operand {
    fn from(raw: String) -> Self {
        Self::literal(&raw)
    }
}

impl From<Resolved> for Operand {
    fn from(resolved: Resolved) -> Self {
        Self::Resolved(resolved)
    }
}

impl From<&Resolved> for Operand {
    fn from(resolved: &Resolved) -> Self {
        Self::Resolved(resolved.clone())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal {
                text,
                image_marked: true,
            } => write!(f, "{IMAGE_MARKER}{text}"),
            Self::Literal { text, .. } => f.write_str(text),
            Self::Resolved(resolved) => write!(f, "{resolved}"),
        }
    }
}
