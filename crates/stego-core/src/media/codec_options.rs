use std::fmt::{self, Debug, Formatter};

use crate::scrambler::{KeyedScrambler, LinearScrambler, Scramblers};

/// Codec configuration for hiding and unveiling
#[derive(Debug, Default, Clone)]
pub struct CodecOptions {
    /// The order in which color channels receive the bits of the frame.
    /// Both sides must agree on it, otherwise no frame is found.
    pub traversal: Traversal,
}

impl CodecOptions {
    /// options that walk the image in a password keyed order
    pub fn keyed<S: Into<String>>(password: S) -> Self {
        Self {
            traversal: Traversal::Keyed(password.into()),
        }
    }

    /// A fresh scrambler for one hide or unveil run
    pub fn scrambler(&self) -> Scramblers {
        match &self.traversal {
            Traversal::Linear => LinearScrambler::new().into(),
            Traversal::Keyed(password) => KeyedScrambler::new(password).into(),
        }
    }
}

#[derive(Default, Clone, PartialEq, Eq)]
pub enum Traversal {
    /// row by row, R, G and B of every pixel
    #[default]
    Linear,
    /// pseudo random order derived from a password
    Keyed(String),
}

impl Debug for Traversal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::Linear => write!(f, "Linear"),
            Traversal::Keyed(password) => write!(f, "Keyed({})", "*".repeat(password.len())),
        }
    }
}

impl From<Option<String>> for Traversal {
    fn from(password: Option<String>) -> Self {
        match password {
            Some(password) if !password.is_empty() => Traversal::Keyed(password),
            _ => Traversal::Linear,
        }
    }
}
