use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Token;

/// Words sampled by the generator when no vocabulary is configured.
pub const DEFAULT_WORDS: &[&str] = &[
    "the", "walrus", "said", "to", "talk", "of", "many", "things", "time", "has", "come",
];

/// Fixed, ordered candidate set for the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    words: Vec<Token>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.iter().any(|w| w == token)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.words
    }

    /// Picks one word uniformly at random. `None` only for an empty vocabulary.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}
