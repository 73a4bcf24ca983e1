mod words;

use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

pub use words::WORD_LIST;

/// Ordered word source the puzzle generator draws from.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Load dictionary from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let dictionary = Self::from_words(content.lines());

        tracing::info!("Loaded {} words into dictionary", dictionary.len());

        Ok(dictionary)
    }

    /// The built-in word list
    pub fn builtin() -> Self {
        Self::from_words(WORD_LIST.iter().copied())
    }

    /// Normalize words to trimmed uppercase, dropping blanks and repeats but
    /// keeping the input order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
