use std::path::Path;

use anyhow::Context;

/// Ordered word sequence read once at startup; immutable for the run.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// Read a wordlist file. Lines are trimmed; blank lines and lines
    /// starting with `#` are discarded. Order is preserved.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read wordlist {}", path.display()))?;
        let words = data
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect();
        Ok(Self { words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Parse a comma-separated extension list. Entries are trimmed and empty
/// entries (e.g. from a trailing comma) are skipped silently.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(|e| e.trim_start_matches('.').to_string())
        .filter(|e| !e.is_empty())
        .collect()
}
