use std::collections::HashSet;

use futures::stream::{self, StreamExt};

use crate::config::ScanConfig;
use crate::probe::Prober;
use crate::report::Reporter;
use crate::wordlist::Wordlist;

/// Bounded-depth discovery of accessible paths under a base URL.
///
/// Each word in the wordlist is probed bare, once per extension, and in
/// trailing-slash directory form; directory-like children are expanded one
/// level further. Depth is hard-capped at two expansions.
pub struct Enumerator<P: Prober> {
    prober: P,
    wordlist: Wordlist,
    extensions: Vec<String>,
    config: ScanConfig,
    reporter: Reporter,
}

impl<P: Prober> Enumerator<P> {
    pub fn new(prober: P, wordlist: Wordlist, extensions: Vec<String>, config: ScanConfig) -> Self {
        Self {
            prober,
            wordlist,
            extensions,
            config,
            reporter: Reporter::new(),
        }
    }

    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Run the full scan: expand the target, then expand every discovered
    /// directory once more. The second expansion's own frontier is
    /// discarded, which is what enforces the depth cap.
    pub async fn run(&self, target: &str) {
        let level0 = vec![target.trim_end_matches('/').to_string()];
        let level1 = self.expand_level(&level0).await;
        tracing::info!(directories = level1.len(), "level 1 complete");

        if !level1.is_empty() {
            let _ = self.expand_level(&level1).await;
            tracing::info!("level 2 complete");
        }
    }

    /// Probe every (base, word) candidate and return the next frontier:
    /// the children whose directory-form probe drew any non-5xx response,
    /// deduplicated in submission order.
    pub async fn expand_level(&self, bases: &[String]) -> Vec<String> {
        let mut units: Vec<(usize, String, String)> = Vec::new();
        for base in bases {
            for word in self.wordlist.words() {
                // internal whitespace is stripped, empty words skipped
                let word: String = word.chars().filter(|c| !c.is_whitespace()).collect();
                if word.is_empty() {
                    continue;
                }
                units.push((units.len(), base.clone(), word));
            }
        }

        let total = units.len();
        tracing::debug!(bases = bases.len(), candidates = total, "expanding level");

        let mut completed: Vec<(usize, Option<String>)> = stream::iter(units)
            .map(|(idx, base, word)| async move {
                (idx, self.probe_word(&base, &word).await)
            })
            .buffer_unordered(self.config.concurrency.max(1))
            .collect()
            .await;

        // probes complete out of order; restore submission order so the
        // frontier is deterministic
        completed.sort_by_key(|(idx, _)| *idx);

        let mut seen = HashSet::new();
        let mut next = Vec::new();
        for (_, child) in completed {
            if let Some(child) = child {
                if seen.insert(child.clone()) {
                    next.push(child);
                }
            }
        }
        next
    }

    /// Probe one word under one base: the bare path, each extension form,
    /// then the trailing-slash directory check. Returns the child path when
    /// the directory check says it is worth descending into.
    async fn probe_word(&self, base: &str, word: &str) -> Option<String> {
        let bare = format!("{}/{}", base, word);
        self.probe_and_report(&bare).await;

        for ext in &self.extensions {
            self.probe_and_report(&format!("{}.{}", bare, ext)).await;
        }

        // classification only, never reported
        let dir_url = format!("{}/", bare);
        let dir_status = self.prober.probe(&dir_url, self.config.dir_timeout).await;
        dir_status.extends_frontier().then(|| bare)
    }

    async fn probe_and_report(&self, url: &str) {
        let status = self.prober.probe(url, self.config.probe_timeout).await;
        if status.is_reportable() {
            if let Some(code) = status.code() {
                self.reporter.report(code, url);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeStatus;
    use async_trait::async_trait;
    use std::time::Duration;

    struct NotFound;

    #[async_trait]
    impl Prober for NotFound {
        async fn probe(&self, _url: &str, _timeout: Duration) -> ProbeStatus {
            ProbeStatus::Code(404)
        }
    }

    fn enumerator(words: &[&str]) -> Enumerator<NotFound> {
        Enumerator::new(
            NotFound,
            Wordlist::from_words(words.iter().copied()),
            vec![],
            ScanConfig::default(),
        )
    }

    #[tokio::test]
    async fn words_with_spaces_are_cleaned_and_empties_skipped() {
        let e = enumerator(&["ad min", "   ", "ok"]);
        let frontier = e.expand_level(&["http://x.test".to_string()]).await;
        assert_eq!(frontier, vec!["http://x.test/admin", "http://x.test/ok"]);
    }

    #[tokio::test]
    async fn duplicate_children_appear_once_at_first_position() {
        // duplicated base and duplicated word both collapse in the output
        let e = enumerator(&["admin", "admin", "login"]);
        let bases = vec!["http://x.test".to_string(), "http://x.test".to_string()];
        let frontier = e.expand_level(&bases).await;
        assert_eq!(frontier, vec!["http://x.test/admin", "http://x.test/login"]);
    }

    #[tokio::test]
    async fn empty_frontier_expands_to_nothing() {
        let e = enumerator(&["admin"]);
        assert!(e.expand_level(&[]).await.is_empty());

        let e = enumerator(&[]);
        assert!(e.expand_level(&["http://x.test".to_string()]).await.is_empty());
    }
}
