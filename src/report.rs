use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A reported probe result. Printed the moment it is classified and kept
/// for the optional end-of-run exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub url: String,
    pub status: u16,
}

/// Sink for reported probes. Printing happens immediately so output streams
/// while the scan runs; the retained vector feeds the JSONL/CSV writers.
#[derive(Default)]
pub struct Reporter {
    findings: Mutex<Vec<Finding>>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&self, status: u16, url: &str) {
        println!("[{}] {}", status, url);
        self.findings.lock().push(Finding {
            url: url.to_string(),
            status,
        });
    }

    pub fn findings(&self) -> Vec<Finding> {
        self.findings.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.findings.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_retains_findings_in_order() {
        let reporter = Reporter::new();
        reporter.report(403, "http://x.test/admin");
        reporter.report(200, "http://x.test/index.php");

        let findings = reporter.findings();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].status, 403);
        assert_eq!(findings[1].url, "http://x.test/index.php");
    }
}
