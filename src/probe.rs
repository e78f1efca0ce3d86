use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

/// Outcome of a single probe, normalized before any decision is made.
///
/// Transport failures (timeout, refused connection, DNS, TLS) collapse to
/// `Unreachable`, which is distinct from every real HTTP code: it is never
/// reported and never extends the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Code(u16),
    Unreachable,
}

impl ProbeStatus {
    /// Report filter: 200, 301, 302, 401, 403 and any 5xx are worth a line;
    /// everything else (404 in particular) is suppressed as noise.
    pub fn is_reportable(self) -> bool {
        match self {
            ProbeStatus::Code(c) => {
                matches!(c, 200 | 301 | 302 | 401 | 403) || (500..600).contains(&c)
            }
            ProbeStatus::Unreachable => false,
        }
    }

    /// Frontier heuristic for the trailing-slash directory check: any
    /// 2xx/3xx/4xx means the server responded at all, which is treated as
    /// "worth descending into". Intentionally over-inclusive; accepts false
    /// positives over missed directories.
    pub fn extends_frontier(self) -> bool {
        match self {
            ProbeStatus::Code(c) => (200..500).contains(&c),
            ProbeStatus::Unreachable => false,
        }
    }

    pub fn code(self) -> Option<u16> {
        match self {
            ProbeStatus::Code(c) => Some(c),
            ProbeStatus::Unreachable => None,
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStatus::Code(c) => write!(f, "{}", c),
            ProbeStatus::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Normalize the HEAD attempt and the optional GET fallback into a single
/// status. The GET result only matters when HEAD yielded nothing.
pub fn resolve(head: Option<u16>, get: Option<u16>) -> ProbeStatus {
    match head.or(get) {
        Some(c) => ProbeStatus::Code(c),
        None => ProbeStatus::Unreachable,
    }
}

/// Seam between the enumerator and the network. Tests drive the enumerator
/// with a scripted implementation.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, url: &str, timeout: Duration) -> ProbeStatus;
}

/// reqwest-backed prober: header-only request first, one full-request
/// fallback if that fails at the transport level. No retries beyond that.
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str, timeout: Duration) -> ProbeStatus {
        let head = tokio::time::timeout(timeout, self.client.head(url).send()).await;
        let head_status = match head {
            Ok(Ok(resp)) => Some(resp.status().as_u16()),
            _ => None,
        };

        let get_status = if head_status.is_none() {
            let get = tokio::time::timeout(timeout, self.client.get(url).send()).await;
            match get {
                Ok(Ok(resp)) => Some(resp.status().as_u16()),
                _ => None,
            }
        } else {
            None
        };

        let status = resolve(head_status, get_status);
        tracing::debug!(%url, %status, "probe");
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_filter_accepts_interesting_codes() {
        for code in [200, 301, 302, 401, 403, 500, 502, 503, 599] {
            assert!(ProbeStatus::Code(code).is_reportable(), "code {}", code);
        }
    }

    #[test]
    fn report_filter_suppresses_noise() {
        for code in [404, 410, 429, 100, 204, 304, 400, 405] {
            assert!(!ProbeStatus::Code(code).is_reportable(), "code {}", code);
        }
        assert!(!ProbeStatus::Unreachable.is_reportable());
    }

    #[test]
    fn frontier_heuristic_is_any_non_5xx_response() {
        for code in [200, 204, 301, 302, 403, 404, 429, 499] {
            assert!(ProbeStatus::Code(code).extends_frontier(), "code {}", code);
        }
        for code in [500, 502, 503, 599] {
            assert!(!ProbeStatus::Code(code).extends_frontier(), "code {}", code);
        }
        assert!(!ProbeStatus::Unreachable.extends_frontier());
    }

    #[test]
    fn resolve_prefers_head_then_falls_back_to_get() {
        assert_eq!(resolve(Some(200), None), ProbeStatus::Code(200));
        // HEAD answered; a GET result must not override it
        assert_eq!(resolve(Some(405), Some(200)), ProbeStatus::Code(405));
        // HEAD failed at the transport level, GET succeeded
        assert_eq!(resolve(None, Some(403)), ProbeStatus::Code(403));
        assert_eq!(resolve(None, None), ProbeStatus::Unreachable);
    }
}
