use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create the pooled HTTP client used for scanning. One client serves the
/// whole run so connections are reused across probes.
///
/// Redirects are never followed: 301/302 are classification inputs for the
/// report filter, and following them would turn every redirect into the
/// status of its destination.
pub fn create_scan_client(timeout_secs: u64) -> anyhow::Result<Client> {
    let client = ClientBuilder::new()
        .pool_max_idle_per_host(50)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .tcp_nodelay(true)
        // Per-probe timeouts are enforced at the call site; this is the
        // outer bound for a single request including the body.
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(5))
        .gzip(true)
        .brotli(true)
        .use_rustls_tls()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent("dirhound/0.1")
        // Scan targets frequently run self-signed certs
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(client)
}
