use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};

use crate::cli::Cli;
use dirhound::config::ScanConfig;
use dirhound::enumerator::Enumerator;
use dirhound::http_client::create_scan_client;
use dirhound::output::{write_csv, write_jsonl};
use dirhound::probe::HttpProber;
use dirhound::wordlist::{parse_extensions, Wordlist};

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags. Keep reqwest/hyper at INFO so
    // per-probe debug output doesn't flood the CLI.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!(
        "dirhound={},reqwest=info,hyper=info,h2=info",
        crate_level
    );
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_target(false)
        .init();

    // Validation happens here, before the enumerator exists. Probe failures
    // later are never fatal; a bad target or missing wordlist is.
    let target = cli.target.trim_end_matches('/').to_string();
    url::Url::parse(&target)
        .with_context(|| format!("target is not a valid URL: {}", target))?;

    let wordlist_path = Path::new(&cli.wordlist);
    if !wordlist_path.exists() {
        bail!("wordlist file not found: {}", cli.wordlist);
    }
    let wordlist = Wordlist::load(wordlist_path)?;

    let extensions = parse_extensions(&cli.extensions);
    let config = ScanConfig {
        concurrency: cli.concurrency.max(1),
        probe_timeout: Duration::from_secs(cli.timeout),
        dir_timeout: Duration::from_secs(cli.dir_timeout),
    };

    tracing::info!(target = %target, words = wordlist.len(), concurrency = config.concurrency, "starting scan");

    println!("[>] Target: {}", target);
    println!("[~] Wordlist: {} words", wordlist.len());
    println!("[·] Extensions: {}", extensions.join(", "));
    println!("[·] Depth: {}", dirhound::config::MAX_DEPTH);
    println!("\n{}\n", "-".repeat(60));

    let client = create_scan_client(cli.timeout)?;
    let enumerator = Enumerator::new(HttpProber::new(client), wordlist, extensions, config);
    enumerator.run(&target).await;

    let findings = enumerator.reporter().findings();
    if let Some(out) = cli.out {
        let out_dir = PathBuf::from(&out);
        if !out_dir.exists() {
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create output directory {}", out))?;
        }
        write_jsonl(&out_dir.join("findings.jsonl"), &findings)?;
        write_csv(&out_dir.join("findings.csv"), &findings)?;
        println!("\n[=] {} findings written to {}", findings.len(), out_dir.display());
    }

    println!("\nDone.");
    Ok(())
}
