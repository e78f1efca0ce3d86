use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about = "Breadth-limited HTTP directory discovery", long_about = None)]
pub struct Cli {
    /// Base URL to scan (e.g. https://example.com); a trailing slash is stripped
    pub target: String,

    /// Path to wordlist file (one word per line, # for comments)
    pub wordlist: String,

    /// Comma-separated extensions appended to every word
    #[arg(short = 'e', long, default_value = "php,html,htm,txt,bak")]
    pub extensions: String,

    /// Number of probes in flight at once (1 = strictly sequential)
    #[arg(short = 'c', long, default_value_t = 20_usize)]
    pub concurrency: usize,

    /// Per-probe timeout in seconds
    #[arg(long, default_value_t = 6_u64)]
    pub timeout: u64,

    /// Timeout for the trailing-slash directory check in seconds
    #[arg(long, default_value_t = 4_u64)]
    pub dir_timeout: u64,

    /// Directory to write findings.jsonl and findings.csv into
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out: Option<String>,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
