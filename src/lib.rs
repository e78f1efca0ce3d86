pub mod config;
pub mod enumerator;
pub mod http_client;
pub mod output;
pub mod probe;
pub mod report;
pub mod wordlist;

// re-export the types tests work with
pub use crate::probe::{ProbeStatus, Prober};
pub use crate::report::Finding;
