pub mod writer_csv;
pub mod writer_jsonl;

pub use writer_csv::write_csv;
pub use writer_jsonl::write_jsonl;
