pub mod jsonl;

pub use jsonl::{MESSAGES_FILE, flush_messages_to_jsonl};
