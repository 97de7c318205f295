use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::ecs::resources::MessageLog;
use crate::error::Result;

pub const MESSAGES_FILE: &str = "messages.jsonl";

/// Write an iterator of serializable items to a JSONL file (one JSON object per line).
fn write_jsonl<T: Serialize>(path: &Path, items: impl Iterator<Item = T>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for item in items {
        serde_json::to_writer(&mut writer, &item)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Flush the player message log to `messages.jsonl` in the given output
/// directory, creating the directory if needed. Returns the file path.
///
/// The log itself is left untouched; callers clear it once the write has
/// succeeded.
pub fn flush_messages_to_jsonl(log: &MessageLog, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(MESSAGES_FILE);
    write_jsonl(&path, log.messages.iter())?;
    tracing::debug!(
        count = log.messages.len(),
        path = %path.display(),
        "Flushed message log"
    );
    Ok(path)
}
