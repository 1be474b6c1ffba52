//! Newline-delimited account-pool artifact.
//!
//! UTF-8 text, one decimal account number per line, newline-terminated, no
//! header. The write replaces any prior artifact at the path; the read
//! preserves line order.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use customer_activity::models::AccountId;

use crate::error::SeedError;

/// Writes the pool one account per line, replacing any existing file.
pub fn write_pool(path: impl AsRef<Path>, pool: &[AccountId]) -> Result<(), SeedError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for id in pool {
        writeln!(writer, "{id}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a pool back in persisted order. Blank lines are ignored; anything
/// else that fails to parse is an error naming the offending line.
pub fn read_pool(path: impl AsRef<Path>) -> Result<Vec<AccountId>, SeedError> {
    let reader = BufReader::new(File::open(path)?);
    let mut pool = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let id = trimmed
            .parse::<AccountId>()
            .map_err(|_| SeedError::MalformedAccountId {
                line: index + 1,
                value: trimmed.to_string(),
            })?;
        pool.push(id);
    }

    Ok(pool)
}
