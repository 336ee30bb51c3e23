use std::fs;

use anyhow::Context;
use log::debug;

pub const DEFAULT_FILENAME: &str = "generated_password.txt";

/// Writes the password to a plain text file. No other format is supported.
pub fn save_password(file_path: &str, password: &str) -> anyhow::Result<()> {
    debug!("saving password to '{}'", file_path);
    fs::write(file_path, password).with_context(|| format!("failed to write '{}'", file_path))
}
