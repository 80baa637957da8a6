//! Writing generated source

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Destination meaning standard output.
pub const STDOUT: &str = "-";

/// Write `code` to `output`, or to stdout when `output` is `-`.
pub fn write_output(output: &str, code: &str) -> Result<()> {
    if output == STDOUT {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(code.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")?;
        return Ok(());
    }

    let path = Path::new(output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {parent:?}"))?;
    }
    std::fs::write(path, code).with_context(|| format!("Failed to write {path:?}"))?;

    tracing::info!(path = %path.display(), bytes = code.len(), "wrote generated source");
    Ok(())
}
