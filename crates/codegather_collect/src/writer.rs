use anyhow::{Context, Result};
use log::{debug, info};
use std::{fs, path::Path};

/// Writes the chunks to `path`, separated by a newline, creating missing parent directories.
pub fn write_chunks(path: &Path, chunks: &[String]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        debug!("Creating output directory: {}", parent.display());
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let text = chunks.join("\n");
    fs::write(path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} chunks ({} bytes) to {}", chunks.len(), text.len(), path.display());
    Ok(())
}
