use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;

const BOM: char = '\u{feff}';

fn is_stdio(path: &Path) -> bool {
    path == Path::new("-")
}

/// Reads a whole UTF-8 file, or standard input for `-`, without a leading BOM.
pub fn read_text(path: &Path) -> Result<String> {
    let mut text = if is_stdio(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read standard input")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    if text.starts_with(BOM) {
        text.remove(0);
    }

    tracing::debug!(bytes = text.len(), "Read {}", path.display());
    Ok(text)
}

/// Writes text as-is to a file, or to standard output when no path is given.
pub fn write_text(path: Option<&Path>, text: &str) -> Result<()> {
    match path.filter(|p| !is_stdio(p)) {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(bytes = text.len(), "Wrote {}", path.display());
        }
        None => write_to(&mut std::io::stdout().lock(), text)?,
    }
    Ok(())
}

fn write_to(out: &mut impl Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
