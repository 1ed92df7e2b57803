//! Catalog writers

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

/// Write one logical font name per line.
pub fn write_names(names: &[String], mut w: impl Write) -> Result<()> {
    for name in names {
        writeln!(w, "{name}")?;
    }
    Ok(())
}

/// Write one path per line. Non-UTF-8 bytes are replaced.
pub fn write_paths(paths: &[PathBuf], mut w: impl Write) -> Result<()> {
    for path in paths {
        writeln!(w, "{}", path.display())?;
    }
    Ok(())
}

/// Write entries as a prettified JSON array.
pub fn write_json_pretty<T: Serialize>(entries: &[T], mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write entries as newline-delimited JSON (NDJSON).
pub fn write_ndjson<T: Serialize>(entries: &[T], mut w: impl Write) -> Result<()> {
    for item in entries {
        let line = serde_json::to_string(item)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::afm::Type1Files;
    use crate::catalog::Type1Font;

    fn sample_font(name: &str) -> Type1Font {
        Type1Font {
            full_name: name.to_string(),
            files: Type1Files {
                metrics: PathBuf::from(format!("/fonts/{name}.afm")),
                outline: PathBuf::from(format!("/fonts/{name}.pfb")),
            },
        }
    }

    #[test]
    fn ndjson_writes_one_line_per_entry() {
        let fonts = vec![sample_font("Arial"), sample_font("Courier")];
        let mut buf = Vec::new();

        write_ndjson(&fonts, &mut buf).expect("write ndjson");

        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: Type1Font = serde_json::from_str(lines[1]).expect("parse");
        assert_eq!(parsed, sample_font("Courier"));
    }

    #[test]
    fn plain_writers_emit_lines() {
        let mut buf = Vec::new();
        write_names(&["Arial".to_string(), "Times Roman".to_string()], &mut buf).expect("names");
        write_paths(&[PathBuf::from("/fonts/sub/Times.ttf")], &mut buf).expect("paths");

        assert_eq!(
            String::from_utf8(buf).expect("utf8"),
            "Arial\nTimes Roman\n/fonts/sub/Times.ttf\n"
        );
    }
}
