//! Type-1 metrics (`.afm`) helpers
//!
//! Only the `FullName` line is read; everything else in the metrics file is
//! left to the PDF engine that eventually loads the font.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Outline extensions, in the order they are preferred.
const OUTLINE_EXTENSIONS: [&str; 2] = ["pfa", "pfb"];

fn full_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^FullName (.*)").expect("FullName pattern compiles"))
}

/// Return the value of the first `FullName <value>` line in an AFM file.
///
/// Reading stops at the first match. `Ok(None)` means the file has no such line.
pub fn read_full_name(path: &Path) -> io::Result<Option<String>> {
    let file = File::open(path)?;
    full_name_from_reader(BufReader::new(file))
}

/// Same as [`read_full_name`], over any buffered reader.
pub fn full_name_from_reader(reader: impl BufRead) -> io::Result<Option<String>> {
    for line in reader.split(b'\n') {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        let line = String::from_utf8_lossy(&line);
        if let Some(caps) = full_name_pattern().captures(&line) {
            return Ok(Some(caps[1].to_string()));
        }
    }

    Ok(None)
}

/// A metrics file together with the outline file the PDF engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type1Files {
    pub metrics: PathBuf,
    pub outline: PathBuf,
}

impl Type1Files {
    /// Pair `metrics` with `<base>.pfa`, or `<base>.pfb` when there is no
    /// `.pfa`. `None` if neither sibling exists.
    pub fn for_metrics(metrics: impl Into<PathBuf>) -> Option<Self> {
        let metrics = metrics.into();
        let outline = OUTLINE_EXTENSIONS
            .iter()
            .map(|ext| metrics.with_extension(ext))
            .find(|candidate| candidate.is_file())?;

        Some(Self { metrics, outline })
    }

    /// Pair `metrics` with `<base>.pfa` if it exists, else `<base>.pfb`
    /// whether or not that exists.
    pub fn resolve(metrics: impl Into<PathBuf>) -> Self {
        let metrics = metrics.into();
        let pfa = metrics.with_extension("pfa");
        let outline = if pfa.is_file() {
            pfa
        } else {
            metrics.with_extension("pfb")
        };

        Self { metrics, outline }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn name_of(text: &[u8]) -> Option<String> {
        full_name_from_reader(Cursor::new(text.to_vec())).expect("read")
    }

    #[test]
    fn takes_first_full_name_line() {
        let afm = b"StartFontMetrics 4.1\nComment x\nFullName Arial\nFullName Other\n";
        assert_eq!(name_of(afm).as_deref(), Some("Arial"));
    }

    #[test]
    fn keeps_value_untrimmed() {
        assert_eq!(name_of(b"FullName  Spaced Out \n").as_deref(), Some(" Spaced Out "));
        assert_eq!(name_of(b"FullName \n").as_deref(), Some(""));
    }

    #[test]
    fn requires_prefix_at_line_start() {
        assert_eq!(name_of(b" FullName Indented\n"), None);
        assert_eq!(name_of(b"FullNameGlued\n"), None);
        assert_eq!(name_of(b"FamilyName Arial\n"), None);
    }

    #[test]
    fn strips_crlf_and_handles_missing_final_newline() {
        assert_eq!(name_of(b"Comment\r\nFullName Times Roman\r\n").as_deref(), Some("Times Roman"));
        assert_eq!(name_of(b"FullName Last").as_deref(), Some("Last"));
    }

    #[test]
    fn tolerates_non_utf8_lines_before_the_name() {
        let afm = b"Comment \xff\xfe latin-1 junk\nFullName Courier\n";
        assert_eq!(name_of(afm).as_deref(), Some("Courier"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let tmp = tempdir().expect("tempdir");
        assert!(read_full_name(&tmp.path().join("absent.afm")).is_err());
    }

    #[test]
    fn prefers_pfa_over_pfb() {
        let tmp = tempdir().expect("tempdir");
        let afm = tmp.path().join("Font.afm");
        fs::write(&afm, b"FullName Font\n").unwrap();
        fs::write(tmp.path().join("Font.pfb"), b"").unwrap();

        let files = Type1Files::for_metrics(&afm).expect("pfb companion");
        assert_eq!(files.outline, tmp.path().join("Font.pfb"));

        fs::write(tmp.path().join("Font.pfa"), b"").unwrap();
        let files = Type1Files::for_metrics(&afm).expect("pfa companion");
        assert_eq!(files.outline, tmp.path().join("Font.pfa"));
        assert_eq!(files.metrics, afm);
    }

    #[test]
    fn resolve_falls_back_to_pfb_without_checking_it() {
        let tmp = tempdir().expect("tempdir");
        let afm = tmp.path().join("Bare.afm");
        fs::write(&afm, b"FullName Bare\n").unwrap();

        let files = Type1Files::resolve(&afm);
        assert_eq!(files.outline, tmp.path().join("Bare.pfb"));

        fs::write(tmp.path().join("Bare.pfa"), b"").unwrap();
        assert_eq!(Type1Files::resolve(&afm).outline, tmp.path().join("Bare.pfa"));
    }

    #[test]
    fn no_companion_means_no_candidate() {
        let tmp = tempdir().expect("tempdir");
        let afm = tmp.path().join("Lonely.afm");
        fs::write(&afm, b"FullName Lonely\n").unwrap();

        assert_eq!(Type1Files::for_metrics(&afm), None);
    }
}
