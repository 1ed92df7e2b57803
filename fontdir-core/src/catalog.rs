//! Font catalogs and lookup by logical name

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::afm::{read_full_name, Type1Files};
use crate::discovery::{FontFileKind, PathDiscovery};
use crate::error::ScanError;

/// Walk behaviour shared by every catalog entry point.
///
/// The default lists directories in native filesystem order and descends
/// into symlinked directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    pub follow_symlinks: bool,
    pub sort_entries: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_symlinks: true,
            sort_entries: false,
        }
    }
}

impl ScanOptions {
    fn discovery(&self, root: &Path) -> PathDiscovery {
        PathDiscovery::new(root)
            .follow_symlinks(self.follow_symlinks)
            .sort_entries(self.sort_entries)
    }
}

/// An installed Type-1 font: its logical name and the files that make it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type1Font {
    pub full_name: String,
    #[serde(flatten)]
    pub files: Type1Files,
}

/// Sorted logical names of every usable Type-1 font under `root`.
///
/// A font is usable when its `.afm` has a `.pfa` or `.pfb` sibling and a
/// `FullName` line. Duplicates are kept.
pub fn type1_fonts(root: &Path) -> Result<Vec<String>, ScanError> {
    type1_fonts_with(root, &ScanOptions::default())
}

pub fn type1_fonts_with(root: &Path, opts: &ScanOptions) -> Result<Vec<String>, ScanError> {
    let mut names: Vec<String> = collect_type1(root, opts)?
        .into_iter()
        .map(|font| font.full_name)
        .collect();

    names.sort_unstable();
    Ok(names)
}

/// Like [`type1_fonts_with`], keeping the file paths next to each name.
///
/// Sorted by name, then by metrics path.
pub fn type1_font_entries(root: &Path, opts: &ScanOptions) -> Result<Vec<Type1Font>, ScanError> {
    let mut fonts = collect_type1(root, opts)?;
    fonts.sort_by(|a, b| {
        a.full_name
            .cmp(&b.full_name)
            .then_with(|| a.files.metrics.as_os_str().cmp(b.files.metrics.as_os_str()))
    });
    Ok(fonts)
}

/// Sorted paths of every `.ttf` file under `root`. File contents are not read.
pub fn truetype_fonts(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    truetype_fonts_with(root, &ScanOptions::default())
}

pub fn truetype_fonts_with(root: &Path, opts: &ScanOptions) -> Result<Vec<PathBuf>, ScanError> {
    let mut paths = Vec::new();

    for file in opts.discovery(root).files() {
        let file = file?;
        if file.kind == FontFileKind::TrueType {
            paths.push(file.path);
        }
    }

    sort_paths(&mut paths);
    Ok(paths)
}

/// Locate the Type-1 font whose first `FullName` line equals `name` exactly.
///
/// The walk stops at the first match, whose outline is `<base>.pfa` if that
/// exists and `<base>.pfb` otherwise. The `.pfb` is not checked; a missing
/// outline surfaces when the engine tries to load it.
///
/// Without [`ScanOptions::sort_entries`] "first" follows the filesystem's
/// listing order, so duplicate names may resolve differently on different
/// systems.
pub fn find_type1_font(name: &str, root: &Path) -> Result<Option<Type1Files>, ScanError> {
    find_type1_font_with(name, root, &ScanOptions::default())
}

pub fn find_type1_font_with(
    name: &str,
    root: &Path,
    opts: &ScanOptions,
) -> Result<Option<Type1Files>, ScanError> {
    for file in opts.discovery(root).files() {
        let file = file?;
        if file.kind != FontFileKind::Afm {
            continue;
        }

        match read_full_name(&file.path) {
            Ok(Some(full_name)) if full_name == name => {
                let files = Type1Files::resolve(file.path);
                debug!(
                    "found type 1 font {name:?}: metrics={} outline={}",
                    files.metrics.display(),
                    files.outline.display()
                );
                return Ok(Some(files));
            }
            Ok(_) => {}
            Err(err) => debug!("skipping {}: {err}", file.path.display()),
        }
    }

    Ok(None)
}

fn collect_type1(root: &Path, opts: &ScanOptions) -> Result<Vec<Type1Font>, ScanError> {
    let mut fonts = Vec::new();

    for file in opts.discovery(root).files() {
        let file = file?;
        if file.kind != FontFileKind::Afm {
            continue;
        }

        let Some(files) = Type1Files::for_metrics(&file.path) else {
            debug!("skipping {}: no .pfa/.pfb outline", file.path.display());
            continue;
        };

        match read_full_name(&files.metrics) {
            Ok(Some(full_name)) => fonts.push(Type1Font { full_name, files }),
            Ok(None) => debug!("skipping {}: no FullName line", files.metrics.display()),
            Err(err) => debug!("skipping {}: {err}", files.metrics.display()),
        }
    }

    Ok(fonts)
}

/// Order by raw path bytes rather than component-wise.
fn sort_paths(paths: &mut [PathBuf]) {
    paths.sort_unstable_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}
