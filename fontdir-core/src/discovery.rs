//! Recursive font directory walker

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::trace;
use walkdir::WalkDir;

use crate::error::ScanError;

/// What a file looks like to the scanner, judged by its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFileKind {
    /// Type-1 metrics file (`*.afm`).
    Afm,
    /// TrueType font (`*.ttf`).
    TrueType,
    /// Anything else, including `.pfa`/`.pfb` outlines.
    Other,
}

impl FontFileKind {
    /// Classify by the final extension. Matching is case-sensitive.
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(OsStr::to_str) {
            Some("afm") => FontFileKind::Afm,
            Some("ttf") => FontFileKind::TrueType,
            _ => FontFileKind::Other,
        }
    }
}

/// A non-directory entry found during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub path: PathBuf,
    pub kind: FontFileKind,
}

impl FontFile {
    pub fn new(path: PathBuf) -> Self {
        let kind = FontFileKind::of(&path);
        Self { path, kind }
    }
}

/// Trait for enumerating candidate font files from some backing store.
pub trait FontDiscovery {
    fn discover(&self) -> Result<Vec<FontFile>, ScanError>;
}

/// Depth-first filesystem walker rooted at a single directory.
///
/// Entries whose name starts with `.` are skipped and never descended into.
/// The root itself is exempt, so `~/.fonts` can be scanned. Symlinked
/// directories are followed unless [`follow_symlinks`](Self::follow_symlinks)
/// turns that off.
#[derive(Debug, Clone)]
pub struct PathDiscovery {
    root: PathBuf,
    follow_symlinks: bool,
    sort_entries: bool,
}

impl PathDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            follow_symlinks: true,
            sort_entries: false,
        }
    }

    /// Descend into symlinked directories (the default). A link that leads
    /// back to one of its ancestors is reported as an error.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Visit each directory's entries in file-name order instead of the
    /// order the filesystem lists them.
    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the tree, yielding every non-hidden, non-directory entry.
    ///
    /// The first unreadable directory is yielded as an error; callers stop there.
    pub fn files(&self) -> impl Iterator<Item = Result<FontFile, ScanError>> + '_ {
        let mut walker = WalkDir::new(&self.root).follow_links(self.follow_symlinks);
        if self.sort_entries {
            walker = walker.sort_by_file_name();
        }

        walker
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
            .filter_map(move |entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    trace!("scanning {}", entry.path().display());
                    None
                }
                Ok(entry) if entry.depth() == 0 => Some(Err(ScanError::NotADirectory {
                    path: entry.into_path(),
                })),
                Ok(entry) => Some(Ok(FontFile::new(entry.into_path()))),
                Err(err) => match dangling_link(&err) {
                    Some(path) if is_hidden(path.file_name().unwrap_or_default()) => None,
                    Some(path) => Some(Ok(FontFile::new(path))),
                    None => Some(Err(ScanError::directory_access(&self.root, err))),
                },
            })
    }
}

impl FontDiscovery for PathDiscovery {
    fn discover(&self) -> Result<Vec<FontFile>, ScanError> {
        self.files().collect()
    }
}

/// A broken symlink below the root is a leaf like any other file, not an
/// unreadable directory.
fn dangling_link(err: &walkdir::Error) -> Option<PathBuf> {
    if err.depth() == 0 || err.loop_ancestor().is_some() {
        return None;
    }
    let path = err.path()?;
    (path.is_symlink() && !path.exists()).then(|| path.to_path_buf())
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}
