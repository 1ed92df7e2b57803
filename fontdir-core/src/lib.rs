//! fontdir-core: finds the font files a PDF engine can load
//!
//! PDF engines that embed Type-1 and TrueType fonts want file paths, while
//! people think in font names. This crate walks a font directory tree and
//! bridges the two.
//!
//! ## What it finds
//!
//! - **Type-1 fonts**: an `.afm` metrics file whose sibling `.pfa` or `.pfb`
//!   outline exists. The logical name comes from the first `FullName` line of
//!   the metrics file.
//! - **TrueType fonts**: any `.ttf` file. Contents are never read.
//!
//! Names starting with `.` are skipped at every level below the root, and
//! hidden directories are never entered.
//!
//! ## A short example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use fontdir_core::catalog::{find_type1_font, truetype_fonts, type1_fonts};
//!
//! let root = Path::new("/usr/share/fonts");
//!
//! for name in type1_fonts(root)? {
//!     println!("type 1: {name}");
//! }
//! for path in truetype_fonts(root)? {
//!     println!("truetype: {}", path.display());
//! }
//!
//! if let Some(files) = find_type1_font("Nimbus Sans Regular", root)? {
//!     println!("{} + {}", files.metrics.display(), files.outline.display());
//! }
//! # Ok::<(), fontdir_core::error::ScanError>(())
//! ```
//!
//! ## Ground rules
//!
//! - Every call rescans the filesystem; nothing is cached.
//! - Catalogs are sorted by byte order and may contain duplicates.
//! - An unreadable directory fails the whole call with
//!   [`ScanError::DirectoryAccess`](error::ScanError::DirectoryAccess); an
//!   unreadable `.afm` file is skipped.
//! - Loading the files is the PDF engine's job, reached through
//!   [`engine::FontLoader`]. Its errors pass through untouched.

pub mod afm;
pub mod catalog;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod output;
