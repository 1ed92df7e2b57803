//! Boundary with the PDF engine that actually loads fonts
//!
//! The engine reports failures as a primary status code plus an optional
//! detail code. [`EngineError`] carries both unchanged, and [`FontLoader`] is
//! the seam through which discovered font files reach the engine.

use std::fmt;
use std::path::Path;

use log::debug;

use crate::catalog::{find_type1_font_with, ScanOptions};
use crate::error::ScanError;

pub const FILE_IO_ERROR: u32 = 0x1016;
pub const FILE_OPEN_ERROR: u32 = 0x1017;
pub const FONT_EXISTS: u32 = 0x1019;
pub const INVALID_AFM_HEADER: u32 = 0x101B;
pub const INVALID_FONT_NAME: u32 = 0x102F;
pub const TTF_CANNOT_EMBEDDING_FONT: u32 = 0x105D;
pub const UNSUPPORTED_TYPE1_FONT: u32 = 0x1064;

/// Structured failure raised by the PDF engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineError {
    pub status: u32,
    pub detail: u32,
}

impl EngineError {
    pub fn new(status: u32, detail: u32) -> Self {
        Self { status, detail }
    }

    /// Convert an engine status report into a `Result`. Status `0` is success.
    pub fn check(status: u32, detail: u32) -> Result<(), EngineError> {
        if status == 0 {
            Ok(())
        } else {
            Err(Self::new(status, detail))
        }
    }

    /// Human-readable description of the primary status code.
    pub fn message(&self) -> &'static str {
        status_message(self.status)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PDF ERROR {:x}", self.status)?;
        if self.detail != 0 {
            write!(f, "({})", self.detail)?;
        }
        write!(f, ": {}", self.message())
    }
}

impl std::error::Error for EngineError {}

/// Something that can turn font files into engine font handles.
pub trait FontLoader {
    type Handle;

    fn load_type1_font(
        &mut self,
        metrics: &Path,
        outline: &Path,
    ) -> Result<Self::Handle, EngineError>;

    /// `embed` asks the engine to embed the font program in the output.
    fn load_truetype_font(
        &mut self,
        path: &Path,
        embed: bool,
    ) -> Result<Self::Handle, EngineError>;
}

/// Find the Type-1 font whose `FullName` is `name` under `root` and load it.
///
/// `Ok(None)` when no font matches; the loader is not called in that case.
pub fn load_type1_font_by_name<L: FontLoader>(
    loader: &mut L,
    name: &str,
    root: &Path,
) -> Result<Option<L::Handle>, ScanError> {
    load_type1_font_by_name_with(loader, name, root, &ScanOptions::default())
}

pub fn load_type1_font_by_name_with<L: FontLoader>(
    loader: &mut L,
    name: &str,
    root: &Path,
    opts: &ScanOptions,
) -> Result<Option<L::Handle>, ScanError> {
    let Some(files) = find_type1_font_with(name, root, opts)? else {
        return Ok(None);
    };

    debug!(
        "loading type 1 font {name:?}: metrics={} outline={}",
        files.metrics.display(),
        files.outline.display()
    );
    let handle = loader.load_type1_font(&files.metrics, &files.outline)?;
    Ok(Some(handle))
}

fn status_message(status: u32) -> &'static str {
    match status {
        0x1001 => "array count err",
        0x1002 => "array item not found",
        0x1003 => "array item unexpected type",
        0x1004 => "binary length err",
        0x1005 => "cannot get pallet",
        0x1007 => "dict count err",
        0x1008 => "dict item not found",
        0x1009 => "dict item unexpected type",
        0x100A => "dict stream length not found",
        0x100B => "doc encryptdict not found",
        0x100C => "doc invalid object",
        0x100E => "duplicate registration",
        0x100F => "exceed jww code num limit",
        0x1011 => "encrypt invalid password",
        0x1013 => "err unknown class",
        0x1014 => "exceed gstate limit",
        0x1015 => "faild to alloc mem",
        FILE_IO_ERROR => "file io error",
        FILE_OPEN_ERROR => "file open error",
        FONT_EXISTS => "font exists",
        0x101A => "font invalid widths table",
        INVALID_AFM_HEADER => "invalid afm header",
        0x101C => "invalid annotation",
        0x101E => "invalid bit per component",
        0x101F => "invalid char matrics data",
        0x1020 => "invalid color space",
        0x1021 => "invalid compression mode",
        0x1022 => "invalid date time",
        0x1023 => "invalid destination",
        0x1025 => "invalid document",
        0x1026 => "invalid document state",
        0x1027 => "invalid encoder",
        0x1028 => "invalid encoder type",
        0x102B => "invalid encoding name",
        0x102C => "invalid encrypt key len",
        0x102D => "invalid fontdef data",
        0x102E => "invalid fontdef type",
        INVALID_FONT_NAME => "invalid font name",
        0x1030 => "invalid image",
        0x1031 => "invalid jpeg data",
        0x1032 => "invalid n data",
        0x1033 => "invalid object",
        0x1034 => "invalid obj id",
        0x1035 => "invalid operation",
        0x1036 => "invalid outline",
        0x1037 => "invalid page",
        0x1038 => "invalid pages",
        0x1039 => "invalid parameter",
        0x103B => "invalid png image",
        0x103C => "invalid stream",
        0x103D => "missing file name entry",
        0x103F => "invalid ttc file",
        0x1040 => "invalid ttc index",
        0x1041 => "invalid wx data",
        0x1042 => "item not found",
        0x1043 => "libpng error",
        0x1044 => "name invalid value",
        0x1045 => "name out of range",
        0x1048 => "page invalid param count",
        0x1049 => "pages missing kids entry",
        0x104A => "page cannot find object",
        0x104B => "page cannot get root pages",
        0x104C => "page cannot restore gstate",
        0x104D => "page cannot set parent",
        0x104E => "page font not found",
        0x104F => "page invalid font",
        0x1050 => "page invalid font size",
        0x1051 => "page invalid gmode",
        0x1052 => "page invalid index",
        0x1053 => "page invalid rotate value",
        0x1054 => "page invalid size",
        0x1055 => "page invalid xobject",
        0x1056 => "page out of range",
        0x1057 => "real out of range",
        0x1058 => "stream eof",
        0x1059 => "stream readln continue",
        0x105B => "string out of range",
        0x105C => "this func was skipped",
        TTF_CANNOT_EMBEDDING_FONT => "ttf cannot embedding font",
        0x105E => "ttf invalid cmap",
        0x105F => "ttf invalid fomat",
        0x1060 => "ttf missing table",
        0x1061 => "unsupported font type",
        0x1062 => "unsupported func",
        0x1063 => "unsupported jpeg format",
        UNSUPPORTED_TYPE1_FONT => "unsupported type1 font",
        0x1065 => "xref count err",
        0x1066 => "zlib error",
        0x1067 => "invalid page index",
        0x1068 => "invalid uri",
        0x1069 => "page layout out of range",
        0x1070 => "page mode out of range",
        0x1071 => "page num style out of range",
        0x1072 => "annot invalid icon",
        0x1073 => "annot invalid border style",
        0x1074 => "page invalid direction",
        0x1075 => "invalid font",
        0x1076 => "page insufficient space",
        0x1077 => "page invalid display time",
        0x1078 => "page invalid transition time",
        0x1079 => "invalid page slideshow type",
        0x1080 => "ext gstate out of range",
        0x1081 => "invalid ext gstate",
        0x1082 => "ext gstate read only",
        0x1083 => "invalid u3d data",
        0x1084 => "name cannot get names",
        0x1085 => "invalid icc component num",
        _ => "unknown error",
    }
}
