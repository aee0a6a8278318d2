//! File-type icon lookup (Nerd Font glyphs).

use std::path::Path;

use ratatui::style::Color;

/// Icon for a collapsed directory.
pub const DIR_ICON: &str = "\u{f07b}";
/// Icon for an expanded directory.
pub const DIR_OPEN_ICON: &str = "\u{f07c}";
/// Generic file icon used when no specific mapping exists.
pub const FILE_ICON: &str = "\u{f0219}";

/// ASCII fallbacks when icons are disabled.
pub const ASCII_DIR_ICON: &str = "[D]";
pub const ASCII_FILE_ICON: &str = "[F]";

/// Glyph plus optional colour for a path.
///
/// An empty `glyph` means no mapping matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub glyph: &'static str,
    pub color: Option<Color>,
}

impl IconStyle {
    const NONE: IconStyle = IconStyle {
        glyph: "",
        color: None,
    };

    const fn new(glyph: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            glyph,
            color: Some(Color::Rgb(r, g, b)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.glyph.is_empty()
    }
}

/// Resolve the icon for a file by its name, then by its extension.
pub fn resolve(path: &Path) -> IconStyle {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if let Some(style) = by_file_name(&name) {
        return style;
    }

    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    by_extension(&ext).unwrap_or(IconStyle::NONE)
}

fn by_file_name(name: &str) -> Option<IconStyle> {
    let style = match name {
        "cargo.toml" | "cargo.lock" => IconStyle::new("\u{e7a8}", 222, 165, 132),
        "dockerfile" | "docker-compose.yml" | "docker-compose.yaml" => {
            IconStyle::new("\u{f308}", 69, 137, 230)
        }
        "makefile" | "justfile" => IconStyle::new("\u{e779}", 111, 128, 134),
        ".gitignore" | ".gitmodules" | ".gitattributes" => IconStyle::new("\u{e702}", 241, 80, 47),
        "license" | "licence" => IconStyle::new("\u{e60a}", 203, 203, 65),
        _ => return None,
    };
    Some(style)
}

fn by_extension(ext: &str) -> Option<IconStyle> {
    let style = match ext {
        "rs" => IconStyle::new("\u{e7a8}", 222, 165, 132),
        "py" => IconStyle::new("\u{e606}", 255, 188, 3),
        "js" | "jsx" | "mjs" => IconStyle::new("\u{e74e}", 203, 203, 65),
        "ts" | "tsx" => IconStyle::new("\u{e628}", 81, 154, 186),
        "html" | "htm" => IconStyle::new("\u{e736}", 228, 77, 38),
        "css" | "scss" | "sass" => IconStyle::new("\u{e749}", 66, 165, 245),
        "json" => IconStyle::new("\u{e60b}", 203, 203, 65),
        "toml" | "yaml" | "yml" | "ini" | "cfg" => IconStyle::new("\u{e615}", 109, 128, 134),
        "md" | "markdown" | "rst" => IconStyle::new("\u{e609}", 81, 154, 186),
        "txt" => IconStyle::new("\u{f15c}", 137, 224, 81),
        "sh" | "bash" | "zsh" | "fish" => IconStyle::new("\u{f489}", 77, 90, 94),
        "go" => IconStyle::new("\u{e627}", 0, 173, 216),
        "java" | "jar" | "class" => IconStyle::new("\u{e738}", 204, 62, 68),
        "c" | "h" => IconStyle::new("\u{e61e}", 89, 158, 255),
        "cpp" | "cxx" | "cc" | "hpp" => IconStyle::new("\u{e61d}", 243, 75, 125),
        "rb" => IconStyle::new("\u{e739}", 112, 21, 22),
        "php" => IconStyle::new("\u{e73d}", 160, 116, 196),
        "lua" => IconStyle::new("\u{e620}", 81, 160, 207),
        "swift" => IconStyle::new("\u{e755}", 227, 79, 55),
        "kt" | "kts" => IconStyle::new("\u{e634}", 127, 82, 255),
        "ex" | "exs" => IconStyle::new("\u{e62d}", 163, 116, 237),
        "lock" => IconStyle::new("\u{f023}", 187, 187, 187),
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "ico" | "webp" => {
            IconStyle::new("\u{f1c5}", 160, 116, 196)
        }
        "mp3" | "wav" | "flac" | "ogg" | "aac" => IconStyle::new("\u{f1c7}", 0, 175, 255),
        "mp4" | "mkv" | "avi" | "mov" | "webm" => IconStyle::new("\u{f1c8}", 253, 151, 31),
        "zip" | "tar" | "gz" | "xz" | "bz2" | "rar" | "7z" => {
            IconStyle::new("\u{f1c6}", 236, 162, 87)
        }
        "pdf" => IconStyle::new("\u{f1c1}", 179, 11, 0),
        "sql" | "db" | "sqlite" => IconStyle::new("\u{f1c0}", 218, 217, 218),
        _ => return None,
    };
    Some(style)
}
