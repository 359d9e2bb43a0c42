//! Asset kinds and the fixed extension allow-list.

use std::path::Path;

/// Broad media category of an indexed asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    Image,
    Video,
    Audio,
    /// 3D model (glTF family).
    Model,
}

impl AssetKind {
    /// Map a dot-less extension to its kind. Matching ignores ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "png" => Some(AssetKind::Image),
            "mov" | "mp4" => Some(AssetKind::Video),
            "mp3" | "wav" => Some(AssetKind::Audio),
            "glb" | "gltf" => Some(AssetKind::Model),
            _ => None,
        }
    }
}

/// Immutable set of file suffixes that count as indexable assets.
///
/// Suffixes are stored lower-case with their leading dot. The set is fixed for
/// the lifetime of a run and is passed explicitly into the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensions {
    suffixes: &'static [&'static str],
}

impl AllowedExtensions {
    const MEDIA: &'static [&'static str] =
        &[".jpg", ".png", ".mov", ".mp4", ".mp3", ".wav", ".glb", ".gltf"];

    /// The image, video, audio and 3D-model suffixes indexed by default.
    pub fn media() -> Self {
        Self { suffixes: Self::MEDIA }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.suffixes.iter().copied()
    }

    /// Classify a file by its final extension.
    ///
    /// Names without an extension (`README`, `.jpg`, `trailing.`) never match.
    pub fn classify(&self, path: &Path) -> Option<AssetKind> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if ext.is_empty() {
            return None;
        }
        let matched = self.suffixes.iter().any(|suffix| suffix.strip_prefix('.') == Some(&*ext));
        if !matched {
            return None;
        }
        AssetKind::from_extension(&ext)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.classify(path).is_some()
    }
}
