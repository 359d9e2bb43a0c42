//! Index a library folder into `library-<folder>.json`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::app::AppContext;
use crate::domain::{
    AllowedExtensions, AppError, AssetKind, FileRecord, FolderName, LibraryLayout,
};
use crate::ports::LibraryFilesystem;

/// An accepted asset with its detected kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFile {
    pub record: FileRecord,
    pub kind: AssetKind,
}

/// Per-kind tally of an index run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub total: usize,
    pub by_kind: BTreeMap<AssetKind, usize>,
}

impl IndexSummary {
    pub fn from_files(files: &[IndexedFile]) -> Self {
        let mut by_kind = BTreeMap::new();
        for file in files {
            *by_kind.entry(file.kind).or_insert(0) += 1;
        }
        Self { total: files.len(), by_kind }
    }

    pub fn count(&self, kind: AssetKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }
}

/// Result of a completed index run.
#[derive(Debug, Clone)]
pub struct IndexOutcome {
    pub output_path: PathBuf,
    pub records: Vec<FileRecord>,
    pub summary: IndexSummary,
}

/// Walk the target folder and keep every file whose extension is allowed.
///
/// Order follows the filesystem walk. Files whose path cannot be recorded as
/// UTF-8 are skipped.
pub fn collect_records<F: LibraryFilesystem>(
    filesystem: &F,
    layout: &LibraryLayout,
    folder: &FolderName,
    allowed: &AllowedExtensions,
) -> Vec<IndexedFile> {
    let target = layout.target_dir(folder);

    filesystem
        .walk_files(&target)
        .into_iter()
        .filter_map(|path| {
            let kind = allowed.classify(&path)?;
            match layout.record_for(&path) {
                Ok(record) => Some(IndexedFile { record, kind }),
                Err(e) => {
                    tracing::debug!(
                        path = %path.display(),
                        error = %e,
                        "Skipping file that cannot be recorded"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Serialize records as a JSON array indented with four spaces.
pub fn render_index(records: &[FileRecord]) -> Result<String, AppError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json emits UTF-8"))
}

/// Execute the index command for `folder`.
pub fn execute<F: LibraryFilesystem>(
    ctx: &AppContext<F>,
    folder: &FolderName,
) -> Result<IndexOutcome, AppError> {
    let layout = ctx.layout();
    ctx.filesystem().create_dir_all(layout.library_root())?;
    tracing::debug!(
        target_dir = %layout.target_dir(folder).display(),
        extensions = ?ctx.allowed().iter().collect::<Vec<_>>(),
        "Scanning library folder"
    );

    let files = collect_records(ctx.filesystem(), layout, folder, ctx.allowed());
    let summary = IndexSummary::from_files(&files);
    tracing::info!(
        folder = %folder,
        total = summary.total,
        images = summary.count(AssetKind::Image),
        videos = summary.count(AssetKind::Video),
        audio = summary.count(AssetKind::Audio),
        models = summary.count(AssetKind::Model),
        "Scanned library folder"
    );

    let records: Vec<FileRecord> = files.into_iter().map(|file| file.record).collect();
    let output_path = layout.output_path(folder);
    ctx.filesystem().write_file(&output_path, &render_index(&records)?)?;

    Ok(IndexOutcome { output_path, records, summary })
}
