//! library-index: Index media assets under `library/<folder>` into JSON manifests.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{AppError, AssetKind, FileRecord, IndexOutcome, IndexSummary, index, index_at};
pub use app::config::{ROOT_ENV_VAR, resolve_project_root};
