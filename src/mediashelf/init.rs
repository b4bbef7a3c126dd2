use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HOME_ENV: &str = "MEDIASHELF_HOME";

pub struct ShelfContext {
    pub api: ShelfApi<FsBackend>,
    pub data_dir: PathBuf,
}

/// Pick the data directory: an explicit override first, then a non-empty
/// `MEDIASHELF_HOME`, then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>, env_home: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = env_home.filter(|h| !h.trim().is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "mediashelf", "mediashelf")
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

/// Build the production context rooted at `data_dir`. The directory is
/// created lazily by the first write.
pub fn initialize(data_dir: PathBuf) -> Result<ShelfContext> {
    let config = ShelfConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), "initialized context");

    let backend = FsBackend::new(data_dir.clone());
    let api = ShelfApi::new(backend, config, data_dir.clone());
    Ok(ShelfContext { api, data_dir })
}
