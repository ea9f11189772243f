use crate::catalog::{ItemRecord, LevelBucket, RawCatalog, group_by_level, normalize, sort_items};
use crate::statics;
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Where a catalog came from. The processor itself never branches on this;
/// it only feeds the status bar and the Reload action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Remembered(PathBuf),
    Server(String),
    File(PathBuf),
}

impl CatalogSource {
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Remembered(path) => format!("remembered: {}", path.display()),
            CatalogSource::Server(url) => format!("server: {url}"),
            CatalogSource::File(path) => format!("file: {}", path.display()),
        }
    }
}

/// Failures on the way from a load source to a normalized catalog.
/// The catalog is never replaced on error.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no read permission for {0:?}")]
    Permission(PathBuf),
    #[error("reading {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no server available")]
    Server(#[from] reqwest::Error),
    #[error("invalid items file")]
    Parse(#[from] serde_json::Error),
}

/// A loaded catalog: the normalized records in display order, the level
/// buckets derived from them, and the count of entries the normalizer
/// skipped. Replaced wholesale on every successful load.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub source: CatalogSource,
    pub items: Vec<ItemRecord>,
    pub buckets: Vec<LevelBucket>,
    pub skipped: usize,
}

impl LoadedCatalog {
    /// Shared parse path for every load source: parse, normalize, sort, group.
    pub fn from_json(text: &str, source: CatalogSource) -> Result<Self, LoadError> {
        let raw: RawCatalog = serde_json::from_str(text)?;
        let normalized = normalize(raw);
        let items = sort_items(&normalized.items);
        let buckets = group_by_level(&items);
        Ok(Self {
            source,
            items,
            buckets,
            skipped: normalized.skipped,
        })
    }

    pub fn load_path(path: &Path, remembered: bool) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => LoadError::Permission(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let source = if remembered {
            CatalogSource::Remembered(path.to_path_buf())
        } else {
            CatalogSource::File(path.to_path_buf())
        };
        Self::from_json(&text, source)
    }

    pub fn fetch_url(url: &str) -> Result<Self, LoadError> {
        let client = reqwest::blocking::Client::builder().build()?;
        let text = client
            .get(url)
            // Mirror the original fetch's no-store behavior so edits to the
            // served file show up on reload.
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()?
            .error_for_status()?
            .text()?;

        Self::from_json(&text, CatalogSource::Server(url.to_string()))
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }
}

/// The one piece of persisted state: an optional path to auto-load on the
/// next launch. Stored as a small JSON file under the platform config dir
/// and passed explicitly into the load sequence, never read ambiently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RememberedPath {
    pub path: Option<PathBuf>,
}

impl RememberedPath {
    fn config_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", statics::CONFIG_APP_NAME)
            .map(|dirs| dirs.config_dir().join(statics::CONFIG_FILE_NAME))
    }

    /// Missing or unreadable config reads as "nothing remembered".
    pub fn load() -> Self {
        let Some(file) = Self::config_file() else {
            return Self::default();
        };
        let Ok(text) = fs::read_to_string(&file) else {
            return Self::default();
        };
        serde_json::from_str(&text).unwrap_or_default()
    }

    pub fn store(path: &Path) -> anyhow::Result<()> {
        let file = Self::config_file().context("no config directory available")?;
        if let Some(dir) = file.parent() {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        }
        let state = Self {
            path: Some(path.to_path_buf()),
        };
        let text = serde_json::to_string_pretty(&state)?;
        fs::write(&file, text).with_context(|| format!("writing {}", file.display()))?;
        Ok(())
    }

    pub fn clear() -> anyhow::Result<()> {
        let Some(file) = Self::config_file() else {
            return Ok(());
        };
        if file.exists() {
            fs::remove_file(&file).with_context(|| format!("removing {}", file.display()))?;
        }
        Ok(())
    }
}
