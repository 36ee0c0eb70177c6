//! Resolution of the standard on-disk locations and remote film list URLs.
//!
//! All derived paths funnel through [`StandardLocations::settings_dir`], which
//! is the only place that creates directories. In portable mode every path is
//! anchored under the caller-supplied base directory; in installed mode the
//! film list and the search index are relocated to the user cache directory on
//! macOS so profile backups do not sweep them up.

use std::path::{Path, PathBuf};

use serde::Serialize;
use url::Url;

use crate::error::{Error, Result};
use crate::xdg;

/// Settings folder name below the home directory in installed mode.
pub const SETTINGS_DIR_NAME: &str = ".mediathek3";
/// Bookmarks file, kept in the settings directory.
pub const BOOKMARK_FILE: &str = "bookmarks.json";
/// Main configuration file, kept in the settings directory.
pub const CONFIG_FILE: &str = "mediathek.xml";
/// Downloaded film list data file.
pub const FILM_LIST_FILE: &str = "filme.json";
/// Fallback download folder name below the home directory.
pub const DOWNLOAD_DIR_NAME: &str = "Downloads";
/// Base URL the film list variants are resolved against.
pub const FILM_LIST_BASE_URL: &str = "https://liste.mediathekview.de/";

const LOCK_FILE_NAME: &str = "MediathekView.lock";
const OSX_CACHE_DIRECTORY: &str = "Library/Caches/MediathekView";
const INDEX_DIR_NAME: &str = "mv_index";
const FULL_FILM_LIST: &str = "Filmliste-akt.xz";
const DIFF_FILM_LIST: &str = "Filmliste-diff.xz";

/// Which variant of the remote film list to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilmListType {
    /// The complete list.
    Full,
    /// Only the differences since the last full list.
    DiffOnly,
}

/// Host platform class, detected once per resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsClass {
    MacOs,
    Linux,
    Other,
}

impl OsClass {
    /// Classify the platform this binary was built for.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

impl std::fmt::Display for OsClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MacOs => write!(f, "macOS"),
            Self::Linux => write!(f, "Linux"),
            Self::Other => write!(f, "other"),
        }
    }
}

type DownloadProbe = Box<dyn Fn(&Path) -> Option<PathBuf> + Send + Sync>;

/// Resolver for every standard location of the application.
///
/// Holds the portable-mode override explicitly instead of process-global
/// state; construct it once at startup and pass it along.
pub struct StandardLocations {
    os: OsClass,
    home: PathBuf,
    portable_base: Option<String>,
    download_probe: DownloadProbe,
}

impl StandardLocations {
    /// Create a resolver with an explicit platform and home directory.
    pub fn new(os: OsClass, home: impl Into<PathBuf>, portable_base: Option<String>) -> Self {
        Self {
            os,
            home: home.into(),
            portable_base,
            download_probe: Box::new(xdg::download_dir),
        }
    }

    /// Create a resolver for the host platform and the user's home directory.
    pub fn detect(portable_base: Option<String>) -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(OsClass::detect(), home, portable_base)
    }

    /// Replace the download-directory probe, used by tests to avoid spawning
    /// a real `xdg-user-dir` process.
    #[must_use]
    pub fn with_download_probe(
        mut self,
        probe: impl Fn(&Path) -> Option<PathBuf> + Send + Sync + 'static,
    ) -> Self {
        self.download_probe = Box::new(probe);
        self
    }

    pub fn os(&self) -> OsClass {
        self.os
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// True iff a non-empty portable base directory was supplied.
    pub fn is_portable(&self) -> bool {
        matches!(self.portable_base.as_deref(), Some(dir) if !dir.is_empty())
    }

    /// Return the settings directory, creating it if it does not exist yet.
    ///
    /// Every other resolver calls this first. A directory that already exists
    /// is success; a failed creation is fatal and carries the attempted path.
    pub fn settings_dir(&self) -> Result<PathBuf> {
        let base = match self.portable_base.as_deref() {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => self.home.join(SETTINGS_DIR_NAME),
        };
        validate_path(&base)?;
        if !base.exists() {
            std::fs::create_dir_all(&base).map_err(|source| {
                tracing::error!(
                    "settings directory \"{}\" could not be created: {source}",
                    base.display()
                );
                Error::DirectoryCreation {
                    path: base.clone(),
                    source,
                }
            })?;
            tracing::debug!("created settings directory \"{}\"", base.display());
        }
        Ok(base)
    }

    /// Path of the bookmarks file.
    pub fn bookmark_file(&self) -> Result<PathBuf> {
        Ok(self.settings_dir()?.join(BOOKMARK_FILE))
    }

    /// Path of the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf> {
        let path = self.settings_dir()?.join(CONFIG_FILE);
        validate_path(&path)?;
        Ok(path)
    }

    /// Path of the process lockfile.
    ///
    /// The lock lives inside the settings directory so that multiple portable
    /// instances with distinct settings directories never collide on one
    /// shared lockfile.
    pub fn lock_file(&self) -> Result<PathBuf> {
        Ok(self.settings_dir()?.join(LOCK_FILE_NAME))
    }

    /// Path of the downloaded film list data file.
    pub fn film_list_file(&self) -> Result<PathBuf> {
        self.data_location(FILM_LIST_FILE)
    }

    /// Root directory of the film search index.
    pub fn film_index_dir(&self) -> Result<PathBuf> {
        self.data_location(INDEX_DIR_NAME)
    }

    fn data_location(&self, name: &str) -> Result<PathBuf> {
        if !self.is_portable() && self.os == OsClass::MacOs {
            // Kept outside the settings directory so the user cache is not
            // swept into routine profile backups. Not created here.
            Ok(self.home.join(OSX_CACHE_DIRECTORY).join(name))
        } else {
            Ok(self.settings_dir()?.join(name))
        }
    }

    /// The platform default download directory, always absolute.
    ///
    /// On Linux the `xdg-user-dir` probe is consulted first; every probe
    /// failure silently falls back to the fixed folder below home.
    pub fn download_dir(&self) -> PathBuf {
        let path = match self.os {
            OsClass::MacOs | OsClass::Other => self.home.join(DOWNLOAD_DIR_NAME),
            OsClass::Linux => (self.download_probe)(&self.home)
                .unwrap_or_else(|| self.home.join(DOWNLOAD_DIR_NAME)),
        };
        absolutize(path)
    }

    /// URL of the requested remote film list variant.
    pub fn film_list_url(kind: FilmListType) -> Result<Url> {
        let base = Url::parse(FILM_LIST_BASE_URL)?;
        let name = match kind {
            FilmListType::Full => FULL_FILM_LIST,
            FilmListType::DiffOnly => DIFF_FILM_LIST,
        };
        Ok(base.join(name)?)
    }

    /// Resolve every location once, for diagnostics output.
    pub fn report(&self) -> Result<LocationsReport> {
        Ok(LocationsReport {
            os: self.os,
            portable: self.is_portable(),
            settings_dir: self.settings_dir()?,
            bookmark_file: self.bookmark_file()?,
            config_file: self.config_file()?,
            lock_file: self.lock_file()?,
            film_list_file: self.film_list_file()?,
            film_index_dir: self.film_index_dir()?,
            download_dir: self.download_dir(),
        })
    }
}

/// Snapshot of every resolved location.
#[derive(Debug, Clone, Serialize)]
pub struct LocationsReport {
    pub os: OsClass,
    pub portable: bool,
    pub settings_dir: PathBuf,
    pub bookmark_file: PathBuf,
    pub config_file: PathBuf,
    pub lock_file: PathBuf,
    pub film_list_file: PathBuf,
    pub film_index_dir: PathBuf,
    pub download_dir: PathBuf,
}

fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(Error::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    #[cfg(windows)]
    {
        // The drive prefix legitimately contains ':', so only the components
        // after it are checked.
        for component in path.components() {
            if let std::path::Component::Normal(part) = component {
                let part = part.to_string_lossy();
                if part.contains(['<', '>', ':', '"', '|', '?', '*']) {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(&path))
            .unwrap_or(path)
    }
}

#[cfg(test)]
#[path = "locations_tests.rs"]
mod locations_tests;
