//! mediathek-core: standard file locations for MediathekView
//!
//! This crate resolves every filesystem location the application needs for
//! persistent state (settings directory, bookmarks, configuration, film list,
//! search index, lockfile), derives the platform default download directory
//! and builds the remote film list URLs.

pub mod error;
pub mod locations;
pub mod xdg;

pub use error::Error;
pub use error::Result;
pub use locations::FilmListType;
pub use locations::LocationsReport;
pub use locations::OsClass;
pub use locations::StandardLocations;

/// Application name used for the cache directory and the lockfile.
pub const APP_NAME: &str = "MediathekView";
