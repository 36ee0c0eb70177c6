//! Scenario tests - verify the full on-disk layout per platform and mode.

use std::path::PathBuf;

use mediathek_core::{FilmListType, OsClass, StandardLocations};

#[test]
fn portable_layout_lives_entirely_under_the_override() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let base = scratch.path().join("mv-portable");

    let locations = StandardLocations::new(
        OsClass::Linux,
        "/home/alice",
        Some(base.to_string_lossy().into_owned()),
    );

    assert_eq!(
        locations.bookmark_file().expect("bookmarks"),
        base.join("bookmarks.json")
    );
    assert_eq!(
        locations.config_file().expect("config"),
        base.join("mediathek.xml")
    );
    assert_eq!(
        locations.lock_file().expect("lock"),
        base.join("MediathekView.lock")
    );
    assert_eq!(
        locations.film_list_file().expect("film list"),
        base.join("filme.json")
    );
    assert_eq!(
        locations.film_index_dir().expect("index"),
        base.join("mv_index")
    );

    // Resolving any location created the base directory as a side effect.
    assert!(base.is_dir());

    // A second resolution finds the directory in place and agrees.
    assert_eq!(locations.settings_dir().expect("settings"), base);
}

#[test]
fn installed_linux_layout_sits_below_the_home_settings_folder() {
    let home = tempfile::tempdir().expect("tempdir");
    let locations = StandardLocations::new(OsClass::Linux, home.path(), None);

    let settings = home.path().join(".mediathek3");
    assert_eq!(locations.settings_dir().expect("settings"), settings);
    assert!(settings.is_dir());

    assert_eq!(
        locations.film_list_file().expect("film list"),
        settings.join("filme.json")
    );
    assert_eq!(
        locations.film_index_dir().expect("index"),
        settings.join("mv_index")
    );
    assert_eq!(
        locations.lock_file().expect("lock"),
        settings.join("MediathekView.lock")
    );
}

#[test]
fn installed_macos_layout_splits_settings_and_cache() {
    let home = tempfile::tempdir().expect("tempdir");
    let locations = StandardLocations::new(OsClass::MacOs, home.path(), None);

    let settings = home.path().join(".mediathek3");
    let cache = home.path().join("Library/Caches/MediathekView");

    // The settings trio stays in the settings folder.
    assert_eq!(
        locations.bookmark_file().expect("bookmarks"),
        settings.join("bookmarks.json")
    );
    assert_eq!(
        locations.config_file().expect("config"),
        settings.join("mediathek.xml")
    );
    assert_eq!(
        locations.lock_file().expect("lock"),
        settings.join("MediathekView.lock")
    );

    // The cache pair is relocated and the cache tree is not created.
    assert_eq!(
        locations.film_list_file().expect("film list"),
        cache.join("filme.json")
    );
    assert_eq!(
        locations.film_index_dir().expect("index"),
        cache.join("mv_index")
    );
    assert!(settings.is_dir());
    assert!(!cache.exists());
}

#[test]
fn download_defaults_per_platform() {
    let macos = StandardLocations::new(OsClass::MacOs, "/Users/alice", None);
    assert_eq!(
        macos.download_dir(),
        PathBuf::from("/Users/alice/Downloads")
    );

    let other = StandardLocations::new(OsClass::Other, "/home/alice", None);
    assert_eq!(other.download_dir(), PathBuf::from("/home/alice/Downloads"));

    let linux = StandardLocations::new(OsClass::Linux, "/home/alice", None)
        .with_download_probe(|_| Some(PathBuf::from("/data/dl")));
    assert_eq!(linux.download_dir(), PathBuf::from("/data/dl"));
}

#[test]
fn film_list_urls_resolve_against_the_fixed_base() {
    let full = StandardLocations::film_list_url(FilmListType::Full).expect("full");
    let diff = StandardLocations::film_list_url(FilmListType::DiffOnly).expect("diff");

    assert_eq!(full.as_str(), "https://liste.mediathekview.de/Filmliste-akt.xz");
    assert_eq!(
        diff.as_str(),
        "https://liste.mediathekview.de/Filmliste-diff.xz"
    );
}
