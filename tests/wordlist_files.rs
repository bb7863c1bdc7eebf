//! Loading word lists from disk.

use std::io::Write;

use tempfile::NamedTempFile;
use word_guess::game::{GameConfig, Session};
use word_guess::wordlists::loader::{load_from_file, load_source};
use word_guess::wordlists::{FALLBACK_COUNT, PoolSource};

fn write_list(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_words_from_file() {
    let file = write_list("Tiger\ngrape\n\ncat\nsix6x\nopaque\ntiger\n");
    let pool = load_from_file(file.path(), 5);

    assert_eq!(pool.source(), PoolSource::Loaded);
    assert_eq!(pool.words().len(), 4);
    assert_eq!(pool.available_lengths(), &[3, 5, 6]);
    assert_eq!(pool.active_length(), 5);
    assert_eq!(pool.active_count(), 2);
}

#[test]
fn preferred_length_falls_back_to_smallest() {
    let file = write_list("cat\nopaque\n");
    let pool = load_from_file(file.path(), 5);

    assert_eq!(pool.active_length(), 3);
    assert!(pool.active_words().all(|w| w.len() == 3));
}

#[test]
fn empty_file_uses_built_in_list() {
    let file = write_list("\n  \n1234\n");
    let pool = load_from_file(file.path(), 5);

    assert_eq!(pool.source(), PoolSource::Fallback);
    assert_eq!(pool.words().len(), FALLBACK_COUNT);
}

#[test]
fn missing_file_uses_built_in_list() {
    let dir = tempfile::tempdir().unwrap();
    let pool = load_source(Some(dir.path().join("missing.txt").as_path()), 5);

    assert_eq!(pool.source(), PoolSource::Fallback);
    assert_eq!(pool.active_length(), 5);
}

#[test]
fn session_reads_configured_file() {
    let file = write_list("tiger\n");
    let config = GameConfig {
        wordlist: Some(file.path().to_path_buf()),
        seed: Some(5),
        ..GameConfig::default()
    };
    let session = Session::from_config(config).unwrap();

    assert_eq!(session.round().target().text(), "tiger");
    assert_eq!(session.pool().source(), PoolSource::Loaded);
}
