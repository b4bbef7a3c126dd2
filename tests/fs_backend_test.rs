use mediashelf::model::{Kind, Movie, Record};
use mediashelf::store::fs_backend::FsBackend;
use mediashelf::store::{clear_all, RecordStore, StorageBackend, Upsert};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

fn assert_no_tmp_files(dir: &TempDir) {
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_slot_read_write_clear() {
    let (_dir, backend) = setup();

    assert_eq!(backend.read_slot("movies").unwrap(), None);
    backend.write_slot("movies", "[]").unwrap();
    assert_eq!(backend.read_slot("movies").unwrap(), Some("[]".to_string()));

    backend.clear_slot("movies").unwrap();
    assert_eq!(backend.read_slot("movies").unwrap(), None);

    // Clearing an absent slot is fine
    backend.clear_slot("movies").unwrap();
}

#[test]
fn test_atomic_write_artifacts() {
    let (dir, backend) = setup();
    backend.write_slot("books", "[1]").unwrap();
    backend.write_slot("books", "[2]").unwrap();

    let expected_path = dir.path().join("books.json");
    assert_eq!(backend.slot_path("books"), expected_path);
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "[2]");
    assert_no_tmp_files(&dir);
}

#[test]
fn test_write_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("a").join("b");
    let backend = FsBackend::new(root.clone());

    backend.write_slot("series", "[]").unwrap();
    assert!(root.join("series.json").exists());
}

#[test]
fn test_record_store_seeds_file_and_survives_reload() {
    let (dir, backend) = setup();

    {
        let mut store: RecordStore<Movie, _> = RecordStore::new(&backend);
        let seeded = store.load().unwrap().len();
        assert!(seeded > 0);
        assert!(dir.path().join("movies.json").exists());

        let mut movie = store.get_by_id(1).cloned().unwrap();
        movie.set_id(0);
        movie.title = "New Movie".to_string();
        assert_eq!(store.upsert(movie).unwrap(), Upsert::Inserted(seeded as u64 + 1));
        store.delete(1).unwrap();
    }

    let mut reopened: RecordStore<Movie, _> = RecordStore::new(&backend);
    let records = reopened.load().unwrap();
    assert!(records.iter().all(|m| m.id != 1));
    assert_eq!(records.last().map(|m| m.title.as_str()), Some("New Movie"));
    assert_no_tmp_files(&dir);
}

#[test]
fn test_slot_is_pretty_json_with_original_keys() {
    let (dir, backend) = setup();
    let mut store: RecordStore<Movie, _> = RecordStore::new(&backend);
    store.load().unwrap();

    let raw = fs::read_to_string(dir.path().join("movies.json")).unwrap();
    assert!(raw.starts_with("[\n"));
    assert!(raw.contains("\"imdbUrl\""));
    assert!(!raw.contains("imdb_url"));
}

#[test]
fn test_clear_all_removes_every_slot() {
    let (dir, backend) = setup();
    for kind in Kind::ALL {
        backend.write_slot(kind.slot(), "[]").unwrap();
    }
    fs::write(dir.path().join("config.json"), "{}").unwrap();

    clear_all(&backend).unwrap();
    for kind in Kind::ALL {
        assert!(!dir.path().join(format!("{}.json", kind.slot())).exists());
    }
    assert!(dir.path().join("config.json").exists());
}
