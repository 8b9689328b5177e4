use assert_cmd::Command;
use predicates::prelude::*;

fn shelflog(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shelflog").unwrap();
    cmd.env("SHELFLOG_HOME", home)
        .env_remove("SHELFLOG_API_KEY");
    cmd
}

#[test]
fn add_movie_then_list_shows_it() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args([
            "add", "movie", "Dune", "--rating", "4", "--date", "2024-03-01", "--year", "2021",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Logged movie: Dune"));

    shelflog(temp_dir.path())
        .args(["list", "movie"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Dune (2021)"))
        .stdout(predicates::str::contains("★★★★☆"))
        .stdout(predicates::str::contains("2024-03-01"));

    // Persisted under the movie storage key, independent of the others.
    assert!(temp_dir.path().join("movies.json").exists());
    assert!(!temp_dir.path().join("books.json").exists());
}

#[test]
fn dune_scenario_delete_leaves_empty_persisted_collection() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args(["add", "movie", "Dune", "--rating", "4", "--date", "2024-03-01"])
        .assert()
        .success();

    shelflog(temp_dir.path())
        .args(["delete", "1", "--category", "movie", "--yes"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted movie: Dune"));

    let blob = std::fs::read_to_string(temp_dir.path().join("movies.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 0);
}

#[test]
fn delete_declined_changes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args(["add", "event", "Concert", "--location", "Roskilde"])
        .assert()
        .success();

    shelflog(temp_dir.path())
        .args(["delete", "1", "--category", "event"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Operation cancelled."));

    shelflog(temp_dir.path())
        .args(["list", "event"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Concert"));
}

#[test]
fn listing_is_date_descending() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args(["add", "book", "Older Read", "--date", "2023-05-01"])
        .assert()
        .success();
    shelflog(temp_dir.path())
        .args(["add", "book", "Newer Read", "--date", "2024-05-01"])
        .assert()
        .success();

    let output = shelflog(temp_dir.path())
        .args(["list", "book"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let newer = stdout.find("Newer Read").unwrap();
    let older = stdout.find("Older Read").unwrap();
    assert!(newer < older, "most recent entry should list first");
}

#[test]
fn use_switches_the_default_category() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args(["add", "book", "Dune", "--author", "Frank Herbert"])
        .assert()
        .success();

    shelflog(temp_dir.path())
        .args(["use", "book"])
        .assert()
        .success();

    // Bare `list` now shows the book collection.
    shelflog(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("by Frank Herbert"));
}

#[test]
fn edit_updates_fields_in_place() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args(["add", "movie", "Dune", "--rating", "3", "--date", "2024-03-01"])
        .assert()
        .success();

    shelflog(temp_dir.path())
        .args([
            "edit", "1", "--category", "movie", "--rating", "5", "--review", "held up",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Updated movie: Dune"));

    shelflog(temp_dir.path())
        .args(["view", "1", "--category", "movie"])
        .assert()
        .success()
        .stdout(predicates::str::contains("★★★★★"))
        .stdout(predicates::str::contains("held up"));

    // Still exactly one record.
    let blob = std::fs::read_to_string(temp_dir.path().join("movies.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}

#[test]
fn edit_rejects_flags_from_another_category() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args(["add", "movie", "Dune"])
        .assert()
        .success();

    shelflog(temp_dir.path())
        .args(["edit", "1", "--category", "movie", "--author", "Herbert"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("--author does not apply"));
}

#[test]
fn lookup_without_api_key_prints_hint() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args(["lookup", "dune"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No metadata API key configured"));
}

#[test]
fn malformed_collection_blob_degrades_to_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("movies.json"), "{this is not json").unwrap();

    shelflog(temp_dir.path())
        .args(["list", "movie"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No movies logged yet."));
}

#[test]
fn config_set_and_get_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();

    shelflog(temp_dir.path())
        .args(["config", "debounce-ms", "150"])
        .assert()
        .success();

    shelflog(temp_dir.path())
        .args(["config", "debounce-ms"])
        .assert()
        .success()
        .stdout(predicates::str::contains("150"));
}
