use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{dlg, init_store_with_data, setup_test_store};

use drivelog::store::drives::DriveStore;
use drivelog::store::kv::KvStore;

#[test]
fn test_add_and_list() {
    let store_path = setup_test_store("add_and_list");
    init_store_with_data(&store_path);

    dlg()
        .args(["--db", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-06-15"))
        .stdout(contains("1h 30m"))
        .stdout(contains("first lesson"))
        .stdout(contains("Night"))
        .stdout(contains("Raining"))
        .stdout(contains("2 drive(s) recorded."));
}

#[test]
fn test_list_orders_most_recent_first() {
    let store_path = setup_test_store("list_order");

    dlg()
        .args(["--db", &store_path, "--test", "init"])
        .assert()
        .success();

    // inserted out of order on purpose
    for date in ["2025-03-10", "2025-05-20", "2025-04-15"] {
        dlg()
            .args([
                "--db", &store_path, "add", date, "--from", "10:00", "--to", "11:00",
            ])
            .assert()
            .success();
    }

    let output = dlg()
        .args(["--db", &store_path, "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("utf8 stdout");
    let pos_may = stdout.find("2025-05-20").expect("may row");
    let pos_apr = stdout.find("2025-04-15").expect("apr row");
    let pos_mar = stdout.find("2025-03-10").expect("mar row");
    assert!(pos_may < pos_apr && pos_apr < pos_mar);
}

#[test]
fn test_list_empty_store() {
    let store_path = setup_test_store("list_empty");

    dlg()
        .args(["--db", &store_path, "--test", "init"])
        .assert()
        .success();

    dlg()
        .args(["--db", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("No drives recorded yet"));
}

#[test]
fn test_add_rejects_inverted_range() {
    let store_path = setup_test_store("inverted_range");

    dlg()
        .args(["--db", &store_path, "--test", "init"])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            &store_path,
            "add",
            "2025-06-15",
            "--from",
            "10:00",
            "--to",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("cannot end"));
}

#[test]
fn test_add_rejects_bad_inputs() {
    let store_path = setup_test_store("bad_inputs");

    dlg()
        .args(["--db", &store_path, "--test", "init"])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            &store_path,
            "add",
            "15/06/2025",
            "--from",
            "09:00",
            "--to",
            "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));

    dlg()
        .args([
            "--db",
            &store_path,
            "add",
            "2025-06-15",
            "--from",
            "9am",
            "--to",
            "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time"));

    dlg()
        .args([
            "--db",
            &store_path,
            "add",
            "2025-06-15",
            "--from",
            "09:00",
            "--to",
            "10:00",
            "--weather",
            "hailing",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid weather"));
}

#[test]
fn test_del_removes_drive() {
    let store_path = setup_test_store("del_drive");
    init_store_with_data(&store_path);

    let mut store = KvStore::open(&store_path).expect("open store");
    let records = DriveStore::load_all(&mut store).expect("load drives");
    assert_eq!(records.len(), 2);
    let target = records[0].id.to_string();
    drop(store);

    dlg()
        .args(["--db", &store_path, "del", &target, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    dlg()
        .args(["--db", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("1 drive(s) recorded."));
}

#[test]
fn test_del_unknown_id_fails() {
    let store_path = setup_test_store("del_unknown");
    init_store_with_data(&store_path);

    dlg()
        .args(["--db", &store_path, "del", "ffffffff", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No drive found"));
}

#[test]
fn test_edit_by_short_id() {
    let store_path = setup_test_store("edit_short_id");
    init_store_with_data(&store_path);

    let mut store = KvStore::open(&store_path).expect("open store");
    let records = DriveStore::load_all(&mut store).expect("load drives");
    // records[1] is the 2025-06-15 day drive
    let target = &records[1];
    assert!(target.day);
    let short_id: String = target.id.to_string().chars().take(8).collect();
    let full_id = target.id;
    drop(store);

    dlg()
        .args([
            "--db",
            &store_path,
            "edit",
            &short_id,
            "--night",
            "--weather",
            "foggy",
            "--to",
            "11:00",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    let mut store = KvStore::open(&store_path).expect("open store");
    let records = DriveStore::load_all(&mut store).expect("load drives");
    let edited = records.iter().find(|r| r.id == full_id).expect("edited id kept");
    assert!(!edited.day);
    assert_eq!(edited.weather.as_str(), "Foggy");

    dlg()
        .args(["--db", &store_path, "list"])
        .assert()
        .success()
        .stdout(contains("2h")); // 09:00 → 11:00
}

#[test]
fn test_edit_rejects_inverted_range() {
    let store_path = setup_test_store("edit_inverted");
    init_store_with_data(&store_path);

    let mut store = KvStore::open(&store_path).expect("open store");
    let records = DriveStore::load_all(&mut store).expect("load drives");
    let target = records[0].id.to_string();
    drop(store);

    dlg()
        .args(["--db", &store_path, "edit", &target, "--to", "00:05"])
        .assert()
        .failure()
        .stderr(contains("cannot end"));
}

#[test]
fn test_summary_totals_and_goals() {
    let store_path = setup_test_store("summary_totals");
    init_store_with_data(&store_path);

    dlg()
        .args([
            "--db",
            &store_path,
            "prefs",
            "--required-time",
            "100",
            "--required-night-time",
            "60",
        ])
        .assert()
        .success();

    dlg()
        .args(["--db", &store_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Total drive time: 2h / 1h 40m"))
        .stdout(contains("Total night drive time: 0h 30m / 1h"));
}

#[test]
fn test_summary_hidden_time_keeps_bar_title() {
    let store_path = setup_test_store("summary_toggle");
    init_store_with_data(&store_path);

    dlg()
        .args([
            "--db",
            &store_path,
            "prefs",
            "--show-drive-time",
            "false",
            "--show-night-time",
            "false",
            "--show-night-progress",
            "false",
        ])
        .assert()
        .success();

    dlg()
        .args(["--db", &store_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Total drive time:").not())
        .stdout(contains("Total drive time"))
        .stdout(contains("Total night drive time").not());
}

#[test]
fn test_summary_all_hidden() {
    let store_path = setup_test_store("summary_all_hidden");
    init_store_with_data(&store_path);

    dlg()
        .args([
            "--db",
            &store_path,
            "prefs",
            "--show-drive-time",
            "false",
            "--show-drive-progress",
            "false",
            "--show-night-time",
            "false",
            "--show-night-progress",
            "false",
        ])
        .assert()
        .success();

    dlg()
        .args(["--db", &store_path, "summary"])
        .assert()
        .success()
        .stdout(contains("hidden"));
}

#[test]
fn test_prefs_defaults_printed() {
    let store_path = setup_test_store("prefs_defaults");

    dlg()
        .args(["--db", &store_path, "--test", "init"])
        .assert()
        .success();

    dlg()
        .args(["--db", &store_path, "prefs"])
        .assert()
        .success()
        .stdout(contains("required_drive_time:       3000 min (50h)"))
        .stdout(contains("required_night_drive_time: 600 min (10h)"));
}

#[test]
fn test_prefs_saved_wholesale() {
    let store_path = setup_test_store("prefs_saved");

    dlg()
        .args(["--db", &store_path, "--test", "init"])
        .assert()
        .success();

    dlg()
        .args([
            "--db",
            &store_path,
            "prefs",
            "--required-time",
            "1500",
            "--show-drive-progress",
            "false",
        ])
        .assert()
        .success()
        .stdout(contains("Preferences saved."));

    dlg()
        .args(["--db", &store_path, "prefs", "--print"])
        .assert()
        .success()
        .stdout(contains("required_drive_time:       1500 min (25h)"))
        .stdout(contains("show_drive_progress:       false"))
        .stdout(contains("show_drive_time:           true"));
}

#[test]
fn test_config_print() {
    let store_path = setup_test_store("config_print");

    dlg()
        .args(["--db", &store_path, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("database:"))
        .stdout(contains("progress_bar_width:"));
}

#[test]
fn test_corrupt_drives_blob_is_an_error() {
    let store_path = setup_test_store("corrupt_blob");

    dlg()
        .args(["--db", &store_path, "--test", "init"])
        .assert()
        .success();

    let mut store = KvStore::open(&store_path).expect("open store");
    store.set("drives", "not json at all").expect("set blob");
    drop(store);

    dlg()
        .args(["--db", &store_path, "list"])
        .assert()
        .failure()
        .stderr(contains("corrupt"));
}
