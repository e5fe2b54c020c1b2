use predicates::str::contains;
use std::fs;

mod common;
use common::{add_item, init_store_july_2024, setup_test_store, temp_out, tlk};

#[test]
fn test_export_csv_all_records() {
    let store_path = setup_test_store("export_csv_all");
    init_store_july_2024(&store_path);

    add_item(&store_path, "2024-07-01", "basic_cleaning", "10");
    add_item(&store_path, "2024-07-02", "wearpack", "2");

    let out = temp_out("export_csv_all", "csv");

    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "export",
            "--format",
            "csv",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,weekday,status,pairs,premium,income,meal_allowance,kasbon"));
    assert!(content.contains("2024-07-01,Mon,"));
    assert!(content.contains("2024-07-02,Tue,"));
    assert!(content.contains("100000"));
    assert!(content.contains("50000"));
}

#[test]
fn test_export_json_full_month() {
    let store_path = setup_test_store("export_json_month");
    init_store_july_2024(&store_path);

    add_item(&store_path, "2024-07-01", "boots_hard", "3");

    let out = temp_out("export_json_month", "json");

    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--month",
            "2024-07",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");
    // every calendar day of July, recorded or not
    assert_eq!(rows.len(), 31);
    assert_eq!(rows[0]["date"], "2024-07-01");
    assert_eq!(rows[0]["income"], 60_000);
    assert_eq!(rows[30]["date"], "2024-07-31");
    assert_eq!(rows[30]["status"], "-");
}

#[test]
fn test_export_rejects_relative_path() {
    let store_path = setup_test_store("export_relative_path");
    init_store_july_2024(&store_path);

    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "export",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let store_path = setup_test_store("export_force");
    init_store_july_2024(&store_path);

    add_item(&store_path, "2024-07-01", "tas", "1");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed existing file");

    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "export",
            "--file",
            &out,
            "-f",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2024-07-01"));
}

#[test]
fn test_backup_and_import_round_trip() {
    let store_path = setup_test_store("backup_import_rt");
    init_store_july_2024(&store_path);

    add_item(&store_path, "2024-07-01", "basic_cleaning", "10");

    let backup = temp_out("backup_import_rt", "json");

    tlk()
        .args(["--store", &store_path, "--test", "backup", "--file", &backup])
        .assert()
        .success()
        .stdout(contains("Backup written"));

    // Damage the live store, then restore from the backup
    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "target",
            "--set",
            "9000000",
        ])
        .assert()
        .success();

    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "import",
            "--file",
            &backup,
            "-f",
        ])
        .assert()
        .success()
        .stdout(contains("Imported 1 records"));

    tlk()
        .args(["--store", &store_path, "--test", "target"])
        .assert()
        .success()
        .stdout(contains("Rp3.100.000"));
}

#[test]
fn test_import_prompt_declined_keeps_store() {
    let store_path = setup_test_store("import_declined");
    init_store_july_2024(&store_path);

    let backup = temp_out("import_declined", "json");
    tlk()
        .args(["--store", &store_path, "--test", "backup", "--file", &backup])
        .assert()
        .success();

    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "target",
            "--set",
            "9000000",
        ])
        .assert()
        .success();

    tlk()
        .args(["--store", &store_path, "--test", "import", "--file", &backup])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    tlk()
        .args(["--store", &store_path, "--test", "target"])
        .assert()
        .success()
        .stdout(contains("Rp9.000.000"));
}

#[test]
fn test_import_rejects_invalid_document() {
    let store_path = setup_test_store("import_invalid_doc");
    init_store_july_2024(&store_path);

    let bad = temp_out("import_invalid_doc", "json");
    fs::write(&bad, r#"{"records": {}}"#).expect("write bad doc");

    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "import",
            "--file",
            &bad,
            "-f",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid backup document"));
}

#[test]
fn test_import_tolerates_legacy_record_fields() {
    let store_path = setup_test_store("import_legacy_fields");

    let doc = r#"{
        "monthlyTarget": 3100000,
        "mealCost": 15000,
        "currentYear": 2024,
        "currentMonth": 6,
        "records": {
            "2024-07-01": {
                "date": "2024-07-01",
                "isWorkDay": true,
                "items": { "basic_cleaning": 10 },
                "kasbon": 0,
                "manualDeductions": 5000,
                "notes": "old app field"
            }
        }
    }"#;
    let legacy = temp_out("import_legacy_fields", "json");
    fs::write(&legacy, doc).expect("write legacy doc");

    tlk()
        .args([
            "--store",
            &store_path,
            "--test",
            "import",
            "--file",
            &legacy,
            "-f",
        ])
        .assert()
        .success()
        .stdout(contains("Imported 1 records"));

    tlk()
        .args(["--store", &store_path, "--test", "status", "2024-07-01"])
        .assert()
        .success()
        .stdout(contains("Service income   : Rp100.000"));
}
