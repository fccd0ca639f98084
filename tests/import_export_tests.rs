use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{oar, seed_store, setup_test_store, temp_out};

#[test]
fn import_merges_by_id_and_computes_missing_seconds() {
    let store = setup_test_store("import_merge");
    seed_store(&store);

    // Id 1 is already present and must be skipped; id 10 is new and has
    // no timeSeconds, so the codec fills it in.
    let incoming = temp_out("import_merge_in", "json");
    fs::write(
        &incoming,
        r#"[
          {"id": "1", "name": "Jan Novák", "testType": "2k", "date": "2025-02-01", "time": "6:45,3"},
          {"id": "10", "name": "Marie Malá", "testType": "2k", "date": "2025-03-10", "time": "7:20,5"}
        ]"#,
    )
    .expect("write incoming");

    oar()
        .args(["--store", &store, "--test", "import", "--file", &incoming])
        .assert()
        .success()
        .stdout(contains("Imported 1 new results (1 already present)."));

    let raw = fs::read_to_string(&store).expect("store file");
    let records: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let added = records
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == "10")
        .expect("imported record");

    let sec = added["timeSeconds"].as_f64().expect("computed seconds");
    assert!((sec - 440.5).abs() < 1e-9);
}

#[test]
fn import_replace_rebuilds_the_collection() {
    let store = setup_test_store("import_replace");
    seed_store(&store);

    let incoming = temp_out("import_replace_in", "json");
    fs::write(
        &incoming,
        r#"[{"id": "1", "name": "Marie Malá", "testType": "6k", "date": "2025-05-01", "timeSeconds": 1400.0}]"#,
    )
    .expect("write incoming");

    oar()
        .args(["--store", &store, "--test", "import", "--file", &incoming, "--replace"])
        .assert()
        .success()
        .stdout(contains("collection replaced"));

    oar()
        .args(["--store", &store, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("Marie Malá"))
        .stdout(contains("Jan Novák").not());
}

#[test]
fn import_rejects_a_malformed_file() {
    let store = setup_test_store("import_malformed");

    let incoming = temp_out("import_malformed_in", "json");
    fs::write(&incoming, "{not json").expect("write incoming");

    oar()
        .args(["--store", &store, "--test", "import", "--file", &incoming])
        .assert()
        .failure()
        .stderr(contains("not a valid results file"));
}

#[test]
fn unknown_wire_fields_survive_import_and_json_export() {
    let store = setup_test_store("extras_roundtrip");

    let incoming = temp_out("extras_in", "json");
    fs::write(
        &incoming,
        r#"[{"id": "1", "name": "Jan Novák", "testType": "2k", "date": "2025-02-01",
             "timeSeconds": 405.3, "strokeRate": 32, "coach": "Malý"}]"#,
    )
    .expect("write incoming");

    oar()
        .args(["--store", &store, "--test", "import", "--file", &incoming])
        .assert()
        .success();

    let out = temp_out("extras_out", "json");
    oar()
        .args(["--store", &store, "--test", "export", "--format", "json", "--file", &out])
        .assert()
        .success()
        .stdout(contains("json export completed"));

    let exported = fs::read_to_string(&out).expect("exported file");
    assert!(exported.contains("strokeRate"));
    assert!(exported.contains("coach"));
    assert!(exported.contains("timeSeconds"));
}

#[test]
fn csv_export_writes_wire_columns() {
    let store = setup_test_store("export_csv");
    seed_store(&store);

    let out = temp_out("export_csv", "csv");
    oar()
        .args(["--store", &store, "--test", "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let exported = fs::read_to_string(&out).expect("exported file");
    let mut lines = exported.lines();
    assert_eq!(
        lines.next(),
        Some("id,name,club,category,testType,date,time,timeSeconds,note")
    );
    assert!(exported.contains("Jan Novák"));
    assert!(exported.contains("6:45,3"));
}

#[test]
fn export_honors_filters() {
    let store = setup_test_store("export_filtered");
    seed_store(&store);

    let out = temp_out("export_filtered", "csv");
    oar()
        .args([
            "--store", &store, "--test",
            "export", "--format", "csv", "--file", &out,
            "--test-type", "6k",
        ])
        .assert()
        .success();

    let exported = fs::read_to_string(&out).expect("exported file");
    assert!(exported.contains("21:30,0"));
    assert!(!exported.contains("6:45,3"));
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let store = setup_test_store("export_force");
    seed_store(&store);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "existing").expect("pre-existing file");

    oar()
        .args(["--store", &store, "--test", "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("use --force to overwrite"));

    oar()
        .args(["--store", &store, "--test", "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
}

#[test]
fn export_requires_an_absolute_path() {
    let store = setup_test_store("export_relative");
    seed_store(&store);

    oar()
        .args(["--store", &store, "--test", "export", "--format", "csv", "--file", "out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
