//! Tests for `veil mask`.

use crate::support::*;

#[test]
fn test_mask_compose_scenario() {
    let t = Test::new();
    t.write(
        COMPOSE_PATH,
        "DATABASE_PASSWORD=hunter2\nMYSQL_ROOT_PASSWORD=hunter2\n",
    );

    let output = t.mask();
    assert_success(&output);
    assert_stdout_contains(&output, "masked 2 secrets in docker-compose.yml");

    assert_eq!(
        t.read(COMPOSE_PATH),
        "DATABASE_PASSWORD=******\nMYSQL_ROOT_PASSWORD=******\n"
    );
    assert_eq!(
        t.stored(COMPOSE_PATH),
        Some(vec!["hunter2".to_string(), "hunter2".to_string()])
    );
}

#[test]
fn test_mask_settings_records_in_pattern_order() {
    let t = Test::new();
    t.write(SETTINGS_PATH, SETTINGS);

    assert_success(&t.mask());

    let masked = t.read(SETTINGS_PATH);
    for secret in SETTINGS_SECRETS {
        assert!(!masked.contains(secret), "{} still present", secret);
    }
    assert!(masked.contains(r#"host: "127.0.0.1""#));
    assert!(masked.contains(r#"user: "root""#));

    let expected: Vec<String> = SETTINGS_SECRETS.iter().map(|s| s.to_string()).collect();
    assert_eq!(t.stored(SETTINGS_PATH), Some(expected));
}

#[test]
fn test_mask_twice_is_idempotent() {
    let t = Test::with_targets();

    assert_success(&t.mask());
    let compose = t.read(COMPOSE_PATH);
    let settings = t.read(SETTINGS_PATH);
    let store = t.read(STORE_PATH);

    let output = t.mask();
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets found");

    assert_eq!(t.read(COMPOSE_PATH), compose);
    assert_eq!(t.read(SETTINGS_PATH), settings);
    assert_eq!(t.read(STORE_PATH), store);
}

#[test]
fn test_mask_without_targets_creates_empty_store() {
    let t = Test::new();

    let output = t.mask();
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets found");
    assert_eq!(t.read(STORE_PATH).trim(), "{}");
}

#[test]
fn test_mask_file_without_matches_left_alone() {
    let t = Test::new();
    t.write(COMPOSE_PATH, "services:\n  web:\n    image: nginx\n");

    assert_success(&t.mask());
    assert_eq!(t.read(COMPOSE_PATH), "services:\n  web:\n    image: nginx\n");
    assert_eq!(t.stored(COMPOSE_PATH), None);
}

#[test]
fn test_mask_repairs_corrupt_store() {
    let t = Test::with_targets();
    t.write(STORE_PATH, "this is not json");

    assert_success(&t.mask());
    assert_eq!(
        t.stored(COMPOSE_PATH),
        Some(vec!["hunter2".to_string(), "hunter2".to_string()])
    );
}

#[test]
fn test_mask_store_is_pretty_printed() {
    let t = Test::new();
    t.write(COMPOSE_PATH, "DATABASE_PASSWORD=x1\n");

    assert_success(&t.mask());
    assert_eq!(
        t.read(STORE_PATH),
        "{\n    \"docker-compose.yml\": [\n        \"x1\"\n    ]\n}\n"
    );
}

#[test]
fn test_mask_custom_store_flag() {
    let t = Test::with_targets();

    let output = t
        .cmd()
        .args(["mask", "--store", "private/originals.json"])
        .output()
        .unwrap();
    // The store's parent directory is not created.
    assert_failure(&output);

    std::fs::create_dir_all(t.path("private")).unwrap();
    let output = t
        .cmd()
        .args(["mask", "--store", "private/originals.json"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.path("private/originals.json").exists());
    assert!(!t.path(STORE_PATH).exists());
}

#[test]
fn test_mask_root_from_env() {
    let t = Test::with_targets();
    let other = tempfile::TempDir::new().unwrap();

    let output = t
        .cmd()
        .current_dir(other.path())
        .env("VEIL_ROOT", t.dir.path())
        .arg("mask")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.read(COMPOSE_PATH).contains("DATABASE_PASSWORD=******"));
    assert!(t.path(STORE_PATH).exists());
}

#[test]
fn test_mask_keeps_entries_beside_malformed_store_entry() {
    let t = Test::new();
    t.write(COMPOSE_PATH, "DATABASE_PASSWORD=******\n");
    t.write(SETTINGS_PATH, SETTINGS);
    t.write(STORE_PATH, r#"{"docker-compose.yml":["hunter2"],"notes":1}"#);

    let output = t.mask();
    assert_success(&output);
    assert_stderr_contains(&output, "ignoring malformed secret store entry");

    assert_eq!(t.stored(COMPOSE_PATH), Some(vec!["hunter2".to_string()]));
    let store: serde_json::Value = serde_json::from_str(&t.read(STORE_PATH)).unwrap();
    assert_eq!(store["notes"], 1);

    assert_success(&t.unmask());
    assert_eq!(t.read(COMPOSE_PATH), "DATABASE_PASSWORD=hunter2\n");
    assert_eq!(t.read(SETTINGS_PATH), SETTINGS);
}

#[test]
fn test_mask_command_is_case_insensitive() {
    let t = Test::with_targets();

    let output = t.cmd().arg("MASK").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "masked 2 secrets in docker-compose.yml");
    assert!(t.read(COMPOSE_PATH).contains("DATABASE_PASSWORD=******"));

    let output = t.cmd().args(["--store", "Status.json", "Unmask"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "no secrets found to restore");
    assert_stdout_contains(&output, "make sure Status.json exists");

    let output = t.cmd().arg("UnMask").output().unwrap();
    assert_success(&output);
    assert_eq!(t.read(COMPOSE_PATH), COMPOSE);
}
