use std::collections::HashMap;

use tempfile::TempDir;

use pionier_app::config::{load_config, save_config, AppConfig};
use pionier_auth::credentials::CredentialTable;
use pionier_bedrock::{CredentialSource, DEFAULT_MODEL_ID};

fn sample_config(dir: &TempDir) -> AppConfig {
    let mut users = HashMap::new();
    users.insert(
        "alice".to_string(),
        "$2b$12$C6UzMDM.H6dfI/f/IKcEeO7ZDLQ8oTmcKq0A9QmCOWYkKO0a2S8y6".to_string(),
    );
    AppConfig {
        config_version: 0,
        region: "eu-central-1".to_string(),
        model_id: DEFAULT_MODEL_ID.to_string(),
        credentials: CredentialSource::Profile {
            profile_name: "pionier".to_string(),
        },
        history_path: dir.path().join("translation_history.json"),
        users: CredentialTable::new(users),
    }
}

#[test]
fn config_round_trips_and_gets_stamped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    save_config(&path, &sample_config(&dir)).unwrap();
    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.region, "eu-central-1");
    assert_eq!(loaded.model_id, DEFAULT_MODEL_ID);
    assert!(matches!(
        loaded.credentials,
        CredentialSource::Profile { ref profile_name } if profile_name == "pionier"
    ));
}

#[test]
fn unversioned_config_migrates_to_v1() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    // A pre-versioned config: no config_version, no model_id.
    let raw = serde_json::json!({
        "region": "eu-central-1",
        "credentials": { "type": "default_chain" },
        "history_path": dir.path().join("translation_history.json"),
        "users": { "alice": "$2b$12$C6UzMDM.H6dfI/f/IKcEeO7ZDLQ8oTmcKq0A9QmCOWYkKO0a2S8y6" }
    });
    std::fs::write(&path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, 1);
    assert_eq!(loaded.model_id, DEFAULT_MODEL_ID);
}

#[test]
fn config_newer_than_this_build_is_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let raw = serde_json::json!({
        "config_version": 99,
        "region": "eu-central-1",
        "credentials": { "type": "default_chain" },
        "history_path": "x.json",
        "users": {}
    });
    std::fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();

    assert!(load_config(&path).is_err());
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_readable_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &sample_config(&dir)).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
