use std::collections::HashMap;

use pionier_auth::credentials::{hash_password, CredentialTable};

fn table_with(users: &[(&str, &str)]) -> CredentialTable {
    let users: HashMap<String, String> = users
        .iter()
        .map(|(name, password)| {
            let hash = hash_password(password).expect("hashing should succeed");
            (name.to_string(), hash)
        })
        .collect();
    CredentialTable::new(users)
}

#[test]
fn configured_pairs_verify() {
    let table = table_with(&[("alice", "s3cret"), ("bob", "hunter2")]);

    assert!(table.verify("alice", "s3cret"));
    assert!(table.verify("bob", "hunter2"));
}

#[test]
fn wrong_password_and_unknown_user_are_indistinguishable() {
    let table = table_with(&[("alice", "s3cret")]);

    let wrong_password = table.verify("alice", "nope");
    let unknown_user = table.verify("mallory", "s3cret");

    assert!(!wrong_password);
    assert!(!unknown_user);
    assert_eq!(wrong_password, unknown_user);
}

#[test]
fn malformed_stored_hash_fails_closed() {
    let mut users = HashMap::new();
    users.insert("carol".to_string(), "not-a-bcrypt-hash".to_string());
    let table = CredentialTable::new(users);

    assert!(!table.verify("carol", "anything"));
}

#[test]
fn stored_hashes_embed_salt_and_cost() {
    // Two hashes of the same password differ (fresh salt each time) yet
    // both verify.
    let first = hash_password("s3cret").unwrap();
    let second = hash_password("s3cret").unwrap();
    assert_ne!(first, second);

    let mut users = HashMap::new();
    users.insert("alice".to_string(), first);
    users.insert("bob".to_string(), second);
    let table = CredentialTable::new(users);

    assert!(table.verify("alice", "s3cret"));
    assert!(table.verify("bob", "s3cret"));
}

#[test]
fn table_deserializes_from_plain_json_object() {
    let hash = hash_password("s3cret").unwrap();
    let json = format!("{{\"alice\": {}}}", serde_json::to_string(&hash).unwrap());

    let table: CredentialTable = serde_json::from_str(&json).unwrap();
    assert!(table.verify("alice", "s3cret"));
}
