use dolphin_engine::{
    apply_tune, JsonFileStore, MemoryStore, Profile, ProfileStore, RewardItem, TuneRecord,
};

fn tuned_profile() -> Profile {
    let item = RewardItem::new("Atlantis Crystal", "✨", 0.01);
    let mut profile = Profile {
        battle_points: 42,
        ..Default::default()
    };
    profile.tunes.insert(
        "dolphindive".into(),
        apply_tune(&TuneRecord::default(), &[&item], 99).unwrap(),
    );
    profile
}

#[test]
fn memory_store_defaults_unknown_users() {
    let store = MemoryStore::new();
    assert_eq!(store.load("nobody").unwrap(), Profile::default());
    store.save("u", &tuned_profile()).unwrap();
    assert_eq!(store.load("u").unwrap(), tuned_profile());
}

#[test]
fn json_store_persists_between_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("profiles.json");

    let store = JsonFileStore::new(&path);
    assert_eq!(store.load("u").unwrap(), Profile::default());
    store.save("u", &tuned_profile()).unwrap();
    store.save("other", &Profile::default()).unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load("u").unwrap(), tuned_profile());
    assert_eq!(reopened.load("other").unwrap(), Profile::default());
}

#[test]
fn json_store_reads_profiles_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profiles.json");
    std::fs::write(&path, r#"{"u": {"battle_points": 7}}"#).unwrap();
    let store = JsonFileStore::new(&path);
    let profile = store.load("u").unwrap();
    assert_eq!(profile.battle_points, 7);
    assert!(profile.tunes.is_empty());
}
