//! The `config` command group: list, set, and delete persisted settings.
//!
//! Each handler performs a fresh read of the whole mapping, mutates it in
//! memory, and writes it back in full. Validation always runs before any
//! write, so a rejected value never touches the file.

use crate::config::{validate, SettingsError, SettingsStore};
use crate::output::{OutputContext, OutputMode};

/// Handle `config list`.
pub fn list(
    store: &SettingsStore,
    ctx: OutputContext,
    mode: OutputMode,
) -> Result<(), SettingsError> {
    let settings = store.load()?;

    if mode.is_json() {
        // An empty mapping is an empty object, not a message.
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    if settings.is_empty() {
        println!("  No settings found.");
        return Ok(());
    }

    let width = settings
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("Setting".len());

    if !ctx.terse {
        println!("\x1b[1m{:<width$}  {}\x1b[0m", "Setting", "Value");
    }
    for (name, value) in settings.iter() {
        println!("{name:<width$}  {value}");
    }

    Ok(())
}

/// Handle `config set <name> <value>`.
pub fn set(
    store: &SettingsStore,
    mode: OutputMode,
    name: &str,
    value: &str,
) -> Result<(), SettingsError> {
    let mut settings = store.load()?;

    let value = validate::normalize(name, value)?;

    if !mode.is_json() {
        println!("✏️  Setting \"{name}\" to \"{value}\"");
    }

    settings.set(name, value.clone());
    store.save(&settings)?;

    if mode.is_json() {
        println!(
            "{}",
            serde_json::json!({ "status": "saved", "name": name, "value": value })
        );
    } else {
        println!("✅ Changes saved");
    }
    Ok(())
}

/// Handle `config delete <name>`.
pub fn delete(store: &SettingsStore, mode: OutputMode, name: &str) -> Result<(), SettingsError> {
    let mut settings = store.load()?;

    if !settings.contains(name) {
        // Absent keys warn without writing; the command still succeeds.
        tracing::warn!(name, "delete requested for a setting that does not exist");
        if mode.is_json() {
            println!(
                "{}",
                serde_json::json!({ "status": "not-found", "name": name })
            );
        } else {
            println!("⚠️  Setting \"{name}\" does not exist");
        }
        return Ok(());
    }

    if !mode.is_json() {
        println!("🗑️  Deleting \"{name}\"");
    }

    settings.remove(name);
    store.save(&settings)?;

    if mode.is_json() {
        println!(
            "{}",
            serde_json::json!({ "status": "deleted", "name": name })
        );
    } else {
        println!("✅ Changes saved");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SettingsStore {
        SettingsStore::at(dir.path().join("settings.json"))
    }

    #[test]
    fn test_set_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        set(&store, OutputMode::Human, "region", "west").unwrap();

        let settings = store.load().unwrap();
        assert_eq!(settings.get("region"), Some("west"));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn test_set_normalizes_endpoint() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        set(&store, OutputMode::Human, "endpoint", "HTTPS://Example.com/").unwrap();

        let settings = store.load().unwrap();
        assert_eq!(settings.get("endpoint"), Some("https://example.com"));
    }

    #[test]
    fn test_rejected_value_never_touches_the_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        set(&store, OutputMode::Human, "endpoint", "https://example.com").unwrap();
        let before = fs::read(store.path()).unwrap();

        let err = set(&store, OutputMode::Human, "endpoint", "not-a-url").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));

        // Prior value unchanged, byte for byte.
        assert_eq!(fs::read(store.path()).unwrap(), before);
        assert_eq!(
            store.load().unwrap().get("endpoint"),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_rejected_value_does_not_create_the_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(set(&store, OutputMode::Human, "endpoint", "nope").is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_delete_absent_key_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        set(&store, OutputMode::Human, "region", "west").unwrap();
        let before = fs::read(store.path()).unwrap();
        let mtime = fs::metadata(store.path()).unwrap().modified().unwrap();

        delete(&store, OutputMode::Human, "missing").unwrap();

        assert_eq!(fs::read(store.path()).unwrap(), before);
        assert_eq!(
            fs::metadata(store.path()).unwrap().modified().unwrap(),
            mtime
        );
    }

    #[test]
    fn test_delete_absent_key_without_a_file_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        delete(&store, OutputMode::Human, "region").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_then_delete_restores_prior_mapping() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        set(&store, OutputMode::Human, "region", "west").unwrap();
        let before = store.load().unwrap();

        set(&store, OutputMode::Human, "labels", "off").unwrap();
        delete(&store, OutputMode::Human, "labels").unwrap();

        assert_eq!(store.load().unwrap(), before);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let ctx = OutputContext::default();

        assert!(store.load().unwrap().is_empty());

        set(&store, OutputMode::Human, "region", "west").unwrap();
        let settings = store.load().unwrap();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("region"), Some("west"));

        list(&store, ctx, OutputMode::Human).unwrap();

        delete(&store, OutputMode::Human, "region").unwrap();
        assert!(store.load().unwrap().is_empty());

        // Second delete warns but still succeeds.
        delete(&store, OutputMode::Human, "region").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_list_surfaces_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{broken").unwrap();

        let result = list(&store, OutputContext::default(), OutputMode::Human);
        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }
}
