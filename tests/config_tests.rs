//! Configuration loading, defaults, and font preference store tests.

mod common;

use common::TestContext;
use unicode_hover_config::{
    Config, ConfigError, FileFontStore, FontPreference, FontPreferenceStore, MemoryFontStore,
};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(config.enabled);
    assert_eq!(config.font_family, "Arial Unicode MS");
    assert_eq!(config.font_size, 24);
    assert_eq!(config.font_preference(), FontPreference::default());
}

#[test]
fn test_config_builders() {
    let config = Config::new()
        .with_enabled(false)
        .with_font_family("Segoe UI Symbol")
        .with_font_size(30);
    assert!(!config.enabled);
    assert_eq!(config.font_family, "Segoe UI Symbol");
    assert_eq!(config.font_size, 30);
}

#[test]
fn test_config_yaml_serialization() {
    let yaml = serde_yaml_ng::to_string(&Config::default()).unwrap();
    assert!(yaml.contains("enabled: true"));
    assert!(yaml.contains("font_family: Arial Unicode MS"));
    assert!(yaml.contains("font_size: 24"));
}

#[test]
fn test_config_yaml_partial_uses_defaults() {
    let config: Config = serde_yaml_ng::from_str("font_size: 40\nunknown_key: 1\n").unwrap();
    assert!(config.enabled);
    assert_eq!(config.font_family, "Arial Unicode MS");
    assert_eq!(config.font_size, 40);
}

#[test]
fn test_load_or_default_falls_back_on_unreadable_config() {
    let ctx = TestContext::new();
    std::fs::write(&ctx.config_path, "enabled: [oops\n").unwrap();
    assert!(matches!(
        Config::load_from(&ctx.config_path),
        Err(ConfigError::Parse(_))
    ));
    assert_eq!(Config::load_or_default(&ctx.config_path), Config::default());
}

#[test]
fn test_load_or_default_when_path_is_a_directory() {
    let ctx = TestContext::new();
    assert_eq!(Config::load_or_default(ctx.dir.path()), Config::default());
}

#[test]
fn test_load_or_default_repairs_invalid_fields() {
    let ctx = TestContext::new();
    std::fs::write(
        &ctx.config_path,
        "enabled: false\nfont_family: \"\"\nfont_size: 0\n",
    )
    .unwrap();
    let config = Config::load_or_default(&ctx.config_path);
    assert!(!config.enabled);
    assert_eq!(config.font_family, "Arial Unicode MS");
    assert_eq!(config.font_size, 24);
}

#[test]
fn test_empty_config_file_is_defaults() {
    let ctx = TestContext::new();
    std::fs::write(&ctx.config_path, "").unwrap();
    assert_eq!(Config::load_from(&ctx.config_path).unwrap(), Config::default());
}

#[test]
fn test_save_and_reload() {
    let ctx = TestContext::new();
    let config = Config::new().with_font_family("Helvetica Neue").with_font_size(18);
    config.save_to(&ctx.config_path).unwrap();
    assert_eq!(Config::load_from(&ctx.config_path).unwrap(), config);
}

#[test]
fn test_file_store_get_after_set() {
    let ctx = TestContext::new();
    let store = FileFontStore::new(&ctx.config_path);
    assert_eq!(store.get(), FontPreference::default());

    store.set("SF Pro Display").unwrap();
    assert_eq!(store.get().family, "SF Pro Display");
    assert_eq!(store.get().size, 24);

    store.set("Arial").unwrap();
    assert_eq!(store.get().family, "Arial");
    assert_eq!(store.path(), ctx.config_path.as_path());
}

#[test]
fn test_store_trait_objects() {
    let ctx = TestContext::with_config(&Config::new().with_font_size(20));
    let stores: Vec<Box<dyn FontPreferenceStore>> = vec![
        Box::new(MemoryFontStore::new(FontPreference {
            family: "Arial".to_string(),
            size: 20,
        })),
        Box::new(FileFontStore::new(&ctx.config_path)),
    ];
    for store in &stores {
        store.set("Courier New").unwrap();
        assert_eq!(
            store.get(),
            FontPreference {
                family: "Courier New".to_string(),
                size: 20
            }
        );
        assert!(matches!(store.set(" "), Err(ConfigError::Validation(_))));
    }
}
