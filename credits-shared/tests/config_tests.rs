use credits_shared::config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
struct Window {
    width: u32,
    title: String,
}

impl Default for Window {
    fn default() -> Self {
        Self { width: 1280, title: "Credits".into() }
    }
}

// The store is process-global, so everything touching it lives in one test.
#[test]
fn global_store_sections() {
    assert_eq!(config::get::<Window>("window"), Window::default());

    config::init_from_str(
        r#"
[window]
width = 640

[broken]
width = "wide"
"#,
    )
    .unwrap();
    assert!(config::is_initialized());

    let window: Window = config::get("window");
    assert_eq!(window.width, 640);
    assert_eq!(window.title, "Credits");

    let missing: Window = config::get("absent");
    assert_eq!(missing, Window::default());

    let broken: Window = config::get("broken");
    assert_eq!(broken, Window::default());

    assert!(config::init_from_str("").is_err());
}

#[test]
fn section_from_value_falls_back() {
    let value: toml::Value = toml::from_str::<toml::Table>("width = 3")
        .map(toml::Value::Table)
        .unwrap();
    let window: Window = config::section_from_value("window", value);
    assert_eq!(window.width, 3);

    let bad = toml::Value::String("nope".into());
    let window: Window = config::section_from_value("window", bad);
    assert_eq!(window, Window::default());
}
