use credits_core::config::SystemConfig;
use credits_core::model::TextPosition;
use credits_core::{GeneralSettings, StyleDefaults};
use credits_shared::config;

#[test]
fn generated_sections_read_back_unchanged() {
    let defaults = StyleDefaults::default();
    let written = toml::to_string_pretty(&defaults).unwrap();
    let value = toml::Value::Table(toml::from_str(&written).unwrap());
    assert_eq!(config::section_from_value::<StyleDefaults>("defaults", value), defaults);

    let general = GeneralSettings::default();
    let written = toml::to_string_pretty(&general).unwrap();
    assert_eq!(toml::from_str::<GeneralSettings>(&written).unwrap(), general);
}

#[test]
fn partial_sections_keep_stock_values() {
    let table: toml::Table = toml::from_str(
        r#"
[role]
role_position = "Top"

[name.text_style]
font_size = 18
"#,
    )
    .unwrap();

    let defaults: StyleDefaults = config::section_from_value("defaults", toml::Value::Table(table));
    assert_eq!(defaults.role.role_position, TextPosition::Top);
    assert!(defaults.role.display_role_name);
    assert_eq!(defaults.name.text_style.font_size, 18);
    assert_eq!(defaults.name.padding, StyleDefaults::NAME_PADDING);
    assert_eq!(defaults.section, StyleDefaults::default().section);
}

#[test]
fn system_section_defaults() {
    let cfg: SystemConfig = config::section_from_value("system", toml::Value::Table(toml::Table::new()));
    assert_eq!(cfg.credits_path, "credits/");
    assert!(cfg.assets_path.is_empty());
    assert_eq!(cfg.log_level, "info");
    assert!(!cfg.strict_role_names);
}
