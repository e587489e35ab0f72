use credits_core::model::{RoleDefaults, SectionDefaults, TextPosition};
use credits_core::{
    ConfigurationError, CreditsDocument, Name, NameOverride, OverrideTable, RoleOverride, SectionOverride,
    StyleDefaults, StyledText,
};

fn top() -> RoleDefaults {
    RoleDefaults { role_position: TextPosition::Top, ..RoleDefaults::default() }
}

#[test]
fn duplicate_role_override_is_rejected() {
    let result = OverrideTable::new(
        SectionOverride::default(),
        false,
        vec![
            RoleOverride::new("Act1", "Narrator", top()),
            RoleOverride::new("Act1", "Guard", top()),
            RoleOverride::new("Act1", "Narrator", RoleDefaults::default()),
        ],
        vec![],
    );

    assert_eq!(
        result,
        Err(ConfigurationError::DuplicateRoleOverride { section: "Act1".into(), role: "Narrator".into() })
    );
}

#[test]
fn duplicate_name_override_is_rejected() {
    let result = OverrideTable::new(
        SectionOverride::default(),
        false,
        vec![],
        vec![
            NameOverride::new("Act1", "Narrator", "Alice", StyledText::default()),
            NameOverride::new("Act1", "Narrator", "Alice", StyleDefaults::name_text()),
        ],
    );

    let err = result.unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::DuplicateNameOverride {
            section: "Act1".into(),
            role: "Narrator".into(),
            name: "Alice".into(),
        }
    );
    assert!(err.to_string().contains("Alice"));
}

#[test]
fn same_role_in_different_sections_is_fine() {
    let table = OverrideTable::new(
        SectionOverride::default(),
        false,
        vec![RoleOverride::new("Act1", "Guard", top()), RoleOverride::new("Act2", "Guard", RoleDefaults::default())],
        vec![NameOverride::new("Act1", "Guard", "Dan", StyledText::default())],
    )
    .unwrap();

    let act1: Name = "Act1".into();
    let act2: Name = "Act2".into();
    let guard: Name = "Guard".into();
    assert_eq!(table.find_role_override(&act1, &guard).map(|d| d.role_position), Some(TextPosition::Top));
    assert_eq!(table.find_role_override(&act2, &guard).map(|d| d.role_position), Some(TextPosition::Side));
    assert!(table.find_name_override(&act1, &guard, &"Dan".into()).is_some());
    assert!(table.find_name_override(&act2, &guard, &"Dan".into()).is_none());
}

#[test]
fn lookups_are_case_sensitive() {
    let table = OverrideTable::new(
        SectionOverride::default(),
        false,
        vec![RoleOverride::new("Act1", "Narrator", top())],
        vec![],
    )
    .unwrap();

    assert!(table.find_role_override(&"Act1".into(), &"Narrator".into()).is_some());
    assert!(table.find_role_override(&"Act1".into(), &"narrator".into()).is_none());
    assert!(table.find_role_override(&"ACT1".into(), &"Narrator".into()).is_none());
}

#[test]
fn unset_keys_never_match() {
    let table = OverrideTable::new(
        SectionOverride::default(),
        false,
        vec![RoleOverride::default()],
        vec![NameOverride::default()],
    )
    .unwrap();

    assert!(table.find_role_override(&Name::none(), &Name::none()).is_none());
    assert!(table.find_name_override(&Name::none(), &Name::none(), &Name::none()).is_none());
    assert!(table.find_role_override(&"".into(), &"".into()).is_none());
}

#[test]
fn section_override_follows_its_flag() {
    let mut data = SectionDefaults::default();
    data.title.text_style.font_size = 48;

    let off = OverrideTable::new(SectionOverride::new(data.clone()), false, vec![], vec![]).unwrap();
    assert!(off.find_section_override().is_none());
    assert!(off.is_empty());

    let on = OverrideTable::new(SectionOverride::new(data.clone()), true, vec![], vec![]).unwrap();
    assert_eq!(on.find_section_override(), Some(&data));
    assert!(!on.is_empty());
}

#[test]
fn record_defaults() {
    let role = RoleOverride::default();
    assert!(role.parent_section.is_none());
    assert!(role.role_to_override.is_none());
    assert!(!role.data.display_role_name);

    let name = NameOverride::default();
    assert!(name.name_to_override.is_none());
    assert_eq!(name.data, StyleDefaults::name_text());

    assert!(OverrideTable::empty().is_empty());
}

#[test]
fn per_section_listing_keeps_authoring_order() {
    let table = OverrideTable::new(
        SectionOverride::default(),
        false,
        vec![
            RoleOverride::new("Act1", "B", top()),
            RoleOverride::new("Act2", "A", top()),
            RoleOverride::new("Act1", "A", top()),
        ],
        vec![
            NameOverride::new("Act2", "A", "x", StyledText::default()),
            NameOverride::new("Act1", "B", "y", StyledText::default()),
        ],
    )
    .unwrap();

    let act1: Name = "Act1".into();
    let roles: Vec<&str> = table.role_overrides_for(&act1).map(|o| o.role_to_override.as_str()).collect();
    assert_eq!(roles, ["B", "A"]);

    let names: Vec<&str> = table.name_overrides_for(&act1).map(|o| o.name_to_override.as_str()).collect();
    assert_eq!(names, ["y"]);
}

#[test]
fn merge_combines_disjoint_tables() {
    let mut data = SectionDefaults::default();
    data.section_padding.bottom = 20.0;

    let first = OverrideTable::new(
        SectionOverride::default(),
        false,
        vec![RoleOverride::new("Act1", "Narrator", top())],
        vec![],
    )
    .unwrap();
    let second = OverrideTable::new(
        SectionOverride::new(data.clone()),
        true,
        vec![RoleOverride::new("Act2", "Narrator", top())],
        vec![NameOverride::new("Act2", "Narrator", "Alice", StyledText::default())],
    )
    .unwrap();

    let merged = first.merge(second).unwrap();
    assert_eq!(merged.role_overrides().len(), 2);
    assert_eq!(merged.name_overrides().len(), 1);
    assert_eq!(merged.find_section_override(), Some(&data));
    assert!(merged.find_role_override(&"Act2".into(), &"Narrator".into()).is_some());
}

#[test]
fn merge_rejects_collisions() {
    let make = |enabled| {
        OverrideTable::new(
            SectionOverride::default(),
            enabled,
            vec![RoleOverride::new("Act1", "Narrator", top())],
            vec![],
        )
        .unwrap()
    };

    assert_eq!(
        make(false).merge(make(false)),
        Err(ConfigurationError::DuplicateRoleOverride { section: "Act1".into(), role: "Narrator".into() })
    );
    assert_eq!(make(true).merge(make(true)), Err(ConfigurationError::DuplicateSectionOverride));
}

#[test]
fn authored_table_is_validated_on_load() {
    let content = r#"
[[overrides.role_overrides]]
parent_section = "Act1"
role_to_override = "Narrator"

[[overrides.role_overrides]]
parent_section = "Act1"
role_to_override = "Narrator"
"#;

    let err = CreditsDocument::parse(content).unwrap_err();
    assert!(format!("{:#}", err).contains("duplicate role override"));
}

#[test]
fn authored_table_round_trips_through_toml() {
    let content = r#"
[overrides]
section_override_enabled = true

[overrides.section_override.data]
title_position = "Bottom"

[[overrides.name_overrides]]
parent_section = "Cast"
parent_role = "Narrator"
name_to_override = "Alice"
data = { text_style = { font_size = 40 } }
"#;

    let document = CreditsDocument::parse(content).unwrap();
    let table = &document.overrides;
    assert!(table.is_section_override_enabled());

    let name = table
        .find_name_override(&"Cast".into(), &"Narrator".into(), &"Alice".into())
        .unwrap();
    assert_eq!(name.text_style.font_size, 40);

    let written = toml::to_string(&document).unwrap();
    assert_eq!(CreditsDocument::parse(&written).unwrap(), document);
}

#[test]
fn partial_role_and_section_data_keep_level_look() {
    let content = r#"
[overrides]
section_override_enabled = true

[overrides.section_override.data.title.text_style]
font_size = 48

[[overrides.role_overrides]]
parent_section = "Cast"
role_to_override = "Narrator"
data = { role = { text_style = { font_size = 30 } } }
"#;

    let table = CreditsDocument::parse(content).unwrap().overrides;

    let section = table.find_section_override().unwrap();
    assert_eq!(section.title.text_style.font_size, 48);
    assert_eq!(section.title.text_style.color, SectionDefaults::TITLE_COLOR);
    assert_eq!(section.title.padding, SectionDefaults::TITLE_PADDING);
    assert_eq!(section.section_padding, SectionDefaults::SECTION_PADDING);

    let role = table.find_role_override(&"Cast".into(), &"Narrator".into()).unwrap();
    assert_eq!(role.role.text_style.font_size, 30);
    assert_eq!(role.role.text_style.color, RoleDefaults::COLOR);
    assert_eq!(role.role_position, TextPosition::Side);
}
