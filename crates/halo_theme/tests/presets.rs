use halo_theme::{
    check_conformance, ColorToken, ContrastPair, Theme, ThemePreset, MIN_NON_TEXT_CONTRAST,
};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["aqua", "daylight", "high-contrast"]);
}

#[test]
fn every_preset_passes_contrast_checks() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let report = check_conformance(&theme)
            .unwrap_or_else(|err| panic!("preset {preset:?} is not conformant: {err}"));
        assert!(report.is_conformant());
    }
}

#[test]
fn preset_ids_parse_back() {
    for preset in ThemePreset::all() {
        assert_eq!(preset.id().parse::<ThemePreset>().unwrap(), *preset);
    }
    assert_eq!(
        "High Contrast".parse::<ThemePreset>().unwrap(),
        ThemePreset::HighContrast
    );
}

#[test]
fn aqua_uses_tutorial_focus_colors() {
    let theme = ThemePreset::Aqua.theme();
    assert_eq!(
        theme.colors().get(ColorToken::FocusAccent).to_hex_string(),
        "#00D9FF"
    );
    assert_eq!(
        theme.colors().get(ColorToken::FocusBackground).to_hex_string(),
        "#1A4D5C"
    );

    let report = check_conformance(&theme).unwrap();
    let ring = report
        .check(ContrastPair::FocusAccentOnFocusBackground)
        .unwrap();
    assert!(ring.ratio >= MIN_NON_TEXT_CONTRAST);
}

#[test]
fn high_contrast_has_distinct_pressed_background() {
    let theme = ThemePreset::HighContrast.theme();
    assert_ne!(
        theme.colors().get(ColorToken::PressedBackground),
        theme.colors().get(ColorToken::FocusBackground)
    );
    assert_eq!(check_conformance(&theme).unwrap().checks.len(), 5);
}

#[test]
fn presets_survive_a_toml_round_trip() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let text = theme.to_toml().unwrap();
        let reloaded = Theme::from_toml_str(&text).unwrap();
        assert_eq!(reloaded, theme, "preset {preset:?}:\n{text}");
    }
}

#[test]
fn theme_file_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("halo-theme-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r##"
name = "Disk"
preset = "daylight"

[sizing]
min_touch_target = 56.0
"##,
    )
    .unwrap();

    let theme = Theme::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(theme.name(), "Disk");
    assert_eq!(theme.sizing().min_touch_target, 56.0);
    assert_eq!(theme.colors(), ThemePreset::Daylight.theme().colors());
}
