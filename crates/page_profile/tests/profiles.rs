#![allow(clippy::unwrap_used)]

use page_profile::{MinHeightProfile, PageId};
use sizing::Px;
use std::fs;
use std::io::Write as _;
use std::path::Path;

#[test]
fn page_names_round_trip() {
    for page in PageId::ALL {
        assert_eq!(PageId::from_name(page.as_name()), Some(page));
    }
}

#[test]
fn unknown_page_names_do_not_parse() {
    assert_eq!(PageId::from_name("unknown_page"), None);
    assert_eq!(PageId::from_name(""), None);
    // Names are exact: no case folding, no trimming.
    assert_eq!(PageId::from_name("Home"), None);
    assert_eq!(PageId::from_name(" home"), None);
}

#[test]
fn default_preset_carries_the_current_deployment_table() {
    let profile = MinHeightProfile::DEFAULT;
    assert_eq!(profile.floor_px(PageId::Home), Px::new(940));
    assert_eq!(profile.floor_px(PageId::VersionHistory), Px::new(1450));
    assert_eq!(profile.floor_px(PageId::Installation), Px::new(3200));
    assert_eq!(profile.floor_px(PageId::Screenshots), Px::new(1050));
    assert_eq!(profile.floor_px(PageId::SourceCode), Px::new(940));
    assert_eq!(profile.floor_px(PageId::AuthorsContact), Px::new(940));
    assert_eq!(profile.floor_px(PageId::Contribute), Px::new(940));
    assert_eq!(profile.floor_px(PageId::License), Px::new(940));
}

#[test]
fn every_preset_has_a_positive_floor_for_every_page() {
    for name in ["default", "tall", "classic", "compact"] {
        let profile = MinHeightProfile::preset(name).unwrap();
        for page in PageId::ALL {
            assert!(
                profile.floor_px(page) > Px::ZERO,
                "preset `{name}` has no floor for `{}`",
                page.as_name()
            );
        }
    }
    assert!(MinHeightProfile::preset("huge").is_none());
}

#[test]
fn floor_for_name_falls_back_to_none_for_unknown_pages() {
    let profile = MinHeightProfile::default();
    assert_eq!(profile.floor_for_name("home"), Some(Px::new(940)));
    assert_eq!(profile.floor_for_name("unknown_page"), None);
}

#[test]
fn json_round_trip_preserves_the_table() {
    let text = serde_json::to_string(&MinHeightProfile::CLASSIC).unwrap();
    let parsed = MinHeightProfile::from_json(&text).unwrap();
    assert_eq!(parsed, MinHeightProfile::CLASSIC);
}

#[test]
fn json_with_an_unknown_page_is_rejected() {
    let text = r#"{
        "home": 940, "version_history": 1450, "installation": 3200,
        "screenshots": 1050, "source_code": 940, "authors_contact": 940,
        "contribute": 940, "license": 940, "downloads": 700
    }"#;
    assert!(MinHeightProfile::from_json(text).is_err());
}

#[test]
fn json_with_a_missing_page_is_rejected() {
    assert!(MinHeightProfile::from_json(r#"{ "home": 940 }"#).is_err());
}

#[test]
fn profile_loads_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.json");
    let mut file = fs::File::create(&path).unwrap();
    write!(file, "{}", serde_json::to_string(&MinHeightProfile::COMPACT).unwrap()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(MinHeightProfile::from_json(&text).unwrap(), MinHeightProfile::COMPACT);
}

#[test]
fn shipped_profiles_match_the_presets() {
    let profiles_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../profiles");
    for (file_name, preset) in [
        ("default.json", MinHeightProfile::DEFAULT),
        ("tall.json", MinHeightProfile::TALL),
        ("classic.json", MinHeightProfile::CLASSIC),
        ("compact.json", MinHeightProfile::COMPACT),
    ] {
        let text = fs::read_to_string(profiles_dir.join(file_name)).unwrap();
        assert_eq!(MinHeightProfile::from_json(&text).unwrap(), preset, "{file_name}");
    }
}
