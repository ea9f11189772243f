use pretty_assertions::assert_eq;

use lootdex::{FilterState, ItemRecord, statics};

fn sword() -> ItemRecord {
    ItemRecord {
        id: "itm-001".to_string(),
        nazwa: Some("Miecz".to_string()),
        typ: Some("Broń".to_string()),
        jakosc: Some(statics::QUALITY_RARE.to_string()),
        req_lvl: Some(3.0),
        klasy: vec!["Wojownik".to_string()],
        dmg_flat: Some(5.0),
        def: None,
        mana_bonus: None,
    }
}

fn wand() -> ItemRecord {
    ItemRecord {
        id: "itm-002".to_string(),
        nazwa: Some("Różdżka".to_string()),
        typ: Some("Broń".to_string()),
        jakosc: Some(statics::QUALITY_EPIC.to_string()),
        req_lvl: Some(3.0),
        klasy: vec!["Mag".to_string()],
        dmg_flat: None,
        def: None,
        mana_bonus: Some(10.0),
    }
}

#[test]
fn inactive_criteria_pass_everything() {
    let filter = FilterState::default();
    assert!(!filter.is_active());
    assert!(filter.matches(&sword()));
    assert!(filter.matches(&wand()));
    assert_eq!(filter.count_visible([&sword(), &wand()]), 2);
}

#[test]
fn criteria_combine_conjunctively() {
    // text="miecz" AND type="Broń": only the sword passes.
    let filter = FilterState {
        query: "miecz".to_string(),
        typ: "Broń".to_string(),
        ..FilterState::default()
    };
    assert!(filter.matches(&sword()));
    assert!(!filter.matches(&wand()));

    // class="Mag" alone: only the wand passes.
    let filter = FilterState {
        klasa: "Mag".to_string(),
        ..FilterState::default()
    };
    assert!(!filter.matches(&sword()));
    assert!(filter.matches(&wand()));
}

#[test]
fn query_is_case_insensitive_over_name_and_id() {
    let filter = FilterState {
        query: "MIECZ".to_string(),
        ..FilterState::default()
    };
    assert!(filter.matches(&sword()));

    let filter = FilterState {
        query: "ITM-002".to_string(),
        ..FilterState::default()
    };
    assert!(filter.matches(&wand()));
    assert!(!filter.matches(&sword()));
}

#[test]
fn query_matches_the_unnamed_placeholder() {
    let nameless = ItemRecord {
        nazwa: None,
        ..sword()
    };
    let filter = FilterState {
        query: "unnamed".to_string(),
        ..FilterState::default()
    };
    assert!(filter.matches(&nameless));
}

#[test]
fn exact_selectors_do_not_substring_match() {
    let filter = FilterState {
        typ: "Broń dwuręczna".to_string(),
        ..FilterState::default()
    };
    assert!(!filter.matches(&sword()));

    let filter = FilterState {
        klasa: "Woj".to_string(),
        ..FilterState::default()
    };
    assert!(!filter.matches(&sword()));
}

#[test]
fn quality_selector_matches_exactly() {
    let filter = FilterState {
        jakosc: statics::QUALITY_EPIC.to_string(),
        ..FilterState::default()
    };
    assert!(filter.matches(&wand()));
    assert!(!filter.matches(&sword()));

    // A record without a quality never matches an active quality criterion.
    let bare = ItemRecord {
        jakosc: None,
        ..sword()
    };
    assert!(!filter.matches(&bare));
}

#[test]
fn clear_resets_every_criterion() {
    let mut filter = FilterState {
        query: "x".to_string(),
        klasa: "Mag".to_string(),
        typ: "Broń".to_string(),
        jakosc: statics::QUALITY_RARE.to_string(),
    };
    filter.clear();
    assert!(!filter.is_active());
}
