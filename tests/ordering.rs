use pretty_assertions::assert_eq;

use lootdex::{ItemRecord, sort_items, statics};

fn item(id: &str) -> ItemRecord {
    ItemRecord {
        id: id.to_string(),
        nazwa: None,
        typ: None,
        jakosc: None,
        req_lvl: None,
        klasy: Vec::new(),
        dmg_flat: None,
        def: None,
        mana_bonus: None,
    }
}

fn leveled(id: &str, lvl: f64, jakosc: &str, typ: &str, nazwa: &str) -> ItemRecord {
    ItemRecord {
        req_lvl: Some(lvl),
        jakosc: Some(jakosc.to_string()),
        typ: Some(typ.to_string()),
        nazwa: Some(nazwa.to_string()),
        ..item(id)
    }
}

#[test]
fn sort_is_idempotent() {
    let items = vec![
        leveled("c", 5.0, statics::QUALITY_EPIC, "Broń", "Miecz"),
        item("b"),
        leveled("a", 1.0, statics::QUALITY_COMMON, "Broń", "Kij"),
        leveled("d", 1.0, statics::QUALITY_COMMON, "Broń", "Kij"),
    ];

    let once = sort_items(&items);
    let twice = sort_items(&once);
    assert_eq!(once, twice);
}

#[test]
fn sort_does_not_mutate_its_input() {
    let items = vec![item("z"), item("a")];
    let sorted = sort_items(&items);
    assert_eq!(items[0].id, "z");
    assert_eq!(sorted[0].id, "a");
}

#[test]
fn distinct_ids_always_land_in_the_same_relative_order() {
    // Two records identical except for id, fed in both input orders.
    let x = leveled("x", 3.0, statics::QUALITY_RARE, "Broń", "Miecz");
    let y = leveled("y", 3.0, statics::QUALITY_RARE, "Broń", "Miecz");

    let forward = sort_items(&[x.clone(), y.clone()]);
    let backward = sort_items(&[y, x]);
    assert_eq!(forward, backward);
    assert_eq!(forward[0].id, "x");
    assert_eq!(forward[1].id, "y");
}

#[test]
fn unknown_quality_ranks_after_all_known_tiers() {
    let items = vec![
        leveled("a", 1.0, statics::QUALITY_LEGENDARY, "Broń", "X"),
        leveled("b", 1.0, "Nieznana", "Broń", "X"),
        leveled("c", 1.0, statics::QUALITY_COMMON, "Broń", "X"),
    ];

    let sorted = sort_items(&items);
    let qualities: Vec<&str> = sorted
        .iter()
        .map(|i| i.jakosc.as_deref().unwrap())
        .collect();
    assert_eq!(
        qualities,
        vec![statics::QUALITY_COMMON, statics::QUALITY_LEGENDARY, "Nieznana"]
    );
}

#[test]
fn missing_level_sorts_after_every_leveled_item() {
    let items = vec![item("floats"), leveled("high", 99.0, "", "", "")];
    let sorted = sort_items(&items);
    assert_eq!(sorted[0].id, "high");
    assert_eq!(sorted[1].id, "floats");
}

#[test]
fn tie_breaks_run_level_quality_type_name_id() {
    let items = vec![
        leveled("e", 2.0, statics::QUALITY_COMMON, "Broń", "A"),
        leveled("d", 1.0, statics::QUALITY_RARE, "Zbroja", "A"),
        leveled("c", 1.0, statics::QUALITY_RARE, "Broń", "B"),
        leveled("b", 1.0, statics::QUALITY_RARE, "Broń", "A"),
        leveled("a", 1.0, statics::QUALITY_COMMON, "Zbroja", "Z"),
    ];

    let sorted = sort_items(&items);
    let ids: Vec<&str> = sorted.iter().map(|i| i.id.as_str()).collect();
    // Level first; within level 1, quality (Zwykła < Rzadka); within Rzadka,
    // type, then name; level 2 last.
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
}
