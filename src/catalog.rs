use crate::statics;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A parsed catalog document, before normalization.
/// Catalogs come in two shapes: a map keyed by item id, or a flat list of
/// records each carrying its own `id` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCatalog {
    ById(IndexMap<String, Value>),
    List(Vec<Value>),
}

/// Item id as it appears in source data: a string, a number, or missing.
/// Always coerced to a string; anything unusable reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct LooseId(pub String);

impl From<Value> for LooseId {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => LooseId(s),
            Value::Number(n) => LooseId(n.to_string()),
            Value::Bool(b) => LooseId(b.to_string()),
            _ => LooseId(String::new()),
        }
    }
}

/// A numeric field that tolerates junk: non-numbers read as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct LooseNumber(pub Option<f64>);

impl From<Value> for LooseNumber {
    fn from(v: Value) -> Self {
        LooseNumber(v.as_f64())
    }
}

/// A text field that tolerates junk: scalars are stringified, everything
/// else reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct LooseText(pub Option<String>);

impl From<Value> for LooseText {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => LooseText(Some(s)),
            Value::Number(n) => LooseText(Some(n.to_string())),
            Value::Bool(b) => LooseText(Some(b.to_string())),
            _ => LooseText(None),
        }
    }
}

/// A class field as it appears in source data: an array of strings, a single
/// string, or anything else (reads as absent). Non-string array entries are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum ClassField {
    #[default]
    Absent,
    One(String),
    Many(Vec<String>),
}

impl From<Value> for ClassField {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => ClassField::One(s),
            Value::Array(entries) => ClassField::Many(
                entries
                    .into_iter()
                    .filter_map(|e| match e {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => ClassField::Absent,
        }
    }
}

/// One catalog entry as deserialized, before id assignment and class
/// reconciliation. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: LooseId,
    pub nazwa: LooseText,
    pub typ: LooseText,
    pub jakosc: LooseText,
    pub req_lvl: LooseNumber,
    pub klasy: ClassField,
    #[serde(rename = "Class")]
    pub class: ClassField,
    pub dmg_flat: LooseNumber,
    pub def: LooseNumber,
    pub mana_bonus: LooseNumber,
}

impl RawRecord {
    /// Reconcile the two possible class fields, first matching shape wins:
    /// array `klasy`, then array `Class`, then scalar `Class` as a singleton.
    /// A scalar `klasy` is not a recognized shape and falls through.
    fn classes(&self) -> Vec<String> {
        match (&self.klasy, &self.class) {
            (ClassField::Many(list), _) => list.clone(),
            (_, ClassField::Many(list)) => list.clone(),
            (_, ClassField::One(single)) => vec![single.clone()],
            _ => Vec::new(),
        }
    }

    fn into_item(self, id: String) -> ItemRecord {
        let klasy = self.classes();
        ItemRecord {
            id,
            nazwa: self.nazwa.0,
            typ: self.typ.0,
            jakosc: self.jakosc.0,
            req_lvl: self.req_lvl.0,
            klasy,
            dmg_flat: self.dmg_flat.0,
            def: self.def.0,
            mana_bonus: self.mana_bonus.0,
        }
    }
}

/// A normalized catalog entry. `id` is always a string (possibly empty for
/// list-form records that carried none) and `klasy` is always a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: String,
    pub nazwa: Option<String>,
    pub typ: Option<String>,
    pub jakosc: Option<String>,
    pub req_lvl: Option<f64>,
    pub klasy: Vec<String>,
    pub dmg_flat: Option<f64>,
    pub def: Option<f64>,
    pub mana_bonus: Option<f64>,
}

impl ItemRecord {
    pub fn display_name(&self) -> &str {
        self.nazwa.as_deref().unwrap_or(statics::EN_UNNAMED)
    }

    pub fn quality_rank(&self) -> u8 {
        quality_rank(self.jakosc.as_deref())
    }

    /// Integer level bucket; fractional levels truncate toward zero.
    pub fn level_bucket(&self) -> Option<i64> {
        self.req_lvl.map(|lvl| lvl.trunc() as i64)
    }

    pub fn classes_joined(&self) -> String {
        self.klasy.join(", ")
    }
}

/// Ordinal rank of a quality tier; absent or unrecognized tiers rank after
/// every known one.
pub fn quality_rank(jakosc: Option<&str>) -> u8 {
    jakosc
        .and_then(|q| statics::QUALITY_ORDER.iter().position(|known| *known == q))
        .map(|pos| pos as u8)
        .unwrap_or(statics::QUALITY_RANK_UNKNOWN)
}

/// Result of normalizing a raw catalog: the records that fit the entry shape,
/// plus how many entries were skipped because they were not objects.
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub items: Vec<ItemRecord>,
    pub skipped: usize,
}

/// Normalize a parsed document into a uniform record sequence.
/// Map form: the key becomes the id, overriding any `id` field in the value.
/// List form: the `id` field is coerced to string, empty when missing.
/// Entries that are not JSON objects are skipped and counted.
pub fn normalize(raw: RawCatalog) -> Normalized {
    let mut out = Normalized::default();

    let mut push = |value: Value, key: Option<String>| {
        match serde_json::from_value::<RawRecord>(value) {
            Ok(record) => {
                let id = key.unwrap_or_else(|| record.id.0.clone());
                out.items.push(record.into_item(id));
            }
            Err(_) => out.skipped += 1,
        }
    };

    match raw {
        RawCatalog::ById(map) => {
            for (key, value) in map {
                push(value, Some(key));
            }
        }
        RawCatalog::List(entries) => {
            for value in entries {
                push(value, None);
            }
        }
    }

    out
}

/// Total order over records. Ascending by requirement level (missing sorts
/// last), then quality rank, then type, then name, then id. The id tie-break
/// makes the order deterministic for any two distinct records.
pub fn compare_items(a: &ItemRecord, b: &ItemRecord) -> Ordering {
    let lvl_a = a.req_lvl.unwrap_or(f64::INFINITY);
    let lvl_b = b.req_lvl.unwrap_or(f64::INFINITY);
    lvl_a
        .total_cmp(&lvl_b)
        .then_with(|| a.quality_rank().cmp(&b.quality_rank()))
        .then_with(|| a.typ.as_deref().unwrap_or("").cmp(b.typ.as_deref().unwrap_or("")))
        .then_with(|| {
            a.nazwa
                .as_deref()
                .unwrap_or("")
                .cmp(b.nazwa.as_deref().unwrap_or(""))
        })
        .then_with(|| a.id.cmp(&b.id))
}

/// Non-destructive sort: returns a new sequence, input untouched.
pub fn sort_items(items: &[ItemRecord]) -> Vec<ItemRecord> {
    let mut sorted = items.to_vec();
    sorted.sort_by(compare_items);
    sorted
}

/// Records sharing one integer requirement level, or the trailing group of
/// records without one (`level: None`).
#[derive(Debug, Clone, PartialEq)]
pub struct LevelBucket {
    pub level: Option<i64>,
    pub items: Vec<ItemRecord>,
}

/// Group a sorted sequence into level buckets, ascending, with the no-level
/// bucket last and only present when non-empty. Relative order within each
/// bucket is the input order.
pub fn group_by_level(sorted: &[ItemRecord]) -> Vec<LevelBucket> {
    let mut by_level: BTreeMap<i64, Vec<ItemRecord>> = BTreeMap::new();
    let mut no_level: Vec<ItemRecord> = Vec::new();

    for item in sorted {
        match item.level_bucket() {
            Some(level) => by_level.entry(level).or_default().push(item.clone()),
            None => no_level.push(item.clone()),
        }
    }

    let mut buckets: Vec<LevelBucket> = by_level
        .into_iter()
        .map(|(level, items)| LevelBucket {
            level: Some(level),
            items,
        })
        .collect();

    if !no_level.is_empty() {
        buckets.push(LevelBucket {
            level: None,
            items: no_level,
        });
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::{ClassField, ItemRecord, RawCatalog, normalize, quality_rank};
    use crate::statics;

    fn parse(text: &str) -> RawCatalog {
        serde_json::from_str(text).expect("catalog parses")
    }

    #[test]
    fn quality_rank_covers_known_tiers_and_falls_back() {
        for (i, tier) in statics::QUALITY_ORDER.iter().copied().enumerate() {
            assert_eq!(quality_rank(Some(tier)), i as u8);
        }
        assert_eq!(quality_rank(None), statics::QUALITY_RANK_UNKNOWN);
        assert_eq!(quality_rank(Some("Nieznana")), statics::QUALITY_RANK_UNKNOWN);
    }

    #[test]
    fn class_field_reads_all_three_shapes() {
        let arr: ClassField = serde_json::from_str(r#"["Mag", "Wojownik"]"#).unwrap();
        assert_eq!(
            arr,
            ClassField::Many(vec!["Mag".to_string(), "Wojownik".to_string()])
        );

        let scalar: ClassField = serde_json::from_str(r#""Mag""#).unwrap();
        assert_eq!(scalar, ClassField::One("Mag".to_string()));

        let junk: ClassField = serde_json::from_str("17").unwrap();
        assert_eq!(junk, ClassField::Absent);
    }

    #[test]
    fn map_key_overrides_inner_id_field() {
        let raw = parse(r#"{"42": {"nazwa": "Topór", "id": "ignored"}}"#);
        let normalized = normalize(raw);
        assert_eq!(normalized.items.len(), 1);
        assert_eq!(normalized.items[0].id, "42");
        assert_eq!(normalized.items[0].nazwa.as_deref(), Some("Topór"));
    }

    #[test]
    fn numeric_level_truncates_toward_zero() {
        let item = ItemRecord {
            id: "x".to_string(),
            nazwa: None,
            typ: None,
            jakosc: None,
            req_lvl: Some(7.9),
            klasy: Vec::new(),
            dmg_flat: None,
            def: None,
            mana_bonus: None,
        };
        assert_eq!(item.level_bucket(), Some(7));
    }

    #[test]
    fn non_object_entries_are_skipped_and_counted() {
        let raw = parse(r#"[{"id": "a"}, "junk", 7, {"id": "b"}]"#);
        let normalized = normalize(raw);
        assert_eq!(normalized.skipped, 2);
        let ids: Vec<&str> = normalized.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
