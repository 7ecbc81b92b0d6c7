// Render option store: the key/value table consulted for every draw operation

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single rendering-option value.
///
/// Untagged so JSON maps onto it directly: `14`, `"sans-serif"`, `true`,
/// `[10, 5.625]`, `["Arial", "DejaVu Sans"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Num(f64),
    Pair([f64; 2]),
    Text(String),
    TextList(Vec<String>),
}

impl OptionValue {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            OptionValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_pair(&self) -> Option<[f64; 2]> {
        match self {
            OptionValue::Pair(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::TextList(l) => Some(l),
            _ => None,
        }
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Num(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<[f64; 2]> for OptionValue {
    fn from(value: [f64; 2]) -> Self {
        OptionValue::Pair(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(value: Vec<String>) -> Self {
        OptionValue::TextList(value)
    }
}

/// The mutable store of active rendering options.
///
/// One table per rendering context. Code that draws reads through this
/// table; code that styles writes into it. Tests construct isolated tables
/// instead of sharing process state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionTable {
    entries: HashMap<String, OptionValue>,
}

impl OptionTable {
    /// An empty table with no options set.
    pub fn empty() -> Self {
        OptionTable::default()
    }

    /// The rendering engine's built-in defaults.
    pub fn factory_defaults() -> Self {
        let mut table = OptionTable::empty();

        table.set("font.size", 10.0);
        table.set("axes.labelsize", 10.0);
        table.set("axes.titlesize", 12.0);
        table.set("legend.fontsize", 10.0);
        table.set("figure.figsize", [6.4, 4.8]);
        table.set("figure.dpi", 100.0);
        table.set("savefig.dpi", 100.0);
        table.set("axes.linewidth", 0.8);
        table.set("lines.linewidth", 1.5);

        table.set("font.family", "sans-serif");
        table.set(
            "font.sans-serif",
            vec![
                "DejaVu Sans".to_string(),
                "Arial".to_string(),
                "Liberation Sans".to_string(),
            ],
        );

        table.set("axes.spines.top", true);
        table.set("axes.spines.right", true);

        table.set("xtick.direction", "out");
        table.set("ytick.direction", "out");
        table.set("xtick.top", false);
        table.set("ytick.right", false);
        table.set("xtick.major.size", 3.5);
        table.set("ytick.major.size", 3.5);
        table.set("xtick.minor.size", 2.0);
        table.set("ytick.minor.size", 2.0);
        table.set("xtick.major.width", 0.8);
        table.set("ytick.major.width", 0.8);
        table.set("xtick.minor.width", 0.6);
        table.set("ytick.minor.width", 0.6);

        table.set("grid.alpha", 1.0);
        table.set("grid.linewidth", 0.8);
        table.set("savefig.bbox", "standard");
        table.set("savefig.transparent", false);
        table.set("figure.facecolor", "white");
        table.set("axes.facecolor", "white");

        table
    }

    /// Insert or replace an option. Last writer wins.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    pub fn num(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(OptionValue::as_num)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(OptionValue::as_bool)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_text)
    }

    pub fn pair(&self, key: &str) -> Option<[f64; 2]> {
        self.get(key).and_then(OptionValue::as_pair)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.entries.iter()
    }
}

/// Caller-supplied option overrides, layered on top of a preset.
///
/// Entries apply in insertion order, so a later entry for the same key wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    entries: Vec<(String, OptionValue)>,
}

impl Overrides {
    pub fn new() -> Self {
        Overrides::default()
    }

    /// Builder-style insert.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.push((key.into(), value.into()));
    }

    pub fn extend(&mut self, other: Overrides) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, OptionValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build overrides from JSON: an object like `{"font.size": 14}`, or an
    /// array of `[key, value]` pairs when entry order matters.
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut overrides = Overrides::new();
        match value {
            Value::Object(object) => {
                for (key, raw) in object {
                    overrides.push(key.clone(), parse_json_value(key, raw)?);
                }
            }
            Value::Array(entries) => {
                for entry in entries {
                    let pair = entry.as_array().filter(|p| p.len() == 2).ok_or_else(|| {
                        anyhow!("override entries must be [key, value] pairs")
                    })?;
                    let key = pair[0]
                        .as_str()
                        .ok_or_else(|| anyhow!("override keys must be strings"))?;
                    overrides.push(key, parse_json_value(key, &pair[1])?);
                }
            }
            _ => bail!("overrides must be a JSON object or an array of pairs"),
        }
        Ok(overrides)
    }
}

fn parse_json_value(key: &str, raw: &Value) -> Result<OptionValue> {
    serde_json::from_value(raw.clone())
        .with_context(|| format!("unsupported value for option '{}'", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let mut table = OptionTable::empty();
        table.set("font.size", 14.0);
        table.set("font.family", "serif");
        assert_eq!(table.num("font.size"), Some(14.0));
        assert_eq!(table.text("font.family"), Some("serif"));
        assert_eq!(table.num("missing"), None);
    }

    #[test]
    fn test_set_last_writer_wins() {
        let mut table = OptionTable::empty();
        table.set("font.size", 10.0);
        table.set("font.size", 14.0);
        assert_eq!(table.num("font.size"), Some(14.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_typed_accessors_reject_wrong_shape() {
        let mut table = OptionTable::empty();
        table.set("figure.figsize", [10.0, 5.625]);
        assert_eq!(table.pair("figure.figsize"), Some([10.0, 5.625]));
        assert_eq!(table.num("figure.figsize"), None);
        assert_eq!(table.text("figure.figsize"), None);
    }

    #[test]
    fn test_factory_defaults_cover_styled_keys() {
        let table = OptionTable::factory_defaults();
        assert_eq!(table.num("font.size"), Some(10.0));
        assert_eq!(table.pair("figure.figsize"), Some([6.4, 4.8]));
        assert_eq!(table.text("xtick.direction"), Some("out"));
        assert_eq!(table.flag("savefig.transparent"), Some(false));
        assert_eq!(table.text("figure.facecolor"), Some("white"));
        assert!(table.get("font.sans-serif").is_some());
    }

    #[test]
    fn test_factory_defaults_are_deterministic() {
        assert_eq!(OptionTable::factory_defaults(), OptionTable::factory_defaults());
    }

    #[test]
    fn test_option_value_json_shapes() {
        let num: OptionValue = serde_json::from_value(json!(14.5)).unwrap();
        assert_eq!(num, OptionValue::Num(14.5));

        let pair: OptionValue = serde_json::from_value(json!([10, 5.625])).unwrap();
        assert_eq!(pair, OptionValue::Pair([10.0, 5.625]));

        let flag: OptionValue = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(flag, OptionValue::Bool(true));

        let list: OptionValue = serde_json::from_value(json!(["Arial", "DejaVu Sans"])).unwrap();
        assert_eq!(
            list,
            OptionValue::TextList(vec!["Arial".to_string(), "DejaVu Sans".to_string()])
        );
    }

    #[test]
    fn test_overrides_from_json() {
        let value = json!({
            "font.size": 14,
            "figure.figsize": [12, 6.75],
            "savefig.transparent": false
        });
        let overrides = Overrides::from_json(&value).unwrap();
        assert_eq!(overrides.len(), 3);

        let mut table = OptionTable::empty();
        for (key, value) in overrides.iter() {
            table.set(key.clone(), value.clone());
        }
        assert_eq!(table.num("font.size"), Some(14.0));
        assert_eq!(table.pair("figure.figsize"), Some([12.0, 6.75]));
        assert_eq!(table.flag("savefig.transparent"), Some(false));
    }

    #[test]
    fn test_overrides_from_json_pairs_keep_order() {
        let value = json!([["font.size", 12], ["font.size", 14]]);
        let overrides = Overrides::from_json(&value).unwrap();
        assert_eq!(overrides.len(), 2);
        let entries: Vec<_> = overrides.iter().collect();
        assert_eq!(entries[0].1, OptionValue::Num(12.0));
        assert_eq!(entries[1].1, OptionValue::Num(14.0));
    }

    #[test]
    fn test_overrides_from_json_rejects_scalar() {
        let result = Overrides::from_json(&json!(14));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("object or an array"));
    }

    #[test]
    fn test_overrides_from_json_rejects_malformed_pairs() {
        assert!(Overrides::from_json(&json!([[1, 2]])).is_err());
        assert!(Overrides::from_json(&json!([["font.size"]])).is_err());
    }

    #[test]
    fn test_overrides_from_json_rejects_nested_object() {
        let result = Overrides::from_json(&json!({"font": {"size": 14}}));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("font"));
    }

    #[test]
    fn test_overrides_builder_order() {
        let overrides = Overrides::new()
            .set("font.size", 12.0)
            .set("font.size", 14.0);
        let entries: Vec<_> = overrides.iter().collect();
        assert_eq!(entries.len(), 2);
        // Later entry wins when written into a table.
        let mut table = OptionTable::empty();
        for (key, value) in overrides.iter() {
            table.set(key.clone(), value.clone());
        }
        assert_eq!(table.num("font.size"), Some(14.0));
    }
}
