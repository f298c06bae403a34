use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single breakpoint definition as supplied by the caller.
///
/// Three shapes appear across the configuration surface and all must be
/// accepted:
/// - a bare number — the interval's starting point, with the upper bound
///   derived from the following entry,
/// - an explicit `[min, max]` pair,
/// - a `{ value, label? }` object, where `label` overrides the entry name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakpointDef {
    Min(f64),
    Range(f64, f64),
    Labeled {
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
}

impl BreakpointDef {
    /// The interval's starting point, regardless of shape.
    pub fn min(&self) -> f64 {
        match self {
            Self::Min(min) | Self::Range(min, _) => *min,
            Self::Labeled { value, .. } => *value,
        }
    }

    /// The explicit upper bound, when the definition carries one.
    pub fn explicit_max(&self) -> Option<f64> {
        match self {
            Self::Range(_, max) => Some(*max),
            Self::Min(_) | Self::Labeled { .. } => None,
        }
    }
}

impl From<f64> for BreakpointDef {
    fn from(min: f64) -> Self {
        Self::Min(min)
    }
}

impl From<(f64, f64)> for BreakpointDef {
    fn from((min, max): (f64, f64)) -> Self {
        Self::Range(min, max)
    }
}

/// A named entry in a custom breakpoint mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointEntry {
    pub name: String,
    pub def: BreakpointDef,
}

impl BreakpointEntry {
    pub fn new(name: impl Into<String>, def: impl Into<BreakpointDef>) -> Self {
        Self {
            name: name.into(),
            def: def.into(),
        }
    }

    /// The name the resolved interval will carry: the definition's label
    /// when present, the entry name otherwise.
    pub fn display_name(&self) -> &str {
        match &self.def {
            BreakpointDef::Labeled {
                label: Some(label), ..
            } => label,
            _ => &self.name,
        }
    }
}

/// A caller-supplied breakpoint mapping, in insertion order.
///
/// Insertion order is preserved so the resolver's sort can break ties
/// deterministically.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomBreakpoints {
    entries: Vec<BreakpointEntry>,
}

impl CustomBreakpoints {
    pub fn new(entries: Vec<BreakpointEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[BreakpointEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: BreakpointEntry) {
        self.entries.push(entry);
    }
}

impl FromIterator<BreakpointEntry> for CustomBreakpoints {
    fn from_iter<I: IntoIterator<Item = BreakpointEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A breakpoint specification at the configuration boundary: either a
/// preset keyword or a custom mapping.
///
/// Deserializes from a polymorphic JSON surface: a bare string selects a
/// preset, an object is a custom mapping. Unrecognized preset keywords are
/// not rejected here; the resolver falls back to the default preset for
/// them.
#[derive(Debug, Clone, PartialEq)]
pub enum BreakpointSpec {
    Preset(String),
    Custom(CustomBreakpoints),
}

impl BreakpointSpec {
    pub fn preset(keyword: impl Into<String>) -> Self {
        Self::Preset(keyword.into())
    }

    pub fn custom(entries: impl IntoIterator<Item = BreakpointEntry>) -> Self {
        Self::Custom(entries.into_iter().collect())
    }

    pub fn is_preset(&self) -> bool {
        matches!(self, Self::Preset(_))
    }
}

impl Default for BreakpointSpec {
    fn default() -> Self {
        Self::Preset("tailwind".into())
    }
}

impl From<&str> for BreakpointSpec {
    fn from(keyword: &str) -> Self {
        Self::Preset(keyword.into())
    }
}

// --- Serde (hand-rolled: the custom-mapping form is a JSON map whose key
// order is significant, so entries are streamed in document order) ---

impl Serialize for BreakpointSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Preset(keyword) => serializer.serialize_str(keyword),
            Self::Custom(custom) => {
                let mut map = serializer.serialize_map(Some(custom.len()))?;
                for entry in custom.entries() {
                    map.serialize_entry(&entry.name, &entry.def)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for BreakpointSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = BreakpointSpec;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a preset keyword or a breakpoint mapping")
            }

            fn visit_str<E: serde::de::Error>(self, keyword: &str) -> Result<Self::Value, E> {
                Ok(BreakpointSpec::Preset(keyword.to_owned()))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, def)) = access.next_entry::<String, BreakpointDef>()? {
                    entries.push(BreakpointEntry { name, def });
                }
                Ok(BreakpointSpec::Custom(CustomBreakpoints::new(entries)))
            }
        }

        deserializer.deserialize_any(SpecVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_string_is_a_preset() {
        let spec: BreakpointSpec = serde_json::from_str("\"bootstrap5\"").unwrap();
        assert_eq!(spec, BreakpointSpec::preset("bootstrap5"));
    }

    #[test]
    fn mapping_preserves_document_order() {
        let json = r#"{"Desktop": 1024, "Mobile": 0, "Tablet": 600}"#;
        let spec: BreakpointSpec = serde_json::from_str(json).unwrap();
        let BreakpointSpec::Custom(custom) = spec else {
            panic!("expected a custom mapping");
        };
        let names: Vec<&str> = custom.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Desktop", "Mobile", "Tablet"]);
    }

    #[test]
    fn all_three_definition_shapes_deserialize() {
        let json = r#"{"A": 0, "B": [100, 199], "C": {"value": 200, "label": "Compact"}}"#;
        let spec: BreakpointSpec = serde_json::from_str(json).unwrap();
        let BreakpointSpec::Custom(custom) = spec else {
            panic!("expected a custom mapping");
        };
        assert_eq!(custom.entries()[0].def, BreakpointDef::Min(0.0));
        assert_eq!(custom.entries()[1].def, BreakpointDef::Range(100.0, 199.0));
        assert_eq!(
            custom.entries()[2].def,
            BreakpointDef::Labeled {
                value: 200.0,
                label: Some("Compact".into()),
            }
        );
        assert_eq!(custom.entries()[2].display_name(), "Compact");
    }

    #[test]
    fn labelless_object_falls_back_to_entry_name() {
        let json = r#"{"Wide": {"value": 1200}}"#;
        let spec: BreakpointSpec = serde_json::from_str(json).unwrap();
        let BreakpointSpec::Custom(custom) = spec else {
            panic!("expected a custom mapping");
        };
        assert_eq!(custom.entries()[0].display_name(), "Wide");
    }

    #[test]
    fn custom_mapping_round_trips() {
        let spec = BreakpointSpec::custom([
            BreakpointEntry::new("A", 0.0),
            BreakpointEntry::new("B", (100.0, 199.0)),
        ]);
        let json = serde_json::to_string(&spec).unwrap();
        let back: BreakpointSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }
}
