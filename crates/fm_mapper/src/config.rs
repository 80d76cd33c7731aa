use alloc::string::String;

use fm_utils::hash::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// FieldConfig

/// Override rule for one destination field.
///
/// - `ignore`: never copy into this field. Takes precedence over `source`.
/// - `source`: read from the named source field instead of the field's own
///   name. `None` and the empty string both mean "use the own name".
///
/// # Examples
///
/// ```
/// use fm_mapper::FieldConfig;
///
/// assert!(FieldConfig::ignored().ignore);
/// assert_eq!(FieldConfig::from_source("last_name").source_name(), Some("last_name"));
/// assert_eq!(FieldConfig::from_source("").source_name(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    pub ignore: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub source: Option<String>,
}

impl FieldConfig {
    /// A config that suppresses copying into the field.
    #[inline]
    pub const fn ignored() -> Self {
        Self {
            ignore: true,
            source: None,
        }
    }

    /// A config that reads the field from source field `name`.
    #[inline]
    pub fn from_source(name: impl Into<String>) -> Self {
        Self {
            ignore: false,
            source: Some(name.into()),
        }
    }

    /// Returns the source override, if set and non-empty.
    #[inline]
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_deref().filter(|name| !name.is_empty())
    }
}

// -----------------------------------------------------------------------------
// MappingConfig

/// All [`FieldConfig`] overrides of one type pair, keyed by destination
/// field name.
///
/// Names are matched exactly, including case. Names that match no field are
/// inert.
///
/// # Examples
///
/// ```
/// use fm_mapper::{FieldConfig, MappingConfig};
///
/// let config = MappingConfig::new()
///     .ignore("salary")
///     .rename("first_name", "last_name");
///
/// assert_eq!(config.source_for("salary"), None);
/// assert_eq!(config.source_for("first_name"), Some("last_name"));
/// assert_eq!(config.source_for("full_name"), Some("full_name"));
///
/// let same = MappingConfig::from([
///     ("salary", FieldConfig::ignored()),
///     ("first_name", FieldConfig::from_source("last_name")),
/// ]);
/// assert_eq!(config, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MappingConfig {
    fields: HashMap<String, FieldConfig>,
}

impl MappingConfig {
    /// Creates an empty config: every field maps by its own name.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert) with [`FieldConfig::ignored`].
    #[must_use]
    pub fn ignore(mut self, field: impl Into<String>) -> Self {
        self.insert(field, FieldConfig::ignored());
        self
    }

    /// Builder form of [`insert`](Self::insert) with [`FieldConfig::from_source`].
    #[must_use]
    pub fn rename(mut self, field: impl Into<String>, source: impl Into<String>) -> Self {
        self.insert(field, FieldConfig::from_source(source));
        self
    }

    /// Sets the override of destination field `field`, returning the previous one.
    pub fn insert(&mut self, field: impl Into<String>, config: FieldConfig) -> Option<FieldConfig> {
        self.fields.insert(field.into(), config)
    }

    #[inline]
    pub fn get(&self, field: &str) -> Option<&FieldConfig> {
        self.fields.get(field)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates `(destination field, override)` in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldConfig)> {
        self.fields.iter().map(|(name, config)| (name.as_str(), config))
    }

    /// Resolves the source field name for destination field `field`.
    ///
    /// Returns `None` if the field is ignored.
    pub fn source_for<'a>(&'a self, field: &'a str) -> Option<&'a str> {
        match self.fields.get(field) {
            Some(config) if config.ignore => None,
            Some(config) => Some(config.source_name().unwrap_or(field)),
            None => Some(field),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldConfig)> for MappingConfig {
    fn from_iter<T: IntoIterator<Item = (K, FieldConfig)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(field, config)| (field.into(), config))
                .collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, FieldConfig)> for MappingConfig {
    fn extend<T: IntoIterator<Item = (K, FieldConfig)>>(&mut self, iter: T) {
        for (field, config) in iter {
            self.insert(field, config);
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, FieldConfig); N]> for MappingConfig {
    #[inline]
    fn from(fields: [(K, FieldConfig); N]) -> Self {
        fields.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldConfig, MappingConfig};

    #[test]
    fn ignore_wins_over_source() {
        let mut config = MappingConfig::new();
        config.insert(
            "first_name",
            FieldConfig {
                ignore: true,
                source: Some("last_name".into()),
            },
        );

        assert_eq!(config.source_for("first_name"), None);
    }

    #[test]
    fn empty_source_falls_back_to_own_name() {
        let config = MappingConfig::from([("first_name", FieldConfig::from_source(""))]);
        assert_eq!(config.source_for("first_name"), Some("first_name"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let config = MappingConfig::new().ignore("FirstName");

        assert_eq!(config.source_for("first_name"), Some("first_name"));
        assert_eq!(config.source_for("FirstName"), None);
    }

    #[test]
    fn insert_replaces() {
        let mut config = MappingConfig::new().ignore("a");
        let old = config.insert("a", FieldConfig::from_source("b"));

        assert_eq!(old, Some(FieldConfig::ignored()));
        assert_eq!(config.len(), 1);
        assert_eq!(config.get("a").and_then(FieldConfig::source_name), Some("b"));

        config.extend([("c", FieldConfig::ignored())]);
        assert_eq!(config.iter().count(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn load_from_ron() {
        let text = r#"{
            "first_name": (ignore: true),
            "full_name": (source: Some("last_name")),
        }"#;
        let config: MappingConfig = ron::from_str(text).unwrap();

        assert_eq!(
            config,
            MappingConfig::new()
                .ignore("first_name")
                .rename("full_name", "last_name")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip() {
        let config = MappingConfig::new().rename("full_name", "last_name");

        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(text, r#"{"full_name":{"ignore":false,"source":"last_name"}}"#);

        let parsed: MappingConfig = serde_json::from_str(r#"{"salary":{"ignore":true}}"#).unwrap();
        assert_eq!(parsed, MappingConfig::new().ignore("salary"));
    }
}
