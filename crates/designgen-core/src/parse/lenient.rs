//! Field decoders for the loose parts of Swagger documents.
//!
//! `null` reads as the zero value, and `x-` vendor extensions are skipped in
//! keyed objects (Paths, Responses) where they may hold any value.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

/// Decode `T`, treating an explicit `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a keyed object, dropping `x-` entries. `null` reads as empty.
pub fn without_extensions<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_option(KeyedVisitor(PhantomData))
}

pub fn is_extension(key: &str) -> bool {
    key.starts_with("x-")
}

struct KeyedVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedVisitor<T> {
    type Value = IndexMap<String, T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(IndexMap::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(IndexMap::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = IndexMap::new();
        while let Some(MapKey(key)) = map.next_key()? {
            if is_extension(&key) {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            let value = map.next_value::<T>()?;
            entries.insert(key, value);
        }
        Ok(entries)
    }
}

/// A map key written as a string or, in YAML, a bare number (`200:`).
struct MapKey(String);

impl<'de> Deserialize<'de> for MapKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = MapKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<MapKey, E> {
                Ok(MapKey(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<MapKey, E> {
                Ok(MapKey(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<MapKey, E> {
                Ok(MapKey(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<MapKey, E> {
                Ok(MapKey(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Doc {
        #[serde(deserialize_with = "null_as_default")]
        host: String,
        #[serde(deserialize_with = "null_as_default")]
        schemes: Vec<String>,
        #[serde(deserialize_with = "without_extensions")]
        codes: IndexMap<String, u32>,
    }

    #[test]
    fn test_null_reads_as_zero_value() {
        let doc: Doc = serde_json::from_str(r#"{"host": null, "schemes": null}"#).unwrap();
        assert!(doc.host.is_empty());
        assert!(doc.schemes.is_empty());
    }

    #[test]
    fn test_wrong_type_is_still_rejected() {
        assert!(serde_json::from_str::<Doc>(r#"{"schemes": "http"}"#).is_err());
        assert!(serde_json::from_str::<Doc>(r#"{"codes": {"200": "ok"}}"#).is_err());
    }

    #[test]
    fn test_extensions_are_skipped_in_order() {
        let doc: Doc = serde_json::from_str(
            r#"{"codes": {"404": 2, "x-note": {"any": ["value"]}, "200": 1}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = doc.codes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["404", "200"]);
    }

    #[test]
    fn test_null_keyed_object() {
        let doc: Doc = serde_json::from_str(r#"{"codes": null}"#).unwrap();
        assert!(doc.codes.is_empty());
    }

    #[test]
    fn test_yaml_integer_keys() {
        let doc: Doc = serde_yaml_ng::from_str("codes:\n  200: 1\n  x-internal: true\n").unwrap();
        assert_eq!(doc.codes.get("200"), Some(&1));
        assert_eq!(doc.codes.len(), 1);
    }
}
