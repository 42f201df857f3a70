//! Schema-driven JSON object reading.
//!
//! Decoding buffers the incoming object as a `serde_json::Map`, then an
//! [`ObjectReader`] resolves every key, in this order:
//!
//! 1. a property of the schema (own or inherited)
//! 2. a discriminator of the embedded union, if the schema has one
//! 3. the sibling key, if the schema declares one and it is still free
//!
//! Anything else is an [`Error::UnrecognizedField`]. Because properties are
//! checked first, a property name shadows a variant of the same name.

use indexmap::IndexMap;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::object::JsonObject;
use crate::schema::{FieldRole, Schema};
use crate::union::{TaggedUnion, VariantKind};

/// Placeholder field name reported when a union has no variant key.
pub const VARIANT_FIELD: &str = "<variant kind>";

/// Classified view over one JSON object, handing out typed entries.
#[derive(Debug)]
pub struct ObjectReader {
    schema: &'static Schema,
    properties: Map<String, Value>,
    key: Option<String>,
    key_value: Option<Value>,
    variant: Option<(String, Value)>,
}

impl ObjectReader {
    pub fn new(schema: &'static Schema, object: Map<String, Value>) -> Result<Self> {
        let captures_sibling = schema
            .key_field()
            .is_some_and(|f| f.role == FieldRole::SiblingKey);

        let mut reader = Self {
            schema,
            properties: Map::new(),
            key: None,
            key_value: None,
            variant: None,
        };

        for (name, value) in object {
            if schema.property(&name).is_some() {
                reader.properties.insert(name, value);
            } else if schema.is_variant(&name) {
                if let Some((first, _)) = &reader.variant {
                    return Err(Error::AmbiguousVariant {
                        type_name: schema.type_name,
                        first: first.clone(),
                        second: name,
                    });
                }
                reader.variant = Some((name, value));
            } else if captures_sibling && reader.key.is_none() {
                tracing::trace!(type_name = schema.type_name, key = %name, "captured sibling key");
                reader.key = Some(name);
                reader.key_value = Some(value);
            } else {
                return Err(Error::UnrecognizedField {
                    type_name: schema.type_name,
                    field: name,
                });
            }
        }

        Ok(reader)
    }

    fn with_key(mut self, key: String) -> Self {
        self.key = Some(key);
        self
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Optional property; JSON `null` reads as absent.
    pub fn take<T: DeserializeOwned>(&mut self, name: &'static str) -> Result<Option<T>> {
        match self.remove(name) {
            None => Ok(None),
            Some(value) => decode_serde(self.schema, name, value).map(Some),
        }
    }

    /// List property; absent reads as empty and a lone value as a one-element list.
    pub fn take_list<T: DeserializeOwned>(&mut self, name: &'static str) -> Result<Vec<T>> {
        match self.remove(name) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| decode_serde(self.schema, name, item))
                .collect(),
            Some(single) => Ok(vec![decode_serde(self.schema, name, single)?]),
        }
    }

    /// Nested DSL object, decoded through its own schema.
    pub fn take_object<T: JsonObject>(&mut self, name: &'static str) -> Result<Option<T>> {
        match self.remove(name) {
            None => Ok(None),
            Some(value) => decode_nested(self.schema, name, value).map(Some),
        }
    }

    /// List of nested DSL objects, with the same leniency as [`Self::take_list`].
    pub fn take_objects<T: JsonObject>(&mut self, name: &'static str) -> Result<Vec<T>> {
        match self.remove(name) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| decode_nested(self.schema, name, item))
                .collect(),
            Some(single) => Ok(vec![decode_nested(self.schema, name, single)?]),
        }
    }

    /// Map property, keeping the key order of the input.
    pub fn take_dict<V: DeserializeOwned>(
        &mut self,
        name: &'static str,
    ) -> Result<IndexMap<String, V>> {
        match self.remove(name) {
            None => Ok(IndexMap::new()),
            Some(value) => decode_serde(self.schema, name, value),
        }
    }

    /// The outer key of a wrapper-keyed object.
    pub fn take_key(&mut self) -> Result<String> {
        let missing = self.key_name();
        self.key.take().ok_or_else(|| self.schema.missing(missing))
    }

    /// The sibling key and its decoded value.
    pub fn take_sibling<T: DeserializeOwned>(&mut self) -> Result<(String, T)> {
        let missing = self.key_name();
        let (key, value) = match (self.key.take(), self.key_value.take()) {
            (Some(key), Some(value)) => (key, value),
            _ => return Err(self.schema.missing(missing)),
        };
        let decoded = decode_serde(self.schema, &key, value)?;
        Ok((key, decoded))
    }

    /// The embedded union, if a variant key was present.
    pub fn take_variant<U: TaggedUnion>(&mut self) -> Result<Option<U>> {
        let Some((key, value)) = self.variant.take() else {
            return Ok(None);
        };
        let kind = U::Kind::from_json_value(&key).ok_or_else(|| Error::UnrecognizedField {
            type_name: self.schema.type_name,
            field: key.clone(),
        })?;
        tracing::trace!(type_name = self.schema.type_name, variant = %key, "dispatching variant");
        U::read_variant(kind, value)
            .map(Some)
            .map_err(|e| e.in_field(self.schema.type_name, key))
    }

    pub fn require_variant<U: TaggedUnion>(&mut self) -> Result<U> {
        self.take_variant()?
            .ok_or_else(|| self.schema.missing(VARIANT_FIELD))
    }

    fn remove(&mut self, name: &'static str) -> Option<Value> {
        debug_assert!(
            self.schema.property(name).is_some(),
            "`{}` is not a property of {}",
            name,
            self.schema.type_name
        );
        self.properties.remove(name).filter(|v| !v.is_null())
    }

    fn key_name(&self) -> &'static str {
        self.schema.key_field().map(|f| f.name).unwrap_or("<key>")
    }

    fn is_drained(&self) -> bool {
        self.properties.is_empty() && self.variant.is_none() && self.key_value.is_none()
    }
}

/// Decode a [`JsonObject`] from an in-memory JSON value.
pub fn decode_object<T: JsonObject>(value: Value) -> Result<T> {
    let schema = T::SCHEMA;
    let mut reader = match schema.key_field() {
        Some(key) if key.role == FieldRole::WrapperKey => {
            let outer = match value {
                Value::Object(map) => map,
                other => {
                    return Err(Error::UnexpectedShape {
                        type_name: schema.type_name,
                        expected: "object",
                        found: json_kind(&other),
                    })
                }
            };
            let mut entries = outer.into_iter();
            let (name, body) = entries.next().ok_or_else(|| schema.missing(key.name))?;
            if let Some((extra, _)) = entries.next() {
                return Err(Error::UnrecognizedField {
                    type_name: schema.type_name,
                    field: extra,
                });
            }
            ObjectReader::new(schema, body_object(schema, body)?)?.with_key(name)
        }
        _ => ObjectReader::new(schema, body_object(schema, value)?)?,
    };

    let decoded = T::read_fields(&mut reader)?;
    debug_assert!(
        reader.is_drained(),
        "{} left entries unread: {:?}",
        schema.type_name,
        reader
    );
    Ok(decoded)
}

/// Serde entry point used by [`crate::impl_json_object!`].
pub fn deserialize_object<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: JsonObject,
{
    let value = Value::deserialize(deserializer)?;
    decode_object(value).map_err(de::Error::custom)
}

fn body_object(schema: &'static Schema, body: Value) -> Result<Map<String, Value>> {
    match (body, schema.shortcut) {
        (Value::Object(map), _) => Ok(map),
        (scalar, Some(property)) => {
            tracing::trace!(type_name = schema.type_name, property, "expanding shortcut property");
            let mut map = Map::new();
            map.insert(property.to_string(), scalar);
            Ok(map)
        }
        (other, None) => Err(Error::UnexpectedShape {
            type_name: schema.type_name,
            expected: "object",
            found: json_kind(&other),
        }),
    }
}

fn decode_serde<T: DeserializeOwned>(schema: &Schema, field: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::from(e).in_field(schema.type_name, field))
}

fn decode_nested<T: JsonObject>(schema: &Schema, field: &str, value: Value) -> Result<T> {
    decode_object(value).map_err(|e| e.in_field(schema.type_name, field))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
