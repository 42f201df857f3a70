//! Schema-ordered JSON object writing.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::object::JsonObject;
use crate::schema::Schema;

/// Writes one JSON object's entries through a serde map serializer.
///
/// Absent optionals and empty collections are skipped, never written as
/// `null` or `[]`.
pub struct ObjectWriter<M> {
    schema: &'static Schema,
    map: M,
}

impl<M: SerializeMap> ObjectWriter<M> {
    pub fn new(schema: &'static Schema, map: M) -> Self {
        Self { schema, map }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn field<T>(&mut self, name: &str, value: &T) -> Result<(), M::Error>
    where
        T: Serialize + ?Sized,
    {
        debug_assert!(
            self.schema.property(name).is_some(),
            "`{}` is not a property of {}",
            name,
            self.schema.type_name
        );
        self.map.serialize_entry(name, value)
    }

    pub fn optional<T: Serialize>(&mut self, name: &str, value: &Option<T>) -> Result<(), M::Error> {
        match value {
            Some(v) => self.field(name, v),
            None => Ok(()),
        }
    }

    pub fn list<T: Serialize>(&mut self, name: &str, values: &[T]) -> Result<(), M::Error> {
        if values.is_empty() {
            return Ok(());
        }
        self.field(name, values)
    }

    /// Map-valued property, keys in insertion order.
    pub fn dict<V: Serialize>(
        &mut self,
        name: &str,
        values: &IndexMap<String, V>,
    ) -> Result<(), M::Error> {
        if values.is_empty() {
            return Ok(());
        }
        self.field(name, values)
    }

    /// Entry keyed by a runtime value (sibling-key shapes).
    pub fn dynamic<T>(&mut self, key: &str, value: &T) -> Result<(), M::Error>
    where
        T: Serialize + ?Sized,
    {
        self.map.serialize_entry(key, value)
    }

    /// Discriminator entry of an embedded union.
    pub fn variant<T>(&mut self, kind: &str, payload: &T) -> Result<(), M::Error>
    where
        T: Serialize + ?Sized,
    {
        debug_assert!(self.schema.is_variant(kind));
        self.map.serialize_entry(kind, payload)
    }

    pub fn end(self) -> Result<M::Ok, M::Error> {
        self.map.end()
    }
}

/// Serialize a [`JsonObject`], adding the outer layer for wrapper-keyed types.
pub fn serialize_object<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: JsonObject,
    S: Serializer,
{
    match value.wrapper_key() {
        Some(key) => {
            let mut outer = serializer.serialize_map(Some(1))?;
            outer.serialize_entry(key, &Body(value))?;
            outer.end()
        }
        None => Body(value).serialize(serializer),
    }
}

struct Body<'a, T>(&'a T);

impl<T: JsonObject> Serialize for Body<'_, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut writer = ObjectWriter::new(T::SCHEMA, serializer.serialize_map(None)?);
        self.0.write_fields(&mut writer)?;
        writer.end()
    }
}
