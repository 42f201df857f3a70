//! The schema-driven object contract shared by every DSL type.

use serde::ser::SerializeMap;

use crate::de::ObjectReader;
use crate::schema::Schema;
use crate::ser::ObjectWriter;

/// A DSL type encoded as a JSON object described by a [`Schema`].
///
/// Implementors write and read their own entries; the generic functions in
/// [`crate::ser`] and [`crate::de`] take care of wrapper keys, shortcut
/// bodies and key resolution.
pub trait JsonObject: Sized {
    const SCHEMA: &'static Schema;

    /// Write this value's entries, supertype entries first.
    fn write_fields<M: SerializeMap>(&self, writer: &mut ObjectWriter<M>) -> Result<(), M::Error>;

    /// Rebuild a value from an already-classified object.
    fn read_fields(reader: &mut ObjectReader) -> crate::Result<Self>;

    /// The outer key for types whose schema declares a wrapper key.
    fn wrapper_key(&self) -> Option<&str> {
        None
    }
}

/// Implement `serde::Serialize` and `serde::Deserialize` for [`JsonObject`] types.
#[macro_export]
macro_rules! impl_json_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::__private::serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
                where
                    S: $crate::__private::serde::Serializer,
                {
                    $crate::ser::serialize_object(self, serializer)
                }
            }

            impl<'de> $crate::__private::serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                where
                    D: $crate::__private::serde::Deserializer<'de>,
                {
                    $crate::de::deserialize_object(deserializer)
                }
            }
        )+
    };
}
