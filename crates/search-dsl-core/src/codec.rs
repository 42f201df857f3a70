//! JSON entry points.
//!
//! Encoding goes through the regular serde impls. Decoding of DSL objects
//! bypasses serde's error type so callers get a structured [`Error`] that
//! names the failing field path.

use serde::Serialize;
use serde_json::Value;

use crate::de::decode_object;
use crate::error::{Error, Result};
use crate::object::JsonObject;

pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

pub fn to_string<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn to_string_pretty<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn from_value<T: JsonObject>(value: Value) -> Result<T> {
    decode_object(value)
}

pub fn from_str<T: JsonObject>(json: &str) -> Result<T> {
    let value: Value = serde_json::from_str(json).map_err(Error::Json)?;
    decode_object(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::de::ObjectReader;
    use crate::ser::ObjectWriter;
    use crate::{FieldSpec, Schema};
    use serde::ser::SerializeMap;

    #[derive(Debug, PartialEq)]
    struct Named {
        name: String,
    }

    impl JsonObject for Named {
        const SCHEMA: &'static Schema = &Schema::new("Named", &[FieldSpec::required("name")]);

        fn write_fields<M: SerializeMap>(&self, writer: &mut ObjectWriter<M>) -> std::result::Result<(), M::Error> {
            writer.field("name", &self.name)
        }

        fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
            Ok(Named {
                name: Self::SCHEMA.require("name", reader.take("name")?)?,
            })
        }
    }

    crate::impl_json_object!(Named);

    #[test]
    fn test_from_str_structured_error() {
        let err = from_str::<Named>(r#"{"name": "a", "extra": 1}"#).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedField { type_name: "Named", .. }));

        let err = from_str::<Named>("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_serde_path_agrees() {
        let named = Named {
            name: "a".to_string(),
        };
        let text = to_string(&named).unwrap();
        assert_eq!(text, r#"{"name":"a"}"#);
        assert_eq!(serde_json::from_str::<Named>(&text).unwrap(), named);

        let err = serde_json::from_str::<Named>("{}").unwrap_err();
        assert!(err.to_string().contains("missing required field `name` in Named"));
    }
}
