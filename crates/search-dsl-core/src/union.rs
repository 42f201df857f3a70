//! Tagged unions keyed by variant name.
//!
//! A union is encoded as a JSON object whose single discriminator key names
//! the variant and whose value is the payload:
//!
//! ```json
//! { "term": { "status": { "value": "ok" } } }
//! ```
//!
//! In Rust each union is a closed enum with one arm per variant, so the
//! discriminator and the payload can never disagree. [`tagged_union!`]
//! stamps out the enum together with its kind enum, typed accessors,
//! `From` conversions and a last-write-wins builder.

use std::fmt;

use serde::ser::SerializeMap;
use serde_json::Value;

use crate::schema::Schema;
use crate::ser::ObjectWriter;

/// The closed set of discriminators of one union.
///
/// `json_value` and `from_json_value` form a bijection over `ALL`.
pub trait VariantKind: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    const ALL: &'static [Self];
    const JSON_VALUES: &'static [&'static str];

    fn json_value(self) -> &'static str;

    fn from_json_value(value: &str) -> Option<Self>;

    /// Schema of the payload carried by this kind.
    fn payload_schema(self) -> &'static Schema;
}

/// A union value holding exactly one `(kind, payload)` pair.
pub trait TaggedUnion: Sized {
    type Kind: VariantKind;

    fn kind(&self) -> Self::Kind;

    /// Write the discriminator key and the payload.
    fn write_variant<M: SerializeMap>(&self, writer: &mut ObjectWriter<M>) -> Result<(), M::Error>;

    /// Decode the payload for an already-resolved kind.
    fn read_variant(kind: Self::Kind, value: Value) -> crate::Result<Self>;
}

/// Declare a tagged union.
///
/// ```ignore
/// tagged_union! {
///     /// A query node.
///     pub enum Query / QueryKind / QueryBuilder {
///         Bool("bool", is_bool, bool) => BoolQuery,
///         Term("term", is_term, term) => TermQuery,
///     }
/// }
/// ```
///
/// Each line names the arm, its json key, the predicate and the accessor.
/// Payloads must implement [`crate::JsonObject`], `Debug`, `Clone` and
/// `PartialEq`, and be distinct types within one union.
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident / $kind:ident / $builder:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident ($json:literal, $is:ident, $get:ident) => $payload:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($payload),
            )+
        }

        #[doc = concat!("Variant kinds of [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $kind {
            $( $variant, )+
        }

        impl $crate::VariantKind for $kind {
            const ALL: &'static [Self] = &[$( $kind::$variant ),+];
            const JSON_VALUES: &'static [&'static str] = &[$( $json ),+];

            fn json_value(self) -> &'static str {
                match self {
                    $( $kind::$variant => $json, )+
                }
            }

            fn from_json_value(value: &str) -> ::std::option::Option<Self> {
                match value {
                    $( $json => ::std::option::Option::Some($kind::$variant), )+
                    _ => ::std::option::Option::None,
                }
            }

            fn payload_schema(self) -> &'static $crate::Schema {
                match self {
                    $( $kind::$variant => <$payload as $crate::JsonObject>::SCHEMA, )+
                }
            }
        }

        impl ::std::fmt::Display for $kind {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::VariantKind::json_value(*self))
            }
        }

        impl $crate::TaggedUnion for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $( $name::$variant(_) => $kind::$variant, )+
                }
            }

            fn write_variant<M>(
                &self,
                writer: &mut $crate::ser::ObjectWriter<M>,
            ) -> ::std::result::Result<(), M::Error>
            where
                M: $crate::__private::serde::ser::SerializeMap,
            {
                match self {
                    $( $name::$variant(value) => writer.variant($json, value), )+
                }
            }

            fn read_variant(
                kind: $kind,
                value: $crate::__private::serde_json::Value,
            ) -> $crate::Result<Self> {
                match kind {
                    $(
                        $kind::$variant => ::std::result::Result::Ok($name::$variant(
                            $crate::de::decode_object::<$payload>(value)?,
                        )),
                    )+
                }
            }
        }

        impl $name {
            /// Start a union builder; the last variant set wins.
            pub fn builder() -> $builder {
                <$builder as ::std::default::Default>::default()
            }

            /// The active variant kind.
            pub fn kind(&self) -> $kind {
                <Self as $crate::TaggedUnion>::kind(self)
            }

            $(
                #[doc = concat!("Whether this is a `", $json, "` variant.")]
                pub fn $is(&self) -> bool {
                    ::std::matches!(self, $name::$variant(_))
                }

                #[doc = concat!("The `", $json, "` payload, or `Error::WrongVariant` for any other kind.")]
                pub fn $get(&self) -> $crate::Result<&$payload> {
                    match self {
                        $name::$variant(value) => ::std::result::Result::Ok(value),
                        #[allow(unreachable_patterns)]
                        other => ::std::result::Result::Err($crate::Error::WrongVariant {
                            type_name: ::std::stringify!($name),
                            expected: $json,
                            actual: $crate::VariantKind::json_value(other.kind()),
                        }),
                    }
                }
            )+
        }

        $(
            impl ::std::convert::From<$payload> for $name {
                fn from(value: $payload) -> Self {
                    $name::$variant(value)
                }
            }
        )+

        #[doc = concat!("Builder for [`", stringify!($name), "`]; the last variant set wins.")]
        #[derive(Debug, Default)]
        $vis struct $builder {
            value: ::std::option::Option<$name>,
        }

        impl $builder {
            $(
                pub fn $get(mut self, value: $payload) -> Self {
                    self.value = ::std::option::Option::Some($name::$variant(value));
                    self
                }
            )+
        }

        impl $crate::ObjectBuilder for $builder {
            type Output = $name;

            fn build(self) -> $crate::Result<$name> {
                self.value.ok_or($crate::Error::MissingRequiredField {
                    type_name: ::std::stringify!($name),
                    field: $crate::de::VARIANT_FIELD,
                })
            }
        }
    };
}

/// Make a union a standalone JSON object: `{"<kind>": <payload>}` with no
/// sibling properties.
#[macro_export]
macro_rules! impl_union_object {
    ($name:ident) => {
        impl $crate::JsonObject for $name {
            const SCHEMA: &'static $crate::Schema = &$crate::Schema::new(::std::stringify!($name), &[])
                .with_variants(
                    <<$name as $crate::TaggedUnion>::Kind as $crate::VariantKind>::JSON_VALUES,
                );

            fn write_fields<M>(
                &self,
                writer: &mut $crate::ser::ObjectWriter<M>,
            ) -> ::std::result::Result<(), M::Error>
            where
                M: $crate::__private::serde::ser::SerializeMap,
            {
                $crate::TaggedUnion::write_variant(self, writer)
            }

            fn read_fields(reader: &mut $crate::de::ObjectReader) -> $crate::Result<Self> {
                reader.require_variant()
            }
        }

        $crate::impl_json_object!($name);
    };
}

#[cfg(test)]
mod tests {
    use serde::ser::SerializeMap;
    use serde_json::json;

    use crate::de::ObjectReader;
    use crate::ser::ObjectWriter;
    use crate::{codec, Error, FieldSpec, JsonObject, ObjectBuilder, Schema, VariantKind};

    #[derive(Debug, Clone, PartialEq)]
    struct Circle {
        radius: i64,
    }

    impl JsonObject for Circle {
        const SCHEMA: &'static Schema = &Schema::new("Circle", &[FieldSpec::required("radius")]);

        fn write_fields<M: SerializeMap>(&self, writer: &mut ObjectWriter<M>) -> Result<(), M::Error> {
            writer.field("radius", &self.radius)
        }

        fn read_fields(reader: &mut ObjectReader) -> crate::Result<Self> {
            Ok(Circle {
                radius: Self::SCHEMA.require("radius", reader.take("radius")?)?,
            })
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Square;

    impl JsonObject for Square {
        const SCHEMA: &'static Schema = &Schema::new("Square", &[]);

        fn write_fields<M: SerializeMap>(&self, _writer: &mut ObjectWriter<M>) -> Result<(), M::Error> {
            Ok(())
        }

        fn read_fields(_reader: &mut ObjectReader) -> crate::Result<Self> {
            Ok(Square)
        }
    }

    crate::impl_json_object!(Circle, Square);

    crate::tagged_union! {
        enum Shape / ShapeKind / ShapeBuilder {
            Circle("circle", is_circle, circle) => Circle,
            Square("square", is_square, square) => Square,
        }
    }

    crate::impl_union_object!(Shape);

    #[test]
    fn test_kind_mapping_is_bijective() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_json_value(kind.json_value()), Some(*kind));
        }
        assert_eq!(ShapeKind::JSON_VALUES, &["circle", "square"]);
        assert_eq!(ShapeKind::from_json_value("triangle"), None);
        assert_eq!(ShapeKind::Circle.to_string(), "circle");
        assert_eq!(ShapeKind::Circle.payload_schema().type_name, "Circle");
    }

    #[test]
    fn test_serialize_single_key() {
        let shape = Shape::from(Circle { radius: 3 });
        assert_eq!(
            codec::to_value(&shape).unwrap(),
            json!({"circle": {"radius": 3}})
        );
        assert_eq!(codec::to_string(&Shape::from(Square)).unwrap(), r#"{"square":{}}"#);
    }

    #[test]
    fn test_decode_dispatches_on_key() {
        let shape: Shape = codec::from_value(json!({"circle": {"radius": 4}})).unwrap();
        assert!(shape.is_circle());
        assert!(!shape.is_square());
        assert_eq!(shape.circle().unwrap().radius, 4);
    }

    #[test]
    fn test_wrong_variant_access() {
        let shape = Shape::from(Square);
        let err = shape.circle().unwrap_err();
        assert!(matches!(
            err,
            Error::WrongVariant {
                type_name: "Shape",
                expected: "circle",
                actual: "square"
            }
        ));
    }

    #[test]
    fn test_builder_last_write_wins() {
        let shape = Shape::builder()
            .circle(Circle { radius: 1 })
            .square(Square)
            .build()
            .unwrap();
        assert_eq!(shape, Shape::Square(Square));

        let err = Shape::builder().build().unwrap_err();
        assert!(matches!(
            err,
            Error::MissingRequiredField {
                type_name: "Shape",
                field: "<variant kind>"
            }
        ));
    }

    #[test]
    fn test_decode_rejects_two_variants() {
        let err = codec::from_value::<Shape>(json!({"circle": {"radius": 1}, "square": {}}))
            .unwrap_err();
        assert!(matches!(err, Error::AmbiguousVariant { .. }));
    }

    #[test]
    fn test_decode_rejects_unknown_kind() {
        let err = codec::from_value::<Shape>(json!({"triangle": {}})).unwrap_err();
        assert!(matches!(err, Error::UnrecognizedField { type_name: "Shape", .. }));
    }

    #[test]
    fn test_payload_errors_name_the_variant() {
        let err = codec::from_value::<Shape>(json!({"circle": {}})).unwrap_err();
        assert_eq!(err.field_path(), "circle");
        assert!(matches!(
            err.root_cause(),
            Error::MissingRequiredField {
                type_name: "Circle",
                field: "radius"
            }
        ));
    }
}
