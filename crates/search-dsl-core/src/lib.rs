//! Core machinery for the search query DSL.
//!
//! DSL types describe themselves with a `const` [`Schema`], write and read
//! their entries through [`ObjectWriter`] / [`ObjectReader`], and are built
//! with consuming [`ObjectBuilder`]s. Tagged unions keyed by variant name
//! are declared with [`tagged_union!`].

pub mod builder;
pub mod codec;
pub mod de;
pub mod error;
pub mod json_data;
pub mod object;
pub mod schema;
pub mod ser;
pub mod union;

pub use builder::ObjectBuilder;
pub use de::ObjectReader;
pub use error::{Error, Result};
pub use json_data::JsonData;
pub use object::JsonObject;
pub use schema::{FieldRole, FieldSpec, Schema};
pub use ser::ObjectWriter;
pub use union::{TaggedUnion, VariantKind};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
