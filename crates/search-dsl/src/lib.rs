//! Typed builders and JSON codecs for an Elasticsearch/OpenSearch-style
//! query DSL.
//!
//! Every query kind is an immutable value built through a consuming
//! builder. [`Query`] is the tagged union over all kinds; it encodes as a
//! single-key object naming the kind:
//!
//! ```
//! use search_dsl::prelude::*;
//!
//! let query: Query = BoolQuery::builder()
//!     .must(TermQuery::builder().field("a").value("1").build()?)
//!     .build()?
//!     .into();
//!
//! assert_eq!(
//!     codec::to_string(&query)?,
//!     r#"{"bool":{"must":[{"term":{"a":{"value":"1"}}}]}}"#
//! );
//! assert_eq!(codec::from_str::<Query>(&codec::to_string(&query)?)?, query);
//! # Ok::<(), search_dsl::Error>(())
//! ```

pub mod query_dsl;

pub use query_dsl::*;
pub use search_dsl_core::{codec, Error, JsonData, ObjectBuilder, Result};

/// Glob import for building queries.
pub mod prelude {
    pub use crate::query_dsl::*;
    pub use search_dsl_core::{
        codec, JsonData, JsonObject, ObjectBuilder, TaggedUnion, VariantKind,
    };
}
