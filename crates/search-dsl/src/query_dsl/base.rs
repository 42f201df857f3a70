//! Properties shared by every query kind.

use serde::ser::SerializeMap;
use search_dsl_core::{FieldSpec, ObjectReader, ObjectWriter, Result, Schema};

/// Supertype entries inherited by every query schema.
pub const QUERY_BASE: Schema = Schema::new(
    "QueryBase",
    &[FieldSpec::optional("boost"), FieldSpec::optional("_name")],
);

/// `boost` and `_name`, written before the subtype's own entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBase {
    boost: Option<f32>,
    name: Option<String>,
}

impl QueryBase {
    pub fn boost(&self) -> Option<f32> {
        self.boost
    }

    /// The `_name` used to report which clauses matched.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.boost.is_none() && self.name.is_none()
    }

    pub(crate) fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.optional("boost", &self.boost)?;
        writer.optional("_name", &self.name)
    }

    pub(crate) fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        Ok(Self {
            boost: reader.take("boost")?,
            name: reader.take("_name")?,
        })
    }
}

/// Setters for the [`QueryBase`] properties, shared by all query builders.
pub trait WithQueryBase: Sized {
    fn query_base(&mut self) -> &mut QueryBase;

    fn boost(mut self, boost: f32) -> Self {
        self.query_base().boost = Some(boost);
        self
    }

    fn query_name(mut self, name: impl Into<String>) -> Self {
        self.query_base().name = Some(name.into());
        self
    }
}

/// Implement [`WithQueryBase`] for builders holding a `base: QueryBase` field.
macro_rules! impl_with_query_base {
    ($($builder:ty),+ $(,)?) => {
        $(
            impl $crate::query_dsl::base::WithQueryBase for $builder {
                fn query_base(&mut self) -> &mut $crate::query_dsl::base::QueryBase {
                    &mut self.base
                }
            }
        )+
    };
}

pub(crate) use impl_with_query_base;
