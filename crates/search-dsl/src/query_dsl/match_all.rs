//! `match_all` and `match_none`: queries with nothing but base properties.

use serde::ser::SerializeMap;
use search_dsl_core::{
    impl_json_object, JsonObject, ObjectBuilder, ObjectReader, ObjectWriter, Result, Schema,
};

use super::base::{impl_with_query_base, QueryBase, QUERY_BASE};

/// Matches every document, scoring each `boost` (1.0 by default).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchAllQuery {
    base: QueryBase,
}

impl MatchAllQuery {
    pub fn builder() -> MatchAllQueryBuilder {
        MatchAllQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }
}

#[derive(Debug, Default)]
pub struct MatchAllQueryBuilder {
    base: QueryBase,
}

impl ObjectBuilder for MatchAllQueryBuilder {
    type Output = MatchAllQuery;

    fn build(self) -> Result<MatchAllQuery> {
        Ok(MatchAllQuery { base: self.base })
    }
}

impl JsonObject for MatchAllQuery {
    const SCHEMA: &'static Schema = &Schema::new("MatchAllQuery", &[]).extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        MatchAllQueryBuilder {
            base: QueryBase::read_fields(reader)?,
        }
        .build()
    }
}

/// Matches no documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchNoneQuery {
    base: QueryBase,
}

impl MatchNoneQuery {
    pub fn builder() -> MatchNoneQueryBuilder {
        MatchNoneQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }
}

#[derive(Debug, Default)]
pub struct MatchNoneQueryBuilder {
    base: QueryBase,
}

impl ObjectBuilder for MatchNoneQueryBuilder {
    type Output = MatchNoneQuery;

    fn build(self) -> Result<MatchNoneQuery> {
        Ok(MatchNoneQuery { base: self.base })
    }
}

impl JsonObject for MatchNoneQuery {
    const SCHEMA: &'static Schema = &Schema::new("MatchNoneQuery", &[]).extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        MatchNoneQueryBuilder {
            base: QueryBase::read_fields(reader)?,
        }
        .build()
    }
}

impl_with_query_base!(MatchAllQueryBuilder, MatchNoneQueryBuilder);

impl_json_object!(MatchAllQuery, MatchNoneQuery);
