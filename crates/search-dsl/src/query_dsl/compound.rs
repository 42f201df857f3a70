//! Compound queries wrapping other queries.

use serde::ser::SerializeMap;
use search_dsl_core::{
    impl_json_object, FieldSpec, JsonObject, ObjectBuilder, ObjectReader, ObjectWriter, Result,
    Schema,
};

use super::base::{impl_with_query_base, QueryBase, QUERY_BASE};
use super::query::Query;
use super::types::{ChildScoreMode, MinimumShouldMatch};

// =============================================================================
// bool
// =============================================================================

/// Boolean combination of clauses.
///
/// Each clause list accepts a single query object on decode as well as an
/// array; empty lists are not written.
#[derive(Debug, Clone, PartialEq)]
pub struct BoolQuery {
    base: QueryBase,
    must: Vec<Query>,
    should: Vec<Query>,
    filter: Vec<Query>,
    must_not: Vec<Query>,
    minimum_should_match: Option<MinimumShouldMatch>,
}

impl BoolQuery {
    pub fn builder() -> BoolQueryBuilder {
        BoolQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn must(&self) -> &[Query] {
        &self.must
    }

    pub fn should(&self) -> &[Query] {
        &self.should
    }

    pub fn filter(&self) -> &[Query] {
        &self.filter
    }

    pub fn must_not(&self) -> &[Query] {
        &self.must_not
    }

    pub fn minimum_should_match(&self) -> Option<&MinimumShouldMatch> {
        self.minimum_should_match.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct BoolQueryBuilder {
    base: QueryBase,
    must: Vec<Query>,
    should: Vec<Query>,
    filter: Vec<Query>,
    must_not: Vec<Query>,
    minimum_should_match: Option<MinimumShouldMatch>,
}

impl BoolQueryBuilder {
    pub fn must(mut self, query: impl Into<Query>) -> Self {
        self.must.push(query.into());
        self
    }

    pub fn must_all(mut self, queries: impl IntoIterator<Item = impl Into<Query>>) -> Self {
        self.must.extend(queries.into_iter().map(Into::into));
        self
    }

    pub fn set_must(mut self, queries: Vec<Query>) -> Self {
        self.must = queries;
        self
    }

    pub fn should(mut self, query: impl Into<Query>) -> Self {
        self.should.push(query.into());
        self
    }

    pub fn should_all(mut self, queries: impl IntoIterator<Item = impl Into<Query>>) -> Self {
        self.should.extend(queries.into_iter().map(Into::into));
        self
    }

    pub fn set_should(mut self, queries: Vec<Query>) -> Self {
        self.should = queries;
        self
    }

    pub fn filter(mut self, query: impl Into<Query>) -> Self {
        self.filter.push(query.into());
        self
    }

    pub fn filter_all(mut self, queries: impl IntoIterator<Item = impl Into<Query>>) -> Self {
        self.filter.extend(queries.into_iter().map(Into::into));
        self
    }

    pub fn set_filter(mut self, queries: Vec<Query>) -> Self {
        self.filter = queries;
        self
    }

    pub fn must_not(mut self, query: impl Into<Query>) -> Self {
        self.must_not.push(query.into());
        self
    }

    pub fn must_not_all(mut self, queries: impl IntoIterator<Item = impl Into<Query>>) -> Self {
        self.must_not.extend(queries.into_iter().map(Into::into));
        self
    }

    pub fn set_must_not(mut self, queries: Vec<Query>) -> Self {
        self.must_not = queries;
        self
    }

    pub fn minimum_should_match(mut self, minimum: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(minimum.into());
        self
    }
}

impl ObjectBuilder for BoolQueryBuilder {
    type Output = BoolQuery;

    fn build(self) -> Result<BoolQuery> {
        Ok(BoolQuery {
            base: self.base,
            must: self.must,
            should: self.should,
            filter: self.filter,
            must_not: self.must_not,
            minimum_should_match: self.minimum_should_match,
        })
    }
}

impl JsonObject for BoolQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "BoolQuery",
        &[
            FieldSpec::optional("must"),
            FieldSpec::optional("should"),
            FieldSpec::optional("filter"),
            FieldSpec::optional("must_not"),
            FieldSpec::optional("minimum_should_match"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.list("must", &self.must)?;
        writer.list("should", &self.should)?;
        writer.list("filter", &self.filter)?;
        writer.list("must_not", &self.must_not)?;
        writer.optional("minimum_should_match", &self.minimum_should_match)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        BoolQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            must: reader.take_objects("must")?,
            should: reader.take_objects("should")?,
            filter: reader.take_objects("filter")?,
            must_not: reader.take_objects("must_not")?,
            minimum_should_match: reader.take("minimum_should_match")?,
        }
        .build()
    }
}

// =============================================================================
// boosting
// =============================================================================

/// Demote documents matching `negative` instead of excluding them.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostingQuery {
    base: QueryBase,
    positive: Box<Query>,
    negative: Box<Query>,
    negative_boost: f64,
}

impl BoostingQuery {
    pub fn builder() -> BoostingQueryBuilder {
        BoostingQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn positive(&self) -> &Query {
        &self.positive
    }

    pub fn negative(&self) -> &Query {
        &self.negative
    }

    pub fn negative_boost(&self) -> f64 {
        self.negative_boost
    }
}

#[derive(Debug, Default)]
pub struct BoostingQueryBuilder {
    base: QueryBase,
    positive: Option<Query>,
    negative: Option<Query>,
    negative_boost: Option<f64>,
}

impl BoostingQueryBuilder {
    pub fn positive(mut self, query: impl Into<Query>) -> Self {
        self.positive = Some(query.into());
        self
    }

    pub fn negative(mut self, query: impl Into<Query>) -> Self {
        self.negative = Some(query.into());
        self
    }

    pub fn negative_boost(mut self, negative_boost: f64) -> Self {
        self.negative_boost = Some(negative_boost);
        self
    }
}

impl ObjectBuilder for BoostingQueryBuilder {
    type Output = BoostingQuery;

    fn build(self) -> Result<BoostingQuery> {
        let schema = BoostingQuery::SCHEMA;
        Ok(BoostingQuery {
            base: self.base,
            positive: Box::new(schema.require("positive", self.positive)?),
            negative: Box::new(schema.require("negative", self.negative)?),
            negative_boost: schema.require("negative_boost", self.negative_boost)?,
        })
    }
}

impl JsonObject for BoostingQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "BoostingQuery",
        &[
            FieldSpec::required("positive"),
            FieldSpec::required("negative"),
            FieldSpec::required("negative_boost"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("positive", &self.positive)?;
        writer.field("negative", &self.negative)?;
        writer.field("negative_boost", &self.negative_boost)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        BoostingQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            positive: reader.take_object("positive")?,
            negative: reader.take_object("negative")?,
            negative_boost: reader.take("negative_boost")?,
        }
        .build()
    }
}

// =============================================================================
// constant_score
// =============================================================================

/// Every document matching `filter` scores `boost`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantScoreQuery {
    base: QueryBase,
    filter: Box<Query>,
}

impl ConstantScoreQuery {
    pub fn builder() -> ConstantScoreQueryBuilder {
        ConstantScoreQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn filter(&self) -> &Query {
        &self.filter
    }
}

#[derive(Debug, Default)]
pub struct ConstantScoreQueryBuilder {
    base: QueryBase,
    filter: Option<Query>,
}

impl ConstantScoreQueryBuilder {
    pub fn filter(mut self, query: impl Into<Query>) -> Self {
        self.filter = Some(query.into());
        self
    }
}

impl ObjectBuilder for ConstantScoreQueryBuilder {
    type Output = ConstantScoreQuery;

    fn build(self) -> Result<ConstantScoreQuery> {
        Ok(ConstantScoreQuery {
            base: self.base,
            filter: Box::new(ConstantScoreQuery::SCHEMA.require("filter", self.filter)?),
        })
    }
}

impl JsonObject for ConstantScoreQuery {
    const SCHEMA: &'static Schema =
        &Schema::new("ConstantScoreQuery", &[FieldSpec::required("filter")]).extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("filter", &self.filter)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        ConstantScoreQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            filter: reader.take_object("filter")?,
        }
        .build()
    }
}

// =============================================================================
// dis_max
// =============================================================================

/// Scores by the best-matching sub-query plus `tie_breaker` times the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct DisMaxQuery {
    base: QueryBase,
    queries: Vec<Query>,
    tie_breaker: Option<f64>,
}

impl DisMaxQuery {
    pub fn builder() -> DisMaxQueryBuilder {
        DisMaxQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    pub fn tie_breaker(&self) -> Option<f64> {
        self.tie_breaker
    }
}

#[derive(Debug, Default)]
pub struct DisMaxQueryBuilder {
    base: QueryBase,
    queries: Vec<Query>,
    tie_breaker: Option<f64>,
}

impl DisMaxQueryBuilder {
    pub fn queries(mut self, query: impl Into<Query>) -> Self {
        self.queries.push(query.into());
        self
    }

    pub fn queries_all(mut self, queries: impl IntoIterator<Item = impl Into<Query>>) -> Self {
        self.queries.extend(queries.into_iter().map(Into::into));
        self
    }

    pub fn set_queries(mut self, queries: Vec<Query>) -> Self {
        self.queries = queries;
        self
    }

    pub fn tie_breaker(mut self, tie_breaker: f64) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }
}

impl ObjectBuilder for DisMaxQueryBuilder {
    type Output = DisMaxQuery;

    fn build(self) -> Result<DisMaxQuery> {
        Ok(DisMaxQuery {
            base: self.base,
            queries: DisMaxQuery::SCHEMA.require_list("queries", self.queries)?,
            tie_breaker: self.tie_breaker,
        })
    }
}

impl JsonObject for DisMaxQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "DisMaxQuery",
        &[
            FieldSpec::required("queries"),
            FieldSpec::optional("tie_breaker"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.list("queries", &self.queries)?;
        writer.optional("tie_breaker", &self.tie_breaker)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        DisMaxQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            queries: reader.take_objects("queries")?,
            tie_breaker: reader.take("tie_breaker")?,
        }
        .build()
    }
}

// =============================================================================
// nested
// =============================================================================

/// Run `query` against nested objects at `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedQuery {
    base: QueryBase,
    path: String,
    query: Box<Query>,
    score_mode: Option<ChildScoreMode>,
    ignore_unmapped: Option<bool>,
}

impl NestedQuery {
    pub fn builder() -> NestedQueryBuilder {
        NestedQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn score_mode(&self) -> Option<ChildScoreMode> {
        self.score_mode
    }

    pub fn ignore_unmapped(&self) -> Option<bool> {
        self.ignore_unmapped
    }
}

#[derive(Debug, Default)]
pub struct NestedQueryBuilder {
    base: QueryBase,
    path: Option<String>,
    query: Option<Query>,
    score_mode: Option<ChildScoreMode>,
    ignore_unmapped: Option<bool>,
}

impl NestedQueryBuilder {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn score_mode(mut self, score_mode: ChildScoreMode) -> Self {
        self.score_mode = Some(score_mode);
        self
    }

    pub fn ignore_unmapped(mut self, ignore_unmapped: bool) -> Self {
        self.ignore_unmapped = Some(ignore_unmapped);
        self
    }
}

impl ObjectBuilder for NestedQueryBuilder {
    type Output = NestedQuery;

    fn build(self) -> Result<NestedQuery> {
        let schema = NestedQuery::SCHEMA;
        Ok(NestedQuery {
            base: self.base,
            path: schema.require("path", self.path)?,
            query: Box::new(schema.require("query", self.query)?),
            score_mode: self.score_mode,
            ignore_unmapped: self.ignore_unmapped,
        })
    }
}

impl JsonObject for NestedQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "NestedQuery",
        &[
            FieldSpec::required("path"),
            FieldSpec::required("query"),
            FieldSpec::optional("score_mode"),
            FieldSpec::optional("ignore_unmapped"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("path", &self.path)?;
        writer.field("query", &self.query)?;
        writer.optional("score_mode", &self.score_mode)?;
        writer.optional("ignore_unmapped", &self.ignore_unmapped)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        NestedQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            path: reader.take("path")?,
            query: reader.take_object("query")?,
            score_mode: reader.take("score_mode")?,
            ignore_unmapped: reader.take("ignore_unmapped")?,
        }
        .build()
    }
}

impl_with_query_base!(
    BoolQueryBuilder,
    BoostingQueryBuilder,
    ConstantScoreQueryBuilder,
    DisMaxQueryBuilder,
    NestedQueryBuilder,
);

impl_json_object!(
    BoolQuery,
    BoostingQuery,
    ConstantScoreQuery,
    DisMaxQuery,
    NestedQuery,
);
