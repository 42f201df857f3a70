//! Span queries: positional matching over terms.
//!
//! Span queries nest only other span queries, so their clauses are
//! [`SpanQuery`] rather than [`Query`](super::Query). Every span kind is
//! also a `Query` kind; `Query::from(span)` converts without re-encoding.

use serde::ser::SerializeMap;
use search_dsl_core::{
    impl_json_object, impl_union_object, tagged_union, FieldSpec, JsonObject, ObjectBuilder,
    ObjectReader, ObjectWriter, Result, Schema,
};

use super::base::{impl_with_query_base, QueryBase, QUERY_BASE};

tagged_union! {
    /// A span query node.
    pub enum SpanQuery / SpanQueryKind / SpanQueryBuilder {
        SpanTerm("span_term", is_span_term, span_term) => SpanTermQuery,
        SpanNear("span_near", is_span_near, span_near) => SpanNearQuery,
        SpanOr("span_or", is_span_or, span_or) => SpanOrQuery,
        SpanFirst("span_first", is_span_first, span_first) => SpanFirstQuery,
        SpanNot("span_not", is_span_not, span_not) => SpanNotQuery,
        SpanContaining("span_containing", is_span_containing, span_containing) => SpanContainingQuery,
        SpanWithin("span_within", is_span_within, span_within) => SpanWithinQuery,
    }
}

impl_union_object!(SpanQuery);

// =============================================================================
// span_term
// =============================================================================

/// A single term as a span, wrapper-keyed by field like `term`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanTermQuery {
    base: QueryBase,
    field: String,
    value: String,
}

impl SpanTermQuery {
    pub fn builder() -> SpanTermQueryBuilder {
        SpanTermQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Default)]
pub struct SpanTermQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    value: Option<String>,
}

impl SpanTermQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl ObjectBuilder for SpanTermQueryBuilder {
    type Output = SpanTermQuery;

    fn build(self) -> Result<SpanTermQuery> {
        let schema = SpanTermQuery::SCHEMA;
        Ok(SpanTermQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            value: schema.require("value", self.value)?,
        })
    }
}

impl JsonObject for SpanTermQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "SpanTermQuery",
        &[FieldSpec::wrapper_key("field"), FieldSpec::required("value")],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("value");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("value", &self.value)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        SpanTermQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            value: reader.take("value")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// span_near
// =============================================================================

/// Spans within `slop` positions of each other, optionally in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanNearQuery {
    base: QueryBase,
    clauses: Vec<SpanQuery>,
    slop: Option<i32>,
    in_order: Option<bool>,
}

impl SpanNearQuery {
    pub fn builder() -> SpanNearQueryBuilder {
        SpanNearQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn clauses(&self) -> &[SpanQuery] {
        &self.clauses
    }

    pub fn slop(&self) -> Option<i32> {
        self.slop
    }

    pub fn in_order(&self) -> Option<bool> {
        self.in_order
    }
}

#[derive(Debug, Default)]
pub struct SpanNearQueryBuilder {
    base: QueryBase,
    clauses: Vec<SpanQuery>,
    slop: Option<i32>,
    in_order: Option<bool>,
}

impl SpanNearQueryBuilder {
    pub fn clauses(mut self, clause: impl Into<SpanQuery>) -> Self {
        self.clauses.push(clause.into());
        self
    }

    pub fn clauses_all(mut self, clauses: impl IntoIterator<Item = impl Into<SpanQuery>>) -> Self {
        self.clauses.extend(clauses.into_iter().map(Into::into));
        self
    }

    pub fn set_clauses(mut self, clauses: Vec<SpanQuery>) -> Self {
        self.clauses = clauses;
        self
    }

    pub fn slop(mut self, slop: i32) -> Self {
        self.slop = Some(slop);
        self
    }

    pub fn in_order(mut self, in_order: bool) -> Self {
        self.in_order = Some(in_order);
        self
    }
}

impl ObjectBuilder for SpanNearQueryBuilder {
    type Output = SpanNearQuery;

    fn build(self) -> Result<SpanNearQuery> {
        Ok(SpanNearQuery {
            base: self.base,
            clauses: SpanNearQuery::SCHEMA.require_list("clauses", self.clauses)?,
            slop: self.slop,
            in_order: self.in_order,
        })
    }
}

impl JsonObject for SpanNearQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "SpanNearQuery",
        &[
            FieldSpec::required("clauses"),
            FieldSpec::optional("slop"),
            FieldSpec::optional("in_order"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.list("clauses", &self.clauses)?;
        writer.optional("slop", &self.slop)?;
        writer.optional("in_order", &self.in_order)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        SpanNearQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            clauses: reader.take_objects("clauses")?,
            slop: reader.take("slop")?,
            in_order: reader.take("in_order")?,
        }
        .build()
    }
}

// =============================================================================
// span_or
// =============================================================================

/// The union of its clauses' spans.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanOrQuery {
    base: QueryBase,
    clauses: Vec<SpanQuery>,
}

impl SpanOrQuery {
    pub fn builder() -> SpanOrQueryBuilder {
        SpanOrQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn clauses(&self) -> &[SpanQuery] {
        &self.clauses
    }
}

#[derive(Debug, Default)]
pub struct SpanOrQueryBuilder {
    base: QueryBase,
    clauses: Vec<SpanQuery>,
}

impl SpanOrQueryBuilder {
    pub fn clauses(mut self, clause: impl Into<SpanQuery>) -> Self {
        self.clauses.push(clause.into());
        self
    }

    pub fn clauses_all(mut self, clauses: impl IntoIterator<Item = impl Into<SpanQuery>>) -> Self {
        self.clauses.extend(clauses.into_iter().map(Into::into));
        self
    }

    pub fn set_clauses(mut self, clauses: Vec<SpanQuery>) -> Self {
        self.clauses = clauses;
        self
    }
}

impl ObjectBuilder for SpanOrQueryBuilder {
    type Output = SpanOrQuery;

    fn build(self) -> Result<SpanOrQuery> {
        Ok(SpanOrQuery {
            base: self.base,
            clauses: SpanOrQuery::SCHEMA.require_list("clauses", self.clauses)?,
        })
    }
}

impl JsonObject for SpanOrQuery {
    const SCHEMA: &'static Schema =
        &Schema::new("SpanOrQuery", &[FieldSpec::required("clauses")]).extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.list("clauses", &self.clauses)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        SpanOrQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            clauses: reader.take_objects("clauses")?,
        }
        .build()
    }
}

// =============================================================================
// span_first
// =============================================================================

/// Spans of `match` ending no later than position `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanFirstQuery {
    base: QueryBase,
    r#match: Box<SpanQuery>,
    end: i32,
}

impl SpanFirstQuery {
    pub fn builder() -> SpanFirstQueryBuilder {
        SpanFirstQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn r#match(&self) -> &SpanQuery {
        &self.r#match
    }

    pub fn end(&self) -> i32 {
        self.end
    }
}

#[derive(Debug, Default)]
pub struct SpanFirstQueryBuilder {
    base: QueryBase,
    r#match: Option<SpanQuery>,
    end: Option<i32>,
}

impl SpanFirstQueryBuilder {
    pub fn r#match(mut self, span: impl Into<SpanQuery>) -> Self {
        self.r#match = Some(span.into());
        self
    }

    pub fn end(mut self, end: i32) -> Self {
        self.end = Some(end);
        self
    }
}

impl ObjectBuilder for SpanFirstQueryBuilder {
    type Output = SpanFirstQuery;

    fn build(self) -> Result<SpanFirstQuery> {
        let schema = SpanFirstQuery::SCHEMA;
        Ok(SpanFirstQuery {
            base: self.base,
            r#match: Box::new(schema.require("match", self.r#match)?),
            end: schema.require("end", self.end)?,
        })
    }
}

impl JsonObject for SpanFirstQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "SpanFirstQuery",
        &[FieldSpec::required("match"), FieldSpec::required("end")],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("match", &self.r#match)?;
        writer.field("end", &self.end)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        SpanFirstQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            r#match: reader.take_object("match")?,
            end: reader.take("end")?,
        }
        .build()
    }
}

// =============================================================================
// span_not
// =============================================================================

/// Spans of `include` that do not overlap spans of `exclude`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanNotQuery {
    base: QueryBase,
    include: Box<SpanQuery>,
    exclude: Box<SpanQuery>,
    dist: Option<i32>,
    pre: Option<i32>,
    post: Option<i32>,
}

impl SpanNotQuery {
    pub fn builder() -> SpanNotQueryBuilder {
        SpanNotQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn include(&self) -> &SpanQuery {
        &self.include
    }

    pub fn exclude(&self) -> &SpanQuery {
        &self.exclude
    }

    pub fn dist(&self) -> Option<i32> {
        self.dist
    }

    pub fn pre(&self) -> Option<i32> {
        self.pre
    }

    pub fn post(&self) -> Option<i32> {
        self.post
    }
}

#[derive(Debug, Default)]
pub struct SpanNotQueryBuilder {
    base: QueryBase,
    include: Option<SpanQuery>,
    exclude: Option<SpanQuery>,
    dist: Option<i32>,
    pre: Option<i32>,
    post: Option<i32>,
}

impl SpanNotQueryBuilder {
    pub fn include(mut self, span: impl Into<SpanQuery>) -> Self {
        self.include = Some(span.into());
        self
    }

    pub fn exclude(mut self, span: impl Into<SpanQuery>) -> Self {
        self.exclude = Some(span.into());
        self
    }

    pub fn dist(mut self, dist: i32) -> Self {
        self.dist = Some(dist);
        self
    }

    pub fn pre(mut self, pre: i32) -> Self {
        self.pre = Some(pre);
        self
    }

    pub fn post(mut self, post: i32) -> Self {
        self.post = Some(post);
        self
    }
}

impl ObjectBuilder for SpanNotQueryBuilder {
    type Output = SpanNotQuery;

    fn build(self) -> Result<SpanNotQuery> {
        let schema = SpanNotQuery::SCHEMA;
        Ok(SpanNotQuery {
            base: self.base,
            include: Box::new(schema.require("include", self.include)?),
            exclude: Box::new(schema.require("exclude", self.exclude)?),
            dist: self.dist,
            pre: self.pre,
            post: self.post,
        })
    }
}

impl JsonObject for SpanNotQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "SpanNotQuery",
        &[
            FieldSpec::required("include"),
            FieldSpec::required("exclude"),
            FieldSpec::optional("dist"),
            FieldSpec::optional("pre"),
            FieldSpec::optional("post"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("include", &self.include)?;
        writer.field("exclude", &self.exclude)?;
        writer.optional("dist", &self.dist)?;
        writer.optional("pre", &self.pre)?;
        writer.optional("post", &self.post)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        SpanNotQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            include: reader.take_object("include")?,
            exclude: reader.take_object("exclude")?,
            dist: reader.take("dist")?,
            pre: reader.take("pre")?,
            post: reader.take("post")?,
        }
        .build()
    }
}

// =============================================================================
// span_containing / span_within
// =============================================================================

/// Spans of `big` that contain a span of `little`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanContainingQuery {
    base: QueryBase,
    big: Box<SpanQuery>,
    little: Box<SpanQuery>,
}

impl SpanContainingQuery {
    pub fn builder() -> SpanContainingQueryBuilder {
        SpanContainingQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn big(&self) -> &SpanQuery {
        &self.big
    }

    pub fn little(&self) -> &SpanQuery {
        &self.little
    }
}

#[derive(Debug, Default)]
pub struct SpanContainingQueryBuilder {
    base: QueryBase,
    big: Option<SpanQuery>,
    little: Option<SpanQuery>,
}

impl SpanContainingQueryBuilder {
    pub fn big(mut self, span: impl Into<SpanQuery>) -> Self {
        self.big = Some(span.into());
        self
    }

    pub fn little(mut self, span: impl Into<SpanQuery>) -> Self {
        self.little = Some(span.into());
        self
    }
}

impl ObjectBuilder for SpanContainingQueryBuilder {
    type Output = SpanContainingQuery;

    fn build(self) -> Result<SpanContainingQuery> {
        let schema = SpanContainingQuery::SCHEMA;
        Ok(SpanContainingQuery {
            base: self.base,
            big: Box::new(schema.require("big", self.big)?),
            little: Box::new(schema.require("little", self.little)?),
        })
    }
}

impl JsonObject for SpanContainingQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "SpanContainingQuery",
        &[FieldSpec::required("big"), FieldSpec::required("little")],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("big", &self.big)?;
        writer.field("little", &self.little)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        SpanContainingQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            big: reader.take_object("big")?,
            little: reader.take_object("little")?,
        }
        .build()
    }
}

/// Spans of `little` that lie inside a span of `big`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanWithinQuery {
    base: QueryBase,
    big: Box<SpanQuery>,
    little: Box<SpanQuery>,
}

impl SpanWithinQuery {
    pub fn builder() -> SpanWithinQueryBuilder {
        SpanWithinQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn big(&self) -> &SpanQuery {
        &self.big
    }

    pub fn little(&self) -> &SpanQuery {
        &self.little
    }
}

#[derive(Debug, Default)]
pub struct SpanWithinQueryBuilder {
    base: QueryBase,
    big: Option<SpanQuery>,
    little: Option<SpanQuery>,
}

impl SpanWithinQueryBuilder {
    pub fn big(mut self, span: impl Into<SpanQuery>) -> Self {
        self.big = Some(span.into());
        self
    }

    pub fn little(mut self, span: impl Into<SpanQuery>) -> Self {
        self.little = Some(span.into());
        self
    }
}

impl ObjectBuilder for SpanWithinQueryBuilder {
    type Output = SpanWithinQuery;

    fn build(self) -> Result<SpanWithinQuery> {
        let schema = SpanWithinQuery::SCHEMA;
        Ok(SpanWithinQuery {
            base: self.base,
            big: Box::new(schema.require("big", self.big)?),
            little: Box::new(schema.require("little", self.little)?),
        })
    }
}

impl JsonObject for SpanWithinQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "SpanWithinQuery",
        &[FieldSpec::required("big"), FieldSpec::required("little")],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("big", &self.big)?;
        writer.field("little", &self.little)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        SpanWithinQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            big: reader.take_object("big")?,
            little: reader.take_object("little")?,
        }
        .build()
    }
}

impl_with_query_base!(
    SpanTermQueryBuilder,
    SpanNearQueryBuilder,
    SpanOrQueryBuilder,
    SpanFirstQueryBuilder,
    SpanNotQueryBuilder,
    SpanContainingQueryBuilder,
    SpanWithinQueryBuilder,
);

impl_json_object!(
    SpanTermQuery,
    SpanNearQuery,
    SpanOrQuery,
    SpanFirstQuery,
    SpanNotQuery,
    SpanContainingQuery,
    SpanWithinQuery,
);
