//! Full-text queries over analyzed fields.
//!
//! `match`, `match_phrase` and `match_phrase_prefix` are wrapper-keyed by
//! field and accept a bare value for `query`; `multi_match` and
//! `query_string` name their fields as properties.

use serde::ser::SerializeMap;
use search_dsl_core::{
    impl_json_object, FieldSpec, JsonObject, ObjectBuilder, ObjectReader, ObjectWriter, Result,
    Schema,
};

use super::base::{impl_with_query_base, QueryBase, QUERY_BASE};
use super::types::{
    FieldValue, Fuzziness, MinimumShouldMatch, Operator, TextQueryType, ZeroTermsQuery,
};

// =============================================================================
// match
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MatchQuery {
    base: QueryBase,
    field: String,
    query: FieldValue,
    analyzer: Option<String>,
    operator: Option<Operator>,
    fuzziness: Option<Fuzziness>,
    minimum_should_match: Option<MinimumShouldMatch>,
    zero_terms_query: Option<ZeroTermsQuery>,
    lenient: Option<bool>,
    prefix_length: Option<i32>,
    max_expansions: Option<i32>,
    auto_generate_synonyms_phrase_query: Option<bool>,
}

impl MatchQuery {
    pub fn builder() -> MatchQueryBuilder {
        MatchQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn query(&self) -> &FieldValue {
        &self.query
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn fuzziness(&self) -> Option<&Fuzziness> {
        self.fuzziness.as_ref()
    }

    pub fn minimum_should_match(&self) -> Option<&MinimumShouldMatch> {
        self.minimum_should_match.as_ref()
    }

    pub fn zero_terms_query(&self) -> Option<ZeroTermsQuery> {
        self.zero_terms_query
    }

    pub fn lenient(&self) -> Option<bool> {
        self.lenient
    }

    pub fn prefix_length(&self) -> Option<i32> {
        self.prefix_length
    }

    pub fn max_expansions(&self) -> Option<i32> {
        self.max_expansions
    }

    pub fn auto_generate_synonyms_phrase_query(&self) -> Option<bool> {
        self.auto_generate_synonyms_phrase_query
    }
}

#[derive(Debug, Default)]
pub struct MatchQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    query: Option<FieldValue>,
    analyzer: Option<String>,
    operator: Option<Operator>,
    fuzziness: Option<Fuzziness>,
    minimum_should_match: Option<MinimumShouldMatch>,
    zero_terms_query: Option<ZeroTermsQuery>,
    lenient: Option<bool>,
    prefix_length: Option<i32>,
    max_expansions: Option<i32>,
    auto_generate_synonyms_phrase_query: Option<bool>,
}

impl MatchQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn query(mut self, query: impl Into<FieldValue>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<Fuzziness>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn minimum_should_match(mut self, minimum: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(minimum.into());
        self
    }

    pub fn zero_terms_query(mut self, zero_terms_query: ZeroTermsQuery) -> Self {
        self.zero_terms_query = Some(zero_terms_query);
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    pub fn prefix_length(mut self, prefix_length: i32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn max_expansions(mut self, max_expansions: i32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn auto_generate_synonyms_phrase_query(mut self, enabled: bool) -> Self {
        self.auto_generate_synonyms_phrase_query = Some(enabled);
        self
    }
}

impl ObjectBuilder for MatchQueryBuilder {
    type Output = MatchQuery;

    fn build(self) -> Result<MatchQuery> {
        let schema = MatchQuery::SCHEMA;
        Ok(MatchQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            query: schema.require("query", self.query.filter(|q| !q.is_null()))?,
            analyzer: self.analyzer,
            operator: self.operator,
            fuzziness: self.fuzziness,
            minimum_should_match: self.minimum_should_match,
            zero_terms_query: self.zero_terms_query,
            lenient: self.lenient,
            prefix_length: self.prefix_length,
            max_expansions: self.max_expansions,
            auto_generate_synonyms_phrase_query: self.auto_generate_synonyms_phrase_query,
        })
    }
}

impl JsonObject for MatchQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "MatchQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::required("query"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("operator"),
            FieldSpec::optional("fuzziness"),
            FieldSpec::optional("minimum_should_match"),
            FieldSpec::optional("zero_terms_query"),
            FieldSpec::optional("lenient"),
            FieldSpec::optional("prefix_length"),
            FieldSpec::optional("max_expansions"),
            FieldSpec::optional("auto_generate_synonyms_phrase_query"),
        ],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("query");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("query", &self.query)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("operator", &self.operator)?;
        writer.optional("fuzziness", &self.fuzziness)?;
        writer.optional("minimum_should_match", &self.minimum_should_match)?;
        writer.optional("zero_terms_query", &self.zero_terms_query)?;
        writer.optional("lenient", &self.lenient)?;
        writer.optional("prefix_length", &self.prefix_length)?;
        writer.optional("max_expansions", &self.max_expansions)?;
        writer.optional(
            "auto_generate_synonyms_phrase_query",
            &self.auto_generate_synonyms_phrase_query,
        )
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        MatchQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            query: reader.take("query")?,
            analyzer: reader.take("analyzer")?,
            operator: reader.take("operator")?,
            fuzziness: reader.take("fuzziness")?,
            minimum_should_match: reader.take("minimum_should_match")?,
            zero_terms_query: reader.take("zero_terms_query")?,
            lenient: reader.take("lenient")?,
            prefix_length: reader.take("prefix_length")?,
            max_expansions: reader.take("max_expansions")?,
            auto_generate_synonyms_phrase_query: reader
                .take("auto_generate_synonyms_phrase_query")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// match_phrase
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPhraseQuery {
    base: QueryBase,
    field: String,
    query: String,
    analyzer: Option<String>,
    slop: Option<i32>,
    zero_terms_query: Option<ZeroTermsQuery>,
}

impl MatchPhraseQuery {
    pub fn builder() -> MatchPhraseQueryBuilder {
        MatchPhraseQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn slop(&self) -> Option<i32> {
        self.slop
    }

    pub fn zero_terms_query(&self) -> Option<ZeroTermsQuery> {
        self.zero_terms_query
    }
}

#[derive(Debug, Default)]
pub struct MatchPhraseQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    query: Option<String>,
    analyzer: Option<String>,
    slop: Option<i32>,
    zero_terms_query: Option<ZeroTermsQuery>,
}

impl MatchPhraseQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn slop(mut self, slop: i32) -> Self {
        self.slop = Some(slop);
        self
    }

    pub fn zero_terms_query(mut self, zero_terms_query: ZeroTermsQuery) -> Self {
        self.zero_terms_query = Some(zero_terms_query);
        self
    }
}

impl ObjectBuilder for MatchPhraseQueryBuilder {
    type Output = MatchPhraseQuery;

    fn build(self) -> Result<MatchPhraseQuery> {
        let schema = MatchPhraseQuery::SCHEMA;
        Ok(MatchPhraseQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            query: schema.require("query", self.query)?,
            analyzer: self.analyzer,
            slop: self.slop,
            zero_terms_query: self.zero_terms_query,
        })
    }
}

impl JsonObject for MatchPhraseQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "MatchPhraseQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::required("query"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("slop"),
            FieldSpec::optional("zero_terms_query"),
        ],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("query");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("query", &self.query)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("slop", &self.slop)?;
        writer.optional("zero_terms_query", &self.zero_terms_query)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        MatchPhraseQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            query: reader.take("query")?,
            analyzer: reader.take("analyzer")?,
            slop: reader.take("slop")?,
            zero_terms_query: reader.take("zero_terms_query")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// match_phrase_prefix
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct MatchPhrasePrefixQuery {
    base: QueryBase,
    field: String,
    query: String,
    analyzer: Option<String>,
    max_expansions: Option<i32>,
    slop: Option<i32>,
    zero_terms_query: Option<ZeroTermsQuery>,
}

impl MatchPhrasePrefixQuery {
    pub fn builder() -> MatchPhrasePrefixQueryBuilder {
        MatchPhrasePrefixQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn max_expansions(&self) -> Option<i32> {
        self.max_expansions
    }

    pub fn slop(&self) -> Option<i32> {
        self.slop
    }

    pub fn zero_terms_query(&self) -> Option<ZeroTermsQuery> {
        self.zero_terms_query
    }
}

#[derive(Debug, Default)]
pub struct MatchPhrasePrefixQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    query: Option<String>,
    analyzer: Option<String>,
    max_expansions: Option<i32>,
    slop: Option<i32>,
    zero_terms_query: Option<ZeroTermsQuery>,
}

impl MatchPhrasePrefixQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn max_expansions(mut self, max_expansions: i32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn slop(mut self, slop: i32) -> Self {
        self.slop = Some(slop);
        self
    }

    pub fn zero_terms_query(mut self, zero_terms_query: ZeroTermsQuery) -> Self {
        self.zero_terms_query = Some(zero_terms_query);
        self
    }
}

impl ObjectBuilder for MatchPhrasePrefixQueryBuilder {
    type Output = MatchPhrasePrefixQuery;

    fn build(self) -> Result<MatchPhrasePrefixQuery> {
        let schema = MatchPhrasePrefixQuery::SCHEMA;
        Ok(MatchPhrasePrefixQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            query: schema.require("query", self.query)?,
            analyzer: self.analyzer,
            max_expansions: self.max_expansions,
            slop: self.slop,
            zero_terms_query: self.zero_terms_query,
        })
    }
}

impl JsonObject for MatchPhrasePrefixQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "MatchPhrasePrefixQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::required("query"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("max_expansions"),
            FieldSpec::optional("slop"),
            FieldSpec::optional("zero_terms_query"),
        ],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("query");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("query", &self.query)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("max_expansions", &self.max_expansions)?;
        writer.optional("slop", &self.slop)?;
        writer.optional("zero_terms_query", &self.zero_terms_query)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        MatchPhrasePrefixQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            query: reader.take("query")?,
            analyzer: reader.take("analyzer")?,
            max_expansions: reader.take("max_expansions")?,
            slop: reader.take("slop")?,
            zero_terms_query: reader.take("zero_terms_query")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// multi_match
// =============================================================================

/// A `match` run against several fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiMatchQuery {
    base: QueryBase,
    query: String,
    fields: Vec<String>,
    r#type: Option<TextQueryType>,
    operator: Option<Operator>,
    analyzer: Option<String>,
    fuzziness: Option<Fuzziness>,
    minimum_should_match: Option<MinimumShouldMatch>,
    tie_breaker: Option<f64>,
    slop: Option<i32>,
    lenient: Option<bool>,
}

impl MultiMatchQuery {
    pub fn builder() -> MultiMatchQueryBuilder {
        MultiMatchQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Field names, optionally boosted with the `^` suffix (`"title^3"`).
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn r#type(&self) -> Option<TextQueryType> {
        self.r#type
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn fuzziness(&self) -> Option<&Fuzziness> {
        self.fuzziness.as_ref()
    }

    pub fn minimum_should_match(&self) -> Option<&MinimumShouldMatch> {
        self.minimum_should_match.as_ref()
    }

    pub fn tie_breaker(&self) -> Option<f64> {
        self.tie_breaker
    }

    pub fn slop(&self) -> Option<i32> {
        self.slop
    }

    pub fn lenient(&self) -> Option<bool> {
        self.lenient
    }
}

#[derive(Debug, Default)]
pub struct MultiMatchQueryBuilder {
    base: QueryBase,
    query: Option<String>,
    fields: Vec<String>,
    r#type: Option<TextQueryType>,
    operator: Option<Operator>,
    analyzer: Option<String>,
    fuzziness: Option<Fuzziness>,
    minimum_should_match: Option<MinimumShouldMatch>,
    tie_breaker: Option<f64>,
    slop: Option<i32>,
    lenient: Option<bool>,
}

impl MultiMatchQueryBuilder {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn fields(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn fields_all(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn set_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn r#type(mut self, r#type: TextQueryType) -> Self {
        self.r#type = Some(r#type);
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<Fuzziness>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn minimum_should_match(mut self, minimum: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(minimum.into());
        self
    }

    pub fn tie_breaker(mut self, tie_breaker: f64) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }

    pub fn slop(mut self, slop: i32) -> Self {
        self.slop = Some(slop);
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }
}

impl ObjectBuilder for MultiMatchQueryBuilder {
    type Output = MultiMatchQuery;

    fn build(self) -> Result<MultiMatchQuery> {
        Ok(MultiMatchQuery {
            base: self.base,
            query: MultiMatchQuery::SCHEMA.require("query", self.query)?,
            fields: self.fields,
            r#type: self.r#type,
            operator: self.operator,
            analyzer: self.analyzer,
            fuzziness: self.fuzziness,
            minimum_should_match: self.minimum_should_match,
            tie_breaker: self.tie_breaker,
            slop: self.slop,
            lenient: self.lenient,
        })
    }
}

impl JsonObject for MultiMatchQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "MultiMatchQuery",
        &[
            FieldSpec::required("query"),
            FieldSpec::optional("fields"),
            FieldSpec::optional("type"),
            FieldSpec::optional("operator"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("fuzziness"),
            FieldSpec::optional("minimum_should_match"),
            FieldSpec::optional("tie_breaker"),
            FieldSpec::optional("slop"),
            FieldSpec::optional("lenient"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("query", &self.query)?;
        writer.list("fields", &self.fields)?;
        writer.optional("type", &self.r#type)?;
        writer.optional("operator", &self.operator)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("fuzziness", &self.fuzziness)?;
        writer.optional("minimum_should_match", &self.minimum_should_match)?;
        writer.optional("tie_breaker", &self.tie_breaker)?;
        writer.optional("slop", &self.slop)?;
        writer.optional("lenient", &self.lenient)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        MultiMatchQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            query: reader.take("query")?,
            fields: reader.take_list("fields")?,
            r#type: reader.take("type")?,
            operator: reader.take("operator")?,
            analyzer: reader.take("analyzer")?,
            fuzziness: reader.take("fuzziness")?,
            minimum_should_match: reader.take("minimum_should_match")?,
            tie_breaker: reader.take("tie_breaker")?,
            slop: reader.take("slop")?,
            lenient: reader.take("lenient")?,
        }
        .build()
    }
}

// =============================================================================
// query_string
// =============================================================================

/// A query written in the Lucene query-string syntax.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStringQuery {
    base: QueryBase,
    query: String,
    default_field: Option<String>,
    fields: Vec<String>,
    default_operator: Option<Operator>,
    analyzer: Option<String>,
    allow_leading_wildcard: Option<bool>,
    fuzziness: Option<Fuzziness>,
    minimum_should_match: Option<MinimumShouldMatch>,
    lenient: Option<bool>,
    phrase_slop: Option<f64>,
    time_zone: Option<String>,
}

impl QueryStringQuery {
    pub fn builder() -> QueryStringQueryBuilder {
        QueryStringQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn default_field(&self) -> Option<&str> {
        self.default_field.as_deref()
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn default_operator(&self) -> Option<Operator> {
        self.default_operator
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn allow_leading_wildcard(&self) -> Option<bool> {
        self.allow_leading_wildcard
    }

    pub fn fuzziness(&self) -> Option<&Fuzziness> {
        self.fuzziness.as_ref()
    }

    pub fn minimum_should_match(&self) -> Option<&MinimumShouldMatch> {
        self.minimum_should_match.as_ref()
    }

    pub fn lenient(&self) -> Option<bool> {
        self.lenient
    }

    pub fn phrase_slop(&self) -> Option<f64> {
        self.phrase_slop
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct QueryStringQueryBuilder {
    base: QueryBase,
    query: Option<String>,
    default_field: Option<String>,
    fields: Vec<String>,
    default_operator: Option<Operator>,
    analyzer: Option<String>,
    allow_leading_wildcard: Option<bool>,
    fuzziness: Option<Fuzziness>,
    minimum_should_match: Option<MinimumShouldMatch>,
    lenient: Option<bool>,
    phrase_slop: Option<f64>,
    time_zone: Option<String>,
}

impl QueryStringQueryBuilder {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn default_field(mut self, field: impl Into<String>) -> Self {
        self.default_field = Some(field.into());
        self
    }

    pub fn fields(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn fields_all(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn set_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = fields;
        self
    }

    pub fn default_operator(mut self, operator: Operator) -> Self {
        self.default_operator = Some(operator);
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn allow_leading_wildcard(mut self, allow: bool) -> Self {
        self.allow_leading_wildcard = Some(allow);
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<Fuzziness>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn minimum_should_match(mut self, minimum: impl Into<MinimumShouldMatch>) -> Self {
        self.minimum_should_match = Some(minimum.into());
        self
    }

    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = Some(lenient);
        self
    }

    pub fn phrase_slop(mut self, slop: f64) -> Self {
        self.phrase_slop = Some(slop);
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }
}

impl ObjectBuilder for QueryStringQueryBuilder {
    type Output = QueryStringQuery;

    fn build(self) -> Result<QueryStringQuery> {
        Ok(QueryStringQuery {
            base: self.base,
            query: QueryStringQuery::SCHEMA.require("query", self.query)?,
            default_field: self.default_field,
            fields: self.fields,
            default_operator: self.default_operator,
            analyzer: self.analyzer,
            allow_leading_wildcard: self.allow_leading_wildcard,
            fuzziness: self.fuzziness,
            minimum_should_match: self.minimum_should_match,
            lenient: self.lenient,
            phrase_slop: self.phrase_slop,
            time_zone: self.time_zone,
        })
    }
}

impl JsonObject for QueryStringQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "QueryStringQuery",
        &[
            FieldSpec::required("query"),
            FieldSpec::optional("default_field"),
            FieldSpec::optional("fields"),
            FieldSpec::optional("default_operator"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("allow_leading_wildcard"),
            FieldSpec::optional("fuzziness"),
            FieldSpec::optional("minimum_should_match"),
            FieldSpec::optional("lenient"),
            FieldSpec::optional("phrase_slop"),
            FieldSpec::optional("time_zone"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("query", &self.query)?;
        writer.optional("default_field", &self.default_field)?;
        writer.list("fields", &self.fields)?;
        writer.optional("default_operator", &self.default_operator)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("allow_leading_wildcard", &self.allow_leading_wildcard)?;
        writer.optional("fuzziness", &self.fuzziness)?;
        writer.optional("minimum_should_match", &self.minimum_should_match)?;
        writer.optional("lenient", &self.lenient)?;
        writer.optional("phrase_slop", &self.phrase_slop)?;
        writer.optional("time_zone", &self.time_zone)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        QueryStringQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            query: reader.take("query")?,
            default_field: reader.take("default_field")?,
            fields: reader.take_list("fields")?,
            default_operator: reader.take("default_operator")?,
            analyzer: reader.take("analyzer")?,
            allow_leading_wildcard: reader.take("allow_leading_wildcard")?,
            fuzziness: reader.take("fuzziness")?,
            minimum_should_match: reader.take("minimum_should_match")?,
            lenient: reader.take("lenient")?,
            phrase_slop: reader.take("phrase_slop")?,
            time_zone: reader.take("time_zone")?,
        }
        .build()
    }
}

impl_with_query_base!(
    MatchQueryBuilder,
    MatchPhraseQueryBuilder,
    MatchPhrasePrefixQueryBuilder,
    MultiMatchQueryBuilder,
    QueryStringQueryBuilder,
);

impl_json_object!(
    MatchQuery,
    MatchPhraseQuery,
    MatchPhrasePrefixQuery,
    MultiMatchQuery,
    QueryStringQuery,
);
