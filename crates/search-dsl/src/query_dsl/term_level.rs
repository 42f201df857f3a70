//! Term-level queries: exact matching on structured values.
//!
//! Most kinds here are wrapper-keyed by the target field:
//!
//! ```json
//! { "term": { "status": { "value": "ok", "boost": 2.0 } } }
//! ```
//!
//! and accept a bare scalar for their `value` property:
//!
//! ```json
//! { "term": { "status": "ok" } }
//! ```
//!
//! `terms` is the exception: its field is a sibling key next to the query's
//! own properties, `{"terms": {"status": ["ok", "warn"], "boost": 2.0}}`.

use serde::ser::SerializeMap;
use search_dsl_core::{
    impl_json_object, FieldSpec, JsonData, JsonObject, ObjectBuilder, ObjectReader, ObjectWriter,
    Result, Schema,
};

use super::base::{impl_with_query_base, QueryBase, QUERY_BASE};
use super::types::{FieldValue, Fuzziness, RangeRelation};

// =============================================================================
// term
// =============================================================================

/// Documents whose `field` contains exactly `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermQuery {
    base: QueryBase,
    field: String,
    value: FieldValue,
    case_insensitive: Option<bool>,
}

impl TermQuery {
    pub fn builder() -> TermQueryBuilder {
        TermQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn case_insensitive(&self) -> Option<bool> {
        self.case_insensitive
    }
}

#[derive(Debug, Default)]
pub struct TermQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    value: Option<FieldValue>,
    case_insensitive: Option<bool>,
}

impl TermQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = Some(case_insensitive);
        self
    }
}

impl ObjectBuilder for TermQueryBuilder {
    type Output = TermQuery;

    fn build(self) -> Result<TermQuery> {
        let schema = TermQuery::SCHEMA;
        Ok(TermQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            value: schema.require("value", self.value.filter(|v| !v.is_null()))?,
            case_insensitive: self.case_insensitive,
        })
    }
}

impl JsonObject for TermQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "TermQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::required("value"),
            FieldSpec::optional("case_insensitive"),
        ],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("value");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("value", &self.value)?;
        writer.optional("case_insensitive", &self.case_insensitive)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        TermQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            value: reader.take("value")?,
            case_insensitive: reader.take("case_insensitive")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// terms
// =============================================================================

/// Documents whose `field` contains any of `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsQuery {
    base: QueryBase,
    field: String,
    values: Vec<FieldValue>,
}

impl TermsQuery {
    pub fn builder() -> TermsQueryBuilder {
        TermsQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }
}

#[derive(Debug, Default)]
pub struct TermsQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    values: Vec<FieldValue>,
}

impl TermsQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn values_all(mut self, values: impl IntoIterator<Item = impl Into<FieldValue>>) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn set_values(mut self, values: Vec<FieldValue>) -> Self {
        self.values = values;
        self
    }
}

impl ObjectBuilder for TermsQueryBuilder {
    type Output = TermsQuery;

    fn build(self) -> Result<TermsQuery> {
        Ok(TermsQuery {
            base: self.base,
            field: TermsQuery::SCHEMA.require_sibling_key("field", self.field)?,
            values: self.values,
        })
    }
}

impl JsonObject for TermsQuery {
    const SCHEMA: &'static Schema =
        &Schema::new("TermsQuery", &[FieldSpec::sibling_key("field")]).extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.dynamic(&self.field, &self.values)?;
        self.base.write_fields(writer)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        let base = QueryBase::read_fields(reader)?;
        let (field, values) = reader.take_sibling()?;
        TermsQueryBuilder {
            base,
            field: Some(field),
            values,
        }
        .build()
    }
}

// =============================================================================
// range
// =============================================================================

/// Documents whose `field` falls within the given bounds.
///
/// Bounds are opaque JSON so numbers, dates and date-math strings all fit.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeQuery {
    base: QueryBase,
    field: String,
    gt: Option<JsonData>,
    gte: Option<JsonData>,
    lt: Option<JsonData>,
    lte: Option<JsonData>,
    format: Option<String>,
    relation: Option<RangeRelation>,
    time_zone: Option<String>,
}

impl RangeQuery {
    pub fn builder() -> RangeQueryBuilder {
        RangeQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn gt(&self) -> Option<&JsonData> {
        self.gt.as_ref()
    }

    pub fn gte(&self) -> Option<&JsonData> {
        self.gte.as_ref()
    }

    pub fn lt(&self) -> Option<&JsonData> {
        self.lt.as_ref()
    }

    pub fn lte(&self) -> Option<&JsonData> {
        self.lte.as_ref()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn relation(&self) -> Option<RangeRelation> {
        self.relation
    }

    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct RangeQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    gt: Option<JsonData>,
    gte: Option<JsonData>,
    lt: Option<JsonData>,
    lte: Option<JsonData>,
    format: Option<String>,
    relation: Option<RangeRelation>,
    time_zone: Option<String>,
}

impl RangeQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn gt(mut self, bound: impl Into<JsonData>) -> Self {
        self.gt = Some(bound.into());
        self
    }

    pub fn gte(mut self, bound: impl Into<JsonData>) -> Self {
        self.gte = Some(bound.into());
        self
    }

    pub fn lt(mut self, bound: impl Into<JsonData>) -> Self {
        self.lt = Some(bound.into());
        self
    }

    pub fn lte(mut self, bound: impl Into<JsonData>) -> Self {
        self.lte = Some(bound.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn relation(mut self, relation: RangeRelation) -> Self {
        self.relation = Some(relation);
        self
    }

    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }
}

impl ObjectBuilder for RangeQueryBuilder {
    type Output = RangeQuery;

    fn build(self) -> Result<RangeQuery> {
        Ok(RangeQuery {
            base: self.base,
            field: RangeQuery::SCHEMA.require("field", self.field)?,
            gt: self.gt.filter(|b| !b.is_null()),
            gte: self.gte.filter(|b| !b.is_null()),
            lt: self.lt.filter(|b| !b.is_null()),
            lte: self.lte.filter(|b| !b.is_null()),
            format: self.format,
            relation: self.relation,
            time_zone: self.time_zone,
        })
    }
}

impl JsonObject for RangeQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "RangeQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::optional("gt"),
            FieldSpec::optional("gte"),
            FieldSpec::optional("lt"),
            FieldSpec::optional("lte"),
            FieldSpec::optional("format"),
            FieldSpec::optional("relation"),
            FieldSpec::optional("time_zone"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.optional("gt", &self.gt)?;
        writer.optional("gte", &self.gte)?;
        writer.optional("lt", &self.lt)?;
        writer.optional("lte", &self.lte)?;
        writer.optional("format", &self.format)?;
        writer.optional("relation", &self.relation)?;
        writer.optional("time_zone", &self.time_zone)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        RangeQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            gt: reader.take("gt")?,
            gte: reader.take("gte")?,
            lt: reader.take("lt")?,
            lte: reader.take("lte")?,
            format: reader.take("format")?,
            relation: reader.take("relation")?,
            time_zone: reader.take("time_zone")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// exists
// =============================================================================

/// Documents with an indexed value for `field`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsQuery {
    base: QueryBase,
    field: String,
}

impl ExistsQuery {
    pub fn builder() -> ExistsQueryBuilder {
        ExistsQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

#[derive(Debug, Default)]
pub struct ExistsQueryBuilder {
    base: QueryBase,
    field: Option<String>,
}

impl ExistsQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl ObjectBuilder for ExistsQueryBuilder {
    type Output = ExistsQuery;

    fn build(self) -> Result<ExistsQuery> {
        Ok(ExistsQuery {
            base: self.base,
            field: ExistsQuery::SCHEMA.require("field", self.field)?,
        })
    }
}

impl JsonObject for ExistsQuery {
    const SCHEMA: &'static Schema =
        &Schema::new("ExistsQuery", &[FieldSpec::required("field")]).extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("field", &self.field)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        ExistsQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: reader.take("field")?,
        }
        .build()
    }
}

// =============================================================================
// ids
// =============================================================================

/// Documents by `_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct IdsQuery {
    base: QueryBase,
    values: Vec<String>,
}

impl IdsQuery {
    pub fn builder() -> IdsQueryBuilder {
        IdsQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[derive(Debug, Default)]
pub struct IdsQueryBuilder {
    base: QueryBase,
    values: Vec<String>,
}

impl IdsQueryBuilder {
    pub fn value(mut self, id: impl Into<String>) -> Self {
        self.values.push(id.into());
        self
    }

    pub fn values_all(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn set_values(mut self, ids: Vec<String>) -> Self {
        self.values = ids;
        self
    }
}

impl ObjectBuilder for IdsQueryBuilder {
    type Output = IdsQuery;

    fn build(self) -> Result<IdsQuery> {
        Ok(IdsQuery {
            base: self.base,
            values: self.values,
        })
    }
}

impl JsonObject for IdsQuery {
    const SCHEMA: &'static Schema =
        &Schema::new("IdsQuery", &[FieldSpec::optional("values")]).extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.list("values", &self.values)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        IdsQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            values: reader.take_list("values")?,
        }
        .build()
    }
}

// =============================================================================
// prefix
// =============================================================================

/// Documents whose `field` contains a term starting with `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixQuery {
    base: QueryBase,
    field: String,
    value: String,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

impl PrefixQuery {
    pub fn builder() -> PrefixQueryBuilder {
        PrefixQueryBuilder::default()
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

    pub fn rewrite(&self) -> Option<&str> {
        self.rewrite.as_deref()
    }

    pub fn case_insensitive(&self) -> Option<bool> {
        self.case_insensitive
    }
}

#[derive(Debug, Default)]
pub struct PrefixQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    value: Option<String>,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

impl PrefixQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = Some(case_insensitive);
        self
    }
}

impl ObjectBuilder for PrefixQueryBuilder {
    type Output = PrefixQuery;

    fn build(self) -> Result<PrefixQuery> {
        let schema = PrefixQuery::SCHEMA;
        Ok(PrefixQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            value: schema.require("value", self.value)?,
            rewrite: self.rewrite,
            case_insensitive: self.case_insensitive,
        })
    }
}

impl JsonObject for PrefixQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "PrefixQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::required("value"),
            FieldSpec::optional("rewrite"),
            FieldSpec::optional("case_insensitive"),
        ],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("value");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("value", &self.value)?;
        writer.optional("rewrite", &self.rewrite)?;
        writer.optional("case_insensitive", &self.case_insensitive)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        PrefixQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            value: reader.take("value")?,
            rewrite: reader.take("rewrite")?,
            case_insensitive: reader.take("case_insensitive")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// wildcard
// =============================================================================

/// Documents whose `field` matches a `*`/`?` pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct WildcardQuery {
    base: QueryBase,
    field: String,
    value: String,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

impl WildcardQuery {
    pub fn builder() -> WildcardQueryBuilder {
        WildcardQueryBuilder::default()
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

    pub fn rewrite(&self) -> Option<&str> {
        self.rewrite.as_deref()
    }

    pub fn case_insensitive(&self) -> Option<bool> {
        self.case_insensitive
    }
}

#[derive(Debug, Default)]
pub struct WildcardQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    value: Option<String>,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

impl WildcardQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn value(mut self, pattern: impl Into<String>) -> Self {
        self.value = Some(pattern.into());
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = Some(case_insensitive);
        self
    }
}

impl ObjectBuilder for WildcardQueryBuilder {
    type Output = WildcardQuery;

    fn build(self) -> Result<WildcardQuery> {
        let schema = WildcardQuery::SCHEMA;
        Ok(WildcardQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            value: schema.require("value", self.value)?,
            rewrite: self.rewrite,
            case_insensitive: self.case_insensitive,
        })
    }
}

impl JsonObject for WildcardQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "WildcardQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::required("value"),
            FieldSpec::optional("rewrite"),
            FieldSpec::optional("case_insensitive"),
        ],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("value");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("value", &self.value)?;
        writer.optional("rewrite", &self.rewrite)?;
        writer.optional("case_insensitive", &self.case_insensitive)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        WildcardQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            value: reader.take("value")?,
            rewrite: reader.take("rewrite")?,
            case_insensitive: reader.take("case_insensitive")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// regexp
// =============================================================================

/// Documents whose `field` matches a regular expression.
#[derive(Debug, Clone, PartialEq)]
pub struct RegexpQuery {
    base: QueryBase,
    field: String,
    value: String,
    flags: Option<String>,
    max_determinized_states: Option<i32>,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

impl RegexpQuery {
    pub fn builder() -> RegexpQueryBuilder {
        RegexpQueryBuilder::default()
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

    pub fn flags(&self) -> Option<&str> {
        self.flags.as_deref()
    }

    pub fn max_determinized_states(&self) -> Option<i32> {
        self.max_determinized_states
    }

    pub fn rewrite(&self) -> Option<&str> {
        self.rewrite.as_deref()
    }

    pub fn case_insensitive(&self) -> Option<bool> {
        self.case_insensitive
    }
}

#[derive(Debug, Default)]
pub struct RegexpQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    value: Option<String>,
    flags: Option<String>,
    max_determinized_states: Option<i32>,
    rewrite: Option<String>,
    case_insensitive: Option<bool>,
}

impl RegexpQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn value(mut self, regexp: impl Into<String>) -> Self {
        self.value = Some(regexp.into());
        self
    }

    /// Enabled operators, e.g. `"INTERSECTION|COMPLEMENT"` or `"ALL"`.
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = Some(flags.into());
        self
    }

    pub fn max_determinized_states(mut self, states: i32) -> Self {
        self.max_determinized_states = Some(states);
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = Some(case_insensitive);
        self
    }
}

impl ObjectBuilder for RegexpQueryBuilder {
    type Output = RegexpQuery;

    fn build(self) -> Result<RegexpQuery> {
        let schema = RegexpQuery::SCHEMA;
        Ok(RegexpQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            value: schema.require("value", self.value)?,
            flags: self.flags,
            max_determinized_states: self.max_determinized_states,
            rewrite: self.rewrite,
            case_insensitive: self.case_insensitive,
        })
    }
}

impl JsonObject for RegexpQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "RegexpQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::required("value"),
            FieldSpec::optional("flags"),
            FieldSpec::optional("max_determinized_states"),
            FieldSpec::optional("rewrite"),
            FieldSpec::optional("case_insensitive"),
        ],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("value");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("value", &self.value)?;
        writer.optional("flags", &self.flags)?;
        writer.optional("max_determinized_states", &self.max_determinized_states)?;
        writer.optional("rewrite", &self.rewrite)?;
        writer.optional("case_insensitive", &self.case_insensitive)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        RegexpQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            value: reader.take("value")?,
            flags: reader.take("flags")?,
            max_determinized_states: reader.take("max_determinized_states")?,
            rewrite: reader.take("rewrite")?,
            case_insensitive: reader.take("case_insensitive")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// fuzzy
// =============================================================================

/// Documents whose `field` contains terms within an edit distance of `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyQuery {
    base: QueryBase,
    field: String,
    value: FieldValue,
    fuzziness: Option<Fuzziness>,
    max_expansions: Option<i32>,
    prefix_length: Option<i32>,
    transpositions: Option<bool>,
    rewrite: Option<String>,
}

impl FuzzyQuery {
    pub fn builder() -> FuzzyQueryBuilder {
        FuzzyQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn fuzziness(&self) -> Option<&Fuzziness> {
        self.fuzziness.as_ref()
    }

    pub fn max_expansions(&self) -> Option<i32> {
        self.max_expansions
    }

    pub fn prefix_length(&self) -> Option<i32> {
        self.prefix_length
    }

    pub fn transpositions(&self) -> Option<bool> {
        self.transpositions
    }

    pub fn rewrite(&self) -> Option<&str> {
        self.rewrite.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct FuzzyQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    value: Option<FieldValue>,
    fuzziness: Option<Fuzziness>,
    max_expansions: Option<i32>,
    prefix_length: Option<i32>,
    transpositions: Option<bool>,
    rewrite: Option<String>,
}

impl FuzzyQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn fuzziness(mut self, fuzziness: impl Into<Fuzziness>) -> Self {
        self.fuzziness = Some(fuzziness.into());
        self
    }

    pub fn max_expansions(mut self, max_expansions: i32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn prefix_length(mut self, prefix_length: i32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = Some(transpositions);
        self
    }

    pub fn rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }
}

impl ObjectBuilder for FuzzyQueryBuilder {
    type Output = FuzzyQuery;

    fn build(self) -> Result<FuzzyQuery> {
        let schema = FuzzyQuery::SCHEMA;
        Ok(FuzzyQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            value: schema.require("value", self.value.filter(|v| !v.is_null()))?,
            fuzziness: self.fuzziness,
            max_expansions: self.max_expansions,
            prefix_length: self.prefix_length,
            transpositions: self.transpositions,
            rewrite: self.rewrite,
        })
    }
}

impl JsonObject for FuzzyQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "FuzzyQuery",
        &[
            FieldSpec::wrapper_key("field"),
            FieldSpec::required("value"),
            FieldSpec::optional("fuzziness"),
            FieldSpec::optional("max_expansions"),
            FieldSpec::optional("prefix_length"),
            FieldSpec::optional("transpositions"),
            FieldSpec::optional("rewrite"),
        ],
    )
    .extends(&QUERY_BASE)
    .with_shortcut("value");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("value", &self.value)?;
        writer.optional("fuzziness", &self.fuzziness)?;
        writer.optional("max_expansions", &self.max_expansions)?;
        writer.optional("prefix_length", &self.prefix_length)?;
        writer.optional("transpositions", &self.transpositions)?;
        writer.optional("rewrite", &self.rewrite)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        FuzzyQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            value: reader.take("value")?,
            fuzziness: reader.take("fuzziness")?,
            max_expansions: reader.take("max_expansions")?,
            prefix_length: reader.take("prefix_length")?,
            transpositions: reader.take("transpositions")?,
            rewrite: reader.take("rewrite")?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

impl_with_query_base!(
    TermQueryBuilder,
    TermsQueryBuilder,
    RangeQueryBuilder,
    ExistsQueryBuilder,
    IdsQueryBuilder,
    PrefixQueryBuilder,
    WildcardQueryBuilder,
    RegexpQueryBuilder,
    FuzzyQueryBuilder,
);

impl_json_object!(
    TermQuery,
    TermsQuery,
    RangeQuery,
    ExistsQuery,
    IdsQuery,
    PrefixQuery,
    WildcardQuery,
    RegexpQuery,
    FuzzyQuery,
);
