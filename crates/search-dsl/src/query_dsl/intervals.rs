//! Interval queries: ordering and proximity of matching terms.
//!
//! `IntervalsQuery` has two single-key layers. The outer key is the target
//! field; inside it the base properties sit next to one rule kind key:
//!
//! ```json
//! { "intervals": { "body": { "boost": 2.0, "match": { "query": "hot water" } } } }
//! ```

use serde::ser::SerializeMap;
use search_dsl_core::de::VARIANT_FIELD;
use search_dsl_core::{
    impl_json_object, impl_union_object, tagged_union, FieldSpec, JsonObject, ObjectBuilder,
    ObjectReader, ObjectWriter, Result, Schema, TaggedUnion, VariantKind,
};

use super::base::{impl_with_query_base, QueryBase, QUERY_BASE};
use super::types::Fuzziness;

tagged_union! {
    /// An interval-producing rule.
    pub enum Intervals / IntervalsKind / IntervalsBuilder {
        AllOf("all_of", is_all_of, all_of) => IntervalsAllOf,
        AnyOf("any_of", is_any_of, any_of) => IntervalsAnyOf,
        Fuzzy("fuzzy", is_fuzzy, fuzzy) => IntervalsFuzzy,
        Match("match", is_match, r#match) => IntervalsMatch,
        Prefix("prefix", is_prefix, prefix) => IntervalsPrefix,
        Wildcard("wildcard", is_wildcard, wildcard) => IntervalsWildcard,
    }
}

impl_union_object!(Intervals);

// =============================================================================
// intervals
// =============================================================================

/// Documents whose `field` satisfies an interval rule.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalsQuery {
    base: QueryBase,
    field: String,
    rule: Intervals,
}

impl IntervalsQuery {
    pub fn builder() -> IntervalsQueryBuilder {
        IntervalsQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rule(&self) -> &Intervals {
        &self.rule
    }
}

#[derive(Debug, Default)]
pub struct IntervalsQueryBuilder {
    base: QueryBase,
    field: Option<String>,
    rule: Option<Intervals>,
}

impl IntervalsQueryBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Set the rule; a later call replaces an earlier one.
    pub fn rule(mut self, rule: impl Into<Intervals>) -> Self {
        self.rule = Some(rule.into());
        self
    }
}

impl ObjectBuilder for IntervalsQueryBuilder {
    type Output = IntervalsQuery;

    fn build(self) -> Result<IntervalsQuery> {
        let schema = IntervalsQuery::SCHEMA;
        Ok(IntervalsQuery {
            base: self.base,
            field: schema.require("field", self.field)?,
            rule: schema.require(VARIANT_FIELD, self.rule)?,
        })
    }
}

impl JsonObject for IntervalsQuery {
    const SCHEMA: &'static Schema =
        &Schema::new("IntervalsQuery", &[FieldSpec::wrapper_key("field")])
            .extends(&QUERY_BASE)
            .with_variants(<IntervalsKind as VariantKind>::JSON_VALUES);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        self.rule.write_variant(writer)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        IntervalsQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            field: Some(reader.take_key()?),
            rule: reader.take_variant()?,
        }
        .build()
    }

    fn wrapper_key(&self) -> Option<&str> {
        Some(&self.field)
    }
}

// =============================================================================
// all_of / any_of
// =============================================================================

/// Intervals satisfying every nested rule.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalsAllOf {
    intervals: Vec<Intervals>,
    max_gaps: Option<i32>,
    ordered: Option<bool>,
}

impl IntervalsAllOf {
    pub fn builder() -> IntervalsAllOfBuilder {
        IntervalsAllOfBuilder::default()
    }

    pub fn intervals(&self) -> &[Intervals] {
        &self.intervals
    }

    pub fn max_gaps(&self) -> Option<i32> {
        self.max_gaps
    }

    pub fn ordered(&self) -> Option<bool> {
        self.ordered
    }
}

#[derive(Debug, Default)]
pub struct IntervalsAllOfBuilder {
    intervals: Vec<Intervals>,
    max_gaps: Option<i32>,
    ordered: Option<bool>,
}

impl IntervalsAllOfBuilder {
    pub fn intervals(mut self, rule: impl Into<Intervals>) -> Self {
        self.intervals.push(rule.into());
        self
    }

    pub fn intervals_all(mut self, rules: impl IntoIterator<Item = impl Into<Intervals>>) -> Self {
        self.intervals.extend(rules.into_iter().map(Into::into));
        self
    }

    pub fn set_intervals(mut self, rules: Vec<Intervals>) -> Self {
        self.intervals = rules;
        self
    }

    pub fn max_gaps(mut self, max_gaps: i32) -> Self {
        self.max_gaps = Some(max_gaps);
        self
    }

    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = Some(ordered);
        self
    }
}

impl ObjectBuilder for IntervalsAllOfBuilder {
    type Output = IntervalsAllOf;

    fn build(self) -> Result<IntervalsAllOf> {
        Ok(IntervalsAllOf {
            intervals: IntervalsAllOf::SCHEMA.require_list("intervals", self.intervals)?,
            max_gaps: self.max_gaps,
            ordered: self.ordered,
        })
    }
}

impl JsonObject for IntervalsAllOf {
    const SCHEMA: &'static Schema = &Schema::new(
        "IntervalsAllOf",
        &[
            FieldSpec::required("intervals"),
            FieldSpec::optional("max_gaps"),
            FieldSpec::optional("ordered"),
        ],
    );

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.list("intervals", &self.intervals)?;
        writer.optional("max_gaps", &self.max_gaps)?;
        writer.optional("ordered", &self.ordered)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        IntervalsAllOfBuilder {
            intervals: reader.take_objects("intervals")?,
            max_gaps: reader.take("max_gaps")?,
            ordered: reader.take("ordered")?,
        }
        .build()
    }
}

/// Intervals produced by any nested rule.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalsAnyOf {
    intervals: Vec<Intervals>,
}

impl IntervalsAnyOf {
    pub fn builder() -> IntervalsAnyOfBuilder {
        IntervalsAnyOfBuilder::default()
    }

    pub fn intervals(&self) -> &[Intervals] {
        &self.intervals
    }
}

#[derive(Debug, Default)]
pub struct IntervalsAnyOfBuilder {
    intervals: Vec<Intervals>,
}

impl IntervalsAnyOfBuilder {
    pub fn intervals(mut self, rule: impl Into<Intervals>) -> Self {
        self.intervals.push(rule.into());
        self
    }

    pub fn intervals_all(mut self, rules: impl IntoIterator<Item = impl Into<Intervals>>) -> Self {
        self.intervals.extend(rules.into_iter().map(Into::into));
        self
    }

    pub fn set_intervals(mut self, rules: Vec<Intervals>) -> Self {
        self.intervals = rules;
        self
    }
}

impl ObjectBuilder for IntervalsAnyOfBuilder {
    type Output = IntervalsAnyOf;

    fn build(self) -> Result<IntervalsAnyOf> {
        Ok(IntervalsAnyOf {
            intervals: IntervalsAnyOf::SCHEMA.require_list("intervals", self.intervals)?,
        })
    }
}

impl JsonObject for IntervalsAnyOf {
    const SCHEMA: &'static Schema =
        &Schema::new("IntervalsAnyOf", &[FieldSpec::required("intervals")]);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.list("intervals", &self.intervals)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        IntervalsAnyOfBuilder {
            intervals: reader.take_objects("intervals")?,
        }
        .build()
    }
}

// =============================================================================
// term rules
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalsFuzzy {
    term: String,
    analyzer: Option<String>,
    fuzziness: Option<Fuzziness>,
    prefix_length: Option<i32>,
    transpositions: Option<bool>,
    use_field: Option<String>,
}

impl IntervalsFuzzy {
    pub fn builder() -> IntervalsFuzzyBuilder {
        IntervalsFuzzyBuilder::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn fuzziness(&self) -> Option<&Fuzziness> {
        self.fuzziness.as_ref()
    }

    pub fn prefix_length(&self) -> Option<i32> {
        self.prefix_length
    }

    pub fn transpositions(&self) -> Option<bool> {
        self.transpositions
    }

    pub fn use_field(&self) -> Option<&str> {
        self.use_field.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct IntervalsFuzzyBuilder {
    term: Option<String>,
    analyzer: Option<String>,
    fuzziness: Option<Fuzziness>,
    prefix_length: Option<i32>,
    transpositions: Option<bool>,
    use_field: Option<String>,
}

impl IntervalsFuzzyBuilder {
    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
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

    pub fn prefix_length(mut self, prefix_length: i32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = Some(transpositions);
        self
    }

    pub fn use_field(mut self, field: impl Into<String>) -> Self {
        self.use_field = Some(field.into());
        self
    }
}

impl ObjectBuilder for IntervalsFuzzyBuilder {
    type Output = IntervalsFuzzy;

    fn build(self) -> Result<IntervalsFuzzy> {
        Ok(IntervalsFuzzy {
            term: IntervalsFuzzy::SCHEMA.require("term", self.term)?,
            analyzer: self.analyzer,
            fuzziness: self.fuzziness,
            prefix_length: self.prefix_length,
            transpositions: self.transpositions,
            use_field: self.use_field,
        })
    }
}

impl JsonObject for IntervalsFuzzy {
    const SCHEMA: &'static Schema = &Schema::new(
        "IntervalsFuzzy",
        &[
            FieldSpec::required("term"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("fuzziness"),
            FieldSpec::optional("prefix_length"),
            FieldSpec::optional("transpositions"),
            FieldSpec::optional("use_field"),
        ],
    );

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.field("term", &self.term)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("fuzziness", &self.fuzziness)?;
        writer.optional("prefix_length", &self.prefix_length)?;
        writer.optional("transpositions", &self.transpositions)?;
        writer.optional("use_field", &self.use_field)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        IntervalsFuzzyBuilder {
            term: reader.take("term")?,
            analyzer: reader.take("analyzer")?,
            fuzziness: reader.take("fuzziness")?,
            prefix_length: reader.take("prefix_length")?,
            transpositions: reader.take("transpositions")?,
            use_field: reader.take("use_field")?,
        }
        .build()
    }
}

/// Intervals of the analyzed terms of `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalsMatch {
    query: String,
    analyzer: Option<String>,
    max_gaps: Option<i32>,
    ordered: Option<bool>,
    use_field: Option<String>,
}

impl IntervalsMatch {
    pub fn builder() -> IntervalsMatchBuilder {
        IntervalsMatchBuilder::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn max_gaps(&self) -> Option<i32> {
        self.max_gaps
    }

    pub fn ordered(&self) -> Option<bool> {
        self.ordered
    }

    pub fn use_field(&self) -> Option<&str> {
        self.use_field.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct IntervalsMatchBuilder {
    query: Option<String>,
    analyzer: Option<String>,
    max_gaps: Option<i32>,
    ordered: Option<bool>,
    use_field: Option<String>,
}

impl IntervalsMatchBuilder {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn max_gaps(mut self, max_gaps: i32) -> Self {
        self.max_gaps = Some(max_gaps);
        self
    }

    pub fn ordered(mut self, ordered: bool) -> Self {
        self.ordered = Some(ordered);
        self
    }

    pub fn use_field(mut self, field: impl Into<String>) -> Self {
        self.use_field = Some(field.into());
        self
    }
}

impl ObjectBuilder for IntervalsMatchBuilder {
    type Output = IntervalsMatch;

    fn build(self) -> Result<IntervalsMatch> {
        Ok(IntervalsMatch {
            query: IntervalsMatch::SCHEMA.require("query", self.query)?,
            analyzer: self.analyzer,
            max_gaps: self.max_gaps,
            ordered: self.ordered,
            use_field: self.use_field,
        })
    }
}

impl JsonObject for IntervalsMatch {
    const SCHEMA: &'static Schema = &Schema::new(
        "IntervalsMatch",
        &[
            FieldSpec::required("query"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("max_gaps"),
            FieldSpec::optional("ordered"),
            FieldSpec::optional("use_field"),
        ],
    );

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.field("query", &self.query)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("max_gaps", &self.max_gaps)?;
        writer.optional("ordered", &self.ordered)?;
        writer.optional("use_field", &self.use_field)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        IntervalsMatchBuilder {
            query: reader.take("query")?,
            analyzer: reader.take("analyzer")?,
            max_gaps: reader.take("max_gaps")?,
            ordered: reader.take("ordered")?,
            use_field: reader.take("use_field")?,
        }
        .build()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalsPrefix {
    prefix: String,
    analyzer: Option<String>,
    use_field: Option<String>,
}

impl IntervalsPrefix {
    pub fn builder() -> IntervalsPrefixBuilder {
        IntervalsPrefixBuilder::default()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn use_field(&self) -> Option<&str> {
        self.use_field.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct IntervalsPrefixBuilder {
    prefix: Option<String>,
    analyzer: Option<String>,
    use_field: Option<String>,
}

impl IntervalsPrefixBuilder {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn use_field(mut self, field: impl Into<String>) -> Self {
        self.use_field = Some(field.into());
        self
    }
}

impl ObjectBuilder for IntervalsPrefixBuilder {
    type Output = IntervalsPrefix;

    fn build(self) -> Result<IntervalsPrefix> {
        Ok(IntervalsPrefix {
            prefix: IntervalsPrefix::SCHEMA.require("prefix", self.prefix)?,
            analyzer: self.analyzer,
            use_field: self.use_field,
        })
    }
}

impl JsonObject for IntervalsPrefix {
    const SCHEMA: &'static Schema = &Schema::new(
        "IntervalsPrefix",
        &[
            FieldSpec::required("prefix"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("use_field"),
        ],
    );

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.field("prefix", &self.prefix)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("use_field", &self.use_field)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        IntervalsPrefixBuilder {
            prefix: reader.take("prefix")?,
            analyzer: reader.take("analyzer")?,
            use_field: reader.take("use_field")?,
        }
        .build()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalsWildcard {
    pattern: String,
    analyzer: Option<String>,
    use_field: Option<String>,
}

impl IntervalsWildcard {
    pub fn builder() -> IntervalsWildcardBuilder {
        IntervalsWildcardBuilder::default()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    pub fn use_field(&self) -> Option<&str> {
        self.use_field.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct IntervalsWildcardBuilder {
    pattern: Option<String>,
    analyzer: Option<String>,
    use_field: Option<String>,
}

impl IntervalsWildcardBuilder {
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn use_field(mut self, field: impl Into<String>) -> Self {
        self.use_field = Some(field.into());
        self
    }
}

impl ObjectBuilder for IntervalsWildcardBuilder {
    type Output = IntervalsWildcard;

    fn build(self) -> Result<IntervalsWildcard> {
        Ok(IntervalsWildcard {
            pattern: IntervalsWildcard::SCHEMA.require("pattern", self.pattern)?,
            analyzer: self.analyzer,
            use_field: self.use_field,
        })
    }
}

impl JsonObject for IntervalsWildcard {
    const SCHEMA: &'static Schema = &Schema::new(
        "IntervalsWildcard",
        &[
            FieldSpec::required("pattern"),
            FieldSpec::optional("analyzer"),
            FieldSpec::optional("use_field"),
        ],
    );

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.field("pattern", &self.pattern)?;
        writer.optional("analyzer", &self.analyzer)?;
        writer.optional("use_field", &self.use_field)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        IntervalsWildcardBuilder {
            pattern: reader.take("pattern")?,
            analyzer: reader.take("analyzer")?,
            use_field: reader.take("use_field")?,
        }
        .build()
    }
}

impl_with_query_base!(IntervalsQueryBuilder);

impl_json_object!(
    IntervalsQuery,
    IntervalsAllOf,
    IntervalsAnyOf,
    IntervalsFuzzy,
    IntervalsMatch,
    IntervalsPrefix,
    IntervalsWildcard,
);
