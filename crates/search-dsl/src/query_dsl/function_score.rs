//! `function_score` and its score functions.
//!
//! Each entry of `functions` is a union with sibling properties: `filter`
//! and `weight` are ordinary fields written before the function kind key.
//!
//! ```json
//! { "filter": { "term": { "tag": "hot" } }, "weight": 2.0, "random_score": {} }
//! ```

use serde::ser::SerializeMap;
use search_dsl_core::de::VARIANT_FIELD;
use search_dsl_core::{
    impl_json_object, impl_union_object, tagged_union, FieldSpec, JsonData, JsonObject,
    ObjectBuilder, ObjectReader, ObjectWriter, Result, Schema, TaggedUnion, VariantKind,
};

use super::base::{impl_with_query_base, QueryBase, QUERY_BASE};
use super::query::Query;
use super::script::Script;
use super::types::{FieldValueFactorModifier, FunctionBoostMode, FunctionScoreMode};

tagged_union! {
    /// A scoring function of a `function_score` query.
    pub enum ScoreFunction / ScoreFunctionKind / ScoreFunctionBuilder {
        FieldValueFactor("field_value_factor", is_field_value_factor, field_value_factor) => FieldValueFactorScoreFunction,
        RandomScore("random_score", is_random_score, random_score) => RandomScoreFunction,
        ScriptScore("script_score", is_script_score, script_score) => ScriptScoreFunction,
    }
}

impl_union_object!(ScoreFunction);

// =============================================================================
// function_score
// =============================================================================

/// Modify the scores of documents matched by `query`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionScoreQuery {
    base: QueryBase,
    query: Option<Box<Query>>,
    functions: Vec<FunctionScore>,
    boost_mode: Option<FunctionBoostMode>,
    score_mode: Option<FunctionScoreMode>,
    max_boost: Option<f64>,
    min_score: Option<f64>,
}

impl FunctionScoreQuery {
    pub fn builder() -> FunctionScoreQueryBuilder {
        FunctionScoreQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn query(&self) -> Option<&Query> {
        self.query.as_deref()
    }

    pub fn functions(&self) -> &[FunctionScore] {
        &self.functions
    }

    pub fn boost_mode(&self) -> Option<FunctionBoostMode> {
        self.boost_mode
    }

    pub fn score_mode(&self) -> Option<FunctionScoreMode> {
        self.score_mode
    }

    pub fn max_boost(&self) -> Option<f64> {
        self.max_boost
    }

    pub fn min_score(&self) -> Option<f64> {
        self.min_score
    }
}

#[derive(Debug, Default)]
pub struct FunctionScoreQueryBuilder {
    base: QueryBase,
    query: Option<Query>,
    functions: Vec<FunctionScore>,
    boost_mode: Option<FunctionBoostMode>,
    score_mode: Option<FunctionScoreMode>,
    max_boost: Option<f64>,
    min_score: Option<f64>,
}

impl FunctionScoreQueryBuilder {
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn functions(mut self, function: impl Into<FunctionScore>) -> Self {
        self.functions.push(function.into());
        self
    }

    pub fn functions_all(
        mut self,
        functions: impl IntoIterator<Item = impl Into<FunctionScore>>,
    ) -> Self {
        self.functions.extend(functions.into_iter().map(Into::into));
        self
    }

    pub fn set_functions(mut self, functions: Vec<FunctionScore>) -> Self {
        self.functions = functions;
        self
    }

    pub fn boost_mode(mut self, boost_mode: FunctionBoostMode) -> Self {
        self.boost_mode = Some(boost_mode);
        self
    }

    pub fn score_mode(mut self, score_mode: FunctionScoreMode) -> Self {
        self.score_mode = Some(score_mode);
        self
    }

    pub fn max_boost(mut self, max_boost: f64) -> Self {
        self.max_boost = Some(max_boost);
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = Some(min_score);
        self
    }
}

impl ObjectBuilder for FunctionScoreQueryBuilder {
    type Output = FunctionScoreQuery;

    fn build(self) -> Result<FunctionScoreQuery> {
        Ok(FunctionScoreQuery {
            base: self.base,
            query: self.query.map(Box::new),
            functions: self.functions,
            boost_mode: self.boost_mode,
            score_mode: self.score_mode,
            max_boost: self.max_boost,
            min_score: self.min_score,
        })
    }
}

impl JsonObject for FunctionScoreQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "FunctionScoreQuery",
        &[
            FieldSpec::optional("query"),
            FieldSpec::optional("functions"),
            FieldSpec::optional("boost_mode"),
            FieldSpec::optional("score_mode"),
            FieldSpec::optional("max_boost"),
            FieldSpec::optional("min_score"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.optional("query", &self.query)?;
        writer.list("functions", &self.functions)?;
        writer.optional("boost_mode", &self.boost_mode)?;
        writer.optional("score_mode", &self.score_mode)?;
        writer.optional("max_boost", &self.max_boost)?;
        writer.optional("min_score", &self.min_score)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        FunctionScoreQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            query: reader.take_object("query")?,
            functions: reader.take_objects("functions")?,
            boost_mode: reader.take("boost_mode")?,
            score_mode: reader.take("score_mode")?,
            max_boost: reader.take("max_boost")?,
            min_score: reader.take("min_score")?,
        }
        .build()
    }
}

// =============================================================================
// FunctionScore
// =============================================================================

/// One scoring function, optionally restricted by `filter` and scaled by `weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionScore {
    filter: Option<Query>,
    weight: Option<f64>,
    function: ScoreFunction,
}

impl FunctionScore {
    pub fn builder() -> FunctionScoreBuilder {
        FunctionScoreBuilder::default()
    }

    pub fn filter(&self) -> Option<&Query> {
        self.filter.as_ref()
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn function(&self) -> &ScoreFunction {
        &self.function
    }

    pub fn kind(&self) -> ScoreFunctionKind {
        self.function.kind()
    }
}

impl From<ScoreFunction> for FunctionScore {
    fn from(function: ScoreFunction) -> Self {
        Self {
            filter: None,
            weight: None,
            function,
        }
    }
}

macro_rules! impl_from_score_function {
    ($($payload:ty),+) => {
        $(
            impl From<$payload> for FunctionScore {
                fn from(function: $payload) -> Self {
                    FunctionScore::from(ScoreFunction::from(function))
                }
            }
        )+
    };
}

impl_from_score_function!(
    FieldValueFactorScoreFunction,
    RandomScoreFunction,
    ScriptScoreFunction
);

#[derive(Debug, Default)]
pub struct FunctionScoreBuilder {
    filter: Option<Query>,
    weight: Option<f64>,
    function: Option<ScoreFunction>,
}

impl FunctionScoreBuilder {
    pub fn filter(mut self, query: impl Into<Query>) -> Self {
        self.filter = Some(query.into());
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the function; a later call replaces an earlier one.
    pub fn function(mut self, function: impl Into<ScoreFunction>) -> Self {
        self.function = Some(function.into());
        self
    }
}

impl ObjectBuilder for FunctionScoreBuilder {
    type Output = FunctionScore;

    fn build(self) -> Result<FunctionScore> {
        Ok(FunctionScore {
            filter: self.filter,
            weight: self.weight,
            function: FunctionScore::SCHEMA.require(VARIANT_FIELD, self.function)?,
        })
    }
}

impl JsonObject for FunctionScore {
    const SCHEMA: &'static Schema = &Schema::new(
        "FunctionScore",
        &[FieldSpec::optional("filter"), FieldSpec::optional("weight")],
    )
    .with_variants(<ScoreFunctionKind as VariantKind>::JSON_VALUES);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.optional("filter", &self.filter)?;
        writer.optional("weight", &self.weight)?;
        self.function.write_variant(writer)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        FunctionScoreBuilder {
            filter: reader.take_object("filter")?,
            weight: reader.take("weight")?,
            function: reader.take_variant()?,
        }
        .build()
    }
}

// =============================================================================
// Score functions
// =============================================================================

/// Score from a numeric document field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValueFactorScoreFunction {
    field: String,
    factor: Option<f64>,
    missing: Option<f64>,
    modifier: Option<FieldValueFactorModifier>,
}

impl FieldValueFactorScoreFunction {
    pub fn builder() -> FieldValueFactorScoreFunctionBuilder {
        FieldValueFactorScoreFunctionBuilder::default()
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn factor(&self) -> Option<f64> {
        self.factor
    }

    pub fn missing(&self) -> Option<f64> {
        self.missing
    }

    pub fn modifier(&self) -> Option<FieldValueFactorModifier> {
        self.modifier
    }
}

#[derive(Debug, Default)]
pub struct FieldValueFactorScoreFunctionBuilder {
    field: Option<String>,
    factor: Option<f64>,
    missing: Option<f64>,
    modifier: Option<FieldValueFactorModifier>,
}

impl FieldValueFactorScoreFunctionBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn factor(mut self, factor: f64) -> Self {
        self.factor = Some(factor);
        self
    }

    pub fn missing(mut self, missing: f64) -> Self {
        self.missing = Some(missing);
        self
    }

    pub fn modifier(mut self, modifier: FieldValueFactorModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }
}

impl ObjectBuilder for FieldValueFactorScoreFunctionBuilder {
    type Output = FieldValueFactorScoreFunction;

    fn build(self) -> Result<FieldValueFactorScoreFunction> {
        Ok(FieldValueFactorScoreFunction {
            field: FieldValueFactorScoreFunction::SCHEMA.require("field", self.field)?,
            factor: self.factor,
            missing: self.missing,
            modifier: self.modifier,
        })
    }
}

impl JsonObject for FieldValueFactorScoreFunction {
    const SCHEMA: &'static Schema = &Schema::new(
        "FieldValueFactorScoreFunction",
        &[
            FieldSpec::required("field"),
            FieldSpec::optional("factor"),
            FieldSpec::optional("missing"),
            FieldSpec::optional("modifier"),
        ],
    );

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.field("field", &self.field)?;
        writer.optional("factor", &self.factor)?;
        writer.optional("missing", &self.missing)?;
        writer.optional("modifier", &self.modifier)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        FieldValueFactorScoreFunctionBuilder {
            field: reader.take("field")?,
            factor: reader.take("factor")?,
            missing: reader.take("missing")?,
            modifier: reader.take("modifier")?,
        }
        .build()
    }
}

/// Uniformly distributed scores, reproducible for a given `seed` and `field`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomScoreFunction {
    field: Option<String>,
    seed: Option<JsonData>,
}

impl RandomScoreFunction {
    pub fn builder() -> RandomScoreFunctionBuilder {
        RandomScoreFunctionBuilder::default()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// A number or a string.
    pub fn seed(&self) -> Option<&JsonData> {
        self.seed.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct RandomScoreFunctionBuilder {
    field: Option<String>,
    seed: Option<JsonData>,
}

impl RandomScoreFunctionBuilder {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn seed(mut self, seed: impl Into<JsonData>) -> Self {
        self.seed = Some(seed.into());
        self
    }
}

impl ObjectBuilder for RandomScoreFunctionBuilder {
    type Output = RandomScoreFunction;

    fn build(self) -> Result<RandomScoreFunction> {
        Ok(RandomScoreFunction {
            field: self.field,
            seed: self.seed.filter(|s| !s.is_null()),
        })
    }
}

impl JsonObject for RandomScoreFunction {
    const SCHEMA: &'static Schema = &Schema::new(
        "RandomScoreFunction",
        &[FieldSpec::optional("field"), FieldSpec::optional("seed")],
    );

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.optional("field", &self.field)?;
        writer.optional("seed", &self.seed)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        RandomScoreFunctionBuilder {
            field: reader.take("field")?,
            seed: reader.take("seed")?,
        }
        .build()
    }
}

/// Score computed by a script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptScoreFunction {
    script: Script,
}

impl ScriptScoreFunction {
    pub fn builder() -> ScriptScoreFunctionBuilder {
        ScriptScoreFunctionBuilder::default()
    }

    pub fn script(&self) -> &Script {
        &self.script
    }
}

#[derive(Debug, Default)]
pub struct ScriptScoreFunctionBuilder {
    script: Option<Script>,
}

impl ScriptScoreFunctionBuilder {
    pub fn script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }
}

impl ObjectBuilder for ScriptScoreFunctionBuilder {
    type Output = ScriptScoreFunction;

    fn build(self) -> Result<ScriptScoreFunction> {
        Ok(ScriptScoreFunction {
            script: ScriptScoreFunction::SCHEMA.require("script", self.script)?,
        })
    }
}

impl JsonObject for ScriptScoreFunction {
    const SCHEMA: &'static Schema =
        &Schema::new("ScriptScoreFunction", &[FieldSpec::required("script")]);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.field("script", &self.script)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        ScriptScoreFunctionBuilder {
            script: reader.take_object("script")?,
        }
        .build()
    }
}

impl_with_query_base!(FunctionScoreQueryBuilder);

impl_json_object!(
    FunctionScoreQuery,
    FunctionScore,
    FieldValueFactorScoreFunction,
    RandomScoreFunction,
    ScriptScoreFunction,
);
