//! Scripts and the queries that run them.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use search_dsl_core::{
    impl_json_object, FieldSpec, JsonData, JsonObject, ObjectBuilder, ObjectReader, ObjectWriter,
    Result, Schema,
};

use super::base::{impl_with_query_base, QueryBase, QUERY_BASE};
use super::query::Query;

// =============================================================================
// Script
// =============================================================================

/// An inline script. A bare string decodes as its `source`.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    source: String,
    lang: Option<String>,
    params: IndexMap<String, JsonData>,
    options: IndexMap<String, String>,
}

impl Script {
    pub fn builder() -> ScriptBuilder {
        ScriptBuilder::default()
    }

    /// Shorthand for a script with only a source.
    pub fn inline(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            lang: None,
            params: IndexMap::new(),
            options: IndexMap::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn params(&self) -> &IndexMap<String, JsonData> {
        &self.params
    }

    pub fn options(&self) -> &IndexMap<String, String> {
        &self.options
    }
}

#[derive(Debug, Default)]
pub struct ScriptBuilder {
    source: Option<String>,
    lang: Option<String>,
    params: IndexMap<String, JsonData>,
    options: IndexMap<String, String>,
}

impl ScriptBuilder {
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Add one parameter; an existing key is overwritten in place.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<JsonData>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn set_params(mut self, params: IndexMap<String, JsonData>) -> Self {
        self.params = params;
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn set_options(mut self, options: IndexMap<String, String>) -> Self {
        self.options = options;
        self
    }
}

impl ObjectBuilder for ScriptBuilder {
    type Output = Script;

    fn build(self) -> Result<Script> {
        Ok(Script {
            source: Script::SCHEMA.require("source", self.source)?,
            lang: self.lang,
            params: self.params,
            options: self.options,
        })
    }
}

impl JsonObject for Script {
    const SCHEMA: &'static Schema = &Schema::new(
        "Script",
        &[
            FieldSpec::required("source"),
            FieldSpec::optional("lang"),
            FieldSpec::optional("params"),
            FieldSpec::optional("options"),
        ],
    )
    .with_shortcut("source");

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        writer.field("source", &self.source)?;
        writer.optional("lang", &self.lang)?;
        writer.dict("params", &self.params)?;
        writer.dict("options", &self.options)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        ScriptBuilder {
            source: reader.take("source")?,
            lang: reader.take("lang")?,
            params: reader.take_dict("params")?,
            options: reader.take_dict("options")?,
        }
        .build()
    }
}

// =============================================================================
// script
// =============================================================================

/// Filter documents with a boolean script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptQuery {
    base: QueryBase,
    script: Script,
}

impl ScriptQuery {
    pub fn builder() -> ScriptQueryBuilder {
        ScriptQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn script(&self) -> &Script {
        &self.script
    }
}

#[derive(Debug, Default)]
pub struct ScriptQueryBuilder {
    base: QueryBase,
    script: Option<Script>,
}

impl ScriptQueryBuilder {
    pub fn script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }
}

impl_with_query_base!(ScriptQueryBuilder);

impl ObjectBuilder for ScriptQueryBuilder {
    type Output = ScriptQuery;

    fn build(self) -> Result<ScriptQuery> {
        Ok(ScriptQuery {
            base: self.base,
            script: ScriptQuery::SCHEMA.require("script", self.script)?,
        })
    }
}

impl JsonObject for ScriptQuery {
    const SCHEMA: &'static Schema =
        &Schema::new("ScriptQuery", &[FieldSpec::required("script")]).extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("script", &self.script)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        ScriptQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            script: reader.take_object("script")?,
        }
        .build()
    }
}

// =============================================================================
// script_score
// =============================================================================

/// Rescore the documents matched by `query` with a script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptScoreQuery {
    base: QueryBase,
    query: Box<Query>,
    script: Script,
    min_score: Option<f32>,
}

impl ScriptScoreQuery {
    pub fn builder() -> ScriptScoreQueryBuilder {
        ScriptScoreQueryBuilder::default()
    }

    pub fn base(&self) -> &QueryBase {
        &self.base
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn script(&self) -> &Script {
        &self.script
    }

    pub fn min_score(&self) -> Option<f32> {
        self.min_score
    }
}

#[derive(Debug, Default)]
pub struct ScriptScoreQueryBuilder {
    base: QueryBase,
    query: Option<Query>,
    script: Option<Script>,
    min_score: Option<f32>,
}

impl ScriptScoreQueryBuilder {
    pub fn query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn script(mut self, script: Script) -> Self {
        self.script = Some(script);
        self
    }

    pub fn min_score(mut self, min_score: f32) -> Self {
        self.min_score = Some(min_score);
        self
    }
}

impl_with_query_base!(ScriptScoreQueryBuilder);

impl ObjectBuilder for ScriptScoreQueryBuilder {
    type Output = ScriptScoreQuery;

    fn build(self) -> Result<ScriptScoreQuery> {
        let schema = ScriptScoreQuery::SCHEMA;
        Ok(ScriptScoreQuery {
            base: self.base,
            query: Box::new(schema.require("query", self.query)?),
            script: schema.require("script", self.script)?,
            min_score: self.min_score,
        })
    }
}

impl JsonObject for ScriptScoreQuery {
    const SCHEMA: &'static Schema = &Schema::new(
        "ScriptScoreQuery",
        &[
            FieldSpec::required("query"),
            FieldSpec::required("script"),
            FieldSpec::optional("min_score"),
        ],
    )
    .extends(&QUERY_BASE);

    fn write_fields<M: SerializeMap>(
        &self,
        writer: &mut ObjectWriter<M>,
    ) -> std::result::Result<(), M::Error> {
        self.base.write_fields(writer)?;
        writer.field("query", &self.query)?;
        writer.field("script", &self.script)?;
        writer.optional("min_score", &self.min_score)
    }

    fn read_fields(reader: &mut ObjectReader) -> Result<Self> {
        ScriptScoreQueryBuilder {
            base: QueryBase::read_fields(reader)?,
            query: reader.take_object("query")?,
            script: reader.take_object("script")?,
            min_score: reader.take("min_score")?,
        }
        .build()
    }
}

impl_json_object!(Script, ScriptQuery, ScriptScoreQuery);
