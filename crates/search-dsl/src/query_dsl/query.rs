//! The query union.

use search_dsl_core::{impl_union_object, tagged_union};

use super::compound::{BoolQuery, BoostingQuery, ConstantScoreQuery, DisMaxQuery, NestedQuery};
use super::full_text::{
    MatchPhrasePrefixQuery, MatchPhraseQuery, MatchQuery, MultiMatchQuery, QueryStringQuery,
};
use super::function_score::FunctionScoreQuery;
use super::intervals::IntervalsQuery;
use super::match_all::{MatchAllQuery, MatchNoneQuery};
use super::script::{ScriptQuery, ScriptScoreQuery};
use super::span::{
    SpanContainingQuery, SpanFirstQuery, SpanNearQuery, SpanNotQuery, SpanOrQuery, SpanQuery,
    SpanTermQuery, SpanWithinQuery,
};
use super::term_level::{
    ExistsQuery, FuzzyQuery, IdsQuery, PrefixQuery, RangeQuery, RegexpQuery, TermQuery,
    TermsQuery, WildcardQuery,
};

tagged_union! {
    /// A query node: exactly one query kind and its payload.
    ///
    /// Encoded as `{"<kind>": <payload>}`. Build it from a leaf with
    /// `Query::from(leaf)` / `.into()`, or through [`Query::builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use search_dsl::prelude::*;
    ///
    /// let query: Query = ExistsQuery::builder().field("user").build()?.into();
    /// assert!(query.is_exists());
    /// assert!(query.term().is_err());
    /// assert_eq!(query.kind(), QueryKind::Exists);
    /// # Ok::<(), search_dsl::Error>(())
    /// ```
    pub enum Query / QueryKind / QueryBuilder {
        // compound
        Bool("bool", is_bool, bool) => BoolQuery,
        Boosting("boosting", is_boosting, boosting) => BoostingQuery,
        ConstantScore("constant_score", is_constant_score, constant_score) => ConstantScoreQuery,
        DisMax("dis_max", is_dis_max, dis_max) => DisMaxQuery,
        FunctionScore("function_score", is_function_score, function_score) => FunctionScoreQuery,
        Nested("nested", is_nested, nested) => NestedQuery,
        ScriptScore("script_score", is_script_score, script_score) => ScriptScoreQuery,

        // term-level
        Term("term", is_term, term) => TermQuery,
        Terms("terms", is_terms, terms) => TermsQuery,
        Range("range", is_range, range) => RangeQuery,
        Exists("exists", is_exists, exists) => ExistsQuery,
        Ids("ids", is_ids, ids) => IdsQuery,
        Prefix("prefix", is_prefix, prefix) => PrefixQuery,
        Wildcard("wildcard", is_wildcard, wildcard) => WildcardQuery,
        Regexp("regexp", is_regexp, regexp) => RegexpQuery,
        Fuzzy("fuzzy", is_fuzzy, fuzzy) => FuzzyQuery,

        // full-text
        Match("match", is_match, r#match) => MatchQuery,
        MatchPhrase("match_phrase", is_match_phrase, match_phrase) => MatchPhraseQuery,
        MatchPhrasePrefix("match_phrase_prefix", is_match_phrase_prefix, match_phrase_prefix) => MatchPhrasePrefixQuery,
        MultiMatch("multi_match", is_multi_match, multi_match) => MultiMatchQuery,
        QueryString("query_string", is_query_string, query_string) => QueryStringQuery,
        Intervals("intervals", is_intervals, intervals) => IntervalsQuery,

        // specialized
        MatchAll("match_all", is_match_all, match_all) => MatchAllQuery,
        MatchNone("match_none", is_match_none, match_none) => MatchNoneQuery,
        Script("script", is_script, script) => ScriptQuery,

        // span
        SpanTerm("span_term", is_span_term, span_term) => SpanTermQuery,
        SpanNear("span_near", is_span_near, span_near) => SpanNearQuery,
        SpanOr("span_or", is_span_or, span_or) => SpanOrQuery,
        SpanFirst("span_first", is_span_first, span_first) => SpanFirstQuery,
        SpanNot("span_not", is_span_not, span_not) => SpanNotQuery,
        SpanContaining("span_containing", is_span_containing, span_containing) => SpanContainingQuery,
        SpanWithin("span_within", is_span_within, span_within) => SpanWithinQuery,
    }
}

impl_union_object!(Query);

impl From<SpanQuery> for Query {
    fn from(span: SpanQuery) -> Self {
        match span {
            SpanQuery::SpanTerm(q) => Query::SpanTerm(q),
            SpanQuery::SpanNear(q) => Query::SpanNear(q),
            SpanQuery::SpanOr(q) => Query::SpanOr(q),
            SpanQuery::SpanFirst(q) => Query::SpanFirst(q),
            SpanQuery::SpanNot(q) => Query::SpanNot(q),
            SpanQuery::SpanContaining(q) => Query::SpanContaining(q),
            SpanQuery::SpanWithin(q) => Query::SpanWithin(q),
        }
    }
}

impl TryFrom<Query> for SpanQuery {
    type Error = Query;

    /// Narrow a query to the span kinds; any other kind is handed back.
    fn try_from(query: Query) -> std::result::Result<Self, Query> {
        match query {
            Query::SpanTerm(q) => Ok(SpanQuery::SpanTerm(q)),
            Query::SpanNear(q) => Ok(SpanQuery::SpanNear(q)),
            Query::SpanOr(q) => Ok(SpanQuery::SpanOr(q)),
            Query::SpanFirst(q) => Ok(SpanQuery::SpanFirst(q)),
            Query::SpanNot(q) => Ok(SpanQuery::SpanNot(q)),
            Query::SpanContaining(q) => Ok(SpanQuery::SpanContaining(q)),
            Query::SpanWithin(q) => Ok(SpanQuery::SpanWithin(q)),
            other => Err(other),
        }
    }
}
