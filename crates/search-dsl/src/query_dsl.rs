//! The query DSL: the [`Query`] union, its leaf query types and the nested
//! [`SpanQuery`], [`Intervals`] and [`ScoreFunction`] unions.

pub mod base;
pub mod compound;
pub mod full_text;
pub mod function_score;
pub mod intervals;
pub mod match_all;
pub mod query;
pub mod script;
pub mod span;
pub mod term_level;
pub mod types;

pub use base::{QueryBase, WithQueryBase, QUERY_BASE};
pub use compound::{
    BoolQuery, BoolQueryBuilder, BoostingQuery, BoostingQueryBuilder, ConstantScoreQuery,
    ConstantScoreQueryBuilder, DisMaxQuery, DisMaxQueryBuilder, NestedQuery, NestedQueryBuilder,
};
pub use full_text::{
    MatchPhrasePrefixQuery, MatchPhrasePrefixQueryBuilder, MatchPhraseQuery,
    MatchPhraseQueryBuilder, MatchQuery, MatchQueryBuilder, MultiMatchQuery,
    MultiMatchQueryBuilder, QueryStringQuery, QueryStringQueryBuilder,
};
pub use function_score::{
    FieldValueFactorScoreFunction, FieldValueFactorScoreFunctionBuilder, FunctionScore,
    FunctionScoreBuilder, FunctionScoreQuery, FunctionScoreQueryBuilder, RandomScoreFunction,
    RandomScoreFunctionBuilder, ScoreFunction, ScoreFunctionBuilder, ScoreFunctionKind,
    ScriptScoreFunction, ScriptScoreFunctionBuilder,
};
pub use intervals::{
    Intervals, IntervalsAllOf, IntervalsAllOfBuilder, IntervalsAnyOf, IntervalsAnyOfBuilder,
    IntervalsBuilder, IntervalsFuzzy, IntervalsFuzzyBuilder, IntervalsKind, IntervalsMatch,
    IntervalsMatchBuilder, IntervalsPrefix, IntervalsPrefixBuilder, IntervalsQuery,
    IntervalsQueryBuilder, IntervalsWildcard, IntervalsWildcardBuilder,
};
pub use match_all::{MatchAllQuery, MatchAllQueryBuilder, MatchNoneQuery, MatchNoneQueryBuilder};
pub use query::{Query, QueryBuilder, QueryKind};
pub use script::{
    Script, ScriptBuilder, ScriptQuery, ScriptQueryBuilder, ScriptScoreQuery,
    ScriptScoreQueryBuilder,
};
pub use span::{
    SpanContainingQuery, SpanContainingQueryBuilder, SpanFirstQuery, SpanFirstQueryBuilder,
    SpanNearQuery, SpanNearQueryBuilder, SpanNotQuery, SpanNotQueryBuilder, SpanOrQuery,
    SpanOrQueryBuilder, SpanQuery, SpanQueryBuilder, SpanQueryKind, SpanTermQuery,
    SpanTermQueryBuilder, SpanWithinQuery, SpanWithinQueryBuilder,
};
pub use term_level::{
    ExistsQuery, ExistsQueryBuilder, FuzzyQuery, FuzzyQueryBuilder, IdsQuery, IdsQueryBuilder,
    PrefixQuery, PrefixQueryBuilder, RangeQuery, RangeQueryBuilder, RegexpQuery,
    RegexpQueryBuilder, TermQuery, TermQueryBuilder, TermsQuery, TermsQueryBuilder,
    WildcardQuery, WildcardQueryBuilder,
};
pub use types::{
    ChildScoreMode, FieldValue, FieldValueFactorModifier, FunctionBoostMode, FunctionScoreMode,
    Fuzziness, MinimumShouldMatch, Operator, RangeRelation, TextQueryType, ZeroTermsQuery,
};
