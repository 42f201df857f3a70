//! Value types shared across query kinds.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Field values
// =============================================================================

/// A scalar matched against a document field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Long(i64),
    Double(f64),
    String(String),
}

impl FieldValue {
    /// True when the value encodes as JSON `null`, including NaN and infinities.
    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Double(n) => !n.is_finite(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Long(n) => write!(f, "{n}"),
            FieldValue::Double(n) => write!(f, "{n}"),
            FieldValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Long(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Long(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Double(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

/// `minimum_should_match`: an absolute count or an expression such as `"75%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    Count(i32),
    Percentage(String),
}

impl From<i32> for MinimumShouldMatch {
    fn from(value: i32) -> Self {
        MinimumShouldMatch::Count(value)
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(value: &str) -> Self {
        MinimumShouldMatch::Percentage(value.to_string())
    }
}

/// Edit distance, e.g. `"AUTO"`, `"AUTO:3,6"` or `"2"`.
///
/// Always written as a string; numbers are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fuzziness(String);

impl Fuzziness {
    pub fn auto() -> Self {
        Self("AUTO".to_string())
    }

    pub fn edits(distance: u8) -> Self {
        Self(distance.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Fuzziness {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for Fuzziness {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Fuzziness {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Count(i64),
            Ratio(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Fuzziness(s),
            Raw::Count(n) => Fuzziness(n.to_string()),
            Raw::Ratio(n) => Fuzziness(n.to_string()),
        })
    }
}

// =============================================================================
// Keyword enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    #[serde(alias = "AND")]
    And,
    #[serde(alias = "OR")]
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroTermsQuery {
    All,
    None,
}

/// How scores of matching child documents combine into the parent's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChildScoreMode {
    None,
    Avg,
    Sum,
    Max,
    Min,
}

/// Range relation for range-typed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeRelation {
    Within,
    Contains,
    Intersects,
}

/// `type` of a `multi_match` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextQueryType {
    BestFields,
    MostFields,
    CrossFields,
    Phrase,
    PhrasePrefix,
    BoolPrefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionBoostMode {
    Multiply,
    Replace,
    Sum,
    Avg,
    Max,
    Min,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionScoreMode {
    Multiply,
    Sum,
    Avg,
    First,
    Max,
    Min,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValueFactorModifier {
    None,
    Log,
    Log1p,
    Log2p,
    Ln,
    Ln1p,
    Ln2p,
    Square,
    Sqrt,
    Reciprocal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), FieldValue::Null)]
    #[case(json!(true), FieldValue::Bool(true))]
    #[case(json!(42), FieldValue::Long(42))]
    #[case(json!(1.5), FieldValue::Double(1.5))]
    #[case(json!("ok"), FieldValue::String("ok".to_string()))]
    fn test_field_value_variants(#[case] input: serde_json::Value, #[case] expected: FieldValue) {
        let parsed: FieldValue = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), input);
    }

    #[test]
    fn test_fuzziness_accepts_numbers() {
        let fuzziness: Fuzziness = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(fuzziness, Fuzziness::edits(2));
        assert_eq!(serde_json::to_value(&fuzziness).unwrap(), json!("2"));

        let fuzziness: Fuzziness = serde_json::from_value(json!("AUTO")).unwrap();
        assert_eq!(fuzziness, Fuzziness::auto());
    }

    #[test]
    fn test_minimum_should_match_forms() {
        let count: MinimumShouldMatch = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(count, MinimumShouldMatch::Count(2));
        let pct: MinimumShouldMatch = serde_json::from_value(json!("75%")).unwrap();
        assert_eq!(pct, MinimumShouldMatch::from("75%"));
    }

    #[rstest]
    #[case("and", Operator::And)]
    #[case("AND", Operator::And)]
    #[case("or", Operator::Or)]
    fn test_operator_names(#[case] name: &str, #[case] expected: Operator) {
        let op: Operator = serde_json::from_value(json!(name)).unwrap();
        assert_eq!(op, expected);
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(TextQueryType::PhrasePrefix).unwrap(),
            json!("phrase_prefix")
        );
        assert_eq!(
            serde_json::to_value(FieldValueFactorModifier::Log1p).unwrap(),
            json!("log1p")
        );
    }
}
