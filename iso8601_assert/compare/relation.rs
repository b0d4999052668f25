use itertools::Itertools;
use serde::{Deserialize, Serialize};
use strum::{EnumMessage, IntoEnumIterator};

/// How the subject must relate to the expected date-time.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumMessage,
)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// The same instant.
    #[default]
    #[strum(serialize = "eq", message = "eq")]
    Eq,
    /// Strictly after.
    #[strum(serialize = "gt", message = "greater than")]
    Gt,
    /// After or the same instant.
    #[strum(serialize = "gte", message = "greater than or equal")]
    Gte,
    /// Strictly before.
    #[strum(serialize = "lt", message = "less than")]
    Lt,
    /// Before or the same instant.
    #[strum(serialize = "lte", message = "less than or equal")]
    Lte,
}

impl Relation {
    /// The short tag, e.g. `gte`.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// The human phrase, e.g. `greater than or equal`.
    pub fn phrase(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.tag())
    }

    /// Look up a relation by its tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        tag.parse().ok()
    }

    /// Every relation with its phrase where that differs from the tag, as listed in error messages:
    /// `"eq", "gt" (greater than), ...`
    pub fn describe_all() -> String {
        Relation::iter()
            .map(|rel| {
                if rel.phrase() == rel.tag() {
                    format!("\"{}\"", rel.tag())
                } else {
                    format!("\"{}\" ({})", rel.tag(), rel.phrase())
                }
            })
            .join(", ")
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("eq", Relation::Eq, "eq")]
    #[case("gt", Relation::Gt, "greater than")]
    #[case("gte", Relation::Gte, "greater than or equal")]
    #[case("lt", Relation::Lt, "less than")]
    #[case("lte", Relation::Lte, "less than or equal")]
    fn test_relation_table(#[case] tag: &str, #[case] relation: Relation, #[case] phrase: &str) {
        assert_eq!(Relation::from_tag(tag), Some(relation));
        assert_eq!(relation.tag(), tag);
        assert_eq!(relation.phrase(), phrase);
        assert_eq!(relation.to_string(), tag);
    }

    #[rstest]
    #[case("foo")]
    #[case("EQ")]
    #[case("")]
    #[case("greater than")]
    fn test_unknown_tags(#[case] tag: &str) {
        assert_eq!(Relation::from_tag(tag), None);
    }

    #[test]
    fn test_describe_all() {
        assert_eq!(
            Relation::describe_all(),
            "\"eq\", \"gt\" (greater than), \"gte\" (greater than or equal), \"lt\" (less than), \"lte\" (less than or equal)"
        );
    }

    #[test]
    fn test_serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Relation::Gte).unwrap(), "\"gte\"");
        assert_eq!(
            serde_json::from_str::<Relation>("\"lt\"").unwrap(),
            Relation::Lt
        );
    }
}
