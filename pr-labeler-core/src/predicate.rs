//! Predicate names understood by the labeler

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The PR context field a predicate inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredicateField {
    /// Every entry of `changedFilePaths`
    AnyFilePath,
    /// The PR body
    Body,
    /// The PR title
    Title,
    /// The author's login
    Author,
    /// The author's company
    AuthorCompany,
    /// Union of every owner handle in `fileOwners`
    AnyFileOwner,
}

impl PredicateField {
    pub const ALL: [PredicateField; 6] = [
        PredicateField::AnyFilePath,
        PredicateField::Body,
        PredicateField::Title,
        PredicateField::Author,
        PredicateField::AuthorCompany,
        PredicateField::AnyFileOwner,
    ];
}

/// Whether a predicate reports its match result as-is or inverted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negated,
}

/// Closed set of predicate names accepted in a rule's `when` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PredicateName {
    IsAnyFilePathMatch,
    IsNotAnyFilePathMatch,
    IsPrBodyMatch,
    IsNotPrBodyMatch,
    IsPrTitleMatch,
    IsNotPrTitleMatch,
    IsPrAuthorMatch,
    IsNotPrAuthorMatch,
    IsPrAuthorCompanyMatch,
    IsNotPrAuthorCompanyMatch,
    IsAnyFileOwnedByMatch,
    IsNotAnyFileOwnedByMatch,
}

impl PredicateName {
    pub const ALL: [PredicateName; 12] = [
        PredicateName::IsAnyFilePathMatch,
        PredicateName::IsNotAnyFilePathMatch,
        PredicateName::IsPrBodyMatch,
        PredicateName::IsNotPrBodyMatch,
        PredicateName::IsPrTitleMatch,
        PredicateName::IsNotPrTitleMatch,
        PredicateName::IsPrAuthorMatch,
        PredicateName::IsNotPrAuthorMatch,
        PredicateName::IsPrAuthorCompanyMatch,
        PredicateName::IsNotPrAuthorCompanyMatch,
        PredicateName::IsAnyFileOwnedByMatch,
        PredicateName::IsNotAnyFileOwnedByMatch,
    ];

    /// Name as written in the configuration document
    pub fn as_str(self) -> &'static str {
        match self {
            PredicateName::IsAnyFilePathMatch => "isAnyFilePathMatch",
            PredicateName::IsNotAnyFilePathMatch => "isNotAnyFilePathMatch",
            PredicateName::IsPrBodyMatch => "isPRBodyMatch",
            PredicateName::IsNotPrBodyMatch => "isNotPRBodyMatch",
            PredicateName::IsPrTitleMatch => "isPRTitleMatch",
            PredicateName::IsNotPrTitleMatch => "isNotPRTitleMatch",
            PredicateName::IsPrAuthorMatch => "isPRAuthorMatch",
            PredicateName::IsNotPrAuthorMatch => "isNotPRAuthorMatch",
            PredicateName::IsPrAuthorCompanyMatch => "isPRAuthorCompanyMatch",
            PredicateName::IsNotPrAuthorCompanyMatch => "isNotPRAuthorCompanyMatch",
            PredicateName::IsAnyFileOwnedByMatch => "isAnyFileOwnedByMatch",
            PredicateName::IsNotAnyFileOwnedByMatch => "isNotAnyFileOwnedByMatch",
        }
    }

    pub fn field(self) -> PredicateField {
        match self {
            PredicateName::IsAnyFilePathMatch | PredicateName::IsNotAnyFilePathMatch => {
                PredicateField::AnyFilePath
            }
            PredicateName::IsPrBodyMatch | PredicateName::IsNotPrBodyMatch => PredicateField::Body,
            PredicateName::IsPrTitleMatch | PredicateName::IsNotPrTitleMatch => {
                PredicateField::Title
            }
            PredicateName::IsPrAuthorMatch | PredicateName::IsNotPrAuthorMatch => {
                PredicateField::Author
            }
            PredicateName::IsPrAuthorCompanyMatch | PredicateName::IsNotPrAuthorCompanyMatch => {
                PredicateField::AuthorCompany
            }
            PredicateName::IsAnyFileOwnedByMatch | PredicateName::IsNotAnyFileOwnedByMatch => {
                PredicateField::AnyFileOwner
            }
        }
    }

    pub fn polarity(self) -> Polarity {
        match self {
            PredicateName::IsNotAnyFilePathMatch
            | PredicateName::IsNotPrBodyMatch
            | PredicateName::IsNotPrTitleMatch
            | PredicateName::IsNotPrAuthorMatch
            | PredicateName::IsNotPrAuthorCompanyMatch
            | PredicateName::IsNotAnyFileOwnedByMatch => Polarity::Negated,
            _ => Polarity::Positive,
        }
    }

    /// The name with the opposite polarity on the same field
    pub fn negation(self) -> PredicateName {
        match self {
            PredicateName::IsAnyFilePathMatch => PredicateName::IsNotAnyFilePathMatch,
            PredicateName::IsNotAnyFilePathMatch => PredicateName::IsAnyFilePathMatch,
            PredicateName::IsPrBodyMatch => PredicateName::IsNotPrBodyMatch,
            PredicateName::IsNotPrBodyMatch => PredicateName::IsPrBodyMatch,
            PredicateName::IsPrTitleMatch => PredicateName::IsNotPrTitleMatch,
            PredicateName::IsNotPrTitleMatch => PredicateName::IsPrTitleMatch,
            PredicateName::IsPrAuthorMatch => PredicateName::IsNotPrAuthorMatch,
            PredicateName::IsNotPrAuthorMatch => PredicateName::IsPrAuthorMatch,
            PredicateName::IsPrAuthorCompanyMatch => PredicateName::IsNotPrAuthorCompanyMatch,
            PredicateName::IsNotPrAuthorCompanyMatch => PredicateName::IsPrAuthorCompanyMatch,
            PredicateName::IsAnyFileOwnedByMatch => PredicateName::IsNotAnyFileOwnedByMatch,
            PredicateName::IsNotAnyFileOwnedByMatch => PredicateName::IsAnyFileOwnedByMatch,
        }
    }
}

impl fmt::Display for PredicateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredicateName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PredicateName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPredicate(s.to_string()))
    }
}

impl Serialize for PredicateName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PredicateName {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for name in PredicateName::ALL {
            assert_eq!(name.as_str().parse::<PredicateName>(), Ok(name));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "isFooMatch".parse::<PredicateName>().unwrap_err();
        assert_eq!(err, CoreError::UnknownPredicate("isFooMatch".to_string()));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("isPrTitleMatch".parse::<PredicateName>().is_err());
        assert!("ispRTitleMatch".parse::<PredicateName>().is_err());
    }

    #[test]
    fn test_negation_pairs_share_field() {
        for name in PredicateName::ALL {
            let negated = name.negation();
            assert_eq!(name.field(), negated.field());
            assert_ne!(name.polarity(), negated.polarity());
            assert_eq!(negated.negation(), name);
        }
    }

    #[test]
    fn test_every_field_has_both_polarities() {
        for field in PredicateField::ALL {
            let count = PredicateName::ALL
                .iter()
                .filter(|n| n.field() == field)
                .count();
            assert_eq!(count, 2, "field {:?}", field);
        }
    }
}
