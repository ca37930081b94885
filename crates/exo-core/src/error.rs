use std::fmt;

/// A string that does not name a known filter, context or metric category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseError {}

/// Why a record was not admitted to a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRejection {
    BlankName,
    DuplicateName(String),
}

impl fmt::Display for CatalogRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogRejection::BlankName => write!(f, "record has no name"),
            CatalogRejection::DuplicateName(name) => write!(f, "duplicate planet name '{name}'"),
        }
    }
}

impl std::error::Error for CatalogRejection {}

/// Why a record could not join a [`ComparisonSet`](crate::ComparisonSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    Full { capacity: usize },
    Duplicate(String),
}

impl fmt::Display for MembershipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipError::Full { capacity } => {
                write!(f, "comparison is full ({capacity} planets max)")
            }
            MembershipError::Duplicate(name) => write!(f, "'{name}' is already being compared"),
        }
    }
}

impl std::error::Error for MembershipError {}
