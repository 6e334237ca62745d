use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;

use crate::Algorithm;

/// Editable form state. Index fields hold raw text so partially typed input
/// survives until submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryDraft {
    pub target_item: String,
    pub algorithm: Option<Algorithm>,
    pub start_index: String,
    pub end_index: String,
    pub generate_graph: bool,
}

/// A draft that passed validation, with indices parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub target_item: String,
    pub algorithm: Algorithm,
    pub start_index: Option<i64>,
    pub end_index: Option<i64>,
    pub generate_graph: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexField {
    Start,
    End,
}

impl fmt::Display for IndexField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexField::Start => write!(f, "Start index"),
            IndexField::End => write!(f, "End index"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Target item and algorithm are required.")]
    MissingRequired,
    #[error("{field} must be a whole number (got \"{raw}\").")]
    InvalidIndex { field: IndexField, raw: String },
    #[error("{field} is out of range (got \"{raw}\").")]
    IndexOutOfRange { field: IndexField, raw: String },
}

/// Validation gate and payload construction for a submission.
///
/// The target item is passed through as typed; only blank input is rejected.
/// Index fields are included only when they hold more than whitespace.
pub fn build_request(draft: &QueryDraft) -> Result<QueryRequest, ValidationError> {
    let algorithm = match draft.algorithm {
        Some(algorithm) if !draft.target_item.trim().is_empty() => algorithm,
        _ => return Err(ValidationError::MissingRequired),
    };

    Ok(QueryRequest {
        target_item: draft.target_item.clone(),
        algorithm,
        start_index: parse_index(IndexField::Start, &draft.start_index)?,
        end_index: parse_index(IndexField::End, &draft.end_index)?,
        generate_graph: draft.generate_graph,
    })
}

fn parse_index(field: IndexField, raw: &str) -> Result<Option<i64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i64>().map(Some).map_err(|err| {
        let raw = raw.to_string();
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ValidationError::IndexOutOfRange { field, raw }
            }
            _ => ValidationError::InvalidIndex { field, raw },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> QueryDraft {
        QueryDraft {
            target_item: "Pump".to_string(),
            algorithm: Some(Algorithm::Hss),
            ..QueryDraft::default()
        }
    }

    #[test]
    fn blank_target_or_missing_algorithm_is_rejected() {
        let blank = QueryDraft {
            target_item: "   ".to_string(),
            ..valid_draft()
        };
        assert_eq!(build_request(&blank), Err(ValidationError::MissingRequired));

        let no_algo = QueryDraft {
            algorithm: None,
            ..valid_draft()
        };
        assert_eq!(build_request(&no_algo), Err(ValidationError::MissingRequired));
        assert_eq!(
            ValidationError::MissingRequired.to_string(),
            "Target item and algorithm are required."
        );
    }

    #[test]
    fn indices_are_parsed_only_when_present() {
        let request = build_request(&valid_draft()).unwrap();
        assert_eq!(request.start_index, None);
        assert_eq!(request.end_index, None);

        let draft = QueryDraft {
            start_index: "0".to_string(),
            end_index: " 25 ".to_string(),
            ..valid_draft()
        };
        let request = build_request(&draft).unwrap();
        assert_eq!(request.start_index, Some(0));
        assert_eq!(request.end_index, Some(25));
    }

    #[test]
    fn non_numeric_index_is_a_validation_error() {
        let draft = QueryDraft {
            end_index: "abc".to_string(),
            ..valid_draft()
        };
        let err = build_request(&draft).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidIndex {
                field: IndexField::End,
                raw: "abc".to_string()
            }
        );
        assert_eq!(err.to_string(), "End index must be a whole number (got \"abc\").");
    }

    #[test]
    fn whitespace_only_index_is_omitted() {
        let draft = QueryDraft {
            start_index: "  ".to_string(),
            end_index: "\t".to_string(),
            ..valid_draft()
        };
        let request = build_request(&draft).unwrap();
        assert_eq!(request.start_index, None);
        assert_eq!(request.end_index, None);
    }

    #[test]
    fn overflowing_index_is_reported_as_out_of_range() {
        let draft = QueryDraft {
            start_index: "99999999999999999999".to_string(),
            ..valid_draft()
        };
        let err = build_request(&draft).unwrap_err();
        assert_eq!(
            err,
            ValidationError::IndexOutOfRange {
                field: IndexField::Start,
                raw: "99999999999999999999".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Start index is out of range (got \"99999999999999999999\")."
        );

        let draft = QueryDraft {
            end_index: "-99999999999999999999".to_string(),
            ..valid_draft()
        };
        assert!(matches!(
            build_request(&draft),
            Err(ValidationError::IndexOutOfRange { field: IndexField::End, .. })
        ));
    }

    #[test]
    fn target_item_is_sent_as_typed() {
        let draft = QueryDraft {
            target_item: " Valve A ".to_string(),
            ..valid_draft()
        };
        assert_eq!(build_request(&draft).unwrap().target_item, " Valve A ");
    }
}
