//! Accepted-argument whitelist check run before a request is built.

use crate::error::{ApiError, Result};
use crate::request::Args;

/// Passes when `args` is absent or empty, or when at least one of its keys
/// is in `accepted`. Unrecognized extra keys are let through once one
/// recognized key is present, and nothing is filtered: the caller forwards
/// the original args unchanged.
pub fn are_arguments_valid(args: Option<&Args>, accepted: &[&str]) -> Result<()> {
    let Some(args) = args.filter(|a| !a.is_empty()) else {
        return Ok(());
    };

    if accepted.iter().any(|name| args.contains_key(*name)) {
        return Ok(());
    }

    tracing::warn!(
        given = ?args.keys().collect::<Vec<_>>(),
        "rejected arguments with no accepted name"
    );
    Err(ApiError::InvalidArgument {
        accepted: accepted.iter().map(|name| name.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    const ACCEPTED: &[&str] = &["filter", "page", "pageSize"];

    fn args(value: Value) -> Args {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn absent_args_pass() {
        assert!(are_arguments_valid(None, ACCEPTED).is_ok());
        assert!(are_arguments_valid(None, &[]).is_ok());
    }

    #[test]
    fn empty_args_pass() {
        assert!(are_arguments_valid(Some(&Args::new()), ACCEPTED).is_ok());
    }

    #[test]
    fn one_recognized_key_is_enough() {
        let given = args(json!({"page": "2", "bogus": "x"}));
        assert!(are_arguments_valid(Some(&given), ACCEPTED).is_ok());
    }

    #[test]
    fn no_recognized_key_is_rejected_with_accepted_list() {
        let given = args(json!({"bogus": "x"}));
        let err = are_arguments_valid(Some(&given), ACCEPTED).unwrap_err();
        match err {
            ApiError::InvalidArgument { accepted } => {
                assert_eq!(accepted, vec!["filter", "page", "pageSize"]);
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }
}
