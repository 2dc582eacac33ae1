use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::{leading_integer, split_fields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestartPolicy {
    pub name: String,
    #[serde(default)]
    pub maximum_retry_count: u64,
}

impl RestartPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            maximum_retry_count: 0,
        }
    }

    pub fn with_max_retries(mut self, count: u64) -> Self {
        self.maximum_retry_count = count;
        self
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.maximum_retry_count == 0 {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.maximum_retry_count)
        }
    }
}

/// Parses `mode[:max_retry]`. A retry count that is not a number reads as 0.
pub fn parse_restart(spec: Option<&str>) -> Result<Option<RestartPolicy>> {
    let Some(spec) = spec else {
        return Ok(None);
    };

    let policy = match split_fields(spec).as_slice() {
        [] => return Ok(None),
        [name] => RestartPolicy::new(*name),
        [name, retries] => RestartPolicy::new(*name).with_max_retries(leading_integer(retries)),
        _ => return Err(Error::MalformedRestart(spec.to_string())),
    };

    Ok(Some(policy))
}

pub fn serialize_restart(policy: Option<&RestartPolicy>) -> Option<String> {
    policy
        .filter(|policy| !policy.name.is_empty())
        .map(RestartPolicy::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(spec: &str) -> Option<String> {
        serialize_restart(parse_restart(Some(spec)).unwrap().as_ref())
    }

    #[test]
    fn test_parse_name_only() {
        assert_eq!(
            parse_restart(Some("always")).unwrap(),
            Some(RestartPolicy::new("always"))
        );
    }

    #[test]
    fn test_parse_with_retries() {
        assert_eq!(
            parse_restart(Some("on-failure:5")).unwrap(),
            Some(RestartPolicy::new("on-failure").with_max_retries(5))
        );
    }

    #[test]
    fn test_non_numeric_retries_read_as_zero() {
        let policy = parse_restart(Some("on-failure:many")).unwrap().unwrap();
        assert_eq!(policy.maximum_retry_count, 0);
    }

    #[test]
    fn test_too_many_parts_rejected() {
        let err = parse_restart(Some("a:b:c")).unwrap_err();
        assert!(matches!(err, Error::MalformedRestart(ref spec) if spec == "a:b:c"));
        assert_eq!(
            err.to_string(),
            "Restart a:b:c has incorrect format, should be mode[:max_retry]"
        );
    }

    #[test]
    fn test_absent_spec() {
        assert_eq!(parse_restart(None).unwrap(), None);
        assert_eq!(parse_restart(Some("")).unwrap(), None);
        assert_eq!(parse_restart(Some("::")).unwrap(), None);
    }

    #[test]
    fn test_trailing_separators_ignored() {
        assert_eq!(
            parse_restart(Some("on-failure:5:")).unwrap(),
            Some(RestartPolicy::new("on-failure").with_max_retries(5))
        );
        assert_eq!(
            parse_restart(Some("always::")).unwrap(),
            Some(RestartPolicy::new("always"))
        );
        assert_eq!(
            parse_restart(Some("on-failure:")).unwrap(),
            Some(RestartPolicy::new("on-failure"))
        );
    }

    #[test]
    fn test_empty_middle_field_still_counts() {
        assert!(matches!(
            parse_restart(Some("on-failure::5")),
            Err(Error::MalformedRestart(_))
        ));
    }

    #[test]
    fn test_round_trip() {
        assert_eq!(round_trip("on-failure:5").as_deref(), Some("on-failure:5"));
        assert_eq!(round_trip("unless-stopped").as_deref(), Some("unless-stopped"));
    }

    #[test]
    fn test_zero_retries_dropped() {
        assert_eq!(round_trip("on-failure:0").as_deref(), Some("on-failure"));
    }

    #[test]
    fn test_serialize_without_name() {
        assert_eq!(serialize_restart(None), None);
        assert_eq!(serialize_restart(Some(&RestartPolicy::new(""))), None);
    }

    #[test]
    fn test_engine_field_names() {
        let policy = RestartPolicy::new("on-failure").with_max_retries(3);
        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            serde_json::json!({"Name": "on-failure", "MaximumRetryCount": 3})
        );
    }
}
