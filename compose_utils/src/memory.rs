use serde::{Deserialize, Serialize};

use crate::leading_integer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemoryLimit {
    Bytes(u64),
    Spec(String),
}

impl From<u64> for MemoryLimit {
    fn from(bytes: u64) -> Self {
        MemoryLimit::Bytes(bytes)
    }
}

impl From<&str> for MemoryLimit {
    fn from(spec: &str) -> Self {
        MemoryLimit::Spec(spec.to_string())
    }
}

/// Strings without a trailing `b`, `k`, `m` or `g` are returned unchanged.
pub fn convert_memory(memory: Option<MemoryLimit>) -> Option<MemoryLimit> {
    let spec = match memory? {
        MemoryLimit::Bytes(bytes) => return Some(MemoryLimit::Bytes(bytes)),
        MemoryLimit::Spec(spec) => spec,
    };

    let Some(unit) = spec.chars().last() else {
        return Some(MemoryLimit::Spec(spec));
    };

    let multiplier: u64 = match unit {
        'b' => 1,
        'k' => 1024,
        'm' => 1024 * 1024,
        'g' => 1024 * 1024 * 1024,
        _ => return Some(MemoryLimit::Spec(spec)),
    };

    let num = leading_integer(&spec[..spec.len() - unit.len_utf8()]);
    match num.checked_mul(multiplier) {
        Some(bytes) => Some(MemoryLimit::Bytes(bytes)),
        None => {
            log::warn!("Memory limit {} overflows a byte count, leaving it unconverted", spec);
            Some(MemoryLimit::Spec(spec))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(spec: &str) -> Option<MemoryLimit> {
        convert_memory(Some(MemoryLimit::from(spec)))
    }

    #[test]
    fn test_units_are_1024_based() {
        assert_eq!(convert("10b"), Some(MemoryLimit::Bytes(10)));
        assert_eq!(convert("10k"), Some(MemoryLimit::Bytes(10 * 1024)));
        assert_eq!(convert("512m"), Some(MemoryLimit::Bytes(512 * 1024 * 1024)));
        assert_eq!(convert("1g"), Some(MemoryLimit::Bytes(1024 * 1024 * 1024)));
    }

    #[test]
    fn test_integer_passes_through() {
        assert_eq!(
            convert_memory(Some(MemoryLimit::Bytes(512))),
            Some(MemoryLimit::Bytes(512))
        );
    }

    #[test]
    fn test_absent_value() {
        assert_eq!(convert_memory(None), None);
    }

    #[test]
    fn test_unsuffixed_string_is_returned_unchanged() {
        assert_eq!(convert("1024"), Some(MemoryLimit::from("1024")));
        assert_eq!(convert("10M"), Some(MemoryLimit::from("10M")));
        assert_eq!(convert(""), Some(MemoryLimit::from("")));
    }

    #[test]
    fn test_non_numeric_prefix_scales_zero() {
        assert_eq!(convert("k"), Some(MemoryLimit::Bytes(0)));
        assert_eq!(convert("lotsm"), Some(MemoryLimit::Bytes(0)));
    }

    #[test]
    fn test_leading_whitespace_before_number() {
        assert_eq!(convert(" 5m"), Some(MemoryLimit::Bytes(5 * 1024 * 1024)));
        assert_eq!(convert("\t2k"), Some(MemoryLimit::Bytes(2048)));
    }

    #[test]
    fn test_overflow_is_left_unconverted() {
        let huge = format!("{}g", u64::MAX);
        assert_eq!(convert(&huge), Some(MemoryLimit::Spec(huge.clone())));
    }

    #[test]
    fn test_deserializes_integer_or_string() {
        let values: Vec<MemoryLimit> = serde_json::from_str(r#"[512, "1g"]"#).unwrap();
        assert_eq!(values, vec![MemoryLimit::Bytes(512), MemoryLimit::from("1g")]);
    }
}
