use crate::common::*;

pub const NANOS_TO_SECS: f64 = 1e-9;

#[doc = r#"
    FlowMonitor 타임스탬프 문자열을 초 단위로 변환하는 함수.

    `+2000361596.0ns` 처럼 숫자 뒤에 두 글자 단위가 붙어 있으며, 단위는 검사하지 않고
    마지막 두 글자를 그대로 잘라낸 뒤 나노초로 해석한다.
"#]
pub fn parse_ns_timestamp_secs(raw: &str) -> anyhow::Result<f64> {
    let cut: usize = raw
        .char_indices()
        .rev()
        .nth(1)
        .map(|(idx, _)| idx)
        .ok_or_else(|| {
            anyhow!(
                "[parse_ns_timestamp_secs] Timestamp '{}' is shorter than its unit suffix",
                raw
            )
        })?;

    let nanos: f64 = raw[..cut].parse::<f64>().map_err(|e| {
        anyhow!(
            "[parse_ns_timestamp_secs] Timestamp '{}' is not numeric: {}",
            raw,
            e
        )
    })?;

    Ok(nanos * NANOS_TO_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_suffix_and_scales() {
        assert_eq!(parse_ns_timestamp_secs("1000ns").unwrap(), 1000.0 * 1e-9);
        assert_eq!(parse_ns_timestamp_secs("+2000361596.0ns").unwrap(), 2000361596.0 * 1e-9);
    }

    #[test]
    fn suffix_is_not_checked() {
        /* 단위와 상관없이 마지막 두 글자는 잘라낸다 */
        assert_eq!(parse_ns_timestamp_secs("500xx").unwrap(), 500.0 * 1e-9);
    }

    #[test]
    fn rejects_short_or_non_numeric() {
        assert!(parse_ns_timestamp_secs("ns").is_err());
        assert!(parse_ns_timestamp_secs("s").is_err());
        assert!(parse_ns_timestamp_secs("abcns").is_err());
    }
}
