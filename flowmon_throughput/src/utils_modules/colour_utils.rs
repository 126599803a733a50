use crate::common::*;

use plotters::style::RGBColor;

#[doc = "`#3498db` 형식의 16진수 색상 문자열을 RGBColor 로 변환"]
pub fn parse_hex_colour(hex: &str) -> anyhow::Result<RGBColor> {
    let digits: &str = hex.trim().trim_start_matches('#');

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!(
            "[parse_hex_colour] '{}' is not a #rrggbb colour",
            hex
        ));
    }

    let channel = |range: std::ops::Range<usize>| -> anyhow::Result<u8> {
        u8::from_str_radix(&digits[range], 16)
            .with_context(|| format!("[parse_hex_colour] invalid channel in '{}'", hex))
    };

    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_defaults() {
        assert_eq!(parse_hex_colour("#3498db").unwrap(), RGBColor(0x34, 0x98, 0xdb));
        assert_eq!(parse_hex_colour("e74c3c").unwrap(), RGBColor(0xe7, 0x4c, 0x3c));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_hex_colour("#34").is_err());
        assert!(parse_hex_colour("#zzzzzz").is_err());
        assert!(parse_hex_colour("").is_err());
    }
}
