use crate::common::*;

#[doc = r#"
    `#rrggbb` 형식의 색상 문자열을 RGB 값으로 변환해주는 함수.

    `transparent` 나 `rgba(0,0,0,0)` 처럼 투명을 의미하는 값은 `None` 을 반환한다.
"#]
pub fn parse_hex_color(color: &str) -> anyhow::Result<Option<(u8, u8, u8)>> {
    let trimmed: &str = color.trim();

    if trimmed.eq_ignore_ascii_case("transparent") || trimmed.replace(' ', "") == "rgba(0,0,0,0)" {
        return Ok(None);
    }

    let hex: &str = trimmed.strip_prefix('#').ok_or_else(|| {
        anyhow!("[parse_hex_color()] Color must start with '#': '{}'", color)
    })?;

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(anyhow!(
            "[parse_hex_color()] Color must have six hex digits: '{}'",
            color
        ));
    }

    let channel = |range: std::ops::Range<usize>| -> anyhow::Result<u8> {
        u8::from_str_radix(&hex[range], 16)
            .with_context(|| format!("[parse_hex_color()] Invalid hex digits in '{}'", color))
    };

    Ok(Some((channel(0..2)?, channel(2..4)?, channel(4..6)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_hex_and_transparent() {
        assert_eq!(parse_hex_color("#ccffe6").unwrap(), Some((0xcc, 0xff, 0xe6)));
        assert_eq!(parse_hex_color("rgba(0, 0, 0, 0)").unwrap(), None);
        assert!(parse_hex_color("ccffe6").is_err());
        assert!(parse_hex_color("#ccff").is_err());
        assert!(parse_hex_color("#zzffe6").is_err());
    }
}
