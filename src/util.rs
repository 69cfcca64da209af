/// Parse an integer literal the way commit exports write them: an optional
/// sign, an optional `0x`/`0o`/`0b` prefix (a bare leading `0` means octal),
/// and `_` separators between digits.
pub fn parse_int(input: &str) -> Option<i64> {
    let (negative, unsigned) = match input.as_bytes().first()? {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest.strip_prefix('_').unwrap_or(rest))
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest.strip_prefix('_').unwrap_or(rest))
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest.strip_prefix('_').unwrap_or(rest))
    } else if lower.len() > 1 && lower.starts_with('0') {
        let rest = &lower[1..];
        (8, rest.strip_prefix('_').unwrap_or(rest))
    } else {
        (10, lower.as_str())
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if !cleaned.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = u64::from_str_radix(&cleaned, radix).ok()? as i128;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}
