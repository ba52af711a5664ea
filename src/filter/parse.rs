/// Lenient integer parsing for query options.
///
/// Skips leading whitespace, accepts an optional sign, then reads the longest
/// run of ASCII digits. Anything after the digits is ignored, so `"7abc"`
/// and `"3.9"` parse as 7 and 3. Returns `None` when no digit follows.
/// Values beyond the `i64` range saturate.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in rest[..digits].bytes() {
        let digit = i64::from(b - b'0');
        value = value.saturating_mul(10);
        value = if negative { value.saturating_sub(digit) } else { value.saturating_add(digit) };
    }
    Some(value)
}
