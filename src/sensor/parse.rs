//! Sensor line parsing
//!
//! The microcontroller prints `"<value>,<value>"` per reading. Only the first
//! field steers the bird; the second must still be a valid integer for the
//! line to count.

/// Parse the first field of a `"<int>,<int>"` line.
///
/// Leading whitespace before each integer and a sign are accepted, anything
/// after the second integer is ignored. Returns `None` for any other shape.
pub fn parse_sample(line: &str) -> Option<i32> {
    let (value, rest) = scan_int(line)?;
    let rest = rest.strip_prefix(',')?;
    scan_int(rest)?;
    Some(value)
}

/// Scan one integer off the front of `input`, returning it and the remainder
fn scan_int(input: &str) -> Option<(i32, &str)> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();

    let sign_len = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }

    let end = sign_len + digits;
    let value = trimmed[..end].parse::<i32>().ok()?;
    Some((value, &trimmed[end..]))
}
