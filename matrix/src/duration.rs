use chrono::TimeDelta;
use primcast_base::{Error, SyntaxError};

/// Unit suffixes and their length in nanoseconds.
const UNITS: [(&str, u128); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("μs", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60_000_000_000),
    ("h", 3_600_000_000_000),
];

/// Largest magnitude, reachable by negative durations only.
const LIMIT: u128 = 1 << 63;

/// Fraction digits beyond this are below nanosecond precision for every unit.
const MAX_FRACTION_DIGITS: usize = 20;

fn split_digits(text: &str) -> (&str, &str) {
    let end = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    text.split_at(end)
}

/// Nanoseconds in `whole.fraction` units of `scale`, truncated.
fn amount(whole: &str, fraction: &str, scale: u128) -> Option<u128> {
    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut nanos = whole.checked_mul(scale)?;

    let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !digits.is_empty() {
        let numerator: u128 = digits.parse().ok()?;
        nanos = nanos.checked_add(numerator * scale / 10u128.pow(digits.len() as u32))?;
    }
    Some(nanos)
}

/// Parse duration text like `300ms`, `-1.5h` or `2h45m`.
///
/// The text is an optional sign followed by a sequence of decimal numbers, each with an optional fraction and a unit
/// suffix (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`). A bare `0` needs no unit.
pub fn parse_duration(text: &str) -> Result<TimeDelta, Error> {
    let invalid = || Error::from(SyntaxError::Duration(text.to_owned()));

    let (negative, mut rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        let (fraction, after) = match after.strip_prefix('.') {
            Some(after) => {
                let (fraction, after) = split_digits(after);
                (Some(fraction), after)
            }
            None => (None, after),
        };
        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(invalid());
        }

        let unit_end = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_end);
        let scale = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, scale)| *scale)
            .ok_or_else(invalid)?;

        let nanos = amount(whole, fraction.unwrap_or(""), scale).ok_or_else(invalid)?;
        total = total.checked_add(nanos).filter(|t| *t <= LIMIT).ok_or_else(invalid)?;
        rest = after;
    }

    let nanos = if negative { -(total as i128) } else { total as i128 };
    let nanos = i64::try_from(nanos).map_err(|_| invalid())?;
    Ok(TimeDelta::nanoseconds(nanos))
}
