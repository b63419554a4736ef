//! Option-string mini-language
//!
//! Suites, observers and the CLI all take free-form option strings of the
//! shape `"key1: value1 key2: value2"`. A value runs until the next
//! whitespace, so id lists are written without spaces (`"1,2-5,8"`).
//! Malformed pieces are reported through [`crate::diag::warning`] and
//! skipped; the caller decides whether an absent option is an error.

use regex::Regex;

use crate::diag;

/// Read the value of `key` from an option string
///
/// Returns the first whitespace-delimited token following `key:`. The key
/// must stand on its own (`"ids"` does not match inside `"function_ids"`).
///
/// # Example
///
/// ```
/// use optbench_env::options::read_string;
///
/// let opts = "result_folder: exdata function_ids: 1,3-5";
/// assert_eq!(read_string(opts, "result_folder").as_deref(), Some("exdata"));
/// assert_eq!(read_string(opts, "function_ids").as_deref(), Some("1,3-5"));
/// assert_eq!(read_string(opts, "instance_ids"), None);
/// ```
pub fn read_string(options: &str, key: &str) -> Option<String> {
    let pattern = format!(r"\b{}\s*:\s*(\S+)", regex::escape(key));
    let re = Regex::new(&pattern).ok()?;
    re.captures(options)
        .map(|caps| caps[1].to_string())
}

/// Read the value of `key` as an integer
///
/// Returns `None` when the key is absent or its value does not parse.
pub fn read_int(options: &str, key: &str) -> Option<i64> {
    read_string(options, key)?.parse::<i64>().ok()
}

/// Byte position at which `key:` occurs in the option string
///
/// Used to break ties between mutually exclusive options: whichever key
/// occurs earlier in the string wins.
pub fn key_position(options: &str, key: &str) -> Option<usize> {
    let pattern = format!(r"\b{}\s*:", regex::escape(key));
    let re = Regex::new(&pattern).ok()?;
    re.find(options).map(|m| m.start())
}

/// Parse a comma-separated list of numbers and ranges such as `"1,3-5,8"`
///
/// Each item is either a single number or a range `a-b` (inclusive). An
/// open range `a-` fills up to `max`, and `-b` starts from `min`; open
/// ranges are rejected when `max == 0` (no natural upper bound). Items
/// that do not parse, are empty, run backwards or fall outside
/// `[min, max]` are skipped with a warning. Returns `None` when nothing
/// valid remains, with `name` identifying the option in warnings.
///
/// # Example
///
/// ```
/// use optbench_env::options::parse_ranges;
///
/// assert_eq!(parse_ranges("1,3-5", "function_ids", 1, 8), Some(vec![1, 3, 4, 5]));
/// assert_eq!(parse_ranges("6-", "instances", 1, 8), Some(vec![6, 7, 8]));
/// assert_eq!(parse_ranges("0,9", "function_ids", 1, 8), None);
/// ```
pub fn parse_ranges(spec: &str, name: &str, min: usize, max: usize) -> Option<Vec<usize>> {
    if spec.is_empty() {
        diag::warning(&format!("ranges of {name} not given"));
        return None;
    }

    let mut values: Vec<usize> = Vec::new();
    for item in spec.split(',') {
        let item = item.trim();
        if item.is_empty() {
            diag::warning(&format!("empty item in {name} ignored"));
            continue;
        }
        let (lo, hi) = match item.split_once('-') {
            None => match item.parse::<usize>() {
                Ok(n) => (n, n),
                Err(_) => {
                    diag::warning(&format!("'{item}' (in {name}) is not a number, ignored"));
                    continue;
                }
            },
            Some((a, b)) => {
                if (a.is_empty() || b.is_empty()) && max == 0 {
                    diag::warning(&format!(
                        "open range '{item}' (in {name}) needs explicit bounds, ignored"
                    ));
                    continue;
                }
                let lo = if a.is_empty() {
                    Ok(min)
                } else {
                    a.parse::<usize>()
                };
                let hi = if b.is_empty() {
                    Ok(max)
                } else {
                    b.parse::<usize>()
                };
                match (lo, hi) {
                    (Ok(lo), Ok(hi)) => (lo, hi),
                    _ => {
                        diag::warning(&format!("'{item}' (in {name}) is not a range, ignored"));
                        continue;
                    }
                }
            }
        };
        if lo > hi {
            diag::warning(&format!("'{item}' (in {name}) runs backwards, ignored"));
            continue;
        }
        if lo < min || (max > 0 && hi > max) {
            diag::warning(&format!(
                "'{item}' (in {name}) is out of [{min},{max}], ignored"
            ));
            continue;
        }
        values.extend(lo..=hi);
    }

    if values.is_empty() {
        diag::warning(&format!("no valid numbers in {name}"));
        return None;
    }
    Some(values)
}
