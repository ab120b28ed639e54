use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// Legacy Mend keys and tokens: 64 alphanumeric characters
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-zA-Z]{64}$").expect("token pattern is valid"));

/// Length of a canonical hyphenated UUID (8-4-4-4-12)
const HYPHENATED_UUID_LEN: usize = 36;

/// Returns true when `value` has one of the two shapes the service issues
/// for keys and tokens: a 64-character alphanumeric token, or a canonical
/// hyphenated UUID.
pub fn is_well_formed(value: &str) -> bool {
    TOKEN_PATTERN.is_match(value) || is_hyphenated_uuid(value)
}

fn is_hyphenated_uuid(value: &str) -> bool {
    // `try_parse` also accepts the simple, braced and urn forms, which differ in length
    value.len() == HYPHENATED_UUID_LEN && Uuid::try_parse(value).is_ok()
}

/// Splits a comma separated token list, dropping blank entries
pub fn split_token_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
