use std::str::FromStr;

use crate::error::{SortError, SortResult};

/// Split `text` on whitespace and commas and parse every token.
///
/// Brackets are ignored so a printed sequence like `[3, 1, 2]` can be fed
/// back in.
pub fn parse_tokens<T: FromStr>(text: &str) -> SortResult<Vec<T>> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == '[' || c == ']')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|_| SortError::Parse(format!("not a number: {token:?}")))
        })
        .collect()
}
