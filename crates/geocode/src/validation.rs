//! Search-input rules applied before any lookup runs.

pub const MIN_QUERY_CHARS: usize = 2;
pub const MAX_QUERY_CHARS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchQueryError {
    TooShort,
    TooLong,
    InvalidCharacters,
}

impl std::fmt::Display for SearchQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchQueryError::TooShort => {
                write!(f, "Search query must be at least 2 characters")
            }
            SearchQueryError::TooLong => {
                write!(f, "Search query must be less than 100 characters")
            }
            SearchQueryError::InvalidCharacters => {
                write!(f, "Invalid characters in search query")
            }
        }
    }
}

impl std::error::Error for SearchQueryError {}

// ASCII alphanumerics, German umlauts and eszett, whitespace, hyphen.
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, 'ä' | 'ö' | 'ü' | 'Ä' | 'Ö' | 'Ü' | 'ß')
        || c.is_whitespace()
        || c == '-'
}

/// Reject a query before it reaches the lookup. Violations surface as inline
/// validation messages, not faults.
pub fn validate_search_query(query: &str) -> Result<(), SearchQueryError> {
    let chars = query.chars().count();
    if chars < MIN_QUERY_CHARS {
        return Err(SearchQueryError::TooShort);
    }
    if chars > MAX_QUERY_CHARS {
        return Err(SearchQueryError::TooLong);
    }
    if !query.chars().all(is_allowed) {
        return Err(SearchQueryError::InvalidCharacters);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MAX_QUERY_CHARS, SearchQueryError, validate_search_query};

    #[test]
    fn length_boundaries() {
        assert_eq!(validate_search_query(""), Err(SearchQueryError::TooShort));
        assert_eq!(validate_search_query("a"), Err(SearchQueryError::TooShort));
        assert_eq!(validate_search_query("ab"), Ok(()));

        let at_max = "a".repeat(MAX_QUERY_CHARS);
        assert_eq!(validate_search_query(&at_max), Ok(()));
        let over = "a".repeat(MAX_QUERY_CHARS + 1);
        assert_eq!(validate_search_query(&over), Err(SearchQueryError::TooLong));
    }

    #[test]
    fn umlauts_whitespace_and_hyphens_are_allowed() {
        assert_eq!(validate_search_query("München"), Ok(()));
        assert_eq!(validate_search_query("Frankfurt am Main"), Ok(()));
        assert_eq!(validate_search_query("Castrop-Rauxel"), Ok(()));
        assert_eq!(validate_search_query("Gießen"), Ok(()));
    }

    #[test]
    fn punctuation_is_rejected() {
        assert_eq!(
            validate_search_query("berlin!"),
            Err(SearchQueryError::InvalidCharacters)
        );
        assert_eq!(
            validate_search_query("a;drop table"),
            Err(SearchQueryError::InvalidCharacters)
        );
        assert_eq!(
            validate_search_query("東京"),
            Err(SearchQueryError::InvalidCharacters)
        );
    }

    #[test]
    fn length_is_checked_before_character_class() {
        assert_eq!(validate_search_query("!"), Err(SearchQueryError::TooShort));
    }

    #[test]
    fn messages_match_the_inline_ui_texts() {
        assert_eq!(
            SearchQueryError::TooShort.to_string(),
            "Search query must be at least 2 characters"
        );
        assert_eq!(
            SearchQueryError::InvalidCharacters.to_string(),
            "Invalid characters in search query"
        );
    }
}
