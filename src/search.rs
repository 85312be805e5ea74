/// Search over the article index: AND of case-folded substring tokens
use crate::article::{ArticleIndex, ArticleRecord};

/// A non-empty search query split into case-folded tokens
///
/// There is no way to build a query without tokens, so an empty or
/// whitespace-only input can never be searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    tokens: Vec<String>,
}

impl SearchQuery {
    /// Parse user input, returning `None` when it holds no tokens
    pub fn parse(input: &str) -> Option<SearchQuery> {
        let raw = input.trim();
        let tokens = tokenize(raw);

        if tokens.is_empty() {
            None
        } else {
            Some(SearchQuery {
                raw: raw.to_string(),
                tokens,
            })
        }
    }

    /// The trimmed input as typed
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when every token occurs in `search_text`, which must already be case-folded
    pub fn matches(&self, search_text: &str) -> bool {
        self.tokens.iter().all(|token| search_text.contains(token.as_str()))
    }
}

/// Case-folded whitespace tokens; runs of whitespace never yield empty tokens
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Records matching every token of `query`, in index order
pub fn search<'a>(index: &'a ArticleIndex, query: &SearchQuery) -> Vec<&'a ArticleRecord> {
    index
        .searchable()
        .filter(|(_, search_text)| query.matches(search_text))
        .map(|(record, _)| record)
        .collect()
}
