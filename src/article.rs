/// Article records and the in-memory index searched by the dashboard
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One article card as rendered by the page template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub link: String,
    /// Document-order position of the card this record was read from
    pub source: usize,
}

impl ArticleRecord {
    pub fn new(
        title: String,
        description: String,
        keywords: Vec<String>,
        link: String,
        source: usize,
    ) -> ArticleRecord {
        ArticleRecord {
            title,
            description,
            keywords,
            link,
            source,
        }
    }

    /// Title, description and keywords joined by spaces, case-folded
    pub fn search_text(&self) -> String {
        let mut text = String::with_capacity(
            self.title.len() + self.description.len() + self.keywords.len() * 8,
        );
        text.push_str(&self.title);
        text.push(' ');
        text.push_str(&self.description);
        text.push(' ');
        text.push_str(&self.keywords.join(" "));
        text.to_lowercase()
    }
}

#[derive(Debug, Clone)]
struct IndexEntry {
    record: ArticleRecord,
    search_text: String,
}

/// Articles extracted once at startup, in document order
#[derive(Debug, Clone, Default)]
pub struct ArticleIndex {
    entries: Vec<IndexEntry>,
}

impl ArticleIndex {
    /// Build the index, keeping the first card of each link
    pub fn new(records: Vec<ArticleRecord>) -> ArticleIndex {
        let mut seen_links = HashSet::new();
        let entries = records
            .into_iter()
            .filter(|record| record.link.is_empty() || seen_links.insert(record.link.clone()))
            .map(|record| IndexEntry {
                search_text: record.search_text(),
                record,
            })
            .collect();

        ArticleIndex { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &ArticleRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    /// Records paired with their case-folded search text
    pub fn searchable(&self) -> impl Iterator<Item = (&ArticleRecord, &str)> {
        self.entries
            .iter()
            .map(|entry| (&entry.record, entry.search_text.as_str()))
    }
}
