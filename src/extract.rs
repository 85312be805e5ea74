/// Article extraction from rendered cards
///
/// The page is read through [`ArticleSource`] so the same rules apply to DOM
/// elements in the browser and to plain structs in tests.
use crate::article::ArticleRecord;

/// One rendered article card
pub trait ArticleSource {
    /// Text of the title link, `None` when the card has no title link
    fn title(&self) -> Option<String>;
    fn link(&self) -> Option<String>;
    /// `None` when the card has no description block
    fn description(&self) -> Option<String>;
    fn keywords(&self) -> Vec<String>;
}

/// Read every card in document order, skipping cards without a title or description
pub fn extract_articles<S, I>(cards: I) -> Vec<ArticleRecord>
where
    S: ArticleSource,
    I: IntoIterator<Item = S>,
{
    cards
        .into_iter()
        .enumerate()
        .filter_map(|(position, card)| {
            let title = card.title()?;
            let description = card.description()?;
            let keywords = card
                .keywords()
                .into_iter()
                .map(|keyword| keyword.trim().to_string())
                .filter(|keyword| !keyword.is_empty())
                .collect();

            Some(ArticleRecord::new(
                title.trim().to_string(),
                description.trim().to_string(),
                keywords,
                card.link().unwrap_or_default(),
                position,
            ))
        })
        .collect()
}
