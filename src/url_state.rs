/// The `category` query parameter: the only state the dashboard keeps in the URL
use url::Url;

pub const CATEGORY_PARAM: &str = "category";

/// Sentinel category for the "all stories" view
pub const ALL_CATEGORY: &str = "all";

/// Category requested by `href`, `None` when absent, empty or `all`
pub fn category_from_url(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;

    url.query_pairs()
        .find(|(key, _)| key == CATEGORY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty() && value != ALL_CATEGORY)
}

/// `href` with the category parameter set, or removed for `all`
///
/// Other query parameters and the fragment are kept in their original order.
pub fn url_with_category(href: &str, category: &str) -> Result<String, url::ParseError> {
    let mut url = Url::parse(href)?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != CATEGORY_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() && category == ALL_CATEGORY {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        if category != ALL_CATEGORY {
            pairs.append_pair(CATEGORY_PARAM, category);
        }
    }

    Ok(url.to_string())
}
