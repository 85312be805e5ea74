/// Search results section

use crate::article::ArticleRecord;
use crate::ui::components::{Highlighted, KeywordTags};
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchResultsProps {
    /// The query as typed
    pub query: AttrValue,
    pub results: Vec<ArticleRecord>,
}

#[function_component(SearchResults)]
pub fn search_results(props: &SearchResultsProps) -> Html {
    if props.results.is_empty() {
        return html! {
            <>
                <h2>{format!("Search Results for \"{}\"", props.query)}</h2>
                <div class="no-results">
                    <Alert r#type={AlertType::Info} title={"No articles found matching your search."} inline={true}>
                        {"Try different keywords or browse by category."}
                    </Alert>
                </div>
            </>
        };
    }

    html! {
        <>
            <h2>{format!("Search Results for \"{}\" ({})", props.query, props.results.len())}</h2>
            <div class="articles-list">
                {for props.results.iter().map(|article| html! {
                    <ResultItem
                        key={article.source.to_string()}
                        article={article.clone()}
                        query={props.query.clone()}
                    />
                })}
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ResultItemProps {
    article: ArticleRecord,
    query: AttrValue,
}

#[function_component(ResultItem)]
fn result_item(props: &ResultItemProps) -> Html {
    let article = &props.article;

    html! {
        <article class="article-item">
            <div class="article-content">
                <h3 class="article-title">
                    <a href={article.link.clone()} target="_blank" rel="noopener">
                        <Highlighted text={article.title.clone()} query={props.query.clone()} />
                    </a>
                </h3>
                <p class="article-description">
                    <Highlighted text={article.description.clone()} query={props.query.clone()} />
                </p>
                <KeywordTags keywords={article.keywords.clone()} />
            </div>
        </article>
    }
}
