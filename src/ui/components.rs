/// Reusable UI components

use crate::highlight::segments;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HighlightedProps {
    pub text: AttrValue,
    pub query: AttrValue,
}

/// Text with every query token wrapped in `<mark>`
#[function_component(Highlighted)]
pub fn highlighted(props: &HighlightedProps) -> Html {
    html! {
        <>
            {for segments(&props.text, &props.query).into_iter().map(|segment| {
                if segment.marked {
                    html! { <mark>{segment.text.to_string()}</mark> }
                } else {
                    html! { {segment.text.to_string()} }
                }
            })}
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct KeywordTagsProps {
    pub keywords: Vec<String>,
}

#[function_component(KeywordTags)]
pub fn keyword_tags(props: &KeywordTagsProps) -> Html {
    if props.keywords.is_empty() {
        return html! {};
    }

    html! {
        <div class="article-keywords">
            {for props.keywords.iter().map(|keyword| html! {
                <span class="keyword-tag">{keyword}</span>
            })}
        </div>
    }
}
