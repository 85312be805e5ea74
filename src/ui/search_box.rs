/// Search box shown under the category navigation
///
/// The input is uncontrolled: the keyboard shortcuts clear and focus it
/// directly by id, and the clear button's visibility follows
/// `:placeholder-shown` in the stylesheet.

use patternfly_yew::prelude::*;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub input_id: AttrValue,
    pub placeholder: AttrValue,
    /// Every edit, with the raw input value
    pub on_input: Callback<String>,
    /// Enter pressed
    pub on_submit: Callback<String>,
    pub on_clear: Callback<()>,
}

#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let input_ref = use_node_ref();

    let on_input = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_input.emit(input.value());
            }
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    on_submit.emit(input.value());
                }
            }
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
                let _ = input.focus();
            }
            on_clear.emit(());
        })
    };

    html! {
        <div class="search-box">
            <input
                ref={input_ref}
                type="text"
                id={props.input_id.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete="off"
                oninput={on_input}
                onkeydown={on_keydown}
            />
            <span class="clear-btn">
                <Button onclick={on_clear} variant={ButtonVariant::Plain}>
                    {"✕"}
                </Button>
            </span>
        </div>
    }
}
