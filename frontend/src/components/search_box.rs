use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub placeholder: Option<String>,
}

/// Free-text search input. Submitting (Enter) emits the current query to
/// the parent; the parent decides what filtering it drives.
#[function_component(SearchBox)]
pub fn search_box(props: &SearchBoxProps) -> Html {
    let current_input = use_state(String::new);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit((*current_input).clone());
        })
    };

    let placeholder = props
        .placeholder
        .clone()
        .unwrap_or_else(|| "Search videos...".to_string());

    html! {
        <form onsubmit={on_submit} class="w-full max-w-md">
            <input
                type="text"
                class="w-full p-3 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder={placeholder}
                value={(*current_input).clone()}
                oninput={on_input}
            />
        </form>
    }
}
