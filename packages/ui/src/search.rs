use dioxus::prelude::*;

/// Context wrapper for the live search query, provided by the blog view and
/// read wherever the post list is computed.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchQuery(pub Signal<String>);

/// The current search query signal.
pub fn use_search() -> Signal<String> {
    use_context::<SearchQuery>().0
}

/// Search box; every edit re-renders the post list against the new query.
#[component]
pub fn SearchBar() -> Element {
    let mut query = use_search();

    rsx! {
        input {
            class: "search",
            r#type: "search",
            placeholder: "Search posts…",
            value: query(),
            oninput: move |evt| query.set(evt.value()),
        }
    }
}
