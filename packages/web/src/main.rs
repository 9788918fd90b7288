use dioxus::prelude::*;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

const APP_CSS: &str = include_str!("../assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ui::make_context);

    rsx! {
        style { {APP_CSS} }
        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}
