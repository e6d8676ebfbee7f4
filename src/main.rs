use yew::prelude::*;

use theme_switch::components::ThemeToggle;
use theme_switch::services::web::{bind_page, on_ready, page_has_toggle};

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Theme Switch"}</h1>
                <ThemeToggle />
            </header>

            <main class="app-main">
                <p>{"Your choice is remembered the next time you visit."}</p>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    on_ready(|document| {
        // Server-rendered pages ship their own toggle; only bind to it.
        if page_has_toggle(document) {
            bind_page(document);
        } else {
            yew::Renderer::<App>::new().render();
        }
    });
}
