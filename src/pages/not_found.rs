use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <div class="not-found-content">
                <h1 class="text-gradient">{"404"}</h1>
                <p class="muted">{"Oops! This page doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes="btn-primary">{"Return to Home"}</Link<Route>>
            </div>
            <style>
                {r#"
                .not-found-page {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .not-found-content h1 { font-size: 5rem; margin: 0 0 0.5rem; }
                .not-found-content p { font-size: 1.2rem; margin: 0 0 2rem; }
                "#}
            </style>
        </div>
    }
}
