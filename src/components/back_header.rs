use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BackHeaderProps {
    pub to: Route,
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Sticky bar on the sub-pages with a way back and optional actions.
#[function_component(BackHeader)]
pub fn back_header(props: &BackHeaderProps) -> Html {
    html! {
        <header class="back-header">
            <div class="back-header-content">
                <Link<Route> to={props.to.clone()} classes="back-link">
                    {"← "}{props.label.clone()}
                </Link<Route>>
                <div class="back-header-actions">
                    { for props.children.iter() }
                </div>
            </div>
            <style>
                {r#"
                .back-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(11, 13, 18, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid var(--border);
                }
                .back-header-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .back-link { color: var(--muted); text-decoration: none; }
                .back-link:hover { color: var(--text); }
                "#}
            </style>
        </header>
    }
}
