use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::data::site::{NavTarget, NAV_LINKS};
use crate::events::{scroll_to_section, use_scrolled_past};
use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_scrolled_past(config::NAV_SCROLL_THRESHOLD);
    let menu_open = use_bool_toggle(false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = NAV_LINKS
        .iter()
        .map(|link| match link.target {
            NavTarget::Section(id) => {
                let menu_open = menu_open.clone();
                // Off the home page the plain href navigates there instead.
                let onclick = Callback::from(move |e: MouseEvent| {
                    menu_open.set(false);
                    if scroll_to_section(id) {
                        e.prevent_default();
                    }
                });
                html! {
                    <a href={format!("/#{}", id)} class="nav-link" {onclick}>{link.name}</a>
                }
            }
            NavTarget::Blog => html! {
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::BlogIndex} classes="nav-link">{link.name}</Link<Route>>
                </div>
            },
            NavTarget::Careers => html! {
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::CareersIndex} classes="nav-link">{link.name}</Link<Route>>
                </div>
            },
        })
        .collect::<Html>();

    let start_project = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            menu_open.set(false);
            if scroll_to_section("contact") {
                e.prevent_default();
            }
        })
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="brand-mark">{"IX"}</span>
                    {config::BRAND_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { links }
                    <a href="/#contact" class="btn-primary nav-cta" onclick={start_project}>
                        {"Start a Project"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.4rem 0;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(11, 13, 18, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid var(--border);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    font-weight: 700;
                    font-size: 1.25rem;
                    text-decoration: none;
                    color: var(--text);
                }
                .brand-mark {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.2rem;
                    height: 2.2rem;
                    border-radius: 10px;
                    background: var(--primary);
                    font-size: 0.85rem;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .nav-link {
                    color: var(--muted);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover { color: var(--text); }
                .nav-cta { padding: 0.55rem 1.2rem; font-size: 0.9rem; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--text);
                }
                @media (max-width: 900px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(11, 13, 18, 0.97);
                        border-bottom: 1px solid var(--border);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}
