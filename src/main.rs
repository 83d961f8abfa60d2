use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod data;
mod error;
mod events;
mod mailto;
mod components {
    pub mod back_header;
    pub mod blog_cards;
    pub mod count_up;
    pub mod footer;
    pub mod form;
    pub mod navbar;
    pub mod preloader;
    pub mod reveal;
}
mod sections {
    pub mod about;
    pub mod blog_teaser;
    pub mod comparison;
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod impact_metrics;
    pub mod projects;
    pub mod services;
    pub mod team;
    pub mod testimonials;
}
mod pages {
    pub mod blog;
    pub mod careers;
    pub mod home;
    pub mod not_found;
}

use pages::{
    blog::{BlogIndex, BlogPostPage},
    careers::{CareersApply, CareersIndex, CareersPosition},
    home::Home,
    not_found::NotFound,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    BlogIndex,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/careers")]
    CareersIndex,
    #[at("/careers/:slug")]
    CareersPosition { slug: String },
    #[at("/careers/:slug/apply")]
    CareersApply { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::BlogIndex => {
            info!("Rendering Blog page");
            html! { <BlogIndex /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering Blog post page for {}", slug);
            html! { <BlogPostPage {slug} /> }
        }
        Route::CareersIndex => {
            info!("Rendering Careers page");
            html! { <CareersIndex /> }
        }
        Route::CareersPosition { slug } => {
            info!("Rendering Position page for {}", slug);
            html! { <CareersPosition {slug} /> }
        }
        Route::CareersApply { slug } => {
            info!("Rendering Apply page for {}", slug);
            html! { <CareersApply {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_routes_build_their_paths() {
        assert_eq!(
            Route::BlogPost {
                slug: "future-of-ai-enterprise-software".to_string()
            }
            .to_path(),
            "/blog/future-of-ai-enterprise-software"
        );
        assert_eq!(
            Route::CareersApply {
                slug: "ui-ux-designer".to_string()
            }
            .to_path(),
            "/careers/ui-ux-designer/apply"
        );
    }

    #[test]
    fn apply_path_is_recognized_before_the_position_path() {
        assert_eq!(
            Route::recognize("/careers/devops-engineer/apply"),
            Some(Route::CareersApply {
                slug: "devops-engineer".to_string()
            })
        );
        assert_eq!(
            Route::recognize("/careers/devops-engineer"),
            Some(Route::CareersPosition {
                slug: "devops-engineer".to_string()
            })
        );
    }

    #[test]
    fn index_paths_are_recognized() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/blog"), Some(Route::BlogIndex));
        assert_eq!(Route::recognize("/careers"), Some(Route::CareersIndex));
    }
}
