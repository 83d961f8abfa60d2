use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::preloader::Preloader;
use crate::events::scroll_to_section;
use crate::sections::{
    about::About, blog_teaser::BlogTeaser, comparison::Comparison, contact::Contact, faq::Faq,
    hero::Hero, impact_metrics::ImpactMetrics, projects::Projects, services::Services, team::Team,
    testimonials::Testimonials,
};

/// Section id from a `#fragment`, if any.
pub fn section_from_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#').unwrap_or(hash);
    (!id.is_empty()).then_some(id)
}

/// The sections, and the entrance observers inside them, only mount once the
/// preloader is done so their one-shot animations play on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Loading,
    Ready,
}

impl Stage {
    pub fn shows_preloader(self) -> bool {
        self == Stage::Loading
    }

    pub fn mounts_sections(self) -> bool {
        self == Stage::Ready
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let stage = use_state(|| Stage::Loading);

    let on_complete = {
        let stage = stage.clone();
        Callback::from(move |_| stage.set(Stage::Ready))
    };

    // Arriving from a sub-page as `/#contact` lands on that section.
    use_effect_with_deps(
        move |stage: &Stage| {
            if stage.mounts_sections() {
                let hash = window().and_then(|w| w.location().hash().ok());
                if let Some(id) = hash.as_deref().and_then(section_from_hash) {
                    if !scroll_to_section(id) {
                        debug!("No section named {} on the home page", id);
                    }
                }
            }
            || ()
        },
        *stage,
    );

    html! {
        <>
            if stage.shows_preloader() {
                <Preloader {on_complete} />
            }
            if stage.mounts_sections() {
                <div class="home-page">
                    <Navbar />
                    <Hero />
                    <Services />
                    <About />
                    <Projects />
                    <ImpactMetrics />
                    <Testimonials />
                    <Team />
                    <Comparison />
                    <Faq />
                    <BlogTeaser />
                    <Contact />
                    <Footer />
                </div>
            }
            <style>
                {r#"
                .home-page { min-height: 100vh; overflow-x: hidden; }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_names_a_section() {
        assert_eq!(section_from_hash("#contact"), Some("contact"));
        assert_eq!(section_from_hash("faq"), Some("faq"));
    }

    #[test]
    fn sections_wait_for_the_preloader() {
        assert!(Stage::Loading.shows_preloader());
        assert!(!Stage::Loading.mounts_sections());
        assert!(Stage::Ready.mounts_sections());
        assert!(!Stage::Ready.shows_preloader());
    }

    #[test]
    fn empty_hash_names_nothing() {
        assert_eq!(section_from_hash(""), None);
        assert_eq!(section_from_hash("#"), None);
    }
}
