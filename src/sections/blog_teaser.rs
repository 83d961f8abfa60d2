use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::blog_cards::{BlogPostRow, FeaturedPostCard, BLOG_CARD_STYLES};
use crate::components::reveal::Reveal;
use crate::data::blog::featured_split;
use crate::Route;

/// Latest writing: the featured post beside the rest of the list.
#[function_component(BlogTeaser)]
pub fn blog_teaser() -> Html {
    let Some((featured, rest)) = featured_split() else {
        return html! {};
    };

    html! {
        <section id="blog" class="section">
            <Reveal class="section-header">
                <span class="section-eyebrow">{"Insights & Blog"}</span>
                <h2>{"Latest "}<span class="text-gradient">{"Insights"}</span></h2>
                <p>{"Stay ahead with expert insights on technology, design, and digital transformation."}</p>
            </Reveal>
            <div class="blog-teaser-grid">
                <Reveal>
                    <FeaturedPostCard post={featured} />
                </Reveal>
                <Reveal delay_ms={120}>
                    { for rest.into_iter().map(|post| html! { <BlogPostRow key={post.id} {post} /> }) }
                </Reveal>
            </div>
            <div class="blog-teaser-footer">
                <Link<Route> to={Route::BlogIndex} classes="btn-outline">{"View All Articles →"}</Link<Route>>
            </div>
            <style>
                {BLOG_CARD_STYLES}
                {r#"
                .blog-teaser-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .blog-teaser-footer { text-align: center; margin-top: 3rem; }
                @media (max-width: 900px) {
                    .blog-teaser-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
