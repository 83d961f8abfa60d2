use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::back_header::BackHeader;
use crate::components::blog_cards::{BlogPostRow, FeaturedPostCard, RecommendedCard, BLOG_CARD_STYLES};
use crate::config;
use crate::data::blog::{blog_posts, featured_split, get_recommended_blogs};
use crate::data::Lookup;
use crate::events::use_scroll_to_top;
use crate::Route;

#[function_component(BlogIndex)]
pub fn blog_index() -> Html {
    use_scroll_to_top(());

    let split = featured_split();
    let featured_route = split.as_ref().map(|(featured, _)| Route::BlogPost {
        slug: featured.slug.clone(),
    });

    let listing = match split {
        Some((featured, rest)) => html! {
            <div class="blog-listing">
                <div>
                    <FeaturedPostCard post={featured} />
                </div>
                <div>
                    <h2 class="listing-heading">{"Latest posts"}</h2>
                    { for rest.into_iter().map(|post| html! { <BlogPostRow key={post.id} {post} /> }) }
                </div>
            </div>
        },
        None => html! {
            <p class="muted">{"No articles yet. Check back soon."}</p>
        },
    };

    html! {
        <div class="page blog-index-page">
            <BackHeader to={Route::Home} label="Back to Home">
                if let Some(to) = featured_route {
                    <Link<Route> {to} classes="btn-primary">{"Read featured →"}</Link<Route>>
                }
            </BackHeader>
            <section class="page-content">
                <div class="blog-index-hero">
                    <span class="section-eyebrow">{"Blog"}</span>
                    <h1>{"Insights that help you "}<span class="text-gradient">{"ship faster"}</span></h1>
                    <p class="muted">
                        {"Practical writing on AI, cloud, product design and modern engineering, from the team building it."}
                    </p>
                </div>
                { listing }
            </section>
            <style>
                {BLOG_CARD_STYLES}
                {r#"
                .blog-index-hero { max-width: 720px; margin-bottom: 3rem; }
                .blog-index-hero h1 { font-size: 3rem; margin: 0 0 1rem; }
                .blog-listing {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 2rem;
                }
                .listing-heading { margin: 0 0 1rem; font-size: 1.2rem; }
                @media (max-width: 900px) {
                    .blog-listing { grid-template-columns: 1fr; }
                    .blog-index-hero h1 { font-size: 2.2rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BlogPostPageProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &BlogPostPageProps) -> Html {
    use_scroll_to_top(props.slug.clone());

    let post = match blog_posts().resolve(&props.slug) {
        Lookup::Found(post) => post,
        Lookup::NotFound => {
            debug!("No blog post with slug {:?}", props.slug);
            return html! {
                <div class="page">
                    <BackHeader to={Route::BlogIndex} label="Back to Blog" />
                    <section class="page-content missing-entry">
                        <h1>{"Post not found"}</h1>
                        <p class="muted">{"This article may have been moved or renamed."}</p>
                        <Link<Route> to={Route::BlogIndex} classes="btn-primary">{"Go to Blog"}</Link<Route>>
                    </section>
                    <style>{MISSING_ENTRY_STYLES}</style>
                </div>
            };
        }
    };

    let recommended = get_recommended_blogs(&post.slug, config::RELATED_LIMIT);

    html! {
        <div class="page blog-post-page">
            <BackHeader to={Route::BlogIndex} label="Back to Blog">
                <a href="/#contact" class="btn-outline">{"Contact"}</a>
            </BackHeader>
            <article class="post-article">
                <span class="chip">{&post.category}</span>
                <h1>{&post.title}</h1>
                <div class="post-meta muted">
                    {format!("{} • {} • {}", post.author, post.date, post.read_time)}
                </div>
                <div class="post-cover card">
                    <img src={post.image.clone()} alt={post.title.clone()} loading="lazy" />
                </div>
                <p class="post-intro muted">{&post.content.intro}</p>
                { for post.content.sections.iter().map(|section| html! {
                    <section class="post-section" key={section.heading.clone()}>
                        <h2>{&section.heading}</h2>
                        <p class="muted">{&section.body}</p>
                    </section>
                }) }
                <div class="post-cta card">
                    <h3>{"Want help implementing this?"}</h3>
                    <p class="muted">
                        {"We can turn these ideas into production-ready systems: strategy, design and engineering."}
                    </p>
                    <a href="/#contact" class="btn-primary">{"Talk to us"}</a>
                </div>
            </article>
            if !recommended.is_empty() {
                <section class="page-content recommended">
                    <div class="recommended-header">
                        <div>
                            <h2>{"Recommended reads"}</h2>
                            <p class="muted">{"More articles you might like."}</p>
                        </div>
                        <Link<Route> to={Route::BlogIndex} classes="btn-outline">{"All posts →"}</Link<Route>>
                    </div>
                    <div class="recommended-grid">
                        { for recommended.into_iter().map(|post| html! {
                            <RecommendedCard key={post.id} {post} />
                        }) }
                    </div>
                </section>
            }
            <style>
                {BLOG_CARD_STYLES}
                {r#"
                .post-article { max-width: 760px; margin: 0 auto; padding: 3rem 2rem; }
                .post-article h1 { font-size: 2.8rem; line-height: 1.15; margin: 1rem 0; }
                .post-meta { font-size: 0.9rem; }
                .post-cover { margin-top: 2.5rem; overflow: hidden; }
                .post-cover img { width: 100%; height: 380px; object-fit: cover; display: block; }
                .post-intro { margin-top: 2.5rem; font-size: 1.15rem; line-height: 1.7; }
                .post-section { margin-top: 2rem; }
                .post-section h2 { font-size: 1.5rem; margin: 0 0 0.75rem; }
                .post-section p { line-height: 1.7; margin: 0; }
                .post-cta { margin-top: 3rem; padding: 1.75rem; }
                .post-cta h3 { margin: 0 0 0.5rem; }
                .recommended-header {
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    gap: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .recommended-header h2 { margin: 0 0 0.3rem; }
                .recommended-header p { margin: 0; }
                .recommended-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                @media (max-width: 900px) {
                    .recommended-grid { grid-template-columns: 1fr; }
                    .post-article h1 { font-size: 2rem; }
                    .post-cover img { height: 240px; }
                }
                "#}
            </style>
        </div>
    }
}

/// Shared by every detail page's fallback view.
pub const MISSING_ENTRY_STYLES: &str = r#"
.missing-entry { max-width: 720px; }
.missing-entry h1 { font-size: 2.4rem; margin: 1rem 0 0.75rem; }
.missing-entry p { margin: 0 0 2rem; }
"#;
