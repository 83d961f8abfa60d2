use yew::prelude::*;
use yew_router::prelude::*;

use crate::data::blog::BlogPost;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PostCardProps {
    pub post: &'static BlogPost,
}

fn post_route(post: &BlogPost) -> Route {
    Route::BlogPost {
        slug: post.slug.clone(),
    }
}

#[function_component(FeaturedPostCard)]
pub fn featured_post_card(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <Link<Route> to={post_route(post)} classes="featured-post card">
            <div class="featured-image">
                <img src={post.image.clone()} alt={post.title.clone()} loading="lazy" />
                <div class="featured-overlay">
                    <span class="chip">{&post.category}</span>
                    <h2>{&post.title}</h2>
                    <p class="muted">{&post.excerpt}</p>
                </div>
            </div>
            <div class="featured-meta muted">
                <span>{&post.author}</span>
                <span>{format!("{} • {}", post.date, post.read_time)}</span>
            </div>
        </Link<Route>>
    }
}

#[function_component(BlogPostRow)]
pub fn blog_post_row(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <Link<Route> to={post_route(post)} classes="post-row card">
            <div class="post-row-thumb">
                <img src={post.image.clone()} alt={post.title.clone()} loading="lazy" />
            </div>
            <div class="post-row-body">
                <span class="chip">{&post.category}</span>
                <h3>{&post.title}</h3>
                <p class="muted">{&post.excerpt}</p>
                <div class="post-row-meta muted">{format!("{} • {}", post.date, post.read_time)}</div>
            </div>
        </Link<Route>>
    }
}

#[function_component(RecommendedCard)]
pub fn recommended_card(props: &PostCardProps) -> Html {
    let post = props.post;
    html! {
        <Link<Route> to={post_route(post)} classes="recommended-card card">
            <img src={post.image.clone()} alt={post.title.clone()} loading="lazy" />
            <div class="recommended-body">
                <span class="chip">{&post.category}</span>
                <h3>{&post.title}</h3>
                <p class="muted">{&post.excerpt}</p>
            </div>
        </Link<Route>>
    }
}

/// Shared look for the cards above.
pub const BLOG_CARD_STYLES: &str = r#"
.featured-post, .post-row, .recommended-card {
    display: block;
    text-decoration: none;
    color: inherit;
    overflow: hidden;
}
.featured-image { position: relative; }
.featured-image img {
    width: 100%;
    height: 340px;
    object-fit: cover;
    display: block;
    transition: transform 0.7s ease;
}
.featured-post:hover .featured-image img { transform: scale(1.05); }
.featured-overlay {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    padding: 1.5rem;
    background: linear-gradient(to top, var(--bg), rgba(11, 13, 18, 0.1));
}
.featured-overlay h2 { margin: 0.75rem 0 0.5rem; font-size: 1.6rem; }
.featured-meta {
    display: flex;
    justify-content: space-between;
    padding: 1.2rem 1.5rem;
    font-size: 0.9rem;
}
.post-row {
    display: flex;
    gap: 1rem;
    padding: 1rem;
    margin-bottom: 1rem;
}
.post-row-thumb {
    flex-shrink: 0;
    width: 7rem;
    height: 6rem;
    border-radius: 10px;
    overflow: hidden;
}
.post-row-thumb img { width: 100%; height: 100%; object-fit: cover; }
.post-row-body h3 { margin: 0.5rem 0 0.3rem; font-size: 1rem; }
.post-row-body p { margin: 0; font-size: 0.85rem; }
.post-row-meta { margin-top: 0.4rem; font-size: 0.75rem; }
.recommended-card img { width: 100%; height: 11rem; object-fit: cover; display: block; }
.recommended-body { padding: 1.25rem; }
.recommended-body h3 { margin: 0.75rem 0 0.4rem; font-size: 1.05rem; }
.recommended-body p { margin: 0; font-size: 0.9rem; }
"#;
