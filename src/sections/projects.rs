use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::site::{project_categories, projects_in};

#[function_component(Projects)]
pub fn projects() -> Html {
    // None shows every project.
    let active_category = use_state(|| None::<&'static str>);
    let visible = projects_in(*active_category);

    let tab = |label: &'static str, category: Option<&'static str>| {
        let active_category = active_category.clone();
        let is_active = *active_category == category;
        let onclick = Callback::from(move |_: MouseEvent| active_category.set(category));
        html! {
            <button class={classes!("project-tab", is_active.then(|| "active"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <section id="projects" class="section">
            <Reveal class="section-header">
                <span class="section-eyebrow">{"Our Work"}</span>
                <h2>{"Featured "}<span class="text-gradient">{"Projects"}</span></h2>
                <p>{"Explore our portfolio of successful projects that have transformed businesses."}</p>
            </Reveal>
            <div class="project-tabs">
                { tab("All", None) }
                { for project_categories().into_iter().map(|category| tab(category, Some(category))) }
            </div>
            <div class="projects-grid">
                { for visible.into_iter().map(|project| html! {
                    <div key={project.title} class="project-card card"
                        style={format!("--accent: {};", project.accent)}>
                        <span class="project-category">{project.category}</span>
                        <h3>{project.title}</h3>
                        <p class="muted">{project.description}</p>
                        <span class="project-link">{"View Case Study ↗"}</span>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .project-tabs {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.6rem;
                    margin-bottom: 2rem;
                }
                .project-tab {
                    padding: 0.5rem 1.1rem;
                    border-radius: 999px;
                    border: 1px solid var(--border);
                    background: transparent;
                    color: var(--muted);
                    cursor: pointer;
                }
                .project-tab.active { background: var(--primary); border-color: var(--primary); color: #fff; }
                .projects-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                .project-card {
                    aspect-ratio: 4 / 3;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 2rem;
                    background: linear-gradient(160deg, color-mix(in srgb, var(--accent) 25%, transparent), var(--card) 70%);
                    animation: rise 0.5s ease-out both;
                }
                .project-category { color: var(--accent); font-size: 0.85rem; font-weight: 500; }
                .project-card h3 { font-size: 1.6rem; margin: 0.5rem 0; }
                .project-link { color: var(--primary); font-weight: 500; margin-top: 0.75rem; }
                @media (max-width: 768px) {
                    .projects-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
