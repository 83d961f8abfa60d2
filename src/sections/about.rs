use yew::prelude::*;

use crate::components::count_up::FigureCard;
use crate::components::reveal::Reveal;
use crate::config;
use crate::data::site::ABOUT_STATS;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section">
            <div class="about-grid">
                <Reveal class="about-content">
                    <span class="section-eyebrow">{"About Us"}</span>
                    <h2>{"Turning complex challenges into "}<span class="text-gradient">{"elegant software"}</span></h2>
                    <p class="muted">
                        {format!("At {}, we're passionate about turning complex challenges into elegant digital solutions. Our team of experts combines technical excellence with creative thinking to deliver software that makes a difference.", config::BRAND_NAME)}
                    </p>
                    <p class="muted">
                        {"We believe in building long-term partnerships with our clients, understanding their unique needs, and crafting solutions that drive real business results. From startups to enterprises, we've helped businesses across industries achieve their digital goals."}
                    </p>
                </Reveal>
                <Reveal class="about-visual card" delay_ms={150}>
                    <div class="about-code">
                        <span class="muted">{"// shipping since 2018"}</span>
                        <span>{"let partner = Studio::new(\"insightexus\");"}</span>
                        <span>{"partner.build(your_idea).await?;"}</span>
                    </div>
                </Reveal>
            </div>
            <div class="about-stats">
                { for ABOUT_STATS.iter().map(|figure| html! {
                    <FigureCard figure={*figure} class="card" />
                }) }
            </div>
            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-content h2 { font-size: 2.4rem; margin: 0 0 1.5rem; }
                .about-visual { padding: 2.5rem; }
                .about-code {
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                    font-family: monospace;
                    font-size: 0.95rem;
                }
                .about-stats {
                    margin-top: 3.5rem;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.25rem;
                }
                @media (max-width: 900px) {
                    .about-grid { grid-template-columns: 1fr; }
                    .about-stats { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
