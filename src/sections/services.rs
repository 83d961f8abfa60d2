use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::site::SERVICES;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section">
            <Reveal class="section-header">
                <span class="section-eyebrow">{"What We Do"}</span>
                <h2>{"Our "}<span class="text-gradient">{"Services"}</span></h2>
                <p>{"End-to-end delivery from first sketch to production, with the same team the whole way."}</p>
            </Reveal>
            <div class="services-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <Reveal class="service-card card" delay_ms={(i as u32) * 80}>
                        <div class="service-top">
                            <h3>{service.title}</h3>
                            <span class="chip">{service.stat}</span>
                        </div>
                        <p class="muted">{service.description}</p>
                        <ul class="service-features">
                            { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                        </ul>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 1.5rem;
                }
                .service-card { padding: 2rem; }
                .service-card:hover { transform: translateY(-6px); }
                .service-top { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
                .service-top h3 { margin: 0; }
                .service-features {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.4rem;
                    padding-left: 1.1rem;
                    margin: 1rem 0 0;
                    font-size: 0.9rem;
                }
                "#}
            </style>
        </section>
    }
}
