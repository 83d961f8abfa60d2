use yew::prelude::*;

use crate::components::count_up::FigureCard;
use crate::components::reveal::Reveal;
use crate::data::site::IMPACT_METRICS;

#[function_component(ImpactMetrics)]
pub fn impact_metrics() -> Html {
    html! {
        <section id="metrics" class="section">
            <Reveal class="metrics-header">
                <span class="section-eyebrow">{"Proof over promises"}</span>
                <h2>{"Outcomes our clients can measure"}</h2>
            </Reveal>
            <div class="metrics-grid">
                { for IMPACT_METRICS.iter().map(|figure| html! {
                    <FigureCard figure={*figure} class="card metric-card" />
                }) }
            </div>
            <style>
                {r#"
                .metrics-header { max-width: 640px; margin-bottom: 2.5rem; }
                .metrics-header h2 { font-size: 2.2rem; margin: 0; }
                .metrics-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.25rem;
                }
                .metric-card { text-align: left; }
                @media (max-width: 900px) {
                    .metrics-grid { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
