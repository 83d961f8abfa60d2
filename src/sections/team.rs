use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::site::TEAM;

#[function_component(Team)]
pub fn team() -> Html {
    html! {
        <section id="team" class="section">
            <Reveal class="section-header">
                <span class="section-eyebrow">{"Our Team"}</span>
                <h2>{"Meet the "}<span class="text-gradient">{"Experts"}</span></h2>
                <p>{"Engineers, designers and strategists who have shipped products used by millions."}</p>
            </Reveal>
            <div class="team-grid">
                { for TEAM.iter().enumerate().map(|(i, member)| html! {
                    <Reveal class="team-card card" delay_ms={(i as u32) * 60}>
                        <div class="avatar team-avatar">{member.initials}</div>
                        <h3>{member.name}</h3>
                        <span class="chip">{member.role}</span>
                        <p class="muted">{member.bio}</p>
                    </Reveal>
                }) }
            </div>
            <style>
                {r#"
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .team-card { padding: 2rem; text-align: center; }
                .team-card:hover { transform: translateY(-6px); }
                .team-avatar { width: 5rem; height: 5rem; margin: 0 auto 1rem; font-size: 1.4rem; }
                .team-card h3 { margin: 0 0 0.6rem; }
                .team-card p { font-size: 0.9rem; }
                @media (max-width: 900px) {
                    .team-grid { grid-template-columns: 1fr 1fr; }
                }
                @media (max-width: 600px) {
                    .team-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
