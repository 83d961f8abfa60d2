use yew::prelude::*;

use crate::events::scroll_to_section;

fn scroll_link(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if scroll_to_section(id) {
            e.prevent_default();
        }
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero" id="home">
            <div class="hero-glow"></div>
            <div class="hero-content">
                <span class="hero-badge chip">{"Software studio for ambitious teams"}</span>
                <h1>
                    {"We Build "}<span class="text-gradient">{"Digital Products"}</span>
                    <br />
                    {"That Drives Growth"}
                </h1>
                <p class="hero-subtitle muted">
                    {"Transform your vision into powerful digital solutions. We specialize in creating innovative software that scales with your business."}
                </p>
                <div class="hero-buttons">
                    <a href="#contact" class="btn-primary" onclick={scroll_link("contact")}>{"Start Your Project →"}</a>
                    <a href="#projects" class="btn-outline" onclick={scroll_link("projects")}>{"View Our Work"}</a>
                </div>
            </div>
            <div class="floating-element one">{"</>"}</div>
            <div class="floating-element two">{"✦"}</div>
            <div class="floating-element three">{"{ }"}</div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 8rem 2rem 4rem;
                    overflow: hidden;
                }
                .hero-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 900px;
                    height: 900px;
                    transform: translate(-50%, -50%);
                    background: radial-gradient(circle, rgba(79, 140, 255, 0.18), transparent 60%);
                    pointer-events: none;
                }
                .hero-content { position: relative; max-width: 860px; animation: rise 0.9s ease-out both; }
                .hero h1 { font-size: 4rem; line-height: 1.1; margin: 1.5rem 0; }
                .hero-subtitle { font-size: 1.25rem; max-width: 640px; margin: 0 auto 2.5rem; }
                .hero-buttons { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                .floating-element {
                    position: absolute;
                    padding: 0.8rem 1rem;
                    border-radius: 14px;
                    background: var(--card);
                    border: 1px solid var(--border);
                    color: var(--primary);
                    font-family: monospace;
                    animation: float 3s ease-in-out infinite alternate;
                }
                .floating-element.one { top: 22%; left: 10%; }
                .floating-element.two { top: 30%; right: 12%; animation-delay: 0.5s; }
                .floating-element.three { bottom: 18%; left: 18%; animation-delay: 1s; }
                @keyframes float { from { transform: translateY(0); } to { transform: translateY(-20px); } }
                @keyframes rise { from { opacity: 0; transform: translateY(40px); } to { opacity: 1; transform: none; } }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.5rem; }
                    .floating-element { display: none; }
                }
                "#}
            </style>
        </header>
    }
}
