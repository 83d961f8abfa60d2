use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::data::site::{Support, COMPARISON};

fn support_mark(support: Support) -> Html {
    let (class, mark, label) = match support {
        Support::Yes => ("yes", "✓", "Included"),
        Support::Partial => ("partial", "~", "Partially"),
        Support::No => ("no", "✕", "Not included"),
    };
    html! {
        <span class={classes!("support-mark", class)} title={label}>{mark}</span>
    }
}

#[function_component(Comparison)]
pub fn comparison() -> Html {
    html! {
        <section id="comparison" class="section">
            <Reveal class="section-header">
                <span class="section-eyebrow">{"Why Us?"}</span>
                <h2>{"The "}<span class="text-gradient">{"Difference"}</span></h2>
                <p>{"See why leading companies choose us over traditional agencies."}</p>
            </Reveal>
            <Reveal class="comparison-table card">
                <div class="comparison-row comparison-head">
                    <span>{"Feature"}</span>
                    <span>{config::BRAND_NAME}</span>
                    <span>{"Others"}</span>
                </div>
                { for COMPARISON.iter().map(|row| html! {
                    <div class="comparison-row">
                        <span>{row.feature}</span>
                        { support_mark(row.us) }
                        { support_mark(row.others) }
                    </div>
                }) }
            </Reveal>
            <style>
                {r#"
                .comparison-table { max-width: 820px; margin: 0 auto; overflow: hidden; }
                .comparison-row {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    align-items: center;
                    padding: 1rem 1.5rem;
                    border-bottom: 1px solid var(--border);
                }
                .comparison-row:last-child { border-bottom: none; }
                .comparison-head { font-weight: 600; background: rgba(79, 140, 255, 0.06); }
                .support-mark {
                    justify-self: center;
                    width: 1.8rem;
                    height: 1.8rem;
                    border-radius: 50%;
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .support-mark.yes { background: rgba(16, 185, 129, 0.15); color: #10b981; }
                .support-mark.partial { background: rgba(245, 158, 11, 0.15); color: #f59e0b; }
                .support-mark.no { background: rgba(239, 68, 68, 0.15); color: #ef4444; }
                "#}
            </style>
        </section>
    }
}
