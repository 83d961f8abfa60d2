use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::site::FAQS;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

/// Single-open accordion: opening one question closes the other.
#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="section">
            <Reveal class="section-header">
                <span class="section-eyebrow">{"FAQ"}</span>
                <h2>{"Quick answers, "}<span class="text-gradient">{"zero fluff"}</span></h2>
                <p>{"Everything you need to know before we build together."}</p>
            </Reveal>
            <Reveal class="faq-card card">
                { for FAQS.iter().enumerate().map(|(i, entry)| {
                    let on_toggle = {
                        let open_index = open_index.clone();
                        Callback::from(move |_| {
                            let next = if *open_index == Some(i) { None } else { Some(i) };
                            open_index.set(next);
                        })
                    };
                    html! {
                        <FaqItem
                            question={entry.question}
                            answer={entry.answer}
                            is_open={*open_index == Some(i)}
                            {on_toggle}
                        />
                    }
                }) }
            </Reveal>
            <style>
                {r#"
                .faq-card { max-width: 860px; margin: 0 auto; padding: 1rem 2rem; }
                .faq-item { border-bottom: 1px solid var(--border); }
                .faq-item:last-child { border-bottom: none; }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }
                .toggle-icon { color: var(--primary); font-size: 1.4rem; }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    color: var(--muted);
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer { max-height: 20rem; }
                .faq-answer p { margin: 0 0 1.25rem; }
                "#}
            </style>
        </section>
    }
}
