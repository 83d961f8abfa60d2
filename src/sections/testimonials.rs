use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::carousel::{Rotation, RotationAction};
use crate::components::reveal::Reveal;
use crate::config;
use crate::data::site::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let rotation = use_reducer(|| Rotation::new(TESTIMONIALS.len()));

    // Re-armed on every move so each slide gets a full period.
    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |&epoch: &u32| {
                let interval = Interval::new(config::TESTIMONIAL_INTERVAL_MS, move || {
                    dispatcher.dispatch(RotationAction::Tick(epoch));
                });
                move || drop(interval)
            },
            rotation.epoch(),
        );
    }

    // Release the busy flag once the transition has played.
    {
        let dispatcher = rotation.dispatcher();
        use_effect_with_deps(
            move |animating: &bool| {
                let timeout = animating.then(|| {
                    Timeout::new(config::TRANSITION_MS, move || {
                        dispatcher.dispatch(RotationAction::Settle);
                    })
                });
                move || drop(timeout)
            },
            rotation.is_animating(),
        );
    }

    let on_action = |action: RotationAction| {
        let dispatcher = rotation.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let current = &TESTIMONIALS[rotation.active()];
    let fading = rotation.is_animating().then(|| "fading");

    html! {
        <section id="testimonials" class="section">
            <Reveal class="section-header">
                <span class="section-eyebrow">{"Client Testimonials"}</span>
                <h2>{"What Our "}<span class="text-gradient">{"Clients Say"}</span></h2>
                <p>{"Don't just take our word for it. Here's what industry leaders say about working with us."}</p>
            </Reveal>
            <Reveal class="testimonial-visual">
                <div class="testimonial-card card">
                    <div class="stars">{ ("★".repeat(current.rating as usize)) }</div>
                    <blockquote class={classes!("testimonial-quote", fading)}>
                        {format!("\"{}\"", current.quote)}
                    </blockquote>
                    <div class={classes!("testimonial-author", fading)}>
                        <div class="avatar">{current.initials}</div>
                        <div>
                            <div class="author-name">{current.name}</div>
                            <div class="muted">{current.role}</div>
                        </div>
                    </div>
                </div>
                <div class="testimonial-nav">
                    <button class="nav-arrow" onclick={on_action(RotationAction::Prev)} aria-label="Previous testimonial">{"‹"}</button>
                    <div class="dots">
                        { for (0..TESTIMONIALS.len()).map(|index| html! {
                            <button
                                class={classes!("dot", (index == rotation.active()).then(|| "active"))}
                                onclick={on_action(RotationAction::GoTo(index))}
                                aria-label={format!("Go to testimonial {}", index + 1)}
                            />
                        }) }
                    </div>
                    <button class="nav-arrow" onclick={on_action(RotationAction::Next)} aria-label="Next testimonial">{"›"}</button>
                </div>
            </Reveal>
            <style>
                {r#"
                .testimonial-visual { max-width: 860px; margin: 0 auto; }
                .testimonial-card { padding: 3rem; position: relative; }
                .stars { color: var(--primary); letter-spacing: 0.2rem; margin-bottom: 1.5rem; }
                .testimonial-quote {
                    margin: 0 0 2rem;
                    font-size: 1.35rem;
                    line-height: 1.6;
                    transition: all 0.5s ease;
                }
                .testimonial-author { display: flex; align-items: center; gap: 1rem; transition: all 0.5s ease 0.1s; }
                .fading { opacity: 0; transform: translateY(1rem); }
                .avatar {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(79, 140, 255, 0.2);
                    color: var(--primary);
                    font-weight: 700;
                }
                .author-name { font-weight: 600; font-size: 1.1rem; }
                .testimonial-nav { display: flex; align-items: center; justify-content: center; gap: 1rem; margin-top: 2rem; }
                .nav-arrow {
                    width: 2.8rem;
                    height: 2.8rem;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--card);
                    color: var(--primary);
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                .dots { display: flex; gap: 0.5rem; }
                .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 999px;
                    border: none;
                    background: var(--border);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .dot.active { width: 2rem; background: var(--primary); }
                "#}
            </style>
        </section>
    }
}
