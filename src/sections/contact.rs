use yew::prelude::*;

use crate::components::form::bind;
use crate::components::reveal::Reveal;
use crate::config;
use crate::mailto::{self, ContactForm};

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let submitted = use_state(|| false);

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            mailto::open(&form.draft());
            submitted.set(true);
        })
    };

    html! {
        <section id="contact" class="section">
            <Reveal class="section-header">
                <span class="section-eyebrow">{"Get In Touch"}</span>
                <h2>{"Let's Build "}<span class="text-gradient">{"Together"}</span></h2>
                <p>{"Have a project in mind? Tell us about it and we'll get back to you within 24 hours."}</p>
            </Reveal>
            <div class="contact-grid">
                <Reveal class="contact-info">
                    <div class="contact-item card">
                        <span class="contact-label muted">{"Email"}</span>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    </div>
                    <div class="contact-item card">
                        <span class="contact-label muted">{"Phone"}</span>
                        <span>{config::CONTACT_PHONE}</span>
                    </div>
                    <div class="contact-item card">
                        <span class="contact-label muted">{"Location"}</span>
                        <span>{config::CONTACT_LOCATION}</span>
                    </div>
                </Reveal>
                <Reveal class="contact-form-card card" delay_ms={120}>
                    <form class="contact-form" {onsubmit}>
                        <input
                            type="text"
                            placeholder="Your name"
                            required=true
                            value={form.name.clone()}
                            oninput={bind(&form, |f, v| f.name = v)}
                        />
                        <input
                            type="email"
                            placeholder="Your email"
                            required=true
                            value={form.email.clone()}
                            oninput={bind(&form, |f, v| f.email = v)}
                        />
                        <textarea
                            rows="5"
                            placeholder="Tell us about your project"
                            required=true
                            value={form.message.clone()}
                            oninput={bind(&form, |f, v| f.message = v)}
                        />
                        <button type="submit" class="btn-primary">{"Send Message"}</button>
                        if *submitted {
                            <p class="form-note muted">
                                {"Your mail app should open with the message ready to send."}
                            </p>
                        }
                    </form>
                </Reveal>
            </div>
            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 2rem;
                }
                .contact-info { display: flex; flex-direction: column; gap: 1rem; }
                .contact-item { padding: 1.4rem 1.6rem; display: flex; flex-direction: column; gap: 0.3rem; }
                .contact-item a { color: var(--primary); text-decoration: none; }
                .contact-label { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.08em; }
                .contact-form-card { padding: 2rem; }
                .contact-form { display: flex; flex-direction: column; gap: 1rem; }
                .contact-form input, .contact-form textarea {
                    padding: 0.9rem 1rem;
                    border-radius: 10px;
                    border: 1px solid var(--border);
                    background: rgba(255, 255, 255, 0.03);
                    color: var(--text);
                    font: inherit;
                }
                .contact-form input:focus, .contact-form textarea:focus {
                    outline: none;
                    border-color: var(--primary);
                }
                .form-note { margin: 0; font-size: 0.9rem; }
                @media (max-width: 900px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
