use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::back_header::BackHeader;
use crate::components::form::bind;
use crate::config;
use crate::data::careers::{get_position_by_slug, positions, Position, BENEFITS};
use crate::data::Lookup;
use crate::events::{scroll_to_section, use_scroll_to_top};
use crate::mailto::{self, ApplicationForm};
use crate::pages::blog::MISSING_ENTRY_STYLES;
use crate::Route;

fn position_route(position: &Position) -> Route {
    Route::CareersPosition {
        slug: position.slug.clone(),
    }
}

fn apply_route(position: &Position) -> Route {
    Route::CareersApply {
        slug: position.slug.clone(),
    }
}

/// Where the apply form's back link goes: the role if it exists, else the list.
pub fn apply_back_route(position: Option<&Position>) -> Route {
    position.map_or(Route::CareersIndex, position_route)
}

/// Departments with their open-role counts, in first-seen order.
pub fn department_counts() -> Vec<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for position in positions().all() {
        let department = position.department.as_str();
        if counts.iter().all(|(seen, _)| *seen != department) {
            counts.push((department, positions().in_category(department).len()));
        }
    }
    counts
}

fn position_meta(position: &Position) -> Html {
    html! {
        <div class="position-meta muted">
            <span>{&position.department}</span>
            <span>{&position.location}</span>
            <span>{&position.kind}</span>
            <span>{&position.experience}</span>
        </div>
    }
}

fn bullet_list(items: &[String]) -> Html {
    html! {
        <ul class="bullet-list">
            { for items.iter().map(|item| html! { <li key={item.clone()}>{item}</li> }) }
        </ul>
    }
}

fn position_card(position: &Position) -> Html {
    html! {
        <Link<Route> key={position.id} to={position_route(position)} classes="position-card card">
            <div class="position-card-top">
                <h3>{&position.title}</h3>
                <span class="chip">{&position.kind}</span>
            </div>
            { position_meta(position) }
            <p class="muted">{&position.description}</p>
            <span class="position-link">{"View role →"}</span>
        </Link<Route>>
    }
}

#[function_component(CareersIndex)]
pub fn careers_index() -> Html {
    use_scroll_to_top(());

    let browse = Callback::from(|e: MouseEvent| {
        if scroll_to_section("open-positions") {
            e.prevent_default();
        }
    });

    html! {
        <div class="page careers-page">
            <BackHeader to={Route::Home} label="Back to Home">
                <Link<Route> to={Route::BlogIndex} classes="btn-outline">{"Read our culture →"}</Link<Route>>
            </BackHeader>
            <section class="page-content careers-hero">
                <span class="section-eyebrow">{"Careers"}</span>
                <h1>{"Build products that ship."}</h1>
                <p class="muted">{"Join a team that obsesses over craft, velocity, and measurable outcomes."}</p>
                <a href="#open-positions" class="btn-primary" onclick={browse}>{"Browse open positions"}</a>
            </section>
            <section class="page-content">
                <div class="benefits-grid">
                    { for BENEFITS.iter().map(|benefit| html! {
                        <div class="benefit card">
                            <span class="benefit-check">{"✓"}</span>
                            <span>{*benefit}</span>
                        </div>
                    }) }
                </div>
            </section>
            <section id="open-positions" class="page-content">
                <h2 class="positions-heading">{"Open "}<span class="text-gradient">{"Positions"}</span></h2>
                <p class="muted">{"Choose a role to see details, responsibilities, and requirements."}</p>
                if positions().is_empty() {
                    <p class="muted">{"No open positions right now. Check back soon."}</p>
                } else {
                    <div class="department-chips">
                        <span class="muted">{format!("{} open roles", positions().len())}</span>
                        { for department_counts().into_iter().map(|(department, count)| html! {
                            <span class="chip">{format!("{} · {}", department, count)}</span>
                        }) }
                    </div>
                    <div class="positions-grid">
                        { for positions().all().iter().map(position_card) }
                    </div>
                }
            </section>
            <section class="page-content">
                <div class="how-to-apply card">
                    <div>
                        <h2>{"How to apply"}</h2>
                        <p class="muted">{"Pick a role, review details, then submit your application in under 2 minutes."}</p>
                    </div>
                </div>
            </section>
            <style>
                {CAREERS_STYLES}
                {r#"
                .careers-hero h1 { font-size: 3.2rem; margin: 0 0 1rem; }
                .careers-hero p { font-size: 1.2rem; margin: 0 0 2rem; max-width: 640px; }
                .benefits-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .benefit { display: flex; align-items: center; gap: 0.75rem; padding: 1rem; }
                .benefit-check { color: var(--primary); font-weight: 700; }
                .positions-heading { font-size: 2.4rem; margin: 0 0 0.5rem; }
                .department-chips { display: flex; flex-wrap: wrap; align-items: center; gap: 0.6rem; margin-top: 1.25rem; }
                .how-to-apply { padding: 2rem 2.5rem; }
                .how-to-apply h2 { margin: 0 0 0.5rem; }
                @media (max-width: 900px) {
                    .benefits-grid { grid-template-columns: repeat(2, 1fr); }
                    .careers-hero h1 { font-size: 2.3rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PositionPageProps {
    pub slug: String,
}

/// Where the fallback for an unknown role sends the visitor.
pub const MISSING_POSITION_BACK: Route = Route::CareersIndex;

fn missing_position() -> Html {
    html! {
        <div class="page">
            <BackHeader to={MISSING_POSITION_BACK} label="Back to Careers" />
            <section class="page-content missing-entry">
                <h1>{"Position not found"}</h1>
                <p class="muted">{"This role may have been filled or renamed."}</p>
                <Link<Route> to={MISSING_POSITION_BACK} classes="btn-primary">{"Go to Careers"}</Link<Route>>
            </section>
            <style>{MISSING_ENTRY_STYLES}</style>
        </div>
    }
}

#[function_component(CareersPosition)]
pub fn careers_position(props: &PositionPageProps) -> Html {
    use_scroll_to_top(props.slug.clone());

    let position = match positions().resolve(&props.slug) {
        Lookup::Found(position) => position,
        Lookup::NotFound => {
            debug!("No position with slug {:?}", props.slug);
            return missing_position();
        }
    };

    let other_roles = positions().related(&position.slug, config::RELATED_LIMIT);

    html! {
        <div class="page position-page">
            <BackHeader to={Route::CareersIndex} label="Back to Careers">
                <Link<Route> to={apply_route(position)} classes="btn-primary">{"Apply now"}</Link<Route>>
            </BackHeader>
            <section class="page-content position-detail">
                <span class="chip">{&position.department}</span>
                <h1>{&position.title}</h1>
                { position_meta(position) }
                <p class="position-description muted">{&position.description}</p>
                <div class="position-lists">
                    <div class="card">
                        <h2>{"Responsibilities"}</h2>
                        { bullet_list(&position.responsibilities) }
                    </div>
                    <div class="card">
                        <h2>{"Requirements"}</h2>
                        { bullet_list(&position.requirements) }
                    </div>
                </div>
                if !position.nice_to_have.is_empty() {
                    <div class="card nice-to-have">
                        <h2>{"Nice to have"}</h2>
                        { bullet_list(&position.nice_to_have) }
                    </div>
                }
                <div class="card ready-to-apply">
                    <div>
                        <h3>{"Ready to apply?"}</h3>
                        <p class="muted">{"Submit your application for this role in a few steps."}</p>
                    </div>
                    <Link<Route> to={apply_route(position)} classes="btn-primary">{"Apply now →"}</Link<Route>>
                </div>
            </section>
            if !other_roles.is_empty() {
                <section class="page-content other-roles">
                    <h2>{"Other open roles"}</h2>
                    <div class="positions-grid">
                        { for other_roles.into_iter().map(position_card) }
                    </div>
                </section>
            }
            <style>
                {CAREERS_STYLES}
                {r#"
                .position-detail { max-width: 820px; }
                .position-detail h1 { font-size: 2.8rem; margin: 1rem 0; }
                .position-description { font-size: 1.1rem; line-height: 1.7; margin: 2rem 0; }
                .position-lists {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .position-lists .card, .nice-to-have { padding: 1.5rem; }
                .position-lists h2, .nice-to-have h2 { font-size: 1.2rem; margin: 0 0 0.75rem; }
                .nice-to-have { margin-top: 1.5rem; }
                .ready-to-apply {
                    margin-top: 2.5rem;
                    padding: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .ready-to-apply h3 { margin: 0 0 0.3rem; }
                .ready-to-apply p { margin: 0; }
                .other-roles { max-width: 820px; padding-top: 0; }
                .other-roles h2 { margin: 0; }
                @media (max-width: 700px) {
                    .position-lists { grid-template-columns: 1fr; }
                    .ready-to-apply { flex-direction: column; align-items: flex-start; }
                }
                "#}
            </style>
        </div>
    }
}

/// Application form; an unknown slug still gets a generic application.
#[function_component(CareersApply)]
pub fn careers_apply(props: &PositionPageProps) -> Html {
    use_scroll_to_top(props.slug.clone());

    let position = get_position_by_slug(&props.slug);
    let form = use_state(ApplicationForm::default);

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            mailto::open(&form.draft(position.map(|p| p.title.as_str())));
        })
    };

    html! {
        <div class="page apply-page">
            <BackHeader to={apply_back_route(position)} label="Back" />
            <section class="page-content apply-content">
                <span class="section-eyebrow">{"Application"}</span>
                <h1>
                    {"Apply for "}
                    <span class="text-gradient">{position.map_or("a role", |p| p.title.as_str())}</span>
                </h1>
                <p class="muted">
                    {"Fill this out and we'll open your email client with a pre-filled application. Attach your resume before sending."}
                </p>
                <form class="apply-form card" {onsubmit}>
                    <div class="form-row">
                        <label>
                            {"Full Name *"}
                            <input
                                required=true
                                placeholder="John Doe"
                                value={form.name.clone()}
                                oninput={bind(&form, |f, v| f.name = v)}
                            />
                        </label>
                        <label>
                            {"Email *"}
                            <input
                                type="email"
                                required=true
                                placeholder="john@example.com"
                                value={form.email.clone()}
                                oninput={bind(&form, |f, v| f.email = v)}
                            />
                        </label>
                    </div>
                    <div class="form-row">
                        <label>
                            {"LinkedIn"}
                            <input
                                placeholder="https://linkedin.com/in/..."
                                value={form.linkedin.clone()}
                                oninput={bind(&form, |f, v| f.linkedin = v)}
                            />
                        </label>
                        <label>
                            {"Portfolio"}
                            <input
                                placeholder="https://..."
                                value={form.portfolio.clone()}
                                oninput={bind(&form, |f, v| f.portfolio = v)}
                            />
                        </label>
                    </div>
                    <label>
                        {"Message *"}
                        <textarea
                            rows="6"
                            required=true
                            placeholder="Tell us about yourself and why you'd be a great fit..."
                            value={form.message.clone()}
                            oninput={bind(&form, |f, v| f.message = v)}
                        />
                    </label>
                    <button type="submit" class="btn-primary">{"Apply now"}</button>
                </form>
            </section>
            <style>
                {r#"
                .apply-content { max-width: 820px; }
                .apply-content h1 { font-size: 2.6rem; margin: 0 0 0.75rem; }
                .apply-content > p { margin: 0 0 2rem; }
                .apply-form { padding: 2rem; display: flex; flex-direction: column; gap: 1.25rem; }
                .apply-form label { display: flex; flex-direction: column; gap: 0.5rem; font-size: 0.9rem; font-weight: 500; }
                .apply-form input, .apply-form textarea {
                    padding: 0.9rem 1rem;
                    border-radius: 10px;
                    border: 1px solid var(--border);
                    background: rgba(255, 255, 255, 0.03);
                    color: var(--text);
                    font: inherit;
                }
                .apply-form input:focus, .apply-form textarea:focus { outline: none; border-color: var(--primary); }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; }
                @media (max-width: 700px) {
                    .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

const CAREERS_STYLES: &str = r#"
.position-meta { display: flex; flex-wrap: wrap; gap: 0.4rem 1rem; font-size: 0.85rem; }
.bullet-list { margin: 0; padding-left: 1.1rem; color: var(--muted); font-size: 0.92rem; line-height: 1.7; }
.bullet-list li::marker { color: var(--primary); }
.positions-grid { margin-top: 2rem; display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.position-card { display: block; padding: 1.5rem; text-decoration: none; color: inherit; }
.position-card-top { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
.position-card h3 { margin: 0 0 0.5rem; }
.position-link { color: var(--primary); font-size: 0.9rem; }
@media (max-width: 900px) {
    .positions-grid { grid-template-columns: 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use yew::virtual_dom::VNode;

    #[test]
    fn unknown_role_renders_the_fallback_linking_to_careers() {
        assert_eq!(positions().resolve("not-a-real-role"), Lookup::NotFound);
        assert_eq!(MISSING_POSITION_BACK, Route::CareersIndex);
        assert_eq!(MISSING_POSITION_BACK.to_path(), "/careers");

        let VNode::VTag(root) = missing_position() else {
            panic!("fallback should render a single page element");
        };
        assert_eq!(root.tag(), "div");
    }

    #[test]
    fn apply_back_link_targets_the_resolved_role() {
        let position = get_position_by_slug("devops-engineer");
        assert_eq!(
            apply_back_route(position),
            Route::CareersPosition {
                slug: "devops-engineer".to_string()
            }
        );
    }

    #[test]
    fn departments_are_counted_once_each() {
        assert_eq!(
            department_counts(),
            vec![("Engineering", 1), ("Design", 1), ("Infrastructure", 1)]
        );
    }

    #[test]
    fn apply_back_link_falls_back_to_the_list() {
        let position = get_position_by_slug("not-a-real-role");
        assert!(position.is_none());
        assert_eq!(apply_back_route(position), Route::CareersIndex);
    }
}
