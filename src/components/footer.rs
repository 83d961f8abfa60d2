use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{config::BRAND_NAME}</h3>
                    <p class="muted">
                        {"Building innovative software solutions that drive business growth. Partner with us to transform your digital vision into reality."}
                    </p>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        <li><a href="/#about">{"About"}</a></li>
                        <li><a href="/#services">{"Services"}</a></li>
                        <li><a href="/#projects">{"Projects"}</a></li>
                        <li><Link<Route> to={Route::CareersIndex}>{"Careers"}</Link<Route>></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Resources"}</h4>
                    <ul>
                        <li><Link<Route> to={Route::BlogIndex}>{"Blog"}</Link<Route>></li>
                        <li><a href="/#faq">{"FAQ"}</a></li>
                        <li><a href="/#contact">{"Contact"}</a></li>
                        <li><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom muted">
                {format!("© {} {}. All rights reserved.", current_year, config::BRAND_NAME)}
            </div>
            <style>
                {r#"
                .site-footer {
                    border-top: 1px solid var(--border);
                    padding: 4rem 2rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }
                .site-footer ul { list-style: none; padding: 0; margin: 0; }
                .site-footer li { margin-bottom: 0.6rem; }
                .site-footer li a { color: var(--muted); text-decoration: none; }
                .site-footer li a:hover { color: var(--text); }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid var(--border);
                    font-size: 0.9rem;
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
