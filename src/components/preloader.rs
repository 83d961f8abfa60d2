use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::count_up::count_up_value;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_complete: Callback<()>,
}

/// Full-screen progress splash shown before the home page.
#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let progress = use_state(|| 0u32);

    {
        let progress = progress.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();
                let started = Date::now();

                let interval = Interval::new(16, move || {
                    let current = count_up_value(100, Date::now() - started, config::PRELOADER_MS);
                    progress.set(current);
                    if current >= 100 {
                        interval_handle_clone.borrow_mut().take();
                        on_complete.emit(());
                    }
                });
                *interval_handle.borrow_mut() = Some(interval);

                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class="preloader">
            <div class="preloader-content">
                <div class="preloader-ring">
                    <span class="brand-mark">{"IX"}</span>
                </div>
                <h1>{config::BRAND_NAME}</h1>
                <p class="muted">{config::BRAND_TAGLINE}</p>
                <div class="preloader-bar-container">
                    <div class="preloader-bar" style={format!("width: {}%;", *progress)}></div>
                </div>
                <span class="preloader-percent">{format!("{}%", *progress)}</span>
            </div>
            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: var(--bg);
                }
                .preloader-content { text-align: center; }
                .preloader-ring {
                    display: inline-flex;
                    padding: 1.2rem;
                    border-radius: 50%;
                    border: 2px solid rgba(79, 140, 255, 0.4);
                    animation: spin-in 1s ease-out;
                }
                .preloader h1 { margin: 1.2rem 0 0.3rem; letter-spacing: 0.05em; }
                .preloader-bar-container {
                    width: 220px;
                    height: 3px;
                    margin: 1.5rem auto 0.6rem;
                    background: var(--border);
                    border-radius: 3px;
                    overflow: hidden;
                }
                .preloader-bar { height: 100%; background: var(--primary); }
                .preloader-percent { font-size: 0.8rem; color: var(--muted); }
                @keyframes spin-in {
                    from { transform: scale(0) rotate(-180deg); }
                    to { transform: scale(1) rotate(0); }
                }
                "#}
            </style>
        </div>
    }
}
