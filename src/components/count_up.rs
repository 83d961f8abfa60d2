use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::data::site::Figure;
use crate::events::use_in_view;

/// Linear count from zero to `target`, rounded and clamped at the end.
pub fn count_up_value(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (target as f64 * progress).round() as u32
}

#[hook]
pub fn use_count_up(target: u32, duration_ms: f64, start: bool) -> u32 {
    let value = use_state(|| 0u32);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(target, start): &(u32, bool)| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if start {
                    let started = Date::now();
                    let interval_handle_clone = interval_handle.clone();
                    let interval = Interval::new(16, move || {
                        let current = count_up_value(target, Date::now() - started, duration_ms);
                        value.set(current);
                        if current >= target {
                            interval_handle_clone.borrow_mut().take();
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            (target, start),
        );
    }

    *value
}

#[derive(Properties, PartialEq)]
pub struct FigureCardProps {
    pub figure: Figure,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FigureCard)]
pub fn figure_card(props: &FigureCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone());
    let figure = props.figure;
    let shown = use_count_up(figure.value, config::COUNT_UP_MS, in_view);

    html! {
        <div ref={node} class={classes!("figure-card", props.class.clone())}>
            <p class="figure-label">{figure.label}</p>
            <p class="figure-value">{shown}{figure.suffix}</p>
            if !figure.hint.is_empty() {
                <p class="figure-hint">{figure.hint}</p>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_ends_at_target() {
        assert_eq!(count_up_value(38, 0.0, 950.0), 0);
        assert_eq!(count_up_value(38, 950.0, 950.0), 38);
        assert_eq!(count_up_value(38, 5000.0, 950.0), 38);
    }

    #[test]
    fn midway_is_rounded() {
        assert_eq!(count_up_value(150, 475.0, 950.0), 75);
        assert_eq!(count_up_value(3, 500.0, 1000.0), 2);
    }

    #[test]
    fn degenerate_inputs_are_clamped() {
        assert_eq!(count_up_value(10, -20.0, 100.0), 0);
        assert_eq!(count_up_value(10, 0.0, 0.0), 10);
    }
}
