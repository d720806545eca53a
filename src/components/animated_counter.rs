use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::anim::spring::Spring;
use crate::anim::{FRAME_DT, FRAME_MS};
use crate::components::scroll_reveal::use_in_view;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    /// Stat string such as "99.9%", "24/7" or "2s": a leading number and a
    /// trailing suffix rendered verbatim.
    pub value: AttrValue,
    pub label: AttrValue,
    /// Wait this long after scrolling into view before counting up.
    #[prop_or(0)]
    pub delay_ms: u32,
}

/// Split a stat string into its leading numeric part and the remaining
/// suffix. Anything unparsable counts from zero: a garbled stat renders as
/// "0" rather than NaN.
pub fn parse_stat(value: &str) -> (f64, &str) {
    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, suffix) = value.split_at(split);
    (number.parse().unwrap_or(0.0), suffix)
}

/// Small figures keep one decimal while counting, larger ones round.
fn format_stat(value: f64, target: f64, suffix: &str) -> String {
    if target < 10.0 {
        format!("{:.1}{}", value, suffix)
    } else {
        format!("{}{}", value.round() as i64, suffix)
    }
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.1);
    let (target, suffix) = parse_stat(&props.value);
    let display = use_state(|| format_stat(0.0, target, suffix));

    {
        let display = display.clone();
        let suffix = suffix.to_string();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |(in_view, target): &(bool, f64)| {
                let handles: Rc<RefCell<(Option<Timeout>, Option<Interval>)>> =
                    Rc::new(RefCell::new((None, None)));
                if *in_view {
                    let target = *target;
                    let spring = Rc::new(RefCell::new(Spring::counter(0.0)));
                    let handles_for_timeout = handles.clone();
                    let timeout = Timeout::new(delay_ms, move || {
                        spring.borrow_mut().set_target(target);
                        let handles_for_tick = handles_for_timeout.clone();
                        let interval = Interval::new(FRAME_MS, move || {
                            let mut spring = spring.borrow_mut();
                            spring.step(FRAME_DT);
                            if spring.settled(0.01) {
                                spring.snap();
                                display.set(format_stat(target, target, &suffix));
                                // Steady state reached: the frame clock has
                                // nothing left to do.
                                if let Some(interval) =
                                    handles_for_tick.borrow_mut().1.take()
                                {
                                    drop(interval);
                                }
                            } else {
                                display.set(format_stat(spring.value(), target, &suffix));
                            }
                        });
                        handles_for_timeout.borrow_mut().1 = Some(interval);
                    });
                    handles.borrow_mut().0 = Some(timeout);
                }
                move || {
                    let mut handles = handles.borrow_mut();
                    drop(handles.0.take());
                    drop(handles.1.take());
                }
            },
            (in_view, target),
        );
    }

    let card_style = if in_view {
        "opacity: 1; transform: none;"
    } else {
        "opacity: 0; transform: translateY(20px) scale(0.9);"
    };

    html! {
        <div ref={node} class="stat-card" style={card_style}>
            <div class="stat-value">{ (*display).clone() }</div>
            <div class="stat-label">{ props.label.clone() }</div>
            <style>
                {r#"
                .stat-card {
                    padding: 1.5rem;
                    border-radius: 16px;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(59, 130, 246, 0.15);
                    backdrop-filter: blur(8px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out,
                                border-color 0.3s ease, box-shadow 0.3s ease;
                }
                .stat-card:hover {
                    transform: translateY(-5px) scale(1.02);
                    border-color: rgba(59, 130, 246, 0.4);
                    box-shadow: 0 0 30px rgba(59, 130, 246, 0.2);
                }
                .stat-value {
                    font-size: 2rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                    font-variant-numeric: tabular-nums;
                    background: linear-gradient(45deg, #3B82F6, #8B5CF6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .stat-label {
                    font-size: 0.85rem;
                    color: #8b93a7;
                    font-weight: 500;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_number_and_suffix() {
        assert_eq!(parse_stat("99.9%"), (99.9, "%"));
        assert_eq!(parse_stat("24/7"), (24.0, "/7"));
        assert_eq!(parse_stat("2s"), (2.0, "s"));
        assert_eq!(parse_stat("1000+"), (1000.0, "+"));
    }

    #[test]
    fn malformed_input_counts_from_zero() {
        assert_eq!(parse_stat(""), (0.0, ""));
        assert_eq!(parse_stat("n/a"), (0.0, "n/a"));
        assert_eq!(parse_stat("..."), (0.0, ""));
    }

    #[test]
    fn formatting_rounds_large_figures_only() {
        assert_eq!(format_stat(54.4, 100.0, "%"), "54%");
        assert_eq!(format_stat(9.94, 9.9, "s"), "9.9s");
        assert_eq!(format_stat(0.0, 24.0, "/7"), "0/7");
    }
}
