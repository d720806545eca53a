use std::cell::Cell;
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::anim::typewriter::Typewriter;

/// Cursor blink period, independent of the typing cadence.
const CURSOR_BLINK_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub texts: Vec<String>,
    #[prop_or(80)]
    pub speed_ms: u32,
    /// Defers the first typed character after mount.
    #[prop_or(0)]
    pub start_delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let machine = {
        let texts = props.texts.clone();
        use_mut_ref(move || Typewriter::new(texts))
    };
    let display = use_state(String::new);
    let cursor_on = use_state(|| true);
    let started = use_state(|| false);
    // Bumped after every transition so the tick effect re-arms itself with
    // the delay the machine asks for next.
    let generation = use_state(|| 0u32);

    // Texts changed: restart the whole sequence from the first phrase.
    {
        let machine = machine.clone();
        let display = display.clone();
        let generation = generation.clone();
        use_effect_with_deps(
            move |texts: &Vec<String>| {
                *machine.borrow_mut() = Typewriter::new(texts.clone());
                display.set(String::new());
                generation.set(0);
                || ()
            },
            props.texts.clone(),
        );
    }

    // Optional start delay before the first tick.
    {
        let started = started.clone();
        use_effect_with_deps(
            move |delay: &u32| {
                let timeout = Timeout::new(*delay, move || {
                    started.set(true);
                });
                move || drop(timeout)
            },
            props.start_delay_ms,
        );
    }

    // One Timeout per transition; the machine decides how long to wait in
    // its current phase. Dropping the handle on teardown (or on re-arm)
    // cancels any pending tick.
    {
        let machine = machine.clone();
        let display = display.clone();
        let generation_cb = generation.clone();
        let speed = props.speed_ms;
        use_effect_with_deps(
            move |(started, current): &(bool, u32)| {
                let timeout = if *started {
                    let delay = machine.borrow().delay_ms(speed);
                    let current = *current;
                    Some(Timeout::new(delay, move || {
                        let mut tw = machine.borrow_mut();
                        tw.step();
                        display.set(tw.visible());
                        generation_cb.set(current.wrapping_add(1));
                    }))
                } else {
                    None
                };
                move || drop(timeout)
            },
            (*started, *generation),
        );
    }

    // Cursor blink, fully decoupled from the typing state machine.
    {
        let cursor_on = cursor_on.clone();
        use_effect_with_deps(
            move |_| {
                let lit = Cell::new(true);
                let interval = Interval::new(CURSOR_BLINK_MS, move || {
                    lit.set(!lit.get());
                    cursor_on.set(lit.get());
                });
                move || drop(interval)
            },
            (),
        );
    }

    let cursor_style = if *cursor_on {
        "opacity: 1;"
    } else {
        "opacity: 0;"
    };

    html! {
        <span class={classes!("typewriter", props.class.clone())}>
            { (*display).clone() }
            <span class="typewriter-cursor" style={cursor_style} aria-hidden="true"></span>
            <style>
                {r#"
                .typewriter-cursor {
                    display: inline-block;
                    width: 3px;
                    height: 0.9em;
                    margin-left: 4px;
                    background: #3B82F6;
                    vertical-align: baseline;
                    transition: opacity 0.1s ease;
                }
                "#}
            </style>
        </span>
    }
}
