//! Hero carousel: dots, auto-advance timer, hover pause, step buttons.

use crate::dom::{self, CarouselElements};
use crate::state;
use gloo_timers::callback::Interval;
use lm_storefront_core::carousel::{Carousel, Direction};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::{Event, MouseEvent};

thread_local! {
    /// The running auto-advance timer. Replacing it cancels the old one.
    static TIMER: RefCell<Option<Interval>> = const { RefCell::new(None) };
}

pub fn init(els: &CarouselElements) -> Result<(), JsValue> {
    let carousel = Carousel::new(els.slide_count).map_err(|e| JsValue::from_str(&e.to_string()))?;
    state::with_mut(|s| s.carousel = Some(carousel));

    build_dots(els)?;
    render(els);
    restart_timer(els);
    bind(els);

    tracing::debug!(slides = els.slide_count, "carousel ready");
    Ok(())
}

fn build_dots(els: &CarouselElements) -> Result<(), JsValue> {
    els.dots_container.set_inner_html("");
    for i in 0..els.slide_count {
        let dot = dom::create_element("div")?;
        dot.set_class_name("dot");
        dot.set_attribute("data-slide", &i.to_string())?;
        els.dots_container.append_child(&dot)?;
    }
    Ok(())
}

fn render(els: &CarouselElements) {
    let Some((transform, index)) =
        state::with(|s| s.carousel.as_ref().map(|c| (c.transform(), c.index())))
    else {
        return;
    };
    dom::set_style(&els.wrapper, "transform", &transform);
    for (i, dot) in dom::query_all_within(&els.dots_container, ".dot")
        .iter()
        .enumerate()
    {
        dom::toggle_class(dot, "active", i == index);
    }
}

/// (Re)start the auto-advance timer unless the carousel is hover-paused.
fn restart_timer(els: &CarouselElements) {
    let run = state::with(|s| s.carousel.as_ref().is_some_and(Carousel::should_run_timer));
    let interval = run.then(|| {
        let els = els.clone();
        Interval::new(state::config().slide_interval_ms, move || {
            let moved = state::with_mut(|s| s.carousel.as_mut().and_then(Carousel::tick));
            if moved.is_some() {
                render(&els);
            }
        })
    });
    TIMER.with(|t| *t.borrow_mut() = interval);
}

fn stop_timer() {
    TIMER.with(|t| t.borrow_mut().take());
}

pub fn advance(els: &CarouselElements, direction: Direction) {
    state::with_mut(|s| s.carousel.as_mut().map(|c| c.advance(direction)));
    render(els);
    restart_timer(els);
}

pub fn go_to(els: &CarouselElements, index: usize) {
    let moved = state::with_mut(|s| s.carousel.as_mut().map(|c| c.go_to(index)));
    match moved {
        Some(Ok(_)) => {
            render(els);
            restart_timer(els);
        }
        Some(Err(e)) => tracing::debug!("ignored: {e}"),
        None => {}
    }
}

fn bind(els: &CarouselElements) {
    {
        let els2 = els.clone();
        dom::listen(&els.dots_container, "click", move |e: MouseEvent| {
            let Some(target) = e.target() else { return };
            if let Some((_, value)) = dom::closest_with_attr(&target, "data-slide") {
                if let Ok(index) = value.parse::<usize>() {
                    go_to(&els2, index);
                }
            }
        });
    }

    for button in &els.step_buttons {
        let step = button
            .get_attribute("data-carousel-step")
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(1);
        let els2 = els.clone();
        dom::listen(button, "click", move |_: MouseEvent| {
            advance(&els2, Direction::from_step(step));
        });
    }

    dom::listen(&els.container, "mouseenter", move |_: Event| {
        state::with_mut(|s| s.carousel.as_mut().map(Carousel::pause));
        stop_timer();
    });
    let els2 = els.clone();
    dom::listen(&els.container, "mouseleave", move |_: Event| {
        state::with_mut(|s| s.carousel.as_mut().map(Carousel::resume));
        restart_timer(&els2);
    });
}
