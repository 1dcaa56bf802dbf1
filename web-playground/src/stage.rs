//! Stage - drives the library against a live card element
//!
//! Structure:
//!   stage div (parent, receives perspective on 3-D hosts)
//!     card div (#card, receives transition + transform)

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use swerve::{Capabilities, Feature, Swerve, TransitionListener, TransitionWatch};
use web_sys::HtmlElement;

use crate::Route;
use crate::shuffle;

type WatchSlot = Rc<RefCell<Option<TransitionWatch<TransitionListener>>>>;

const BUTTON_STYLE: &str = "padding: 8px 18px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 14px;";

fn detect() -> Rc<Capabilities> {
    let caps = swerve::document()
        .and_then(|doc| Capabilities::detect_in(&doc))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "capability detection failed");
            Capabilities::none()
        });
    Rc::new(caps)
}

/// Select the card, let `build` queue the animation, then run it
fn animate(
    caps: Rc<Capabilities>,
    slot: WatchSlot,
    mut last: Signal<String>,
    mut completed: Signal<u32>,
    build: impl FnOnce(&mut Swerve<HtmlElement>),
) {
    let mut request = match swerve::document().and_then(|doc| Swerve::select(caps, &doc, "#card")) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "card lookup failed");
            return;
        }
    };
    build(&mut request);
    last.set(request.transform_text());

    // replacing the old watch detaches its listeners
    match request.run_then(move || *completed.write() += 1) {
        Ok(watch) => *slot.borrow_mut() = Some(watch),
        Err(e) => tracing::warn!(error = %e, "could not watch transition"),
    }
}

#[component]
pub fn Stage() -> Element {
    let caps = use_hook(detect);
    let slot: WatchSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let last = use_signal(String::new);
    let completed = use_signal(|| 0u32);

    let rows: Vec<(String, String)> = Feature::ALL
        .iter()
        .map(|&f| {
            let value = caps
                .property(f)
                .map(|p| format!("{} / {}", p.dom_name, p.css_name))
                .unwrap_or_else(|| "unsupported".to_string());
            (f.name().to_string(), value)
        })
        .collect();
    let has_3d = caps.has_3d();
    let event = caps.transition_end_event().unwrap_or("none");

    let (c1, s1) = (caps.clone(), slot.clone());
    let (c2, s2) = (caps.clone(), slot.clone());
    let (c3, s3) = (caps.clone(), slot.clone());
    let (c4, s4) = (caps.clone(), slot.clone());
    let (c5, s5) = (caps.clone(), slot.clone());

    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 20px; font-family: system-ui, sans-serif;",

            div {
                style: "display: flex; gap: 16px; align-items: center; margin-bottom: 16px;",
                Link {
                    to: Route::Landing {},
                    style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                    "\u{2190} Home"
                }
                h2 { style: "color: #e5e7eb; margin: 0; font-size: 20px;", "Stage" }
                span {
                    style: "color: #22c55e; font-size: 14px; font-family: monospace;",
                    "completed: {completed}"
                }
            }

            // Controls
            div {
                style: "display: flex; gap: 12px; margin-bottom: 24px;",
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| animate(c1.clone(), s1.clone(), last, completed, |s| {
                        s.duration(".6s").timing("ease-out").translate_x(120).rotate(15);
                    }),
                    "Slide"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| animate(c2.clone(), s2.clone(), last, completed, |s| {
                        s.duration("1s").timing("ease-in-out").set("opacity", "0.6").rotate(180).scale(1.5, 1.5);
                    }),
                    "Spin"
                }
                button {
                    style: BUTTON_STYLE,
                    disabled: !has_3d,
                    onclick: move |_| animate(c3.clone(), s3.clone(), last, completed, |s| {
                        s.duration(".8s").perspective("600px").rotate_y(180).translate_z(40);
                    }),
                    "Flip"
                }
                button {
                    style: BUTTON_STYLE,
                    onclick: move |_| {
                        let mut rng = shuffle::fresh_rng();
                        let chain = shuffle::random_chain(&mut rng, 4, has_3d);
                        let duration = shuffle::random_duration(&mut rng);
                        let timing = shuffle::random_timing(&mut rng);
                        animate(c4.clone(), s4.clone(), last, completed, move |s| {
                            s.duration(duration).timing(timing);
                            for step in &chain {
                                s.transform(step.function, &step.args);
                            }
                        })
                    },
                    "Shuffle"
                }
                button {
                    style: "padding: 8px 18px; background: #6b7280; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 14px;",
                    onclick: move |_| animate(c5.clone(), s5.clone(), last, completed, |s| {
                        s.duration(".3s").set("opacity", "1").translate_x(0);
                    }),
                    "Reset"
                }
            }

            // Stage
            div {
                id: "stage",
                style: "width: 640px; height: 360px; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; display: flex; align-items: center; justify-content: center;",
                div {
                    id: "card",
                    style: "width: 120px; height: 80px; border-radius: 8px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; display: flex; align-items: center; justify-content: center; font-weight: 600; opacity: 1;",
                    "swerve"
                }
            }

            // Detected capabilities
            div {
                style: "width: 640px; background: #111827; border-radius: 8px; padding: 16px; margin-top: 12px; font-family: monospace; font-size: 12px; color: #9ca3af;",
                h3 { style: "margin: 0 0 8px 0; color: #e5e7eb; font-size: 13px;", "Capabilities" }
                for (name, value) in rows {
                    div { style: "padding: 4px 0;", "{name}: {value}" }
                }
                div { style: "padding: 4px 0; color: #6b7280;", "transition end: {event}" }
                div { style: "padding: 4px 0; color: #6b7280;", "last transform: {last}" }
            }
        }
    }
}
