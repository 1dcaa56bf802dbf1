use dioxus::prelude::*;
use crate::Route;

const CARD_STYLE: &str = "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;";
const CARD_TITLE: &str = "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;";
const CARD_BODY: &str = "color: #6b7280; font-size: 14px; margin: 0; line-height: 1.5;";

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "Swerve"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "CSS transforms and transitions from Rust. Detects which properties the browser understands, prefixed or not, and writes the right ones."
                }
                Link {
                    to: Route::Stage {},
                    style: "display: inline-block; padding: 14px 36px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border-radius: 8px; font-size: 18px; font-weight: 600;",
                    "Stage \u{2192}"
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; max-width: 800px; margin-top: 64px;",
                div {
                    style: CARD_STYLE,
                    h3 { style: CARD_TITLE, "Prefix Detection" }
                    p { style: CARD_BODY, "Probes a scratch element once for transform, transition and perspective, falling back through Webkit, Moz, ms and O." }
                }
                div {
                    style: CARD_STYLE,
                    h3 { style: CARD_TITLE, "21 Functions" }
                    p { style: CARD_BODY, "Every 2-D and 3-D transform function, with bare numbers turned into px or deg and strings passed through." }
                }
                div {
                    style: CARD_STYLE,
                    h3 { style: CARD_TITLE, "Completion" }
                    p { style: CARD_BODY, "Counts transition-end events per property and calls back once everything has landed." }
                }
            }
        }
    }
}
