//! Server-side page rendering (maud).
//!
//! The markup carries everything the browser-side enhancements need as data attributes:
//! reveal thresholds, typing timing, glow opacities. Without scripts the page is complete,
//! just static.

mod sections;

use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::content::Portfolio;
use crate::effects::pointer::PointerState;
use crate::effects::{normalize_threshold, Accordion, GlowOpacity, TypingParams};
use crate::highlight::HighlightSpan;
use crate::theme::Theme;

const STYLE: &str = include_str!("style.css");
const SCRIPT: &str = include_str!("enhance.js");

/// Nav buttons in the header: (label, section id).
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("Experience", "experience"),
    ("Projects", "projects"),
    ("Hobbies", "hobbies"),
];

/// Scroll distance after which the header gets its solid background.
pub const SCROLLED_OFFSET_PX: u32 = 20;

/// Everything one page render needs.
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: Theme,
    pub accordion: &'a Accordion,
    pub typing: &'a TypingParams,
    pub reveal_threshold: f64,
    pub glow: GlowOpacity,
    pub pointer: PointerState,
    pub year: i32,
}

impl PageContext<'_> {
    pub fn current_year() -> i32 {
        Utc::now().year()
    }
}

/// Renders the full HTML document.
pub fn page(ctx: &PageContext<'_>) -> Markup {
    let profile = &ctx.portfolio.profile;
    let threshold = normalize_threshold(ctx.reveal_threshold);

    html! {
        (DOCTYPE)
        html lang="en" data-theme=(ctx.theme.as_str()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (profile.full_name()) " · " (profile.role) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div id="cursor-glow"
                    style=(ctx.glow.glow_style(ctx.pointer, ctx.theme))
                    data-glow-dark=(ctx.glow.dark.to_string())
                    data-glow-light=(ctx.glow.light.to_string()) {}

                (sections::header(profile, ctx.theme))

                div.layout {
                    main {
                        (sections::hero(profile, &ctx.portfolio.contacts, ctx.typing))
                        (sections::reveal_section(Some("summary"), "Summary", threshold, html! {
                            p.summary { (highlighted(&ctx.portfolio.summary.spans())) }
                        }))
                        (sections::reveal_section(Some("experience"), "Experience", threshold,
                            sections::experience(&ctx.portfolio.experience, ctx.accordion)))
                        (sections::reveal_section(Some("projects"), "Projects", threshold,
                            sections::projects(&ctx.portfolio.projects)))
                        @if !ctx.portfolio.education.is_empty() {
                            (sections::reveal_section(None, "Education", threshold,
                                sections::education(&ctx.portfolio.education)))
                        }
                        (sections::reveal_section(Some("hobbies"), "Hobbies", threshold,
                            sections::hobbies(&ctx.portfolio.hobbies)))
                        footer {
                            p { (ctx.portfolio.footer.built_with) }
                            p.copyright { "© " (ctx.year) " " (profile.full_name()) }
                        }
                    }
                    (sections::skills(&ctx.portfolio.skills))
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}

/// Highlight spans as inline markup. Text is escaped; matches get `exp-highlight`.
pub fn highlighted(spans: &[HighlightSpan]) -> Markup {
    html! {
        @for span in spans {
            @if span.is_match {
                span class="exp-highlight" { (span.text) }
            } @else {
                (span.text)
            }
        }
    }
}
