//! Floating decorative glyphs.

use crate::content::FLOATING_GLYPHS;
use maud::{Markup, html};

pub fn render() -> Markup {
    html! {
        div.overlay aria-hidden="true" {
            @for glyph in &FLOATING_GLYPHS {
                @let motion = if glyph.bounce { "bounce-soft" } else { "float" };
                div.glyph.(glyph.slot).(motion)
                    style=(format!("animation-delay: {}.{}s", glyph.delay / 10, glyph.delay % 10)) {
                    (glyph.glyph)
                }
            }
        }
    }
}
