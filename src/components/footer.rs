//! Site footer component

use chrono::Datelike;
use maud::{Markup, html};

/// Renders the copyright footer for the current year
pub fn footer(owner: &str) -> Markup {
    let year = chrono::Local::now().year();

    html! {
        footer class="site-footer" {
            p { "© " (year) " " (owner) ". All rights reserved." }
        }
    }
}
