use maud::{html, Markup, Render};

use crate::catalog::LocationRow;

pub const NOT_FOUND: &str = "❌ No locations found";

/// Decorative icons by lower-cased place type.
static PLACE_ICONS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "park" => "🌳",
    "beach" => "🏖️",
    "cafe" => "☕",
    "mall" => "🛍️",
};

/// Icon for the place type, empty for the unknown ones.
pub fn place_icon(type_: &str) -> &'static str {
    PLACE_ICONS
        .get(type_.to_lowercase().as_str())
        .copied()
        .unwrap_or_default()
}

/// One line per location, or the «not found» indicator.
pub struct LocationList<'a> {
    rows: &'a [&'a LocationRow],
}

impl<'a> LocationList<'a> {
    pub const fn new(rows: &'a [&'a LocationRow]) -> Self {
        Self { rows }
    }
}

impl Render for LocationList<'_> {
    fn render(&self) -> Markup {
        html! {
            div.content."is-medium" {
                @if self.rows.is_empty() {
                    p.has-text-danger { (NOT_FOUND) }
                } @else {
                    @for row in self.rows {
                        p {
                            @let icon = place_icon(&row.type_);
                            @if !icon.is_empty() {
                                (icon) " "
                            }
                            (row.name)
                        }
                    }
                }
            }
        }
    }
}
