use maud::{html, Markup, Render};

/// Place types offered in the form, as `(value, label)`.
pub const PLACE_TYPES: [(&str, &str); 4] =
    [("park", "Park"), ("beach", "Beach"), ("cafe", "Cafe"), ("mall", "Mall")];

/// Search form, optionally pre-filled with the previous submission.
#[derive(Default)]
pub struct SearchFormPartial<'a> {
    city: &'a str,
    type_: &'a str,
    hour: Option<u32>,
}

impl<'a> SearchFormPartial<'a> {
    pub const fn city(mut self, city: &'a str) -> Self {
        self.city = city;
        self
    }

    pub const fn type_(mut self, type_: &'a str) -> Self {
        self.type_ = type_;
        self
    }

    pub const fn hour(mut self, hour: Option<u32>) -> Self {
        self.hour = hour;
        self
    }
}

impl Render for SearchFormPartial<'_> {
    fn render(&self) -> Markup {
        html! {
            form method="post" action="/" {
                div.field {
                    div.control {
                        input.input name="city" type="text" placeholder="City" value=(self.city);
                    }
                }
                div.field {
                    div.control {
                        div.select.is-fullwidth {
                            select name="type" required {
                                @for (value, label) in PLACE_TYPES {
                                    option value=(value) selected[self.type_.eq_ignore_ascii_case(value)] { (label) }
                                }
                            }
                        }
                    }
                }
                div.field {
                    div.control {
                        input.input
                            name="hour"
                            type="number"
                            min="0"
                            max="23"
                            placeholder="Hour (0-23)"
                            value=[self.hour];
                    }
                }
                div.field {
                    div.control {
                        button.button.is-link.is-fullwidth type="submit" { "Search" }
                    }
                }
            }
        }
    }
}
