use maud::{html, Markup};

pub use self::location_list::{LocationList, NOT_FOUND};
pub use self::search_form::SearchFormPartial;

mod location_list;
mod search_form;

pub fn headers() -> Markup {
    html! {
        meta name="viewport" content="width=device-width, initial-scale=1";
        meta charset="UTF-8";
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css" crossorigin="anonymous" referrerpolicy="no-referrer";
    }
}
