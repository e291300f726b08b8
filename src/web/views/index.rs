use maud::{html, Markup, DOCTYPE};
use poem::handler;
use poem::web::{Data, Form, Html};

use self::models::SearchForm;
use crate::catalog::{Catalog, LocationRow};
use crate::predictor::{Prediction, Predictor};
use crate::prelude::*;
use crate::web::partials::{headers, LocationList, SearchFormPartial};

pub mod models;

const TITLE: &str = "📍 Crowd-Free Location Finder";

/// Empty form, nothing predicted yet.
#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get_index() -> Html<String> {
    Html(render(&SearchFormPartial::default(), Prediction::default(), None).into_string())
}

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn post_index(
    pairs: poem::Result<Form<Vec<(String, String)>>>,
    Data(predictor): Data<&Predictor>,
    Data(catalog): Data<&Arc<Catalog>>,
) -> Html<String> {
    let start_instant = Instant::now();
    let form = match pairs {
        Ok(Form(pairs)) => SearchForm::from_pairs(pairs),
        Err(error) => {
            debug!("unreadable form, using the empty one: {:#}", error);
            SearchForm::default()
        }
    };
    let hour = form.hour();
    let prediction = predictor.predict(hour);
    let locations = catalog.filter(&form.city, &form.type_);
    info!(
        city = form.city.as_str(),
        type_ = form.type_.as_str(),
        ?hour,
        prediction.value,
        level = %prediction.level,
        source = ?prediction.source,
        n_locations = locations.len(),
        elapsed = ?start_instant.elapsed(),
    );

    let search_form = SearchFormPartial::default()
        .city(&form.city)
        .type_(&form.type_)
        .hour(hour);
    Html(render(&search_form, prediction, Some(locations.as_slice())).into_string())
}

/// Renders the page. The locations are [`None`] until the form is submitted.
fn render(
    search_form: &SearchFormPartial,
    prediction: Prediction,
    locations: Option<&[&LocationRow]>,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (headers())
                title { (TITLE) }
            }
            body {
                section.section {
                    div.container {
                        div.columns.is-centered {
                            div.column."is-6-widescreen"."is-8-tablet".has-text-centered {
                                h1.title { (TITLE) }
                                p.subtitle {
                                    strong { "AI Crowd Prediction:" }
                                    " "
                                    span.tag."is-medium".(prediction.level.color_class()) {
                                        (prediction.value) "% (" (prediction.level) ")"
                                    }
                                }
                                div.box {
                                    (search_form)
                                }
                                @if let Some(locations) = locations {
                                    (LocationList::new(locations))
                                    p.notification.(prediction.level.color_class()).is-light {
                                        (prediction.level.advisory())
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
