use chrono::{DateTime, NaiveDate, NaiveDateTime};
use yew::prelude::*;

use crate::models::Tour;

#[derive(Properties, PartialEq, Clone)]
pub struct TourCardProps {
    #[prop_or_default]
    pub tour: Option<Tour>,
    #[prop_or_default]
    pub on_update: Option<Callback<i64>>,
    #[prop_or_default]
    pub on_delete: Option<Callback<i64>>,
}

/// Display strings for one card; missing values become "".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TourCardFields {
    pub tour_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub image_link: String,
    pub duration: String,
    pub start_date: String,
    pub price: String,
    pub destinations: Vec<String>,
}

impl TourCardFields {
    pub fn from_tour(tour: Option<&Tour>) -> Self {
        let Some(tour) = tour else {
            return Self::default();
        };
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        Self {
            tour_id: tour.tour_id,
            title: text(&tour.title),
            description: text(&tour.description),
            image_link: text(&tour.image_link),
            duration: text(&tour.duration),
            start_date: tour.start_date.as_deref().map(format_start_date).unwrap_or_default(),
            price: text(&tour.price),
            destinations: tour
                .destinations
                .iter()
                .map(|d| text(&d.dest_name))
                .collect(),
        }
    }

    fn image_style(&self) -> String {
        format!(
            "background-image: url({}); height: 200px; background-size: cover; background-position: center;",
            self.image_link
        )
    }
}

/// `2024-11-02`, `2024-11-02T09:30:00` or RFC 3339 → `11/2/2024`.
/// Anything else renders empty.
pub fn format_start_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        });
    date.map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_default()
}

/// Click handler only when both the callback and the tour id exist
fn bind_action(handler: &Option<Callback<i64>>, tour_id: Option<i64>) -> Option<Callback<MouseEvent>> {
    let handler = handler.clone()?;
    let tour_id = tour_id?;
    Some(handler.reform(move |_: MouseEvent| tour_id))
}

#[function_component(TourCard)]
pub fn tour_card(props: &TourCardProps) -> Html {
    let fields = TourCardFields::from_tour(props.tour.as_ref());

    let on_update = bind_action(&props.on_update, fields.tour_id);
    let on_delete = bind_action(&props.on_delete, fields.tour_id);
    let update_disabled = on_update.is_none();
    let delete_disabled = on_delete.is_none();

    html! {
        <div class="card mb-3" style="max-width: 700px;">
            <div class="card-img-top" style={fields.image_style()}></div>
            <div class="card-body">
                <h5 class="card-title">{&fields.title}</h5>
                <h6 class="card-subtitle mb-2 text-muted">
                    {format!("{} | {}", fields.duration, fields.start_date)}
                </h6>
                <p class="card-text">{&fields.description}</p>
                <ul class="list-unstyled">
                    <li><strong>{"Price:"}</strong>{format!(" ${}", fields.price)}</li>
                </ul>
                <ul>
                    { for fields.destinations.iter().map(|name| html! { <li>{name}</li> }) }
                </ul>
                <div class="d-flex justify-content-between">
                    <button class="btn btn-primary" onclick={on_update} disabled={update_disabled}>
                        {"Update"}
                    </button>
                    <button class="btn btn-danger" onclick={on_delete} disabled={delete_disabled}>
                        {"Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}
