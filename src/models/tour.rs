use serde::{Deserialize, Serialize};

use super::wire::opt_string_or_number;
use crate::error::{AppError, AppResult};

/// A tour as listed by the tour service. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tour_id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub duration: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub price: Option<String>,
    #[serde(default)]
    pub destinations: Vec<TourDestination>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDestination {
    #[serde(default)]
    pub dest_name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodation: Option<Accommodation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accommodation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
}

/// Envelope returned by tour mutations
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    /// The tour service can report a rejection inside a 2xx body, e.g.
    /// `{"status":"BAD_REQUEST","message":"Tour with the same title..."}`.
    pub fn into_result(self) -> AppResult<Self> {
        let status = match self.status.as_deref() {
            Some("BAD_REQUEST") => 400,
            Some("NOT_FOUND") => 404,
            Some("CONFLICT") => 409,
            Some("INTERNAL_SERVER_ERROR") => 500,
            _ => return Ok(self),
        };
        Err(AppError::Http {
            status,
            message: self.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_listing() {
        let json = r#"{
            "tourId": 12,
            "title": "Golden Triangle",
            "imageLink": "https://img/1.jpg",
            "duration": 6,
            "startDate": "2024-11-02",
            "price": 45000.0,
            "destinations": [
                {"destName": "Agra", "state": "UP", "accommodation": {"name": "Oberoi", "type": "Hotel"}}
            ]
        }"#;
        let tour: Tour = serde_json::from_str(json).unwrap();
        assert_eq!(tour.tour_id, Some(12));
        assert_eq!(tour.duration.as_deref(), Some("6"));
        assert_eq!(tour.price.as_deref(), Some("45000"));
        let acc = tour.destinations[0].accommodation.as_ref().unwrap();
        assert_eq!(acc.kind.as_deref(), Some("Hotel"));
    }

    #[test]
    fn empty_object_is_an_empty_tour() {
        let tour: Tour = serde_json::from_str("{}").unwrap();
        assert_eq!(tour, Tour::default());
    }

    #[test]
    fn rejection_inside_body_becomes_http_error() {
        let reply: ApiMessage = serde_json::from_str(
            r#"{"status":"BAD_REQUEST","message":"Tour with the same title and start date already exists."}"#,
        )
        .unwrap();
        assert_eq!(
            reply.into_result(),
            Err(AppError::Http {
                status: 400,
                message: "Tour with the same title and start date already exists.".into()
            })
        );

        let created = ApiMessage {
            status: Some("CREATED".into()),
            message: "Tour package created successfully.".into(),
        };
        assert_eq!(created.clone().into_result(), Ok(created));
        assert!(ApiMessage::default().into_result().is_ok());
    }
}
