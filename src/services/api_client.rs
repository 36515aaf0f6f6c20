// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business rules here: build the request, race it against the timeout,
// map the status, parse the body.
// ============================================================================

use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use crate::config::{AppConfig, CONFIG};
use crate::error::{AppError, AppResult};
use crate::models::{
    ApiMessage, BookingRow, BookingsResponse, Credentials, DestinationEnvelope, DestinationRecord,
    LoginResponse, SignInReply, Tour,
};
use crate::services::backend::TourismBackend;

#[derive(Clone)]
pub struct ApiClient {
    auth_url: String,
    destination_url: String,
    timeout_seconds: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_config(&CONFIG)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            auth_url: config.auth_service_url.clone(),
            destination_url: config.destination_service_url.clone(),
            timeout_seconds: config.network_timeout_seconds,
        }
    }

    async fn timed<F>(&self, request: F) -> AppResult<Response>
    where
        F: Future<Output = Result<Response, gloo_net::Error>>,
    {
        let deadline = TimeoutFuture::new(self.timeout_seconds.saturating_mul(1000));
        match future::select(Box::pin(request), Box::pin(deadline)).await {
            Either::Left((result, _)) => result.map_err(AppError::network),
            Either::Right(_) => {
                log::warn!("⏱️ Request abandoned after {}s", self.timeout_seconds);
                Err(AppError::Timeout(self.timeout_seconds))
            }
        }
    }

    fn bearer(token: &str) -> String {
        format!("Bearer {}", token)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn ensure_ok(response: Response) -> AppResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.is_empty() => text,
        _ => response.status_text(),
    };
    Err(AppError::Http { status, message })
}

/// Tour mutations answer with `{status, message}`; an empty or non-JSON
/// body after a 2xx is still a success.
async fn read_message(response: Response) -> ApiMessage {
    response.json::<ApiMessage>().await.unwrap_or_default()
}

impl TourismBackend for ApiClient {
    async fn sign_in(&self, credentials: &Credentials) -> AppResult<SignInReply> {
        let url = format!("{}/users/signin", self.auth_url);
        log::info!("🔐 Signing in {}", credentials.email);

        let request = Request::post(&url).json(credentials).map_err(AppError::parse)?;
        let response = self.timed(request.send()).await?;
        let status = response.status();

        let body = match response.json::<LoginResponse>().await {
            Ok(body) => body,
            Err(e) if status == 200 => return Err(AppError::parse(e)),
            Err(_) => LoginResponse {
                message: Some(response.status_text()),
                ..LoginResponse::default()
            },
        };

        Ok(SignInReply { status, body })
    }

    async fn user_bookings(&self, user_id: &str, token: &str) -> AppResult<Vec<BookingRow>> {
        let url = format!("{}/v2/bookings/user/{}", self.auth_url, user_id);
        log::info!("📋 Fetching bookings for user {}", user_id);

        let request = Request::get(&url)
            .header("Authorization", &Self::bearer(token))
            .send();
        let response = ensure_ok(self.timed(request).await?).await?;
        let body = response
            .json::<BookingsResponse>()
            .await
            .map_err(AppError::parse)?;

        log::info!("✅ {} booking rows", body.rows.len());
        Ok(body.rows)
    }

    async fn destination(&self, state_id: &str) -> AppResult<DestinationRecord> {
        let url = format!("{}/get/{}", self.destination_url, state_id);

        let response = ensure_ok(self.timed(Request::get(&url).send()).await?).await?;
        let envelope = response
            .json::<DestinationEnvelope>()
            .await
            .map_err(AppError::parse)?;
        Ok(envelope.data)
    }

    async fn remove_booking(&self, booking_id: &str) -> AppResult<()> {
        let url = format!("{}/removeBooking/{}", self.destination_url, booking_id);
        log::info!("🗑️ Removing booking {}", booking_id);

        ensure_ok(self.timed(Request::post(&url).send()).await?).await?;
        Ok(())
    }

    async fn list_tours(&self) -> AppResult<Vec<Tour>> {
        let url = format!("{}/tours", self.auth_url);

        let response = ensure_ok(self.timed(Request::get(&url).send()).await?).await?;
        response.json::<Vec<Tour>>().await.map_err(AppError::parse)
    }

    async fn tour_by_id(&self, tour_id: i64) -> AppResult<Tour> {
        let url = format!("{}/tours/{}", self.auth_url, tour_id);

        let response = ensure_ok(self.timed(Request::get(&url).send()).await?).await?;
        response.json::<Tour>().await.map_err(AppError::parse)
    }

    async fn tours_by_title(&self, title: &str) -> AppResult<Vec<Tour>> {
        let url = format!("{}/tours/search", self.auth_url);
        log::info!("🔎 Searching tours titled '{}'", title);

        let request = Request::get(&url).query([("title", title)]).send();
        let response = ensure_ok(self.timed(request).await?).await?;
        response.json::<Vec<Tour>>().await.map_err(AppError::parse)
    }

    async fn create_tour(&self, tour: &Tour, token: &str) -> AppResult<ApiMessage> {
        let url = format!("{}/tours", self.auth_url);
        log::info!("➕ Creating tour {:?}", tour.title);

        let request = Request::post(&url)
            .header("Authorization", &Self::bearer(token))
            .json(tour)
            .map_err(AppError::parse)?;
        let response = ensure_ok(self.timed(request.send()).await?).await?;
        Ok(read_message(response).await)
    }

    async fn update_tour(&self, tour_id: i64, tour: &Tour, token: &str) -> AppResult<ApiMessage> {
        let url = format!("{}/tours/{}", self.auth_url, tour_id);
        log::info!("📝 Updating tour {}", tour_id);

        let request = Request::put(&url)
            .header("Authorization", &Self::bearer(token))
            .json(tour)
            .map_err(AppError::parse)?;
        let response = ensure_ok(self.timed(request.send()).await?).await?;
        Ok(read_message(response).await)
    }

    async fn delete_tour(&self, tour_id: i64, token: &str) -> AppResult<ApiMessage> {
        let url = format!("{}/tours/{}", self.auth_url, tour_id);
        log::info!("🗑️ Deleting tour {}", tour_id);

        let request = Request::delete(&url)
            .header("Authorization", &Self::bearer(token))
            .send();
        let response = ensure_ok(self.timed(request).await?).await?;
        Ok(read_message(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_takes_urls_from_config() {
        let config = AppConfig {
            auth_service_url: "http://auth".into(),
            destination_service_url: "http://dest".into(),
            network_timeout_seconds: 5,
            ..AppConfig::default()
        };
        let client = ApiClient::with_config(&config);
        assert_eq!(client.auth_url, "http://auth");
        assert_eq!(client.destination_url, "http://dest");
        assert_eq!(client.timeout_seconds, 5);
    }

    #[test]
    fn bearer_header() {
        assert_eq!(ApiClient::bearer("abc"), "Bearer abc");
    }
}
