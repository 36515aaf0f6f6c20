use std::rc::Rc;

use crate::error::{AppError, AppResult};
use crate::models::{ApiMessage, Tour};
use crate::services::backend::TourismBackend;
use crate::services::session_store::SessionStore;

/// Tour catalogue operations behind the admin tour cards
pub struct TourService<B, S> {
    backend: Rc<B>,
    store: Rc<S>,
}

impl<B: TourismBackend, S: SessionStore> TourService<B, S> {
    pub fn new(backend: Rc<B>, store: Rc<S>) -> Self {
        Self { backend, store }
    }

    pub async fn list_tours(&self) -> AppResult<Vec<Tour>> {
        let tours = self.backend.list_tours().await?;
        log::info!("🧭 {} tours loaded", tours.len());
        Ok(tours)
    }

    /// The server leaves `tourId` out of the body; the requested id is
    /// put back so the tour can be edited.
    pub async fn tour_by_id(&self, tour_id: i64) -> AppResult<Tour> {
        let mut tour = self.backend.tour_by_id(tour_id).await?;
        tour.tour_id.get_or_insert(tour_id);
        Ok(tour)
    }

    /// Exact title match. A blank title lists everything.
    pub async fn tours_by_title(&self, title: &str) -> AppResult<Vec<Tour>> {
        let title = title.trim();
        if title.is_empty() {
            return self.list_tours().await;
        }
        let tours = self.backend.tours_by_title(title).await?;
        log::info!("🔎 {} tours titled '{}'", tours.len(), title);
        Ok(tours)
    }

    pub async fn create_tour(&self, tour: &Tour) -> AppResult<ApiMessage> {
        let token = self.store.token().ok_or(AppError::NotAuthenticated)?;
        self.backend.create_tour(tour, &token).await?.into_result()
    }

    pub async fn update_tour(&self, tour_id: i64, tour: &Tour) -> AppResult<ApiMessage> {
        let token = self.store.token().ok_or(AppError::NotAuthenticated)?;
        self.backend.update_tour(tour_id, tour, &token).await?.into_result()
    }

    pub async fn delete_tour(&self, tour_id: i64) -> AppResult<ApiMessage> {
        let token = self.store.token().ok_or(AppError::NotAuthenticated)?;
        self.backend.delete_tour(tour_id, &token).await?.into_result()
    }
}
