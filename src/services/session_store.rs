// ============================================================================
// SESSION STORE - persistence of the signed-in session
// ============================================================================
// The token lives in the `token` cookie, identity in localStorage. The
// in-memory session is owned by the UI; this only saves, loads and clears.
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::error::{AppError, AppResult};
use crate::models::{Role, Session};
use crate::utils::{
    clear_storage, cookie_assignment, expired_cookie, find_cookie, load_from_storage,
    remove_from_storage, save_to_storage, STORAGE_KEY_ROLE, STORAGE_KEY_USER_ID, TOKEN_COOKIE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub session: Session,
    pub token: String,
}

pub trait SessionStore {
    fn save(&self, session: &Session, token: &str) -> AppResult<()>;

    fn user_id(&self) -> Option<String>;

    fn role(&self) -> Option<Role>;

    fn token(&self) -> Option<String>;

    /// Drops the token and every persisted key
    fn clear(&self) -> AppResult<()>;

    /// Complete session, or `None` if any part is missing
    fn load(&self) -> Option<StoredSession> {
        Some(StoredSession {
            session: Session {
                user_id: self.user_id()?,
                role: self.role()?,
            },
            token: self.token()?,
        })
    }
}

/// Runs `persist` after the token cookie was written. On failure `rollback`
/// expires the cookie again so no half session survives; the `persist`
/// error is the one returned.
fn persist_or_rollback<P, R>(persist: P, rollback: R) -> AppResult<()>
where
    P: FnOnce() -> AppResult<()>,
    R: FnOnce() -> AppResult<()>,
{
    let Err(error) = persist() else {
        return Ok(());
    };
    log::warn!("⚠️ Session save failed, dropping token: {}", error);
    if let Err(e) = rollback() {
        log::error!("❌ Rollback left session data behind: {}", e);
    }
    Err(error)
}

/// Cookie + localStorage implementation
#[derive(Debug, Clone)]
pub struct BrowserSessionStore {
    max_age_seconds: u32,
}

impl BrowserSessionStore {
    pub fn new(max_age_seconds: u32) -> Self {
        Self { max_age_seconds }
    }

    fn document() -> AppResult<HtmlDocument> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| AppError::storage("document unavailable"))
    }

    fn write_cookie(assignment: &str) -> AppResult<()> {
        Self::document()?
            .set_cookie(assignment)
            .map_err(|_| AppError::storage("could not write cookie"))
    }
}

impl SessionStore for BrowserSessionStore {
    fn save(&self, session: &Session, token: &str) -> AppResult<()> {
        Self::write_cookie(&cookie_assignment(TOKEN_COOKIE, token, self.max_age_seconds))?;
        persist_or_rollback(
            || {
                save_to_storage(STORAGE_KEY_USER_ID, &session.user_id)?;
                save_to_storage(STORAGE_KEY_ROLE, session.role.as_str())
            },
            || {
                let cookie = Self::write_cookie(&expired_cookie(TOKEN_COOKIE));
                let user_id = remove_from_storage(STORAGE_KEY_USER_ID);
                cookie.and(user_id)
            },
        )?;
        log::debug!("💾 Session saved for user {}", session.user_id);
        Ok(())
    }

    fn user_id(&self) -> Option<String> {
        load_from_storage(STORAGE_KEY_USER_ID).filter(|id| !id.is_empty())
    }

    fn role(&self) -> Option<Role> {
        load_from_storage(STORAGE_KEY_ROLE).map(|r| Role::parse(&r))
    }

    fn token(&self) -> Option<String> {
        let cookies = Self::document().ok()?.cookie().ok()?;
        find_cookie(&cookies, TOKEN_COOKIE)
    }

    fn clear(&self) -> AppResult<()> {
        // Both steps run even if the first fails
        let cookie = Self::write_cookie(&expired_cookie(TOKEN_COOKIE));
        let storage = clear_storage();
        log::debug!("🧹 Session storage cleared");
        cookie.and(storage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::MemorySessionStore;
    use std::cell::Cell;

    #[test]
    fn load_needs_every_part() {
        let store = MemorySessionStore::default();
        assert_eq!(store.load(), None);

        let session = Session { user_id: "9".into(), role: Role::User };
        store.save(&session, "tok").unwrap();
        assert_eq!(
            store.load(),
            Some(StoredSession { session: session.clone(), token: "tok".into() })
        );

        store.forget_token();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn failed_identity_write_drops_the_token() {
        let rolled_back = Cell::new(false);
        let result = persist_or_rollback(
            || Err(AppError::storage("quota exceeded")),
            || {
                rolled_back.set(true);
                Ok(())
            },
        );
        assert_eq!(result, Err(AppError::storage("quota exceeded")));
        assert!(rolled_back.get());
    }

    #[test]
    fn rollback_failure_keeps_the_original_error() {
        let result = persist_or_rollback(
            || Err(AppError::storage("quota exceeded")),
            || Err(AppError::storage("document unavailable")),
        );
        assert_eq!(result, Err(AppError::storage("quota exceeded")));
    }

    #[test]
    fn successful_save_skips_rollback() {
        let result = persist_or_rollback(|| Ok(()), || panic!("rollback must not run"));
        assert_eq!(result, Ok(()));
    }
}
