use web_sys::{window, Storage};

use crate::error::{AppError, AppResult};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage(key: &str, value: &str) -> AppResult<()> {
    let storage = get_local_storage().ok_or_else(|| AppError::storage("localStorage unavailable"))?;
    storage
        .set_item(key, value)
        .map_err(|_| AppError::storage(format!("could not write '{}'", key)))
}

pub fn load_from_storage(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> AppResult<()> {
    let storage = get_local_storage().ok_or_else(|| AppError::storage("localStorage unavailable"))?;
    storage
        .remove_item(key)
        .map_err(|_| AppError::storage(format!("could not remove '{}'", key)))
}

/// Wipes every key, not only the ones this app wrote
pub fn clear_storage() -> AppResult<()> {
    let storage = get_local_storage().ok_or_else(|| AppError::storage("localStorage unavailable"))?;
    storage
        .clear()
        .map_err(|_| AppError::storage("could not clear localStorage"))
}
