/// Cookie carrying the bearer token
pub const TOKEN_COOKIE: &str = "token";

pub const STORAGE_KEY_USER_ID: &str = "userId";
pub const STORAGE_KEY_ROLE: &str = "role";
