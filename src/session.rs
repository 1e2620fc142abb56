use crate::error::ApiError;
use actix_session::Session;

/// Session entry holding the signed-in user's ID.
pub const USER_ID_KEY: &str = "user_id";

/// The signed-in user's ID, if any. An absent or unreadable entry means
/// "not signed in", never an error.
pub fn session_user_id(session: &Session) -> Option<i64> {
    session.get::<i64>(USER_ID_KEY).ok().flatten()
}

/// Bind the session to a user after sign-in.
pub fn log_in(session: &Session, user_id: i64) -> Result<(), ApiError> {
    session
        .insert(USER_ID_KEY, user_id)
        .map_err(|e| ApiError::Session(e.to_string()))
}
