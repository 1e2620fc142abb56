// src/models/user.rs
use serde::{Deserialize, Serialize};

/// A user as exposed to the client: no session or bookkeeping fields.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Profile {
    pub id: i64,                // Unique ID for the user
    pub nickname: String,       // Display name, unique per user
    pub avatar: Option<String>, // Optional avatar image key
}

/// Payload accepted by the sign-in endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EnterRequest {
    pub nickname: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileResponse {
    pub ok: bool,
    pub profile: Profile,
}
