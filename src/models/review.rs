// src/models/review.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Review {
    pub id: i64,                  // Unique ID for the review
    pub review: String,           // Content of the review
    pub score: i64,               // Rating out of 5
    pub created_for_id: i64,      // ID of the user the review is addressed to
    pub created_at: String,       // RFC 3339 creation timestamp
    pub created_by: ReviewAuthor, // Author, projected to public fields only
}

/// The public slice of the author row that rides along with each review.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReviewAuthor {
    pub id: i64,
    pub nickname: String,
    pub avatar: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReviewsResponse {
    pub ok: bool,
    pub reviews: Vec<Review>,
}
