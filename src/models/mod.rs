pub mod product;
pub mod review;
pub mod user;

pub use product::{NewProduct, Product, ProductResponse, ProductsResponse};
pub use review::{Review, ReviewAuthor, ReviewsResponse};
pub use user::{EnterRequest, Profile, ProfileResponse};

use serde::{Deserialize, Serialize};

/// Failure envelope shared by every API endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiFailure {
    pub ok: bool,      // always false
    pub error: String, // short machine-readable reason code
}
