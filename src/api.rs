#[cfg(feature = "ssr")]
use crate::db::Database;
#[cfg(feature = "ssr")]
use crate::error::ApiError;
#[cfg(feature = "ssr")]
use crate::models::{
    EnterRequest, NewProduct, ProductResponse, ProductsResponse, ProfileResponse, ReviewsResponse,
};
#[cfg(feature = "ssr")]
use crate::session::{log_in, session_user_id};
#[cfg(feature = "ssr")]
use actix_session::Session;
#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::log;

/// Wires every JSON endpoint under `/api`. A method with no route listed
/// here gets the resource's default 405 response without touching the
/// database.
#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(web::resource("/reviews").route(web::get().to(get_reviews)))
            .service(
                web::resource("/product")
                    .route(web::get().to(get_products))
                    .route(web::post().to(create_product)),
            )
            .service(web::resource("/users/me").route(web::get().to(me)))
            .service(web::resource("/users/enter").route(web::post().to(enter))),
    );
}

// Reviews received by the current session user. Without a session the
// recipient filter matches nothing, so the list is empty but still 200.
#[cfg(feature = "ssr")]
pub async fn get_reviews(
    db: web::Data<Database>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let user_id = session_user_id(&session);
    let reviews = db.reviews_for_user(user_id).await?;
    log!(
        "[API] Returning {} reviews for user {:?}",
        reviews.len(),
        user_id
    );
    Ok(HttpResponse::Ok().json(ReviewsResponse { ok: true, reviews }))
}

#[cfg(feature = "ssr")]
pub async fn get_products(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let products = db.get_products().await?;
    log!("[API] Returning {} products", products.len());
    Ok(HttpResponse::Ok().json(ProductsResponse { ok: true, products }))
}

#[cfg(feature = "ssr")]
pub async fn create_product(
    db: web::Data<Database>,
    session: Session,
    request: web::Json<NewProduct>,
) -> Result<HttpResponse, ApiError> {
    let user_id = session_user_id(&session).ok_or(ApiError::Unauthorized)?;
    let new_product = request.into_inner();

    // raw JSON logging
    let raw_json = serde_json::to_string(&new_product).unwrap_or_default();
    log!("[API] Raw product JSON from user {}: {}", user_id, raw_json);

    let product = db.insert_product(user_id, &new_product).await?;
    log!("[API] Successfully saved product ID: {}", product.id);
    Ok(HttpResponse::Ok().json(ProductResponse { ok: true, product }))
}

#[cfg(feature = "ssr")]
pub async fn me(db: web::Data<Database>, session: Session) -> Result<HttpResponse, ApiError> {
    let user_id = session_user_id(&session).ok_or(ApiError::Unauthorized)?;

    // A signed cookie can outlive its user row
    let profile = db
        .user_by_id(user_id)
        .await?
        .ok_or(ApiError::Unauthorized)?;
    Ok(HttpResponse::Ok().json(ProfileResponse { ok: true, profile }))
}

#[cfg(feature = "ssr")]
pub async fn enter(
    db: web::Data<Database>,
    session: Session,
    request: web::Json<EnterRequest>,
) -> Result<HttpResponse, ApiError> {
    let nickname = request.nickname.trim();
    if nickname.is_empty() {
        return Err(ApiError::InvalidNickname);
    }

    let profile = db.enter_user(nickname).await?;
    log_in(&session, profile.id)?;
    log!(
        "[API] Session opened for user {} ({})",
        profile.id,
        profile.nickname
    );
    Ok(HttpResponse::Ok().json(ProfileResponse { ok: true, profile }))
}
