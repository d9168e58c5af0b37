use actix_web::{HttpResponse, Result, web};

use auth_services::middleware::CredentialMiddleware;

use crate::*;

/// Health check
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "service": "uniform-swap",
        "status": "healthy"
    })))
}

/// Mounts `/health` and every `/api` route.
///
/// Handlers expect `web::Data` for `RequestService`, `MatchingEngine`,
/// `IdentityGate` and `RecoveryService` in the application data.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::scope("/api")
            .service(
                web::scope("/catalog")
                    .route("/items", web::get().to(list_items))
                    .route("/items/{item_type}/sizes", web::get().to(list_item_sizes))
                    .route("/camps", web::get().to(list_camps))
                    .route(
                        "/security-questions",
                        web::get().to(list_security_questions),
                    ),
            )
            .route("/requests", web::post().to(create_request))
            // Management routes (require phone and secret code headers)
            .service(
                web::scope("/manage")
                    .wrap(CredentialMiddleware)
                    .route("/requests", web::get().to(list_my_requests))
                    .route("/requests/{request_id}", web::put().to(update_request))
                    .route("/requests/{request_id}", web::delete().to(delete_request))
                    .route(
                        "/requests/{request_id}/matches",
                        web::get().to(get_matches),
                    ),
            )
            .service(
                web::scope("/recovery")
                    .route("/sms", web::post().to(recover_by_sms))
                    .route(
                        "/security-question",
                        web::post().to(recover_with_security_question),
                    ),
            ),
    );
}
