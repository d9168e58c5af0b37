use actix_web::{HttpResponse, Result, web};
use uuid::Uuid;

use auth_services::AuthError;
use auth_services::middleware::AuthenticatedOwner;
use swap_requests::{
    ListRequestsResponse, MatchingEngine, RequestService, SwapRequest, SwapRequestPatch,
};

/// Lists every request owned by the presented phone number and secret code,
/// newest first.
pub async fn list_my_requests(owner: AuthenticatedOwner) -> Result<HttpResponse, AuthError> {
    let requests: Vec<_> = owner.0.requests.iter().map(SwapRequest::to_view).collect();

    let response = ListRequestsResponse {
        total: requests.len(),
        requests,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Edits an owned request. Phone number and secret code cannot be changed.
pub async fn update_request(
    service: web::Data<RequestService>,
    owner: AuthenticatedOwner,
    path: web::Path<Uuid>,
    request: web::Json<SwapRequestPatch>,
) -> Result<HttpResponse, AuthError> {
    let request_id = path.into_inner();
    owner.0.owned(&request_id)?;

    let updated = service.update(&request_id, &request).await?;

    Ok(HttpResponse::Ok().json(updated.to_view()))
}

/// Deletes an owned request permanently.
pub async fn delete_request(
    service: web::Data<RequestService>,
    owner: AuthenticatedOwner,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AuthError> {
    let request_id = path.into_inner();
    owner.0.owned(&request_id)?;

    service.delete(&request_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Finds the current matches for an owned request.
pub async fn get_matches(
    engine: web::Data<MatchingEngine>,
    owner: AuthenticatedOwner,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AuthError> {
    let request_id = path.into_inner();
    let reference = owner.0.owned(&request_id)?;

    let response = engine.matches_response(reference).await?;

    Ok(HttpResponse::Ok().json(response))
}
