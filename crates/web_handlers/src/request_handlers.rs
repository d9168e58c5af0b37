use actix_web::{HttpResponse, Result, web};

use swap_requests::{NewSwapRequest, RequestError, RequestService};

/// Creates a swap request. Returns 201 Created with the new id and the secret
/// code the holder must keep.
pub async fn create_request(
    service: web::Data<RequestService>,
    request: web::Json<NewSwapRequest>,
) -> Result<HttpResponse, RequestError> {
    let response = service.create(&request).await?;

    Ok(HttpResponse::Created().json(response))
}
