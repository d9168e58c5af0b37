use actix_web::{HttpResponse, Result, web};
use validator::Validate;

use auth_services::types::{SecurityRecoveryRequest, SecurityRecoveryResponse};
use auth_services::{AuthError, IdentityGate};
use notification_services::RecoveryService;
use notification_services::types::{RecoverSecretCodeRequest, RecoveryError, RecoveryResponse};

/// Texts the secret code to the phone on file. The response only reports
/// whether the message went out.
pub async fn recover_by_sms(
    recovery_service: web::Data<RecoveryService>,
    request: web::Json<RecoverSecretCodeRequest>,
) -> Result<HttpResponse, RecoveryError> {
    request.validate()?;

    recovery_service.recover(&request.phone).await?;

    Ok(HttpResponse::Ok().json(RecoveryResponse::sent()))
}

/// Discloses the secret code to a holder who answers their security question.
pub async fn recover_with_security_question(
    gate: web::Data<IdentityGate>,
    request: web::Json<SecurityRecoveryRequest>,
) -> Result<HttpResponse, AuthError> {
    let secret_code = gate.recover_with_security_question(&request).await?;

    Ok(HttpResponse::Ok().json(SecurityRecoveryResponse { secret_code }))
}
