use actix_web::{
    Error, HttpMessage, ResponseError, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::HeaderMap,
    web,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{Ready, ready},
    rc::Rc,
};

use crate::service::IdentityGate;
use crate::types::{AuthError, OwnerCredentials, OwnerSession};

/// Header carrying the holder's phone number.
pub const PHONE_HEADER: &str = "X-Phone";
/// Header carrying the holder's secret code.
pub const SECRET_CODE_HEADER: &str = "X-Secret-Code";

/// Middleware that authenticates every request on a scope with the phone and
/// secret code headers. The resulting [`OwnerSession`] is stored in the request
/// extensions for the [`AuthenticatedOwner`] extractor.
///
/// Requires a `web::Data<IdentityGate>` in the application data.
pub struct CredentialMiddleware;

impl<S, B> Transform<S, ServiceRequest> for CredentialMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CredentialMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CredentialMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

/// Service that implements the credential middleware logic
pub struct CredentialMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CredentialMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let Some(credentials) = credentials_from_headers(req.headers()) else {
                let response = AuthError::MissingCredentials.error_response();
                return Ok(req.into_response(response).map_into_right_body());
            };

            let Some(gate) = req.app_data::<web::Data<IdentityGate>>().cloned() else {
                log::error!("❌ IdentityGate is not registered as application data");
                return Err(actix_web::error::ErrorInternalServerError(
                    "Identity gate unavailable",
                ));
            };

            let session = match gate.authenticate(&credentials).await {
                Ok(session) => session,
                Err(e) => {
                    let response = e.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(session);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// Reads both credential headers; `None` if either is missing or not UTF-8.
pub fn credentials_from_headers(headers: &HeaderMap) -> Option<OwnerCredentials> {
    let phone = headers.get(PHONE_HEADER)?.to_str().ok()?;
    let secret_code = headers.get(SECRET_CODE_HEADER)?.to_str().ok()?;
    Some(OwnerCredentials::new(phone, secret_code))
}

/// Custom extractor for the authenticated owner session
pub struct AuthenticatedOwner(pub OwnerSession);

impl actix_web::FromRequest for AuthenticatedOwner {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let session = req.extensions().get::<OwnerSession>().cloned();

        ready(match session {
            Some(session) => Ok(AuthenticatedOwner(session)),
            None => Err(AuthError::MissingCredentials.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        map
    }

    #[test]
    fn test_credentials_from_headers() {
        let map = headers(&[("x-phone", "08012345678"), ("x-secret-code", "abcd")]);
        assert_eq!(
            credentials_from_headers(&map),
            Some(OwnerCredentials::new("08012345678", "abcd"))
        );
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(credentials_from_headers(&headers(&[("x-phone", "08012345678")])), None);
        assert_eq!(credentials_from_headers(&headers(&[("x-secret-code", "abcd")])), None);
    }
}
