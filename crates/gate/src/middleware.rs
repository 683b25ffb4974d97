use super::*;
use actix_web::HttpResponse;
use actix_web::body::EitherBody;
use actix_web::dev::Service;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::dev::Transform;
use actix_web::dev::forward_ready;
use actix_web::http::header;
use ath_auth::cookie;
use futures::future::LocalBoxFuture;
use std::future::Ready;
use std::future::ready;
use std::rc::Rc;
use std::sync::Arc;

/// Middleware that runs every request through the [`Gate`] before routing.
#[derive(Clone)]
pub struct Guard {
    gate: Arc<Gate>,
}

impl Guard {
    pub fn new(gate: Arc<Gate>) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for Guard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Transform = GuardMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(GuardMiddleware {
            service: Rc::new(service),
            gate: Arc::clone(&self.gate),
        }))
    }
}

pub struct GuardMiddleware<S> {
    service: Rc<S>,
    gate: Arc<Gate>,
}

impl<S, B> Service<ServiceRequest> for GuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = Arc::clone(&self.gate);
        Box::pin(async move {
            // Decoded path, as the router will match it.
            let path = req.match_info().as_str().to_owned();
            let token = cookie::read(req.request());
            match gate.judge(&path, token.as_deref()).await {
                Decision::Continue => service.call(req).await.map(ServiceResponse::map_into_left_body),
                Decision::ContinueStrip => {
                    let mut res = service.call(req).await?;
                    res.response_mut().add_cookie(&cookie::crumble())?;
                    Ok(res.map_into_left_body())
                }
                Decision::Redirect(target) => Ok(req.into_response(redirect(&target, false)).map_into_right_body()),
                Decision::RedirectStrip(target) => Ok(req.into_response(redirect(&target, true)).map_into_right_body()),
            }
        })
    }
}

fn redirect(target: &str, strip: bool) -> HttpResponse {
    let mut response = HttpResponse::TemporaryRedirect();
    response.insert_header((header::LOCATION, target));
    if strip {
        response.cookie(cookie::crumble());
    }
    response.finish()
}
