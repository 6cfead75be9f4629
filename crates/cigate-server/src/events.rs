//! Event handlers.

use actix_web::{
    http::StatusCode,
    web::{self, Bytes},
    HttpRequest, HttpResponse,
};
use cigate_core::{
    handlers::{handle_build_completed_event, handle_pull_request_webhook},
    HandlerResponse,
};
use cigate_models::WebhookRequest;

use crate::{
    constants::{GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_HEADER},
    server::AppContext,
};

fn header_value(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(Into::into)
}

fn into_http_response(response: HandlerResponse) -> HttpResponse {
    let mut builder = HttpResponse::build(
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::OK),
    );
    for (name, value) in response.headers {
        builder.insert_header((name, value));
    }

    builder.body(response.body)
}

#[tracing::instrument(skip_all)]
pub(crate) async fn webhook_route(
    ctx: web::Data<AppContext>,
    req: HttpRequest,
    body: Bytes,
) -> HttpResponse {
    let request = WebhookRequest {
        payload: body.to_vec(),
        signature: header_value(&req, GITHUB_SIGNATURE_HEADER),
        event_type: header_value(&req, GITHUB_EVENT_HEADER),
    };

    into_http_response(handle_pull_request_webhook(&ctx.as_core_context(), &request).await)
}

#[tracing::instrument(skip_all)]
pub(crate) async fn build_events_route(ctx: web::Data<AppContext>, body: Bytes) -> HttpResponse {
    into_http_response(handle_build_completed_event(&ctx.as_core_context(), &body).await)
}
