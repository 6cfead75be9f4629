pub(crate) mod authenticate_webhook;

pub use authenticate_webhook::AuthenticateWebhookInterface;
#[cfg(any(test, feature = "testkit"))]
pub use authenticate_webhook::MockAuthenticateWebhookInterface;
