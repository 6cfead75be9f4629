use serde::Serialize;

use crate::PullRequestEvent;

/// Raw webhook delivery, before authentication.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WebhookRequest {
    /// Payload bytes, exactly as received.
    pub payload: Vec<u8>,
    /// `X-Hub-Signature` header.
    pub signature: Option<String>,
    /// `X-GitHub-Event` header.
    pub event_type: Option<String>,
}

/// Why a webhook was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectionReason {
    InvalidSignature,
    IrrelevantEvent,
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::InvalidSignature => "invalid-signature",
            Self::IrrelevantEvent => "irrelevant-event",
        })
    }
}

/// Webhook gate decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    Accepted(PullRequestEvent),
    Rejected(RejectionReason),
}
