use async_trait::async_trait;
use cigate_build_interface::types::StartedBuild;
use cigate_crypto::encode_uri;
use cigate_models::{BuildDispatchRequest, CommitState, PullRequestEvent};
use shaku::{Component, Interface};
use tracing::error;

use crate::{CoreContext, DomainError, Result};

const LOG_LINK_PLACEHOLDER: &str = "null";

/// What happened to the build start call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Started(StartedBuild),
    Failed { message: String },
}

/// Commit status to publish after a dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub state: CommitState,
    pub target_url: String,
    pub outcome: DispatchOutcome,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DispatchBuildInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: &PullRequestEvent)
        -> Result<DispatchResult>;
}

#[derive(Component)]
#[shaku(interface = DispatchBuildInterface)]
pub(crate) struct DispatchBuild;

#[async_trait]
impl DispatchBuildInterface for DispatchBuild {
    #[tracing::instrument(
        skip_all,
        fields(
            repo_name = %event.repo_name,
            pr_number = event.pr_number,
            commit_id = %event.commit_id
        ),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &PullRequestEvent,
    ) -> Result<DispatchResult> {
        let parameters = BuildDispatchRequest::from(event).to_parameters();

        match ctx
            .build_service
            .builds_start(&ctx.config.build.project_name, &parameters)
            .await
        {
            Ok(build) => {
                let (build_name, build_id) = build.split_id();
                let target_url = encode_uri(&resolve_log_link(
                    &build.log_deep_link,
                    &format!("{}{}", ctx.config.build.log_group_prefix, build_name),
                    build_id,
                ));

                Ok(DispatchResult {
                    state: CommitState::Pending,
                    target_url,
                    outcome: DispatchOutcome::Started(build),
                })
            }
            Err(e) => {
                let e = DomainError::BuildDispatchFailed { source: e };
                error!(message = "Could not start build", error = %e);

                Ok(DispatchResult {
                    state: CommitState::Failure,
                    target_url: ctx.config.build.failure_url.clone(),
                    outcome: DispatchOutcome::Failed {
                        message: e.to_string(),
                    },
                })
            }
        }
    }
}

/// Substitute the two placeholders of a log link template: the first one with
/// the log group, the second one with the build id.
///
/// Placeholders are located in the template before substitution, so values
/// containing the placeholder text are never substituted again.
fn resolve_log_link(template: &str, log_group: &str, build_id: &str) -> String {
    let mut parts = template.splitn(3, LOG_LINK_PLACEHOLDER);
    let mut link = parts.next().unwrap_or_default().to_string();
    for (value, part) in [log_group, build_id].into_iter().zip(parts) {
        link.push_str(value);
        link.push_str(part);
    }

    link
}

#[cfg(test)]
mod tests {
    use cigate_build_interface::{BuildError, MockBuildService};
    use cigate_models::{BuildParameter, PullRequestAction};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CoreContextTest;

    const LOG_LINK: &str = "https://console.aws.amazon.com/cloudwatch/home?region=us-east-1#logEvent:group=null;stream=null";

    fn event() -> PullRequestEvent {
        PullRequestEvent {
            action: PullRequestAction::Opened,
            repo_name: "repo-x".into(),
            branch_name: "feature-1".into(),
            commit_id: "abc123".into(),
            pr_number: 12,
        }
    }

    #[test]
    fn resolve_placeholders_in_order() {
        assert_eq!(
            resolve_log_link(LOG_LINK, "/aws/codebuild/proj", "123"),
            "https://console.aws.amazon.com/cloudwatch/home?region=us-east-1#logEvent:group=/aws/codebuild/proj;stream=123"
        );
    }

    #[test]
    fn resolve_placeholder_text_in_values() {
        assert_eq!(
            resolve_log_link("group=null;stream=null", "null-proj", "null"),
            "group=null-proj;stream=null"
        );
    }

    #[test]
    fn resolve_missing_placeholders() {
        assert_eq!(resolve_log_link("group=null", "proj", "1"), "group=proj");
        assert_eq!(resolve_log_link("nothing", "proj", "1"), "nothing");
    }

    #[tokio::test]
    async fn run_started() {
        let mut ctx = CoreContextTest::new();
        ctx.build_service = {
            let mut svc = MockBuildService::new();
            svc.expect_builds_start()
                .once()
                .withf(|project, parameters| {
                    project == "proj"
                        && parameters.to_vec()
                            == vec![
                                BuildParameter {
                                    name: "REPO".into(),
                                    value: "repo-x".into(),
                                },
                                BuildParameter {
                                    name: "BRANCH_NAME".into(),
                                    value: "feature-1".into(),
                                },
                                BuildParameter {
                                    name: "PR_NUMBER".into(),
                                    value: "12".into(),
                                },
                                BuildParameter {
                                    name: "COMMIT_ID".into(),
                                    value: "abc123".into(),
                                },
                            ]
                })
                .return_once(|_, _| {
                    Ok(StartedBuild {
                        id: "proj:123".into(),
                        log_deep_link: LOG_LINK.into(),
                    })
                });
            svc
        };

        let result = DispatchBuild
            .run(&ctx.as_context(), &event())
            .await
            .unwrap();

        assert_eq!(result.state, CommitState::Pending);
        assert_eq!(
            result.target_url,
            "https://console.aws.amazon.com/cloudwatch/home?region=us-east-1#logEvent:group=/aws/codebuild/proj;stream=123"
        );
        assert!(!result.target_url.contains("null"));
        assert!(matches!(result.outcome, DispatchOutcome::Started(_)));
    }

    #[tokio::test]
    async fn run_target_url_is_percent_encoded() {
        let mut ctx = CoreContextTest::new();
        ctx.build_service = {
            let mut svc = MockBuildService::new();
            svc.expect_builds_start().once().return_once(|_, _| {
                Ok(StartedBuild {
                    id: "my proj:4 5".into(),
                    log_deep_link: "https://logs/null/null".into(),
                })
            });
            svc
        };

        let result = DispatchBuild
            .run(&ctx.as_context(), &event())
            .await
            .unwrap();

        assert_eq!(
            result.target_url,
            "https://logs//aws/codebuild/my%20proj/4%205"
        );
    }

    #[tokio::test]
    async fn run_failed() {
        let mut ctx = CoreContextTest::new();
        ctx.build_service = {
            let mut svc = MockBuildService::new();
            svc.expect_builds_start().once().return_once(|_, _| {
                Err(BuildError::Rejected {
                    message: "ResourceNotFoundException: Project not found".into(),
                })
            });
            svc
        };

        let result = DispatchBuild
            .run(&ctx.as_context(), &event())
            .await
            .unwrap();

        assert_eq!(
            result,
            DispatchResult {
                state: CommitState::Failure,
                target_url: "https://console.aws.amazon.com/cloudwatch/home".into(),
                outcome: DispatchOutcome::Failed {
                    message: "Build dispatch failed: Build service rejected the request: \
                              ResourceNotFoundException: Project not found"
                        .into()
                }
            }
        );
    }
}
