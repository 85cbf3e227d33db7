//! Fallback probe integration tests

use routecheck::probes::{FallbackProbe, Probe};

use crate::common::{constants, test_client};
use crate::mocks::{MockRouter, MISSING_MODEL};

#[tokio::test]
async fn test_substituted_model_passes() {
    let router = MockRouter::start().await;
    router.mock_fallback_model("gpt-4o-mini").await;

    let result = FallbackProbe::default().execute(&test_client(&router.uri())).await;

    assert!(result.success);
    assert_eq!(result.name, "fallback_mechanism");
    assert_eq!(result.message, "Fallback working correctly");
    assert_eq!(result.model_used.as_deref(), Some("gpt-4o-mini"));
}

#[tokio::test]
async fn test_service_unavailable_fails_with_status() {
    let router = MockRouter::start().await;
    router.mock_fallback_status(503).await;

    let result = FallbackProbe::default().execute(&test_client(&router.uri())).await;

    assert!(!result.success);
    assert!(result.message.contains("503"));
    assert_eq!(result.message, "Fallback failed with status 503");
}

#[tokio::test]
async fn test_not_found_model_fails() {
    let router = MockRouter::start().await;
    router.mock_fallback_status(404).await;

    let result = FallbackProbe::default().execute(&test_client(&router.uri())).await;

    assert!(!result.success);
    assert!(result.message.contains("404"));
}

#[tokio::test]
async fn test_non_json_success_still_passes() {
    // Only the status matters for fallback
    let router = MockRouter::start().await;
    router.mock_chat_raw(200, "ok").await;

    let result = FallbackProbe::default().execute(&test_client(&router.uri())).await;

    assert!(result.success);
    assert!(result.model_used.is_none());
}

#[tokio::test]
async fn test_unreachable_router() {
    let result = FallbackProbe::default()
        .execute(&test_client(constants::UNREACHABLE_URL))
        .await;

    assert!(!result.success);
    assert!(result.message.starts_with("Fallback test error"));
}

#[tokio::test]
async fn test_request_flags_fallback() {
    let router = MockRouter::start().await;
    router.mock_fallback_model("gpt-4o-mini").await;

    FallbackProbe::default().execute(&test_client(&router.uri())).await;

    let bodies = router.chat_request_bodies().await;
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["model"], MISSING_MODEL);
    assert_eq!(bodies[0]["metadata"]["force_fallback"], true);
}
