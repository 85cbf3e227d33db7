//! Vision probe integration tests

use std::sync::Arc;

use routecheck::probes::{Probe, VisionProbe};
use routecheck::TierRegistry;

use crate::common::test_client;
use crate::mocks::MockRouter;

fn vision_probe() -> VisionProbe {
    VisionProbe::new(
        VisionProbe::NAME,
        VisionProbe::PROMPT,
        Arc::new(TierRegistry::default()),
    )
}

#[tokio::test]
async fn test_vision_model_passes() {
    let router = MockRouter::start().await;
    router.mock_chat_model("gpt-4-vision-preview").await;

    let result = vision_probe().execute(&test_client(&router.uri())).await;

    assert!(result.success);
    assert_eq!(
        result.message,
        "Correctly routed to vision model: gpt-4-vision-preview"
    );
    assert_eq!(result.model_used.as_deref(), Some("gpt-4-vision-preview"));
}

#[tokio::test]
async fn test_text_only_model_fails() {
    let router = MockRouter::start().await;
    router.mock_chat_model("deepseek-coder").await;

    let result = vision_probe().execute(&test_client(&router.uri())).await;

    assert!(!result.success);
    assert_eq!(result.message, "Wrong model for vision: deepseek-coder");
    assert_eq!(result.model_used.as_deref(), Some("deepseek-coder"));
}

#[tokio::test]
async fn test_registry_markers_are_honoured() {
    let router = MockRouter::start().await;
    router.mock_chat_model("gemini-pro-1.5").await;

    let registry = TierRegistry {
        vision_markers: vec!["gemini-pro".to_string()],
        ..TierRegistry::default()
    };
    let probe = VisionProbe::new(VisionProbe::NAME, VisionProbe::PROMPT, Arc::new(registry));

    assert!(probe.execute(&test_client(&router.uri())).await.success);
}

#[tokio::test]
async fn test_error_status_fails() {
    let router = MockRouter::start().await;
    router.mock_chat_raw(400, r#"{"error": "image not supported"}"#).await;

    let result = vision_probe().execute(&test_client(&router.uri())).await;

    assert!(!result.success);
    assert!(result.message.starts_with("Vision routing test failed"));
    assert!(result.message.contains("400"));
}

#[tokio::test]
async fn test_request_is_multimodal() {
    let router = MockRouter::start().await;
    router.mock_chat_model_for_task("vision_analysis", "llama-vision-11b").await;

    let result = vision_probe().execute(&test_client(&router.uri())).await;
    assert!(result.success);

    let bodies = router.chat_request_bodies().await;
    let content = &bodies[0]["messages"][0]["content"];
    assert_eq!(content[0]["type"], "text");
    assert_eq!(content[0]["text"], "What is in this image?");
    assert_eq!(content[1]["type"], "image_url");
    assert_eq!(content[1]["image_url"]["url"], "https://example.com/test.jpg");
}
