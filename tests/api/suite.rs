use drishti_smoke::Suite;
use wiremock::ResponseTemplate;

use crate::helpers::{unreachable_config, FakeBackend};

static EXPECTED_ORDER: [&str; 7] = [
    "Health Check",
    "Authentication",
    "Training Partners - List",
    "Students - List",
    "Batches - List",
    "Placements - List",
    "GSTN Integration",
];

#[tokio::test]
async fn a_healthy_backend_passes_all_seven_checks() {
    let backend = FakeBackend::spawn().await;
    backend.all_endpoints_up("sesame").await;

    let report = backend.run_suite().await;

    assert_eq!(7, report.total());
    assert_eq!(7, report.passed());
    assert!(report.all_passed());
}

#[tokio::test]
async fn one_result_is_recorded_per_check_in_the_fixed_order() {
    let backend = FakeBackend::spawn().await;
    backend.all_endpoints_up("sesame").await;

    let report = backend.run_suite().await;

    let names = report
        .results()
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(EXPECTED_ORDER.to_vec(), names);
}

#[tokio::test]
async fn an_unreachable_backend_fails_every_check() {
    let report = Suite::new(unreachable_config()).run().await;

    assert_eq!(7, report.total());
    assert_eq!(0, report.passed());
    assert!(!report.all_passed());
}

#[tokio::test]
async fn outcomes_are_stable_across_runs_against_an_unchanged_backend() {
    let backend = FakeBackend::spawn().await;
    backend.healthy().await;
    backend
        .login_responds(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .await;
    backend.listing("/api/training-partners", 1).await;
    backend.listing("/api/students", 4).await;
    backend.gstn_verify_responds(404).await;

    let first = backend.run_suite().await;
    let second = backend.run_suite().await;

    let outcomes = |report: &drishti_smoke::RunReport| {
        report
            .results()
            .iter()
            .map(|r| (r.name.clone(), r.passed, r.message.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(outcomes(&first), outcomes(&second));
}
