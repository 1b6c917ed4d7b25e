use super::*;

use crate::services::session::UserRecord;

fn auth() -> AuthUser {
    AuthUser { user: UserRecord::from_identifier("alice@example.com") }
}

fn range(raw: Option<&str>) -> Query<RangeQuery> {
    Query(RangeQuery { range: raw.map(str::to_owned) })
}

// =============================================================================
// range validation
// =============================================================================

#[tokio::test]
async fn summary_accepts_missing_range() {
    assert!(summary(auth(), range(None)).await.is_ok());
}

#[tokio::test]
async fn summary_accepts_known_range() {
    assert!(summary(auth(), range(Some("30d"))).await.is_ok());
}

#[tokio::test]
async fn summary_rejects_unknown_range() {
    let err = summary(auth(), range(Some("forever"))).await.err().unwrap();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn monitoring_summary_rejects_unknown_range() {
    let err = monitoring_summary(auth(), range(Some("1y"))).await.err().unwrap();
    assert_eq!(err.0, StatusCode::BAD_REQUEST);
}

// =============================================================================
// payload shapes
// =============================================================================

#[tokio::test]
async fn summary_payload_matches_mock() {
    let Json(payload) = summary(auth(), range(None)).await.unwrap();
    assert_eq!(payload.captcha.total, 45_872);
    assert_eq!(payload.usage.limit, 100_000);
    assert_eq!(payload.type_distribution.len(), 5);
}

#[tokio::test]
async fn activity_returns_five_entries() {
    let Json(entries) = activity(auth()).await;
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].kind, "reCAPTCHA v2");
}

#[tokio::test]
async fn monitoring_summary_has_week_of_daily_points() {
    let Json(payload) = monitoring_summary(auth(), range(Some("7d"))).await.unwrap();
    assert_eq!(payload.daily.len(), 7);
    assert_eq!(payload.response_times.len(), 7);
}

#[tokio::test]
async fn monitoring_captchas_include_website() {
    let Json(captchas) = monitoring_captchas(auth()).await;
    assert_eq!(captchas[0].website, "example.com");
}

#[tokio::test]
async fn usage_summary_endpoints_lead_with_solve() {
    let Json(payload) = usage_summary(auth(), range(None)).await.unwrap();
    assert_eq!(payload.endpoints[0].name, "/solve");
    assert_eq!(payload.endpoints[0].requests, 25_600);
}

#[tokio::test]
async fn usage_calls_serialize_with_ip() {
    let Json(calls) = usage_calls(auth()).await;
    let json = serde_json::to_value(&calls).unwrap();
    assert_eq!(json[0]["ip"], "192.168.1.1");
}

#[tokio::test]
async fn security_summary_payload_matches_mock() {
    let Json(payload) = security_summary(auth(), range(Some("90d"))).await.unwrap();
    assert_eq!(payload.metrics.total_threats, 3_570);
    assert_eq!(payload.monthly.len(), 6);
    assert_eq!(payload.geographic[0].country, "United States");
}
