//! Dashboard data routes — home summary, captcha monitoring, API usage,
//! security analytics. All payloads come from the fixed mock datasets.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use super::auth::AuthUser;
use crate::services::metrics;

/// Optional `?range=` selector shared by the dashboard endpoints. Unknown
/// values are rejected; known ones are accepted and ignored (the mock data
/// does not vary by range).
#[derive(Deserialize)]
pub struct RangeQuery {
    range: Option<String>,
}

fn check_range(query: &RangeQuery) -> Result<(), (StatusCode, &'static str)> {
    match &query.range {
        None => Ok(()),
        Some(raw) => match metrics::TimeRange::parse(raw) {
            Some(_) => Ok(()),
            None => Err((StatusCode::BAD_REQUEST, "unknown range, expected 24h, 7d, 30d or 90d")),
        },
    }
}

// =============================================================================
// DASHBOARD HOME
// =============================================================================

#[derive(Serialize)]
pub struct DashboardSummary {
    pub captcha: metrics::CaptchaStats,
    pub response_time: metrics::ResponseTimeStats,
    pub usage: metrics::UsageStats,
    pub type_distribution: Vec<metrics::TypeSlice>,
}

/// `GET /api/dashboard/summary`
pub async fn summary(
    _auth: AuthUser,
    Query(query): Query<RangeQuery>,
) -> Result<Json<DashboardSummary>, (StatusCode, &'static str)> {
    check_range(&query)?;
    Ok(Json(DashboardSummary {
        captcha: metrics::captcha_stats(),
        response_time: metrics::response_time_stats(),
        usage: metrics::usage_stats(),
        type_distribution: metrics::captcha_type_distribution(),
    }))
}

/// `GET /api/dashboard/activity`
pub async fn activity(_auth: AuthUser) -> Json<Vec<metrics::ActivityEntry>> {
    Json(metrics::recent_activity())
}

// =============================================================================
// CAPTCHA MONITORING
// =============================================================================

#[derive(Serialize)]
pub struct MonitoringSummary {
    pub captcha: metrics::CaptchaStats,
    pub type_distribution: Vec<metrics::TypeSlice>,
    pub daily: Vec<metrics::DailyPoint>,
    pub response_times: Vec<metrics::ResponseTimePoint>,
}

/// `GET /api/monitoring/summary`
pub async fn monitoring_summary(
    _auth: AuthUser,
    Query(query): Query<RangeQuery>,
) -> Result<Json<MonitoringSummary>, (StatusCode, &'static str)> {
    check_range(&query)?;
    Ok(Json(MonitoringSummary {
        captcha: metrics::captcha_stats(),
        type_distribution: metrics::captcha_type_distribution(),
        daily: metrics::daily_solved(),
        response_times: metrics::response_time_series(),
    }))
}

/// `GET /api/monitoring/captchas`
pub async fn monitoring_captchas(_auth: AuthUser) -> Json<Vec<metrics::RecentCaptcha>> {
    Json(metrics::recent_captchas())
}

// =============================================================================
// API USAGE
// =============================================================================

#[derive(Serialize)]
pub struct UsageSummary {
    pub daily: Vec<metrics::DailyUsagePoint>,
    pub endpoints: Vec<metrics::EndpointUsage>,
    pub response_times: Vec<metrics::ResponseTimePoint>,
}

/// `GET /api/usage/summary`
pub async fn usage_summary(
    _auth: AuthUser,
    Query(query): Query<RangeQuery>,
) -> Result<Json<UsageSummary>, (StatusCode, &'static str)> {
    check_range(&query)?;
    Ok(Json(UsageSummary {
        daily: metrics::daily_usage(),
        endpoints: metrics::endpoint_usage(),
        response_times: metrics::response_time_series(),
    }))
}

/// `GET /api/usage/calls`
pub async fn usage_calls(_auth: AuthUser) -> Json<Vec<metrics::ApiCall>> {
    Json(metrics::recent_api_calls())
}

// =============================================================================
// SECURITY ANALYTICS
// =============================================================================

#[derive(Serialize)]
pub struct SecuritySummary {
    pub metrics: metrics::SecurityMetrics,
    pub threat_distribution: Vec<metrics::ThreatSlice>,
    pub monthly: Vec<metrics::MonthlyThreats>,
    pub geographic: Vec<metrics::GeoEntry>,
}

/// `GET /api/analytics/security`
pub async fn security_summary(
    _auth: AuthUser,
    Query(query): Query<RangeQuery>,
) -> Result<Json<SecuritySummary>, (StatusCode, &'static str)> {
    check_range(&query)?;
    Ok(Json(SecuritySummary {
        metrics: metrics::security_metrics(),
        threat_distribution: metrics::threat_distribution(),
        monthly: metrics::monthly_threats(),
        geographic: metrics::geographic_breakdown(),
    }))
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
