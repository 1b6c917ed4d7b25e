//! Mock dashboard datasets.
//!
//! ARCHITECTURE
//! ============
//! The dashboard this service backs is a demo: every figure is a fixed
//! constant reproducing the hosted mock, regardless of the selected time
//! range. Routes call these constructors per request; nothing is cached or
//! mutated.

use serde::Serialize;

// =============================================================================
// TIME RANGE
// =============================================================================

/// Time-range selector accepted by the dashboard endpoints. Validated but
/// purely cosmetic: the mock datasets do not vary by range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Quarter,
}

impl TimeRange {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "24h" => Some(Self::Day),
            "7d" => Some(Self::Week),
            "30d" => Some(Self::Month),
            "90d" => Some(Self::Quarter),
            _ => None,
        }
    }
}

// =============================================================================
// DASHBOARD HOME / CAPTCHA MONITORING
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CaptchaStats {
    pub total: u64,
    pub solved: u64,
    pub failed: u64,
    pub success_rate: f64,
    pub trend: &'static str,
    pub trend_value: f64,
}

#[must_use]
pub fn captcha_stats() -> CaptchaStats {
    CaptchaStats {
        total: 45_872,
        solved: 45_231,
        failed: 641,
        success_rate: 98.6,
        trend: "up",
        trend_value: 2.4,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseTimeStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub trend: &'static str,
    pub trend_value: f64,
}

#[must_use]
pub fn response_time_stats() -> ResponseTimeStats {
    ResponseTimeStats { average: 3.2, min: 0.8, max: 12.5, trend: "down", trend_value: 0.5 }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageStats {
    pub current: u64,
    pub limit: u64,
    pub percentage: f64,
    pub days_left: u32,
}

#[must_use]
pub fn usage_stats() -> UsageStats {
    UsageStats { current: 45_872, limit: 100_000, percentage: 45.9, days_left: 12 }
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeSlice {
    pub name: &'static str,
    pub count: u64,
    pub percentage: f64,
}

#[must_use]
pub fn captcha_type_distribution() -> Vec<TypeSlice> {
    vec![
        TypeSlice { name: "reCAPTCHA v2", count: 22_546, percentage: 49.2 },
        TypeSlice { name: "reCAPTCHA v3", count: 12_453, percentage: 27.1 },
        TypeSlice { name: "hCaptcha", count: 6_234, percentage: 13.6 },
        TypeSlice { name: "FunCaptcha", count: 2_987, percentage: 6.5 },
        TypeSlice { name: "Other", count: 1_652, percentage: 3.6 },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityEntry {
    pub id: u32,
    pub kind: &'static str,
    pub status: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
}

#[must_use]
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry { id: 1, kind: "reCAPTCHA v2", status: "success", time: "2 min ago", duration: "2.1s" },
        ActivityEntry { id: 2, kind: "hCaptcha", status: "success", time: "5 min ago", duration: "3.5s" },
        ActivityEntry { id: 3, kind: "reCAPTCHA v3", status: "success", time: "8 min ago", duration: "1.2s" },
        ActivityEntry { id: 4, kind: "FunCaptcha", status: "failed", time: "15 min ago", duration: "12.0s" },
        ActivityEntry { id: 5, kind: "Text Captcha", status: "success", time: "22 min ago", duration: "0.9s" },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyPoint {
    pub date: &'static str,
    pub solved: u64,
    pub failed: u64,
}

#[must_use]
pub fn daily_solved() -> Vec<DailyPoint> {
    vec![
        DailyPoint { date: "01/06", solved: 5_200, failed: 120 },
        DailyPoint { date: "02/06", solved: 5_800, failed: 150 },
        DailyPoint { date: "03/06", solved: 5_400, failed: 100 },
        DailyPoint { date: "04/06", solved: 6_700, failed: 180 },
        DailyPoint { date: "05/06", solved: 6_200, failed: 160 },
        DailyPoint { date: "06/06", solved: 7_100, failed: 140 },
        DailyPoint { date: "07/06", solved: 8_100, failed: 190 },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ResponseTimePoint {
    pub time: &'static str,
    pub value: f64,
}

#[must_use]
pub fn response_time_series() -> Vec<ResponseTimePoint> {
    vec![
        ResponseTimePoint { time: "00:00", value: 2.8 },
        ResponseTimePoint { time: "04:00", value: 2.5 },
        ResponseTimePoint { time: "08:00", value: 3.2 },
        ResponseTimePoint { time: "12:00", value: 4.1 },
        ResponseTimePoint { time: "16:00", value: 3.8 },
        ResponseTimePoint { time: "20:00", value: 3.0 },
        ResponseTimePoint { time: "23:59", value: 2.7 },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentCaptcha {
    pub id: u32,
    pub kind: &'static str,
    pub status: &'static str,
    pub time: &'static str,
    pub duration: &'static str,
    pub website: &'static str,
}

#[must_use]
pub fn recent_captchas() -> Vec<RecentCaptcha> {
    vec![
        RecentCaptcha { id: 1, kind: "reCAPTCHA v2", status: "success", time: "14:32:45", duration: "2.1s", website: "example.com" },
        RecentCaptcha { id: 2, kind: "hCaptcha", status: "success", time: "14:30:12", duration: "3.5s", website: "test-site.org" },
        RecentCaptcha { id: 3, kind: "reCAPTCHA v3", status: "success", time: "14:28:55", duration: "1.2s", website: "shop.example.com" },
        RecentCaptcha { id: 4, kind: "FunCaptcha", status: "failed", time: "14:25:33", duration: "12.0s", website: "secure-portal.com" },
        RecentCaptcha { id: 5, kind: "reCAPTCHA v2", status: "success", time: "14:22:18", duration: "2.8s", website: "login.example.org" },
    ]
}

// =============================================================================
// API USAGE
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DailyUsagePoint {
    pub date: &'static str,
    pub requests: u64,
    pub errors: u64,
}

#[must_use]
pub fn daily_usage() -> Vec<DailyUsagePoint> {
    vec![
        DailyUsagePoint { date: "01/06", requests: 4_500, errors: 120 },
        DailyUsagePoint { date: "02/06", requests: 5_200, errors: 150 },
        DailyUsagePoint { date: "03/06", requests: 4_800, errors: 100 },
        DailyUsagePoint { date: "04/06", requests: 6_100, errors: 180 },
        DailyUsagePoint { date: "05/06", requests: 5_700, errors: 160 },
        DailyUsagePoint { date: "06/06", requests: 6_500, errors: 140 },
        DailyUsagePoint { date: "07/06", requests: 7_200, errors: 190 },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointUsage {
    pub name: &'static str,
    pub requests: u64,
    pub percentage: u32,
}

#[must_use]
pub fn endpoint_usage() -> Vec<EndpointUsage> {
    vec![
        EndpointUsage { name: "/solve", requests: 25_600, percentage: 56 },
        EndpointUsage { name: "/status", requests: 12_400, percentage: 27 },
        EndpointUsage { name: "/balance", requests: 4_500, percentage: 10 },
        EndpointUsage { name: "/report", requests: 2_100, percentage: 5 },
        EndpointUsage { name: "/other", requests: 900, percentage: 2 },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiCall {
    pub id: u32,
    pub endpoint: &'static str,
    pub method: &'static str,
    pub status: u16,
    pub time: &'static str,
    pub duration: &'static str,
    pub ip: &'static str,
}

#[must_use]
pub fn recent_api_calls() -> Vec<ApiCall> {
    vec![
        ApiCall { id: 1, endpoint: "/solve", method: "POST", status: 200, time: "14:32:45", duration: "2.1s", ip: "192.168.1.1" },
        ApiCall { id: 2, endpoint: "/status", method: "GET", status: 200, time: "14:30:12", duration: "0.8s", ip: "192.168.1.2" },
        ApiCall { id: 3, endpoint: "/solve", method: "POST", status: 200, time: "14:28:55", duration: "2.5s", ip: "192.168.1.3" },
        ApiCall { id: 4, endpoint: "/balance", method: "GET", status: 200, time: "14:25:33", duration: "0.7s", ip: "192.168.1.4" },
        ApiCall { id: 5, endpoint: "/solve", method: "POST", status: 400, time: "14:22:18", duration: "1.9s", ip: "192.168.1.5" },
    ]
}

// =============================================================================
// SECURITY ANALYTICS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ThreatSlice {
    pub name: &'static str,
    pub value: u32,
}

#[must_use]
pub fn threat_distribution() -> Vec<ThreatSlice> {
    vec![
        ThreatSlice { name: "Simple Bots", value: 45 },
        ThreatSlice { name: "Advanced Bots", value: 30 },
        ThreatSlice { name: "Targeted Attacks", value: 15 },
        ThreatSlice { name: "Other", value: 10 },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyThreats {
    pub month: &'static str,
    pub threats: u64,
    pub blocked: u64,
}

#[must_use]
pub fn monthly_threats() -> Vec<MonthlyThreats> {
    vec![
        MonthlyThreats { month: "Jan", threats: 320, blocked: 315 },
        MonthlyThreats { month: "Feb", threats: 280, blocked: 270 },
        MonthlyThreats { month: "Mar", threats: 420, blocked: 410 },
        MonthlyThreats { month: "Apr", threats: 380, blocked: 375 },
        MonthlyThreats { month: "May", threats: 520, blocked: 510 },
        MonthlyThreats { month: "Jun", threats: 480, blocked: 470 },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoEntry {
    pub country: &'static str,
    pub attempts: u64,
    pub percentage: u32,
}

#[must_use]
pub fn geographic_breakdown() -> Vec<GeoEntry> {
    vec![
        GeoEntry { country: "United States", attempts: 1_250, percentage: 35 },
        GeoEntry { country: "China", attempts: 850, percentage: 24 },
        GeoEntry { country: "Russia", attempts: 620, percentage: 17 },
        GeoEntry { country: "Brazil", attempts: 320, percentage: 9 },
        GeoEntry { country: "India", attempts: 280, percentage: 8 },
        GeoEntry { country: "Other", attempts: 250, percentage: 7 },
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityMetrics {
    pub total_threats: u64,
    pub blocked_threats: u64,
    pub success_rate: f64,
    pub avg_response_time: f64,
}

#[must_use]
pub fn security_metrics() -> SecurityMetrics {
    SecurityMetrics {
        total_threats: 3_570,
        blocked_threats: 3_520,
        success_rate: 98.6,
        avg_response_time: 0.8,
    }
}

#[cfg(test)]
#[path = "metrics_test.rs"]
mod tests;
