//! External endpoints and UI timing constants. Every "service" on the page
//! is a separately deployed app we only link to or embed; nothing here is
//! called over an API.

/// Viewport width under which the layout switches to its mobile behavior
/// (fewer particles, no pointer tracking).
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Fixed access token baked into the published dashboard URL.
const DASHBOARD_ACCESS_TOKEN: &str = "eyJrIjoiZjc0NWJiOTktMTIwYS00NGNhLTgzNmEtNDgzNjUzZWU3YTcyIiwidCI6IjQxN2MzYzQxLThiZmItNDY5OS05OTYzLTBiZDFkZjkyZjFmNCJ9";

/// How long the dashboard modal shows its loading placeholder before
/// revealing the embedded frame. The embed gives us no load event we can
/// rely on cross-origin, so this stays a timer heuristic.
pub const DASHBOARD_REVEAL_MS: u32 = 2_000;

pub fn report_analysis_url() -> &'static str {
    "https://report-analyser-two.vercel.app/"
}

pub fn image_analysis_url() -> &'static str {
    "https://5qx7v5deepo4a4rcnefkdi.streamlit.app/"
}

pub fn chatbot_url() -> &'static str {
    "https://image-analysis-new.vercel.app/"
}

pub fn heart_dashboard_embed_url() -> String {
    format!("https://app.powerbi.com/view?r={}", DASHBOARD_ACCESS_TOKEN)
}
