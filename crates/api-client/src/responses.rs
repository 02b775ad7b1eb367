use serde::Deserialize;

// `#[serde(rename_all = "camelCase")]` maps the provider's camelCase keys to snake_case fields.

/// The envelope of `GET /v8/finance/chart/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<ProviderError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Bar open times, in UNIX seconds. Missing entirely when the range holds no bars.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    /// Seconds east of UTC for the listing exchange.
    #[serde(default)]
    pub gmtoffset: i64,
    #[serde(default)]
    pub regular_market_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
    #[serde(default)]
    pub adjclose: Vec<ChartAdjClose>,
}

/// Column-oriented OHLCV arrays. Yahoo emits `null` for bars it has no value for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChartQuote {
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<i64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChartAdjClose {
    pub adjclose: Vec<Option<f64>>,
}

/// The envelope of `GET /v10/finance/quoteSummary/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummaryData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuoteSummaryData {
    #[serde(default)]
    pub result: Option<Vec<QuoteSummaryResult>>,
    #[serde(default)]
    pub error: Option<ProviderError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteSummaryResult {
    pub price: Option<PriceModule>,
    pub summary_detail: Option<SummaryDetailModule>,
    pub asset_profile: Option<AssetProfileModule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceModule {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
    pub regular_market_price: Option<RawValue>,
    pub regular_market_open: Option<RawValue>,
    pub regular_market_previous_close: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryDetailModule {
    pub previous_close: Option<RawValue>,
    pub open: Option<RawValue>,
    pub beta: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetProfileModule {
    pub long_business_summary: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
}

/// Yahoo wraps numbers as `{"raw": 1.23, "fmt": "1.23"}`, and sends `{}` when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawValue {
    pub raw: Option<f64>,
}

impl RawValue {
    pub fn value(&self) -> Option<f64> {
        self.raw.filter(|v| v.is_finite())
    }
}

/// The error object both endpoints embed instead of a result.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderError {
    pub code: String,
    #[serde(default)]
    pub description: String,
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        self.code.eq_ignore_ascii_case("Not Found")
    }
}
