use crate::MarketDataSource;
use crate::error::ApiError;
use crate::responses::{ChartResponse, ChartResult, QuoteSummaryResponse, RawValue};
use async_trait::async_trait;
use chrono::DateTime;
use configuration::DataSourceConfig;
use core_types::{FetchedHistory, InstrumentMetadata, Interval, PriceHistory, PricePoint, Symbol};
use reqwest::StatusCode;
use rust_decimal::prelude::*;
use std::time::Duration;
use tokio::sync::Mutex;

const SUMMARY_MODULES: &str = "price,summaryDetail,assetProfile";
/// Yahoo floats carry binary noise past the fourth decimal.
const PRICE_DP: u32 = 4;

/// A `MarketDataSource` backed by Yahoo Finance's public chart and quoteSummary endpoints.
///
/// The quoteSummary endpoint only answers requests that carry a session cookie
/// and the matching "crumb" token. Both are obtained lazily on first use, kept
/// for the lifetime of the client, and refreshed once if the provider rejects them.
pub struct YahooClient {
    client: reqwest::Client,
    base_url: String,
    auth_url: String,
    crumb: Mutex<Option<String>>,
}

impl YahooClient {
    pub fn new(config: &DataSourceConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_url: config.auth_url.clone(),
            crumb: Mutex::new(None),
        })
    }

    /// Returns the session crumb, fetching a new one when absent or when `refresh` is set.
    async fn crumb(&self, refresh: bool) -> Result<String, ApiError> {
        let mut guard = self.crumb.lock().await;
        if !refresh {
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        // The cookie page answers 404 but still sets the session cookie.
        self.client.get(&self.auth_url).send().await?;

        let response = self
            .client
            .get(format!("{}/v1/test/getcrumb", self.base_url))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        let crumb = body.trim();

        if !status.is_success() || crumb.is_empty() || crumb.contains('<') || crumb.contains(' ')
        {
            return Err(ApiError::DataSourceUnavailable(format!(
                "could not obtain a session crumb (status {})",
                status
            )));
        }

        tracing::debug!("obtained a new provider session crumb");
        *guard = Some(crumb.to_string());
        Ok(crumb.to_string())
    }

    async fn get_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<(StatusCode, String), ApiError> {
        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let text = response.text().await?;
        Ok((status, text))
    }

    async fn fetch_metadata(&self, symbol: &Symbol) -> Result<InstrumentMetadata, ApiError> {
        let url = format!("{}/v10/finance/quoteSummary/{}", self.base_url, symbol);

        let mut crumb = self.crumb(false).await?;
        let mut attempt = self
            .get_text(&url, &[("modules", SUMMARY_MODULES), ("crumb", crumb.as_str())])
            .await?;

        if matches!(attempt.0, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::debug!(%symbol, status = %attempt.0, "session rejected, refreshing crumb");
            crumb = self.crumb(true).await?;
            attempt = self
                .get_text(&url, &[("modules", SUMMARY_MODULES), ("crumb", crumb.as_str())])
                .await?;
        }

        let (status, text) = attempt;
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::InstrumentNotFound(symbol.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::DataSourceUnavailable(format!(
                "quoteSummary for {} returned status {}",
                symbol, status
            )));
        }

        parse_quote_summary(symbol, &text)
    }

    async fn fetch_history(
        &self,
        symbol: &Symbol,
        interval: Interval,
    ) -> Result<PriceHistory, ApiError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        let (status, text) = self
            .get_text(
                &url,
                &[
                    ("range", interval.as_range()),
                    ("interval", "1d"),
                    ("includeAdjustedClose", "true"),
                    ("events", "div,splits"),
                ],
            )
            .await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::InstrumentNotFound(symbol.to_string()));
        }
        if !status.is_success() {
            return Err(ApiError::DataSourceUnavailable(format!(
                "chart for {} returned status {}",
                symbol, status
            )));
        }

        parse_chart(symbol, interval, &text)
    }
}

#[async_trait]
impl MarketDataSource for YahooClient {
    async fn fetch(
        &self,
        symbol: &Symbol,
        interval: Interval,
    ) -> Result<FetchedHistory, ApiError> {
        // Metadata first: an instrument without a market price is not worth a chart request.
        let metadata = self.fetch_metadata(symbol).await?;
        ensure_tradable(&metadata)?;

        let history = self.fetch_history(symbol, interval).await?;
        let fetched = admit(metadata, history)?;

        tracing::info!(
            %symbol,
            %interval,
            bars = fetched.history.len(),
            "fetched price history"
        );
        Ok(fetched)
    }
}

fn ensure_tradable(metadata: &InstrumentMetadata) -> Result<(), ApiError> {
    if metadata.is_tradable() {
        Ok(())
    } else {
        Err(ApiError::InstrumentNotFound(format!(
            "{} has no current market price",
            metadata.symbol
        )))
    }
}

/// Pairs a history with its metadata, rejecting instruments with nothing to analyze.
pub(crate) fn admit(
    metadata: InstrumentMetadata,
    history: PriceHistory,
) -> Result<FetchedHistory, ApiError> {
    ensure_tradable(&metadata)?;
    if history.is_empty() {
        return Err(ApiError::InstrumentNotFound(format!(
            "{} has no price history for {}",
            metadata.symbol,
            history.interval().label()
        )));
    }
    Ok(FetchedHistory { history, metadata })
}

/// Converts a chart payload into a validated daily history.
///
/// Bars are dated in the exchange's own calendar (timestamp shifted by the
/// exchange offset, then the timezone dropped). Prices are split- and
/// dividend-adjusted using the adjusted close when the provider supplies it.
/// Bars with a missing or non-positive price are skipped, and when two bars
/// share a date the later one wins.
pub(crate) fn parse_chart(
    symbol: &Symbol,
    interval: Interval,
    body: &str,
) -> Result<PriceHistory, ApiError> {
    let response: ChartResponse = serde_json::from_str(body).map_err(|e| {
        ApiError::DataSourceUnavailable(format!("malformed chart payload: {}", e))
    })?;

    if let Some(error) = response.chart.error {
        return Err(if error.is_not_found() {
            ApiError::InstrumentNotFound(format!("{}: {}", symbol, error.description))
        } else {
            ApiError::DataSourceUnavailable(format!("{}: {}", error.code, error.description))
        });
    }

    let result = match response.chart.result.and_then(|r| r.into_iter().next()) {
        Some(result) => result,
        None => return Ok(PriceHistory::empty(symbol.clone(), interval)),
    };

    let mut points: Vec<PricePoint> = (0..result.timestamp.len())
        .filter_map(|i| bar_at(&result, i))
        .collect();
    points.sort_by_key(|p| p.date);
    points.dedup_by(|later, earlier| {
        if later.date == earlier.date {
            std::mem::swap(later, earlier);
            true
        } else {
            false
        }
    });

    Ok(PriceHistory::new(symbol.clone(), interval, points)?)
}

fn bar_at(result: &ChartResult, i: usize) -> Option<PricePoint> {
    let quote = result.indicators.quote.first()?;
    let cell = |column: &Vec<Option<f64>>| column.get(i).copied().flatten();

    let (open, high, low, close) = (
        cell(&quote.open)?,
        cell(&quote.high)?,
        cell(&quote.low)?,
        cell(&quote.close)?,
    );
    if close <= 0.0 {
        return None;
    }

    let factor = result
        .indicators
        .adjclose
        .first()
        .and_then(|a| cell(&a.adjclose))
        .map_or(1.0, |adj| adj / close);

    let date = DateTime::from_timestamp(result.timestamp[i] + result.meta.gmtoffset, 0)?
        .date_naive();
    let volume = quote
        .volume
        .get(i)
        .copied()
        .flatten()
        .map_or(0, |v| v.max(0) as u64);

    Some(PricePoint {
        date,
        open: to_price(open * factor)?,
        high: to_price(high * factor)?,
        low: to_price(low * factor)?,
        close: to_price(close * factor)?,
        volume,
    })
}

fn to_price(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let price = Decimal::from_f64(value)?.round_dp(PRICE_DP);
    (price > Decimal::ZERO).then_some(price)
}

/// Converts a quoteSummary payload into instrument metadata.
///
/// The current price is the only field whose absence matters, and that check
/// belongs to the caller.
pub(crate) fn parse_quote_summary(
    symbol: &Symbol,
    body: &str,
) -> Result<InstrumentMetadata, ApiError> {
    let response: QuoteSummaryResponse = serde_json::from_str(body).map_err(|e| {
        ApiError::DataSourceUnavailable(format!("malformed quoteSummary payload: {}", e))
    })?;

    if let Some(error) = response.quote_summary.error {
        return Err(if error.is_not_found() {
            ApiError::InstrumentNotFound(format!("{}: {}", symbol, error.description))
        } else {
            ApiError::DataSourceUnavailable(format!("{}: {}", error.code, error.description))
        });
    }

    let result = response
        .quote_summary
        .result
        .and_then(|r| r.into_iter().next())
        .unwrap_or_default();
    let price = result.price.unwrap_or_default();
    let detail = result.summary_detail.unwrap_or_default();
    let profile = result.asset_profile.unwrap_or_default();

    let decimal = |raw: &Option<RawValue>| {
        raw.as_ref()
            .and_then(RawValue::value)
            .and_then(Decimal::from_f64)
            .map(|d| d.round_dp(PRICE_DP))
    };

    let mut metadata = InstrumentMetadata::new(symbol.clone());
    metadata.long_name = price.long_name.or(price.short_name);
    metadata.sector = profile.sector;
    metadata.industry = profile.industry;
    metadata.country = profile.country;
    metadata.description = profile.long_business_summary;
    metadata.current_price = decimal(&price.regular_market_price);
    metadata.previous_close =
        decimal(&detail.previous_close).or_else(|| decimal(&price.regular_market_previous_close));
    metadata.open = decimal(&detail.open).or_else(|| decimal(&price.regular_market_open));
    metadata.beta = detail.beta.as_ref().and_then(RawValue::value);

    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn aapl() -> Symbol {
        Symbol::parse("AAPL").unwrap()
    }

    #[test]
    fn parses_chart_in_exchange_calendar() {
        // 2024-03-01 14:30 UTC and 2024-03-04 14:30 UTC, exchange at UTC-5.
        let body = json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "AAPL", "gmtoffset": -18000, "regularMarketPrice": 180.0 },
                    "timestamp": [1709303400, 1709562600],
                    "indicators": {
                        "quote": [{
                            "open":   [179.5, 176.0],
                            "high":   [180.5, 177.25],
                            "low":    [178.0, 175.5],
                            "close":  [179.66000366210938, 175.1],
                            "volume": [73488000, null]
                        }]
                    }
                }],
                "error": null
            }
        })
        .to_string();

        let history = parse_chart(&aapl(), Interval::SixMonths, &body).unwrap();
        assert_eq!(history.len(), 2);
        let first = &history.points()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(first.close, dec!(179.66));
        assert_eq!(first.volume, 73_488_000);
        assert_eq!(history.points()[1].volume, 0);
    }

    #[test]
    fn skips_null_bars_and_keeps_latest_duplicate() {
        let body = json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "AAPL", "gmtoffset": 0 },
                    "timestamp": [1709251200, 1709337600, 1709380800, 1709424000],
                    "indicators": {
                        "quote": [{
                            "open":   [10.0, 11.0, 12.0, 13.0],
                            "high":   [10.0, 11.0, 12.0, 13.0],
                            "low":    [10.0, 11.0, 12.0, 13.0],
                            "close":  [10.0, 11.0, 12.0, null],
                            "volume": [1, 2, 3, 4]
                        }]
                    }
                }],
                "error": null
            }
        })
        .to_string();

        let history = parse_chart(&aapl(), Interval::OneYear, &body).unwrap();
        let closes: Vec<_> = history.points().iter().map(|p| p.close).collect();
        // 03-01, then two bars dated 03-02 (the later wins), then a bar with no close
        assert_eq!(closes, vec![dec!(10), dec!(12)]);
    }

    #[test]
    fn applies_adjusted_close_factor() {
        let body = json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "AAPL", "gmtoffset": 0 },
                    "timestamp": [1709251200],
                    "indicators": {
                        "quote": [{
                            "open": [200.0], "high": [220.0], "low": [180.0],
                            "close": [200.0], "volume": [5]
                        }],
                        "adjclose": [{ "adjclose": [100.0] }]
                    }
                }],
                "error": null
            }
        })
        .to_string();

        let history = parse_chart(&aapl(), Interval::Max, &body).unwrap();
        let bar = &history.points()[0];
        assert_eq!(bar.close, dec!(100));
        assert_eq!(bar.high, dec!(110));
        assert_eq!(bar.low, dec!(90));
    }

    #[test]
    fn chart_not_found_maps_to_instrument_not_found() {
        let body = json!({
            "chart": {
                "result": null,
                "error": {
                    "code": "Not Found",
                    "description": "No data found, symbol may be delisted"
                }
            }
        })
        .to_string();

        let err = parse_chart(&aapl(), Interval::OneYear, &body).unwrap_err();
        assert!(matches!(err, ApiError::InstrumentNotFound(_)));
    }

    #[test]
    fn garbage_payload_is_unavailable() {
        let err = parse_chart(&aapl(), Interval::OneYear, "<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, ApiError::DataSourceUnavailable(_)));
    }

    #[test]
    fn parses_quote_summary_with_partial_fields() {
        let body = json!({
            "quoteSummary": {
                "result": [{
                    "price": {
                        "longName": "Apple Inc.",
                        "regularMarketPrice": { "raw": 189.3000030517578, "fmt": "189.30" },
                        "regularMarketOpen": { "raw": 188.0 }
                    },
                    "summaryDetail": {
                        "previousClose": { "raw": 187.5 },
                        "open": {},
                        "beta": { "raw": 1.28 }
                    },
                    "assetProfile": {
                        "sector": "Technology",
                        "industry": "Consumer Electronics",
                        "longBusinessSummary": "Apple designs smartphones."
                    }
                }],
                "error": null
            }
        })
        .to_string();

        let meta = parse_quote_summary(&aapl(), &body).unwrap();
        assert!(meta.is_tradable());
        assert_eq!(meta.long_name.as_deref(), Some("Apple Inc."));
        assert_eq!(meta.current_price, Some(dec!(189.3)));
        assert_eq!(meta.previous_close, Some(dec!(187.5)));
        assert_eq!(meta.open, Some(dec!(188)));
        assert_eq!(meta.beta, Some(1.28));
        assert_eq!(meta.country, None);
        assert_eq!(meta.sector.as_deref(), Some("Technology"));
    }

    #[test]
    fn quote_summary_without_price_is_not_tradable() {
        let body = json!({
            "quoteSummary": {
                "result": [{ "price": { "regularMarketPrice": {} } }],
                "error": null
            }
        })
        .to_string();

        let meta = parse_quote_summary(&aapl(), &body).unwrap();
        assert!(!meta.is_tradable());
    }

    #[test]
    fn quote_summary_error_object() {
        let body = json!({
            "quoteSummary": {
                "result": null,
                "error": { "code": "Not Found", "description": "Quote not found for symbol: ZZZZ" }
            }
        })
        .to_string();

        let err = parse_quote_summary(&aapl(), &body).unwrap_err();
        assert!(matches!(err, ApiError::InstrumentNotFound(_)));
    }

    fn tradable(symbol: &Symbol) -> InstrumentMetadata {
        let mut metadata = InstrumentMetadata::new(symbol.clone());
        metadata.current_price = Some(dec!(189.3));
        metadata
    }

    fn one_bar(symbol: &Symbol) -> PriceHistory {
        let point = PricePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            open: dec!(10),
            high: dec!(10),
            low: dec!(10),
            close: dec!(10),
            volume: 1,
        };
        PriceHistory::new(symbol.clone(), Interval::OneYear, vec![point]).unwrap()
    }

    #[test]
    fn admits_tradable_instrument_with_bars() {
        let fetched = admit(tradable(&aapl()), one_bar(&aapl())).unwrap();
        assert_eq!(fetched.history.len(), 1);
        assert_eq!(fetched.metadata.current_price, Some(dec!(189.3)));
    }

    #[test]
    fn instrument_without_market_price_is_not_found() {
        let metadata = InstrumentMetadata::new(aapl());
        let err = admit(metadata, one_bar(&aapl())).unwrap_err();
        assert!(matches!(err, ApiError::InstrumentNotFound(ref m) if m.contains("market price")));
    }

    #[test]
    fn valid_metadata_with_zero_bars_is_not_found() {
        let empty = PriceHistory::empty(aapl(), Interval::FiveYears);
        let err = admit(tradable(&aapl()), empty).unwrap_err();
        assert!(matches!(err, ApiError::InstrumentNotFound(ref m) if m.contains("5 years")));
    }

    // --- End-to-end against a canned loopback server ---

    type Handler = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

    /// Answers bodiless GET requests on 127.0.0.1 with whatever `handler`
    /// returns for the request target. Returns the server's base URL.
    async fn serve(handler: Handler) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let handler = handler.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 4096];
                    loop {
                        let end = loop {
                            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                                break pos + 4;
                            }
                            match socket.read(&mut chunk).await {
                                Ok(0) | Err(_) => return,
                                Ok(n) => buf.extend_from_slice(&chunk[..n]),
                            }
                        };
                        let head = String::from_utf8_lossy(&buf[..end]).into_owned();
                        buf.drain(..end);

                        let target = head.split_whitespace().nth(1).unwrap_or("/");
                        let (status, body) = handler(target);
                        let response = format!(
                            "HTTP/1.1 {} Canned\r\ncontent-type: application/json\r\n\
                             set-cookie: A3=session; Path=/\r\ncontent-length: {}\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        if socket.write_all(response.as_bytes()).await.is_err() {
                            return;
                        }
                    }
                });
            }
        });

        format!("http://{}", addr)
    }

    fn client_for(base: &str) -> YahooClient {
        YahooClient::new(&DataSourceConfig {
            base_url: base.to_string(),
            auth_url: format!("{}/auth", base),
            timeout_secs: 5,
            ..DataSourceConfig::default()
        })
        .unwrap()
    }

    fn summary_body(with_price: bool) -> String {
        let price = if with_price {
            json!({ "longName": "Apple Inc.", "regularMarketPrice": { "raw": 189.3 } })
        } else {
            json!({ "regularMarketPrice": {} })
        };
        json!({ "quoteSummary": { "result": [{ "price": price }], "error": null } }).to_string()
    }

    fn chart_body(closes: &[f64]) -> String {
        let timestamps: Vec<i64> = (0..closes.len() as i64)
            .map(|i| 1709251200 + i * 86_400)
            .collect();
        json!({
            "chart": {
                "result": [{
                    "meta": { "symbol": "AAPL", "gmtoffset": 0 },
                    "timestamp": timestamps,
                    "indicators": {
                        "quote": [{
                            "open": closes, "high": closes, "low": closes,
                            "close": closes, "volume": vec![100; closes.len()]
                        }]
                    }
                }],
                "error": null
            }
        })
        .to_string()
    }

    /// Counts requests per endpoint.
    #[derive(Default)]
    struct Hits {
        crumb: AtomicUsize,
        summary: AtomicUsize,
        chart: AtomicUsize,
    }

    impl Hits {
        fn get(counter: &AtomicUsize) -> usize {
            counter.load(Ordering::SeqCst)
        }
    }

    /// quoteSummary rejects the first crumb handed out, or every crumb when
    /// `always_reject` is set.
    fn provider(
        hits: Arc<Hits>,
        always_reject: bool,
        with_price: bool,
        closes: Vec<f64>,
    ) -> Handler {
        Arc::new(move |target: &str| {
            if target.starts_with("/auth") {
                (404, String::new())
            } else if target.starts_with("/v1/test/getcrumb") {
                let n = hits.crumb.fetch_add(1, Ordering::SeqCst) + 1;
                (200, format!("crumb{}", n))
            } else if target.starts_with("/v10/finance/quoteSummary/AAPL") {
                hits.summary.fetch_add(1, Ordering::SeqCst);
                if always_reject || target.contains("crumb=crumb1") {
                    (401, r#"{"finance":{"error":{"code":"Unauthorized"}}}"#.to_string())
                } else {
                    (200, summary_body(with_price))
                }
            } else if target.starts_with("/v8/finance/chart/AAPL") {
                hits.chart.fetch_add(1, Ordering::SeqCst);
                (200, chart_body(&closes))
            } else {
                (404, String::new())
            }
        })
    }

    #[tokio::test]
    async fn rejected_crumb_is_refreshed_once_then_fetch_succeeds() {
        let hits = Arc::new(Hits::default());
        let base = serve(provider(hits.clone(), false, true, vec![10.0, 11.0])).await;
        let client = client_for(&base);

        let fetched = client.fetch(&aapl(), Interval::OneYear).await.unwrap();
        assert_eq!(fetched.history.len(), 2);
        assert_eq!(fetched.metadata.long_name.as_deref(), Some("Apple Inc."));
        assert_eq!(Hits::get(&hits.crumb), 2);
        assert_eq!(Hits::get(&hits.summary), 2);

        // The refreshed crumb is kept for the next request.
        client.fetch(&aapl(), Interval::Max).await.unwrap();
        assert_eq!(Hits::get(&hits.crumb), 2);
        assert_eq!(Hits::get(&hits.summary), 3);
    }

    #[tokio::test]
    async fn second_rejection_is_unavailable() {
        let hits = Arc::new(Hits::default());
        let base = serve(provider(hits.clone(), true, true, vec![10.0])).await;

        let err = client_for(&base).fetch(&aapl(), Interval::OneYear).await.unwrap_err();
        assert!(matches!(err, ApiError::DataSourceUnavailable(_)));
        assert_eq!(Hits::get(&hits.summary), 2);
        assert_eq!(Hits::get(&hits.chart), 0);
    }

    #[tokio::test]
    async fn untradable_instrument_skips_the_chart_request() {
        let hits = Arc::new(Hits::default());
        let base = serve(provider(hits.clone(), false, false, vec![10.0])).await;

        let err = client_for(&base).fetch(&aapl(), Interval::OneYear).await.unwrap_err();
        assert!(matches!(err, ApiError::InstrumentNotFound(_)));
        assert_eq!(Hits::get(&hits.chart), 0);
    }

    #[tokio::test]
    async fn chart_without_usable_bars_is_not_found() {
        let hits = Arc::new(Hits::default());
        let base = serve(provider(hits.clone(), false, true, Vec::new())).await;

        let err = client_for(&base).fetch(&aapl(), Interval::SixMonths).await.unwrap_err();
        assert!(
            matches!(err, ApiError::InstrumentNotFound(ref m) if m.contains("no price history"))
        );
        assert_eq!(Hits::get(&hits.chart), 1);
    }

    #[test]
    fn builds_client_from_default_config() {
        let client = YahooClient::new(&DataSourceConfig::default()).expect("client builds");
        assert_eq!(client.base_url, "https://query1.finance.yahoo.com");
    }
}
