use std::cell::Cell;
use std::rc::Rc;

use chrono::{DateTime, Local, Utc};
use gloo_net::http::Request;
use gloo_timers::callback::{Interval, Timeout};
use log::{debug, error};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::config;

const POLL_INTERVAL_MS: u32 = 30_000;
const REQUEST_TIMEOUT_MS: u32 = 10_000;

const DEMO_PRICE: f64 = 95_000.0;
const DEMO_CHANGE_PERCENT: f64 = 2.7;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub price: f64,
    pub change_percent_24h: f64,
    pub last_updated: DateTime<Utc>,
    /// False when the quote is the built-in demo value.
    pub is_live: bool,
}

impl PriceQuote {
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            price: DEMO_PRICE,
            change_percent_24h: DEMO_CHANGE_PERCENT,
            last_updated: now,
            is_live: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid data received from API: {0}")]
    Invalid(String),
}

#[derive(Deserialize)]
struct SimplePriceResponse {
    bitcoin: Option<CoinQuote>,
}

#[derive(Deserialize)]
struct CoinQuote {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

pub fn parse_quote(body: &str, now: DateTime<Utc>) -> Result<PriceQuote, PriceError> {
    let response: SimplePriceResponse =
        serde_json::from_str(body).map_err(|e| PriceError::Invalid(e.to_string()))?;
    let coin = response
        .bitcoin
        .ok_or_else(|| PriceError::Invalid("missing bitcoin entry".to_string()))?;
    let price = coin
        .usd
        .filter(|p| p.is_finite())
        .ok_or_else(|| PriceError::Invalid("missing usd price".to_string()))?;
    Ok(PriceQuote {
        price,
        change_percent_24h: coin.usd_24h_change.unwrap_or(0.0),
        last_updated: now,
        is_live: true,
    })
}

async fn fetch_quote() -> Result<PriceQuote, PriceError> {
    let controller = AbortController::new()
        .map_err(|_| PriceError::Network("AbortController unavailable".to_string()))?;
    let signal = controller.signal();
    let timed_out = Rc::new(Cell::new(false));
    let timeout = {
        let timed_out = timed_out.clone();
        Timeout::new(REQUEST_TIMEOUT_MS, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let result = Request::get(config::PRICE_API_URL)
        .header("Accept", "application/json")
        .abort_signal(Some(&signal))
        .send()
        .await;
    drop(timeout);

    let response = result.map_err(|e| {
        if timed_out.get() {
            PriceError::Timeout
        } else {
            PriceError::Network(e.to_string())
        }
    })?;
    if !response.ok() {
        return Err(PriceError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| PriceError::Network(e.to_string()))?;
    parse_quote(&body, Utc::now())
}

/// Never fails: any error is logged and replaced with the demo quote.
async fn load_quote() -> PriceQuote {
    match fetch_quote().await {
        Ok(quote) => {
            debug!("BTC price {}", quote.price);
            quote
        }
        Err(e) => {
            error!("Error fetching Bitcoin price: {}", e);
            PriceQuote::demo(Utc::now())
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole dollars with thousands separators, e.g. `$95,000`.
pub fn format_usd(price: f64) -> String {
    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// Thousands of dollars, e.g. `$95k`.
pub fn format_compact(price: f64) -> String {
    format!("${}k", (price / 1000.0).round() as i64)
}

pub fn price_label(quote: &PriceQuote, compact: bool) -> String {
    if compact {
        format_compact(quote.price)
    } else {
        format_usd(quote.price)
    }
}

pub fn format_change(change: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "-" };
    format!("{}{:.2}%", sign, change.abs())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    fn class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Flat => "trend-flat",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "–",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PriceTickerProps {
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(PriceTicker)]
pub fn price_ticker(props: &PriceTickerProps) -> Html {
    // demo quote until the first fetch lands
    let quote = use_state(|| PriceQuote::demo(Utc::now()));

    {
        let quote = quote.clone();
        use_effect_with_deps(
            move |_| {
                let refresh = move || {
                    let quote = quote.clone();
                    spawn_local(async move {
                        quote.set(load_quote().await);
                    });
                };
                refresh();
                let interval = Interval::new(POLL_INTERVAL_MS, refresh);
                move || drop(interval)
            },
            (),
        );
    }

    let size = if props.compact { "compact" } else { "full" };

    let trend = Trend::from_change(quote.change_percent_24h);
    let price = price_label(&quote, props.compact);
    let updated = quote.last_updated.with_timezone(&Local).format("%H:%M:%S").to_string();

    html! {
        <div class="ticker-group">
            <div class={classes!("ticker", size)}>
                <span class="ticker-symbol">{"BTC"}</span>
                <span class="ticker-price">{ price }</span>
                if !props.compact {
                    <span class={classes!("ticker-change", trend.class())}>
                        <span class="ticker-trend">{ trend.glyph() }</span>
                        { format_change(quote.change_percent_24h) }
                    </span>
                }
            </div>
            <div class="ticker-tooltip">
                <div class="ticker-tooltip-title">
                    {"Bitcoin (BTC)"}
                    if quote.is_live {
                        <span class="ticker-live">{"● LIVE"}</span>
                    } else {
                        <span class="ticker-demo">{"● DEMO"}</span>
                    }
                </div>
                <div>{ format!("Price: {}", format_usd(quote.price)) }</div>
                <div>{ format!("24h Change: {}", format_change(quote.change_percent_24h)) }</div>
                <div class="ticker-updated">{ format!("Updated: {}", updated) }</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-03-10T04:30:00Z").unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_parse_live_quote() {
        let body = r#"{"bitcoin":{"usd":101234.5,"usd_24h_change":-1.234,"last_updated_at":1741581000}}"#;
        let quote = parse_quote(body, now()).unwrap();
        assert_eq!(quote.price, 101234.5);
        assert_eq!(quote.change_percent_24h, -1.234);
        assert!(quote.is_live);
        assert_eq!(quote.last_updated, now());
    }

    #[test]
    fn test_missing_change_defaults_to_zero() {
        let quote = parse_quote(r#"{"bitcoin":{"usd":60000}}"#, now()).unwrap();
        assert_eq!(quote.change_percent_24h, 0.0);
    }

    #[test]
    fn test_invalid_bodies_are_rejected() {
        for body in [
            r#"{}"#,
            r#"{"bitcoin":{}}"#,
            r#"{"bitcoin":{"usd":"lots"}}"#,
            "<html>rate limited</html>",
        ] {
            assert!(
                matches!(parse_quote(body, now()), Err(PriceError::Invalid(_))),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn test_demo_quote() {
        let demo = PriceQuote::demo(now());
        assert!(!demo.is_live);
        assert_eq!(format_usd(demo.price), "$95,000");
        assert_eq!(format_change(demo.change_percent_24h), "+2.70%");
    }

    #[test]
    fn test_initial_demo_label_is_never_blank() {
        let demo = PriceQuote::demo(now());
        assert_eq!(price_label(&demo, true), "$95k");
        assert_eq!(price_label(&demo, false), "$95,000");
        assert!(!demo.is_live);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(0.4), "$0");
        assert_eq!(format_usd(999.5), "$1,000");
        assert_eq!(format_usd(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_format_compact_and_change() {
        assert_eq!(format_compact(95_000.0), "$95k");
        assert_eq!(format_compact(101_600.0), "$102k");
        assert_eq!(format_change(-0.456), "-0.46%");
        assert_eq!(format_change(0.0), "+0.00%");
    }

    #[test]
    fn test_trend() {
        assert_eq!(Trend::from_change(0.1), Trend::Up);
        assert_eq!(Trend::from_change(-0.1), Trend::Down);
        assert_eq!(Trend::from_change(0.0), Trend::Flat);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(PriceError::Status(429).to_string(), "HTTP error! status: 429");
        assert_eq!(PriceError::Timeout.to_string(), "request timed out");
    }
}
