use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use chrono_tz::Asia::Kolkata;
use log::warn;
use web_sys::window;
use yew::prelude::*;
use yew_hooks::use_interval;

/// localStorage key holding the next purchase time as an ISO-8601 string.
pub const STORAGE_KEY: &str = "countdownTarget";
/// Purchases happen daily at 18:00 India Standard Time.
const PURCHASE_HOUR: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeLeft {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub deadline: DateTime<Utc>,
    /// The deadline was recomputed and should be written back.
    pub store: bool,
}

fn purchase_time_on(date: NaiveDate) -> Option<DateTime<Utc>> {
    let naive = date.and_hms_opt(PURCHASE_HOUR, 0, 0)?;
    Kolkata
        .from_local_datetime(&naive)
        .single()
        .map(|t| t.with_timezone(&Utc))
}

/// The first 18:00 IST strictly after `now`.
pub fn next_purchase_time(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.with_timezone(&Kolkata).date_naive();
    purchase_time_on(today)
        .filter(|t| *t > now)
        .or_else(|| today.succ_opt().and_then(purchase_time_on))
        .unwrap_or(now + Duration::hours(24))
}

/// Keeps a stored deadline while it is still ahead; otherwise picks the next
/// purchase time.
pub fn resolve_deadline(stored: Option<&str>, now: DateTime<Utc>) -> Resolved {
    let parsed = stored
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|t| t.with_timezone(&Utc));
    match parsed {
        Some(deadline) if deadline > now => Resolved { deadline, store: false },
        _ => Resolved { deadline: next_purchase_time(now), store: true },
    }
}

pub fn time_left(deadline: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let remaining = (deadline - now).num_seconds();
    if deadline <= now {
        return TimeLeft { hours: 24, minutes: 0, seconds: 0 };
    }
    TimeLeft {
        hours: (remaining / 3600) % 24,
        minutes: (remaining / 60) % 60,
        seconds: remaining % 60,
    }
}

pub fn format_unit(value: i64) -> String {
    format!("{:02}", value)
}

fn tick(now: DateTime<Utc>) -> TimeLeft {
    let storage = window().and_then(|w| w.local_storage().ok().flatten());
    let stored = storage
        .as_ref()
        .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    let resolved = resolve_deadline(stored.as_deref(), now);
    if resolved.store {
        let value = resolved.deadline.to_rfc3339_opts(SecondsFormat::Millis, true);
        match storage {
            Some(storage) => {
                if storage.set_item(STORAGE_KEY, &value).is_err() {
                    warn!("could not persist countdown target");
                }
            }
            None => warn!("localStorage unavailable, countdown target kept for this session"),
        }
    }
    time_left(resolved.deadline, now)
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let time = use_state(|| tick(Utc::now()));

    {
        let time = time.clone();
        use_interval(move || time.set(tick(Utc::now())), 1000);
    }

    let units = [
        ("hours", time.hours),
        ("minutes", time.minutes),
        ("seconds", time.seconds),
    ];

    html! {
        <div class="countdown">
            <p class="countdown-label fade-in-up">{"Next Buying in"}</p>
            <div class="countdown-grid">
                { for units.iter().map(|(unit, value)| html! {
                    <div class="countdown-cell" key={*unit}>
                        <span class="countdown-value">{ format_unit(*value) }</span>
                        <span class="countdown-unit">{ *unit }</span>
                    </div>
                }) }
            </div>
            <div class="treasury-address">
                <button class="treasury-pill">
                    <span class="orange">{"bitcoin"}</span>
                    <span class="muted">{"walatreasury."}</span>
                    <span class="orange">{"btc"}</span>
                </button>
            </div>
            <style>
                {r#"
                    .countdown {
                        width: 100%;
                        text-align: center;
                        padding: 10rem 1.5rem 0;
                    }
                    .countdown-label {
                        color: #a0a0a0;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        margin-bottom: 2.5rem;
                    }
                    .countdown-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .countdown-cell {
                        border: 1px solid #1a1a1a;
                        border-radius: 0.5rem;
                        padding: 2rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        background: rgba(18, 18, 18, 0.1);
                        backdrop-filter: blur(4px);
                        transition: transform 0.35s ease-in-out;
                    }
                    .countdown-cell:hover {
                        transform: scale(1.01);
                    }
                    .countdown-value {
                        color: #f2f2f2;
                        font-size: 3.75rem;
                        font-weight: 800;
                        margin-bottom: 0.5rem;
                        font-variant-numeric: tabular-nums;
                    }
                    .countdown-unit {
                        color: #a0a0a0;
                        font-size: 0.8rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                    }
                    .treasury-address {
                        margin-top: 4rem;
                    }
                    .treasury-pill {
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(38, 38, 38, 0.5);
                        background: rgba(23, 23, 23, 0.3);
                        font-size: 1.25rem;
                        letter-spacing: 0.1em;
                        cursor: pointer;
                        transition: transform 0.3s ease-in-out;
                    }
                    .treasury-pill:hover {
                        transform: scale(1.1);
                    }
                    .treasury-pill .orange {
                        color: #fb923c;
                    }
                    .treasury-pill .muted {
                        color: #a3a3a3;
                    }
                    @media (max-width: 768px) {
                        .countdown {
                            padding-top: 5rem;
                        }
                        .countdown-grid {
                            gap: 1rem;
                        }
                        .countdown-cell {
                            padding: 1rem;
                        }
                        .countdown-value {
                            font-size: 1.875rem;
                        }
                        .treasury-pill {
                            font-size: 0.875rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_next_purchase_later_today() {
        // 10:00 IST
        let now = utc("2025-03-10T04:30:00Z");
        assert_eq!(next_purchase_time(now), utc("2025-03-10T12:30:00Z"));
    }

    #[test]
    fn test_next_purchase_rolls_to_tomorrow() {
        // exactly 18:00 IST counts as passed
        assert_eq!(
            next_purchase_time(utc("2025-03-10T12:30:00Z")),
            utc("2025-03-11T12:30:00Z")
        );
        // 23:00 IST
        assert_eq!(
            next_purchase_time(utc("2025-03-10T17:30:00Z")),
            utc("2025-03-11T12:30:00Z")
        );
    }

    #[test]
    fn test_next_purchase_across_ist_midnight() {
        // 02:00 IST on the 11th, still the 10th in UTC
        let now = utc("2025-03-10T20:30:00Z");
        assert_eq!(next_purchase_time(now), utc("2025-03-11T12:30:00Z"));
    }

    #[test]
    fn test_resolve_keeps_future_stored_deadline() {
        let now = utc("2025-03-10T04:30:00Z");
        let resolved = resolve_deadline(Some("2025-03-10T09:00:00.000Z"), now);
        assert_eq!(resolved, Resolved { deadline: utc("2025-03-10T09:00:00Z"), store: false });
    }

    #[test]
    fn test_resolve_replaces_elapsed_missing_or_garbage() {
        let now = utc("2025-03-10T04:30:00Z");
        let expected = Resolved { deadline: utc("2025-03-10T12:30:00Z"), store: true };
        assert_eq!(resolve_deadline(Some("2025-03-09T12:30:00.000Z"), now), expected);
        assert_eq!(resolve_deadline(None, now), expected);
        assert_eq!(resolve_deadline(Some("tomorrow-ish"), now), expected);
    }

    #[test]
    fn test_time_left_breakdown() {
        let now = utc("2025-03-10T04:30:00Z");
        let left = time_left(utc("2025-03-10T12:31:05Z"), now);
        assert_eq!(left, TimeLeft { hours: 8, minutes: 1, seconds: 5 });
    }

    #[test]
    fn test_time_left_at_or_past_deadline() {
        let now = utc("2025-03-10T04:30:00Z");
        let full_day = TimeLeft { hours: 24, minutes: 0, seconds: 0 };
        assert_eq!(time_left(now, now), full_day);
        assert_eq!(time_left(utc("2025-03-10T04:00:00Z"), now), full_day);
    }

    #[test]
    fn test_format_unit_pads() {
        assert_eq!(format_unit(7), "07");
        assert_eq!(format_unit(42), "42");
    }
}
