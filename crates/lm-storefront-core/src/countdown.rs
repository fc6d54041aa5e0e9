//! Offer countdown.

use chrono::{DateTime, Duration, Utc};
use tracing::warn;

pub const DEFAULT_COUNTDOWN_DAYS: i64 = 3;
/// Upper bound accepted from page configuration.
pub const MAX_COUNTDOWN_DAYS: i64 = 3_650;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
}

impl Remaining {
    /// Day, hour and minute slots, zero-padded to two digits.
    pub fn slots(&self) -> [String; 3] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
        ]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    target: DateTime<Utc>,
}

impl Countdown {
    pub fn until(target: DateTime<Utc>) -> Self {
        Self { target }
    }

    /// `None` when `now + days` is not a representable instant.
    pub fn days_from(now: DateTime<Utc>, days: i64) -> Option<Self> {
        let span = Duration::try_days(days)?;
        now.checked_add_signed(span).map(Self::until)
    }

    /// Absolute deadline when configured, otherwise `days` from `now`. An
    /// unrepresentable `days` falls back to the default length.
    pub fn from_config(now: DateTime<Utc>, deadline: Option<DateTime<Utc>>, days: i64) -> Self {
        if let Some(target) = deadline {
            return Self::until(target);
        }
        Self::days_from(now, days).unwrap_or_else(|| {
            warn!(days, "countdown length out of range, using {DEFAULT_COUNTDOWN_DAYS} days");
            Self::days_from(now, DEFAULT_COUNTDOWN_DAYS).unwrap_or(Self::until(now))
        })
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// `None` once the deadline has passed; the display then keeps its last value.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Remaining> {
        let diff = self.target - now;
        if diff <= Duration::zero() {
            return None;
        }
        Some(Remaining {
            days: diff.num_days(),
            hours: diff.num_hours() % 24,
            minutes: diff.num_minutes() % 60,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, h, m, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn fresh_countdown_shows_three_days() {
        let now = at(10, 0);
        let countdown = Countdown::days_from(now, 3).expect("in range");
        let remaining = countdown.remaining(now).expect("not expired");
        assert_eq!(remaining.slots(), ["03", "00", "00"]);
    }

    #[test]
    fn partial_units_round_down() {
        let countdown = Countdown::days_from(at(0, 0), 3).expect("in range");
        let now = at(0, 0) + Duration::hours(30) + Duration::minutes(15) + Duration::seconds(59);
        let remaining = countdown.remaining(now).expect("not expired");
        assert_eq!(
            remaining,
            Remaining {
                days: 1,
                hours: 17,
                minutes: 44
            }
        );
        assert_eq!(remaining.slots(), ["01", "17", "44"]);
    }

    #[test]
    fn expired_countdown_returns_none() {
        let countdown = Countdown::until(at(9, 0));
        assert_eq!(countdown.remaining(at(9, 0)), None);
        assert_eq!(countdown.remaining(at(12, 0)), None);
    }

    #[test]
    fn configured_deadline_wins_over_days() {
        let deadline = at(23, 0);
        let countdown = Countdown::from_config(at(1, 0), Some(deadline), 3);
        assert_eq!(countdown.target(), deadline);
        let relative = Countdown::from_config(at(1, 0), None, 2);
        assert_eq!(relative.target(), at(1, 0) + Duration::days(2));
    }

    #[test]
    fn huge_day_count_falls_back_instead_of_overflowing() {
        let now = at(8, 0);
        assert!(Countdown::days_from(now, 100_000_000).is_none());
        assert!(Countdown::days_from(now, i64::MAX).is_none());

        let countdown = Countdown::from_config(now, None, 100_000_000);
        assert_eq!(countdown.target(), now + Duration::days(DEFAULT_COUNTDOWN_DAYS));
    }
}
