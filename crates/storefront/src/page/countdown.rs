//! Offer countdown timer.
//!
//! The offer ends at the last millisecond of the day `days_ahead` days after
//! the page was opened, in the visitor's wall-clock time. The renderer ticks
//! the countdown once per second and stops once it reports
//! [`CountdownState::Ended`].

use chrono::{Days, Local, NaiveDateTime};

/// Text shown in place of the timer once the offer is over.
pub const OFFER_ENDED_LABEL: &str = "OFERTA ENCERRADA";

const MILLIS_PER_SECOND: i64 = 1000;
const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Time left before the offer ends, split the way the timer shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Split a non-negative millisecond distance into whole units.
    #[must_use]
    pub const fn from_millis(distance: i64) -> Self {
        Self {
            days: distance / MILLIS_PER_DAY,
            hours: (distance % MILLIS_PER_DAY) / MILLIS_PER_HOUR,
            minutes: (distance % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (distance % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        }
    }

    /// Days, hours, minutes and seconds, each padded to two digits.
    #[must_use]
    pub fn padded(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|value| format!("{value:02}"))
    }
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running(Remaining),
    Ended,
}

/// Countdown to the end of the promotional offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfferCountdown {
    deadline: NaiveDateTime,
    ended: bool,
}

impl OfferCountdown {
    /// Countdown ending at 23:59:59.999 `days_ahead` days after `now`.
    ///
    /// A deadline past the calendar's range collapses to `now`, so the offer
    /// shows as ended on the first tick after it.
    #[must_use]
    pub fn starting_at(now: NaiveDateTime, days_ahead: u32) -> Self {
        let deadline = now
            .date()
            .checked_add_days(Days::new(u64::from(days_ahead)))
            .and_then(|date| date.and_hms_milli_opt(23, 59, 59, 999))
            .unwrap_or(now);
        Self::until(deadline)
    }

    /// Countdown starting from the local clock.
    #[must_use]
    pub fn starting_now(days_ahead: u32) -> Self {
        Self::starting_at(Local::now().naive_local(), days_ahead)
    }

    /// Countdown to a fixed deadline.
    #[must_use]
    pub const fn until(deadline: NaiveDateTime) -> Self {
        Self {
            deadline,
            ended: false,
        }
    }

    /// When the offer ends.
    #[must_use]
    pub const fn deadline(&self) -> NaiveDateTime {
        self.deadline
    }

    /// Whether a tick has already reported the end.
    #[must_use]
    pub const fn is_ended(&self) -> bool {
        self.ended
    }

    /// Compute the display state at `now`. Once ended, stays ended.
    pub fn tick(&mut self, now: NaiveDateTime) -> CountdownState {
        if self.ended {
            return CountdownState::Ended;
        }

        let distance = (self.deadline - now).num_milliseconds();
        if distance < 0 {
            self.ended = true;
            tracing::debug!(deadline = %self.deadline, "Offer countdown ended");
            return CountdownState::Ended;
        }

        CountdownState::Running(Remaining::from_millis(distance))
    }
}
