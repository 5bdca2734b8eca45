use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// The unit options in presentation order.
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours];

    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Seconds => "Seconds",
            TimeUnit::Minutes => "Minutes",
            TimeUnit::Hours => "Hours",
        }
    }

    /// Display label for a given length: the trailing plural `s` is
    /// stripped when the length is exactly 1 ("1 Minute", "5 Minutes").
    pub fn label(&self, length: i64) -> &'static str {
        if length == 1 {
            self.name().trim_end_matches('s')
        } else {
            self.name()
        }
    }

    /// Convert `length` of this unit into a [`chrono::Duration`].
    pub fn duration(&self, length: i64) -> Duration {
        match self {
            TimeUnit::Seconds => Duration::seconds(length),
            TimeUnit::Minutes => Duration::minutes(length),
            TimeUnit::Hours => Duration::hours(length),
        }
    }
}

impl Default for TimeUnit {
    fn default() -> Self {
        TimeUnit::Minutes
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hours),
            other => Err(format!("unknown time unit '{other}'")),
        }
    }
}
