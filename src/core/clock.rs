use crate::domain::ports::Clock;
use chrono::{DateTime, Local, TimeZone};

/// ANSI C `asctime` layout, e.g. `Mon Jan  2 15:04:05 2006`.
pub const ANSIC_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub fn format_ansic<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format(ANSIC_FORMAT).to_string()
}
