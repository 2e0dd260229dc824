use chrono::{DateTime, FixedOffset, Offset, Timelike, Utc};

/// Source of "now". Services take this instead of calling `Utc::now()` so the
/// evening safety window and timestamps can be pinned in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Offset used to turn `now` into the marketplace's local wall-clock time.
    fn local_offset(&self) -> FixedOffset;

    /// Hour of day (0-23) in local time.
    fn local_hour(&self) -> u32 {
        self.now().with_timezone(&self.local_offset()).hour()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// India Standard Time, UTC+05:30.
    pub fn ist() -> Self {
        Self::new(ist_offset())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_offset(&self) -> FixedOffset {
        self.offset
    }
}

pub fn ist_offset() -> FixedOffset {
    offset_from_minutes(330)
}

/// Offset `minutes` east of UTC, falling back to UTC when out of range.
pub fn offset_from_minutes(minutes: i32) -> FixedOffset {
    FixedOffset::east_opt(minutes * 60).unwrap_or_else(|| Utc.fix())
}
