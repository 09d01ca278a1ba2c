/// Newsboard ranking version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Milliseconds in one hour. Elapsed time is measured at millisecond precision.
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Absolute ceiling for a configured maximum page size.
pub const PAGE_SIZE_CEILING: usize = 1_000;

/// Number of page links a listing view renders before collapsing into ellipses.
pub const MAX_VISIBLE_PAGES: usize = 5;
