//! Shared defaults for simulations and the results pipeline.

/// Highest number in the default 2-digit game (balls 1..=31).
pub const DEFAULT_UNIVERSE_SIZE: u32 = 31;

/// Numbers drawn per combination in the default game.
pub const DEFAULT_DRAW_SIZE: u32 = 2;

/// Trials per simulation when none is given.
pub const DEFAULT_NUM_TRIALS: u32 = 1000;

/// Trials used by the quick preset.
pub const QUICK_NUM_TRIALS: u32 = 100;

/// Histogram bins for the trial-count distribution.
pub const HISTOGRAM_BINS: usize = 50;

/// Width of the longest bar in text histograms.
pub const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Draws a game needs before it is kept by the results pipeline.
pub const DEFAULT_MIN_DRAWS: usize = 30;

// Column headers of the published results table
pub const COLUMN_DRAW_DATE: &str = "DRAW DATE";
pub const COLUMN_COMBINATIONS: &str = "COMBINATIONS";
pub const COLUMN_GAME: &str = "LOTTO GAME";

/// Game name used when the table has no game column.
pub const UNKNOWN_GAME: &str = "UNKNOWN";

/// Accepted formats for the draw date column.
pub const DRAW_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];
