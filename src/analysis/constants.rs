/// Number of evenly spaced quantities sampled per chart line.
pub const CHART_SAMPLES: usize = 100;

/// Chart domain extends this far past the break-even quantity.
pub const CHART_DOMAIN_FACTOR: f64 = 1.5;

/// Separator between values in a list field.
pub const FIELD_DELIMITER: char = ',';

/// Profit margin range offered at the input boundary (percent).
pub const MARGIN_MIN: f64 = 0.0;
pub const MARGIN_MAX: f64 = 100.0;

/// Default profit margin when none is given (percent).
pub const DEFAULT_MARGIN: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// Chart rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Output image size in pixels.
pub const CHART_WIDTH: u32 = 1024;
pub const CHART_HEIGHT: u32 = 768;

/// Radius of the break-even marker.
pub const MARKER_RADIUS: u32 = 5;

/// Headroom added past the largest value, as a share of the axis span.
pub const AXIS_PADDING: f64 = 0.05;

/// Fallback axis extent when every sampled value is zero.
pub const MIN_AXIS_EXTENT: f64 = 1.0;
