//! Simulation constants and tuning parameters.

/// Reference frame rate (Hz). Speeds and cooldowns are expressed per frame
/// at this rate, independent of the dt actually passed to `advance`.
pub const FRAME_RATE_REFERENCE: f64 = 60.0;

/// Default step length in seconds (one reference frame).
pub const DEFAULT_DT: f64 = 1.0 / FRAME_RATE_REFERENCE;

/// A waypoint closer than this (length units) counts as reached.
pub const WAYPOINT_ARRIVAL_RADIUS: f64 = 3.0;

/// Separating axis used when two bodies share the exact same centre.
pub const DEGENERATE_SEPARATION_AXIS: glam::DVec2 = glam::DVec2::X;

// --- Built-in skirmish layout ---

/// Number of Marines fielded by side 0 in the skirmish scenario.
pub const SKIRMISH_MARINE_COUNT: u32 = 15;

/// Marines per row of the skirmish grid.
pub const SKIRMISH_GRID_COLUMNS: u32 = 5;

/// Top-left corner of the skirmish grid.
pub const SKIRMISH_GRID_ORIGIN: (f64, f64) = (100.0, 100.0);

/// Spacing between grid slots.
pub const SKIRMISH_GRID_SPACING: f64 = 50.0;

/// Zealot spawn points for side 1 in the skirmish scenario.
pub const SKIRMISH_ZEALOT_POSITIONS: [(f64, f64); 2] = [(900.0, 300.0), (950.0, 350.0)];
