// mesa/src/defs.rs
// Shared type aliases and game constants.

pub type HostId = u32;

pub const SPOTS_ON_BOARD: usize = 6;

// A claim is only evaluated once at least this many spots are filled.
pub const MIN_FILLED_SPOTS: usize = 4;

// Reseeding fills between MIN_RESEED_FILL and MAX_RESEED_FILL spots, so a
// fresh board is never empty and never forces a full table.
pub const MIN_RESEED_FILL: usize = 4;
pub const MAX_RESEED_FILL: usize = SPOTS_ON_BOARD;

pub const POINTS_ORDERED: i32 = 30;
pub const POINTS_OCCURRED: i32 = 10;
pub const POINTS_NOT_OCCURRED: i32 = 20;
