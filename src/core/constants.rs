/// Number of pegs on the board
pub const PEG_COUNT: usize = 3;

/// Number of disks in the puzzle (sizes 1 through 7)
pub const DISK_COUNT: usize = 7;

/// Index of the peg that must hold every disk to finish the game
pub const TARGET_PEG: usize = 2;

/// Seconds a stored game survives after its last write (1 hour)
pub const GAME_TTL_SECONDS: i64 = 3600;
