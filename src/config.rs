/// Side length of the square grid.
pub const GRID_SIZE: usize = 6;

/// Required ship lengths, placed in this order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];
pub const NUM_SHIPS: usize = 7;

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Placement attempts allowed for a whole fleet before the board is discarded.
/// The counter is shared by every ship, not reset between them.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "SEA_BATTLE_LOG";
