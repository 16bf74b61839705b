//! Stats command
//!
//! Player statistics read back from a JSON-lines record file.

use crate::sink::{SinkError, read_outcomes};
use crate::stats::{PlayerStats, stats_by_player};
use std::collections::BTreeMap;
use std::path::Path;

/// Statistics per player recorded in `path`, optionally for one player only
///
/// A requested player with no recorded games is reported with empty statistics.
///
/// # Errors
///
/// Returns `SinkError` if the file cannot be read.
pub fn load_player_stats<P: AsRef<Path>>(
    path: P,
    player: Option<&str>,
) -> Result<BTreeMap<String, PlayerStats>, SinkError> {
    let mut stats = stats_by_player(&read_outcomes(path)?);

    if let Some(player) = player {
        let own = stats.remove(player).unwrap_or_default();
        stats = BTreeMap::from([(player.to_string(), own)]);
    }

    Ok(stats)
}
