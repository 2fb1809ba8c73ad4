use crate::parser::{parse_record, parse_tle_entries};
use tletypes::prelude::*;
use tracing::debug;

/// Parse every complete entry in `text` and collect the statistics.
///
/// Malformed entries are counted as far as their fields allow, so any input,
/// including the empty string, produces a result.
pub fn aggregate(text: &str) -> Statistics {
    let stats = parse_tle_entries(text)
        .iter()
        .map(parse_record)
        .fold(Statistics::new(), |mut stats, rec| {
            stats.record(&rec);
            stats
        });

    debug!(
        satellites = stats.satellite_count,
        launch_years = stats.launch_year_histogram.len(),
        inclinations = stats.inclination_histogram.len(),
        "Aggregated TLE statistics"
    );

    stats
}
