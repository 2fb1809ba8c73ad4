pub mod prelude;
pub mod record;
pub mod stats;
pub mod tle;
