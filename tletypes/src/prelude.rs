pub use crate::record::{InclinationDegrees, LaunchYear, ParsedRecord};
pub use crate::stats::{Histogram, Statistics, NOT_AVAILABLE, REPORT_DATE_FORMAT};
pub use crate::tle::{Column, ElementLine, TleEntry};
