pub use crate::aggregate::aggregate;
pub use crate::parser::{expand_two_digit_year, parse_record, parse_tle_entries, ParseError};
pub use tletypes::stats::{NOT_AVAILABLE, REPORT_DATE_FORMAT};

use tletypes::tle::{Column, ElementLine};

pub mod aggregate;
pub mod parser;

pub const LINES_PER_ENTRY: usize = 3;

/// Two-digit years below this belong to the 2000s, the rest to the 1900s
pub const CENTURY_PIVOT: u32 = 57;

pub const LAUNCH_YEAR: Column = Column::new("launch year", ElementLine::Line1, 9, 2);
pub const EPOCH_YEAR: Column = Column::new("epoch year", ElementLine::Line1, 18, 2);
pub const EPOCH_DAY_OF_YEAR: Column = Column::new("epoch day", ElementLine::Line1, 20, 3);
pub const INCLINATION: Column = Column::new("inclination", ElementLine::Line2, 8, 8);

pub const COLUMNS: [Column; 4] = [LAUNCH_YEAR, EPOCH_YEAR, EPOCH_DAY_OF_YEAR, INCLINATION];
