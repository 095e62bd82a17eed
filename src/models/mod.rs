pub mod record;
pub mod report;
pub mod subject;

pub use record::{HourRecord, RecordSet};
pub use report::{AggregateReport, WeeklyBucket};
