use crate::models::{HourRecord, RecordSet};

/// All records of one report pass, in storage-unit order.
///
/// Identical rows coming from different units are all kept.
#[derive(Debug, Clone, Default)]
pub struct MergedDataset {
    records: Vec<HourRecord>,
}

impl MergedDataset {
    pub fn merge<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = RecordSet>,
    {
        let records = sets.into_iter().flat_map(RecordSet::into_records).collect();
        Self { records }
    }

    pub fn records(&self) -> &[HourRecord] {
        &self.records
    }
}

impl From<Vec<HourRecord>> for MergedDataset {
    fn from(records: Vec<HourRecord>) -> Self {
        Self { records }
    }
}
