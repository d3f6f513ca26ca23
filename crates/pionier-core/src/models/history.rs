use std::collections::BTreeMap;

use jiff::civil::Date;

use super::record::TranslationRecord;

/// The persisted history table: username → append-only log.
///
/// A `BTreeMap` keeps the on-disk document stable across rewrites.
pub type HistoryTable = BTreeMap<String, Vec<TranslationRecord>>;

/// One calendar day of a user's history, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: Date,
    pub records: Vec<TranslationRecord>,
}

/// Partition a log by the date half of each timestamp.
///
/// Groups come back most-recent-date-first; within a group the records keep
/// their original insertion order. Every record lands in exactly one group,
/// so concatenating the groups in chronological date order reconstructs the
/// input log.
pub fn group_by_date(records: &[TranslationRecord]) -> Vec<DayGroup> {
    let mut by_date: BTreeMap<Date, Vec<TranslationRecord>> = BTreeMap::new();

    for record in records {
        by_date
            .entry(record.timestamp.date())
            .or_default()
            .push(record.clone());
    }

    by_date
        .into_iter()
        .rev()
        .map(|(date, records)| DayGroup { date, records })
        .collect()
}
