use jiff::civil::{date, datetime};

use pionier_core::models::{group_by_date, TranslationRecord};

fn record_at(timestamp: jiff::civil::DateTime, original: &str) -> TranslationRecord {
    TranslationRecord {
        timestamp,
        original: original.to_string(),
        translation: format!("[{original}]"),
        source_lang: "angielski".to_string(),
        target_lang: "polski".to_string(),
    }
}

#[test]
fn empty_log_groups_to_nothing() {
    assert!(group_by_date(&[]).is_empty());
}

#[test]
fn groups_come_most_recent_date_first() {
    let log = vec![
        record_at(datetime(2025, 3, 12, 8, 0, 0, 0), "one"),
        record_at(datetime(2025, 3, 14, 9, 0, 0, 0), "two"),
        record_at(datetime(2025, 3, 13, 10, 0, 0, 0), "three"),
    ];

    let groups = group_by_date(&log);
    let dates: Vec<_> = groups.iter().map(|g| g.date).collect();
    assert_eq!(
        dates,
        vec![date(2025, 3, 14), date(2025, 3, 13), date(2025, 3, 12)]
    );
}

#[test]
fn records_within_a_day_keep_insertion_order() {
    let log = vec![
        record_at(datetime(2025, 3, 14, 9, 0, 0, 0), "morning"),
        record_at(datetime(2025, 3, 14, 7, 0, 0, 0), "logged second"),
        record_at(datetime(2025, 3, 14, 21, 0, 0, 0), "evening"),
    ];

    let groups = group_by_date(&log);
    assert_eq!(groups.len(), 1);
    let originals: Vec<_> = groups[0].records.iter().map(|r| r.original.as_str()).collect();
    // Insertion order, not time-of-day order.
    assert_eq!(originals, vec!["morning", "logged second", "evening"]);
}

#[test]
fn grouping_is_an_exact_partition() {
    let log = vec![
        record_at(datetime(2025, 3, 12, 8, 0, 0, 0), "a"),
        record_at(datetime(2025, 3, 14, 9, 0, 0, 0), "b"),
        record_at(datetime(2025, 3, 12, 10, 0, 0, 0), "c"),
        record_at(datetime(2025, 3, 13, 11, 0, 0, 0), "d"),
        record_at(datetime(2025, 3, 14, 12, 0, 0, 0), "e"),
    ];

    let groups = group_by_date(&log);

    let total: usize = groups.iter().map(|g| g.records.len()).sum();
    assert_eq!(total, log.len());

    for group in &groups {
        for record in &group.records {
            assert_eq!(record.timestamp.date(), group.date);
        }
    }

    // Chronological concat (groups reversed back) reconstructs the log.
    let mut reconstructed = Vec::new();
    for group in groups.iter().rev() {
        reconstructed.extend(group.records.iter().cloned());
    }
    let mut expected = log.clone();
    expected.sort_by_key(|r| r.timestamp.date());
    assert_eq!(reconstructed, expected);
}
