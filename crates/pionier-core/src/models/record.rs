use jiff::civil::DateTime;
use jiff::Zoned;
use serde::{Deserialize, Serialize};

/// One logged translation event.
///
/// Immutable once created — the history log is append-only. Field names
/// match the persisted JSON layout, which predates this implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Local wall-clock time of the translation, second precision.
    #[serde(with = "timestamp_format")]
    pub timestamp: DateTime,
    pub original: String,
    pub translation: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl TranslationRecord {
    /// Build a record stamped with the current local time.
    pub fn now(
        original: impl Into<String>,
        translation: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        let now = Zoned::now().datetime();
        // Truncate to whole seconds to match the persisted precision.
        let timestamp = now.with().subsec_nanosecond(0).build().unwrap_or(now);
        Self {
            timestamp,
            original: original.into(),
            translation: translation.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Serde adapter for the `"YYYY-MM-DD HH:MM:SS"` timestamp strings the
/// history file has always used.
pub mod timestamp_format {
    use jiff::civil::DateTime;
    use jiff::fmt::strtime;
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(dt: &DateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = strtime::format(FORMAT, *dt).map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        strtime::parse(FORMAT, &raw)
            .and_then(|tm| tm.to_datetime())
            .map_err(D::Error::custom)
    }
}
