pub mod history;
pub mod record;
pub mod session;

pub use history::{group_by_date, DayGroup, HistoryTable};
pub use record::TranslationRecord;
pub use session::Session;
