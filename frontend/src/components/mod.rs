pub mod forms;
pub mod spinner;

pub use forms::DateRangeEntryForm;
