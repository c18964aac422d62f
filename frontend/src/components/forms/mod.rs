pub mod date_range_form;

pub use date_range_form::DateRangeEntryForm;
