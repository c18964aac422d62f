pub mod use_date_range_form;

pub use use_date_range_form::use_date_range_form;
