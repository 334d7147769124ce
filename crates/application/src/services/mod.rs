//! Application services - Use case implementations

mod locator_service;
pub mod report_formatter;

pub use locator_service::{
    DEFAULT_CATEGORY, DEFAULT_LIMIT, LocationReport, LocatorOptions, LocatorService,
};
pub use report_formatter::format_report;
