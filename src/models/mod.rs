pub mod calendar;
pub mod course;
pub mod driver;
pub mod schedule;
pub mod vehicle;
pub mod weekday;
