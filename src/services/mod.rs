pub mod calendar_service;
pub mod course_name;
pub mod shift_service;
pub mod vehicle_binding;
