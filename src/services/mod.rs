// Service module exports

pub mod settings;
pub mod timetable;
pub mod timezone;
