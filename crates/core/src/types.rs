/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Rescue dates carry no time-of-day or zone.
pub type RescueDate = chrono::NaiveDate;
