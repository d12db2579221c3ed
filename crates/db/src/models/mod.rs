//! Row types mapped from database tables.

pub mod villa_number;
