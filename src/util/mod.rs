pub mod timefmt;
pub mod unicode;
