pub mod chain;
pub mod point;
pub mod polarity;
