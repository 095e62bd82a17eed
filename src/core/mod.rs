pub mod add;
pub mod calculator;
pub mod logic;
pub mod merge;
pub mod names;
pub mod report;
