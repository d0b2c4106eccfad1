pub mod coefficient;
pub mod conform;
