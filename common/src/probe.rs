pub mod failure;
pub mod outcome;
