pub mod amend;
pub mod order;
