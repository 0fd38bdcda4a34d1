pub mod fitness;
pub mod output;
pub mod roster;
