pub mod listing;
pub mod open_shot;
