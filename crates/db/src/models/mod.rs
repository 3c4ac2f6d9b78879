//! Row structs and request DTOs, one module per table group.

pub mod call_up;
pub mod league;
pub mod player;
pub mod season;
pub mod team;
pub mod user;
