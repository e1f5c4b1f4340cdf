pub mod account;
pub mod card;
