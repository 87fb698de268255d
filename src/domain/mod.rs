pub mod cart;
pub mod helpers;
