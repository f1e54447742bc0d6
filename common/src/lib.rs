mod timestamp;
pub mod countdown;
pub mod discount;
pub mod display;
pub mod error;
pub mod fridge;
pub mod identity;
pub mod price;
pub mod pricing;
pub mod product;

pub use timestamp::parse_timestamp;
