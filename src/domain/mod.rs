pub mod baked_good;
pub mod bakery;

pub use self::baked_good::BakedGood;
pub use self::bakery::Bakery;
