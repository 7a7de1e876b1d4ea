pub mod property;

pub use property::PropertyRecord;
