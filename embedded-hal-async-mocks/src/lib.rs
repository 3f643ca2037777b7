pub mod pin;
pub mod spi;
