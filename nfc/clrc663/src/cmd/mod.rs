mod single;

/// Direction bit appended to the shifted register address.
const WRITE: u8 = 0x00;
const READ: u8 = 0x01;

/// Transmitted in the data slot of a read frame.
const DUMMY: u8 = 0xDB;

pub use single::SingleCommand;
