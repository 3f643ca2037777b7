//! Host command bridge
//!
//! The host drives the chip over a byte stream. Each request is an opcode
//! byte followed by exactly the number of parameter bytes the opcode takes.
//!
//! # Examples
//!
//! Host TX     Host RX     Description
//! 00 7F       1A          Read the Version register
//! 01 28 8E                Write DrvMode, no response
//! 02 00       BB          Load ISO/IEC 14443A 106 kbit/s
//! 03          BB          RF field on
//! 04          BB          RF field off
//! 05          FF AA       Unknown command
//! 02 0A       FF AB       Invalid protocol identifier

mod command;
mod controller;
mod error;
mod session;
mod traits;

/// Acknowledge.
pub const ACK: u8 = 0xBB;
/// Negative acknowledge, always followed by a reason byte.
pub const NAK: u8 = 0xFF;
/// NAK reason: the opcode is not a known command.
pub const UNKNOWN_COMMAND: u8 = 0xAA;
/// NAK reason: a register address or protocol identifier is out of range.
pub const INVALID_PARAMETER: u8 = 0xAB;
/// NAK reason: the chip could not be accessed.
pub const DRIVER_FAULT: u8 = 0xAC;

/// Capacity of the parameter buffer.
pub const PARAMS_MAX: usize = 30;

pub use command::{HostCommand, Request};
pub use controller::HostController;
pub use error::ControllerError;
pub use session::{Session, SessionState, Step};
pub use traits::Transport;

#[cfg(test)]
pub use traits::MockTransport;
