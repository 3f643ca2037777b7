#![cfg_attr(not(test), no_std)]

extern crate bitfield;

#[macro_use]
extern crate num_derive;

#[macro_use]
mod fmt;

mod cmd;
mod command;
mod config;
pub mod controllers;
mod driver;
mod error;
mod fifo;
pub mod protocol;
pub mod regs;

/// Size of a MIFARE Classic key in bytes.
pub const KEY_LEN: usize = 6;

pub use self::{
    command::ChipCommand,
    config::ConfigPatch,
    driver::Driver,
    error::DriverError,
    fifo::{FifoMode, FIFO_SIZE_LARGE, FIFO_SIZE_SMALL},
    protocol::{Protocol, ProtocolDescriptor},
};
