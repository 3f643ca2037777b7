use crate::regs::RegisterAddress;

use super::{DUMMY, READ, WRITE};

/// A two byte register access frame.
pub struct SingleCommand {
    pub request: SingleRequest,
    pub response: SingleResponse,
}

pub struct SingleRequest {
    buf: [u8; 2],
}

pub struct SingleResponse {
    buf: [u8; 2],
}

impl SingleCommand {
    pub const fn read(address: RegisterAddress) -> Self {
        Self {
            request: SingleRequest::read(address),
            response: SingleResponse::new(),
        }
    }

    pub const fn write(address: RegisterAddress, value: u8) -> Self {
        Self {
            request: SingleRequest::write(address, value),
            response: SingleResponse::new(),
        }
    }
}

impl SingleRequest {
    const fn read(address: RegisterAddress) -> Self {
        Self {
            buf: [(address.value() << 1) | READ, DUMMY],
        }
    }

    const fn write(address: RegisterAddress, value: u8) -> Self {
        Self {
            buf: [(address.value() << 1) | WRITE, value],
        }
    }
}

impl AsRef<[u8]> for SingleRequest {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl SingleResponse {
    const fn new() -> Self {
        Self { buf: [0; 2] }
    }

    /// The register value clocked out by the chip during the data slot.
    pub fn value(&self) -> u8 {
        self.buf[1]
    }
}

impl AsRef<[u8]> for SingleResponse {
    fn as_ref(&self) -> &[u8] {
        &self.buf
    }
}

impl AsMut<[u8]> for SingleResponse {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}
