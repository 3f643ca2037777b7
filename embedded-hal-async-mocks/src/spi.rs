use core::convert::Infallible;

use embedded_hal_async::spi::{self, ErrorType, Operation, SpiDevice};

#[derive(Debug, Clone, Copy)]
pub struct SpiError;

impl spi::Error for SpiError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

/// A single register access as seen on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read(u8),
    Write(u8, u8),
}

/// Fake spi device backed by a 128 entry register file.
///
/// Every frame is two bytes, `(address << 1) | rw` followed by the data byte,
/// where `rw` is 1 for reads. Reads answer with the register value in the second
/// byte. Each frame is recorded so that tests can assert on the exact access
/// order.
#[derive(Debug)]
pub struct RegisterFileSpiDevice {
    registers: [u8; 128],
    accesses: Vec<Access>,
    transactions: usize,
}

impl RegisterFileSpiDevice {
    pub fn new() -> Self {
        Self {
            registers: [0; 128],
            accesses: Vec::new(),
            transactions: 0,
        }
    }

    /// Seed a register without recording an access.
    pub fn with(mut self, address: u8, value: u8) -> Self {
        self.registers[address as usize] = value;
        self
    }

    pub fn register(&self, address: u8) -> u8 {
        self.registers[address as usize]
    }

    pub fn accesses(&self) -> &[Access] {
        &self.accesses
    }

    /// The writes to a single register, in order.
    pub fn writes_to(&self, address: u8) -> Vec<u8> {
        self.accesses
            .iter()
            .filter_map(|access| match *access {
                Access::Write(a, value) if a == address => Some(value),
                _ => None,
            })
            .collect()
    }

    /// The number of chip select assertions seen so far.
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    fn exchange(&mut self, tx: &[u8]) -> [u8; 2] {
        assert_eq!(2, tx.len(), "register frames are exactly two bytes");

        let address = tx[0] >> 1;
        if tx[0] & 1 == 1 {
            self.accesses.push(Access::Read(address));
            [0, self.registers[address as usize]]
        } else {
            self.accesses.push(Access::Write(address, tx[1]));
            self.registers[address as usize] = tx[1];
            [0, 0]
        }
    }
}

impl Default for RegisterFileSpiDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for RegisterFileSpiDevice {
    type Error = Infallible;
}

impl SpiDevice for RegisterFileSpiDevice {
    async fn transaction(
        &mut self,
        operations: &mut [Operation<'_, u8>],
    ) -> Result<(), Infallible> {
        self.transactions += 1;

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(tx) => {
                    self.exchange(tx);
                }
                Operation::Transfer(rx, tx) => {
                    let response = self.exchange(tx);
                    rx.copy_from_slice(&response[..rx.len()]);
                }
                Operation::TransferInPlace(buf) => {
                    let response = self.exchange(buf);
                    buf.copy_from_slice(&response);
                }
                Operation::Read(_) => panic!("reads without an address frame are not supported"),
                Operation::DelayNs(_) => {}
            }
        }

        Ok(())
    }
}

/// Spi device where every transaction fails.
#[derive(Debug, Default)]
pub struct FailingSpiDevice {
    transactions: usize,
}

impl FailingSpiDevice {
    pub fn transactions(&self) -> usize {
        self.transactions
    }
}

impl ErrorType for FailingSpiDevice {
    type Error = SpiError;
}

impl SpiDevice for FailingSpiDevice {
    async fn transaction(
        &mut self,
        _operations: &mut [Operation<'_, u8>],
    ) -> Result<(), SpiError> {
        self.transactions += 1;
        Err(SpiError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_answers_seeded_value() {
        let mut spi = RegisterFileSpiDevice::new().with(0x7F, 0x1A);

        let response = spi.exchange(&[0x7F << 1 | 1, 0xDB]);

        assert_eq!(0x1A, response[1]);
        assert_eq!(&[Access::Read(0x7F)], spi.accesses());
    }

    #[test]
    fn write_updates_register() {
        let mut spi = RegisterFileSpiDevice::new();

        spi.exchange(&[0x28 << 1, 0x8E]);

        assert_eq!(0x8E, spi.register(0x28));
        assert_eq!(vec![0x8E], spi.writes_to(0x28));
    }
}
