/// Byte oriented link to the host, e.g. a USB CDC endpoint.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    /// Poll for a received byte without blocking.
    fn read_byte(&mut self) -> Option<u8>;

    /// Send a byte. Returns false if no host is attached.
    fn write_byte(&mut self, byte: u8) -> bool;
}
