#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    Spi,
    Pin,
    /// Register address outside the 7 bit address space.
    InvalidAddress(u8),
    /// Protocol identifier not present in the protocol table.
    InvalidProtocol(u8),
}

impl<SpiError> From<SpiError> for DriverError
where
    SpiError: embedded_hal_async::spi::Error,
{
    fn from(_value: SpiError) -> Self {
        Self::Spi
    }
}
