use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi;

use crate::{
    regs::{FifoControl, FifoData, FifoLength},
    Driver, DriverError,
};

/// FIFO capacity in 255 byte mode.
pub const FIFO_SIZE_SMALL: usize = 255;
/// FIFO capacity in 512 byte mode.
pub const FIFO_SIZE_LARGE: usize = 512;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    /// 255 bytes, length fits in `FIFOLength`.
    Small,
    /// 512 bytes, length extends into `FIFOControl`.
    Large,
}

impl<Spi, ResetPin> Driver<Spi, ResetPin>
where
    Spi: spi::SpiDevice,
    ResetPin: OutputPin,
{
    /// Clear the FIFO.
    pub async fn flush_fifo(&mut self) -> Result<(), DriverError> {
        self.modify_reg::<FifoControl, _>(|reg| reg.set_fifo_flush(true))
            .await
    }

    /// Change the FIFO capacity.
    /// The FIFO is flushed first as the size may only change while it is empty.
    pub async fn set_fifo_mode(&mut self, mode: FifoMode) -> Result<(), DriverError> {
        self.flush_fifo().await?;
        self.modify_reg::<FifoControl, _>(|reg| reg.set_fifo_size(mode == FifoMode::Small))
            .await
    }

    /// Write bytes to the FIFO, one register access per byte.
    pub async fn write_fifo(&mut self, buffer: &[u8]) -> Result<(), DriverError> {
        assert!(buffer.len() <= FIFO_SIZE_LARGE);

        for &byte in buffer {
            self.write_reg(FifoData::from(byte)).await?;
        }
        Ok(())
    }

    /// Read bytes from the FIFO, one register access per byte.
    pub async fn read_fifo(&mut self, buffer: &mut [u8]) -> Result<(), DriverError> {
        assert!(buffer.len() <= FIFO_SIZE_LARGE);

        for byte in buffer.iter_mut() {
            *byte = self.read_reg::<FifoData>().await?.data();
        }
        Ok(())
    }

    /// Get the number of bytes currently in the FIFO.
    pub async fn fifo_len(&mut self) -> Result<usize, DriverError> {
        let length = self.read_reg::<FifoLength>().await?;
        let control = self.read_reg::<FifoControl>().await?;

        Ok(fifo_len(length, control))
    }
}

fn fifo_len(length: FifoLength, control: FifoControl) -> usize {
    if control.fifo_size() {
        length.fifo_length() as usize
    } else {
        (control.fifo_length_ext() as usize) << 8 | length.fifo_length() as usize
    }
}

#[cfg(test)]
mod tests {
    use embedded_hal_async_mocks::{
        pin::MockOutputPin,
        spi::{Access, RegisterFileSpiDevice},
    };

    use super::*;

    fn driver(spi: RegisterFileSpiDevice) -> Driver<RegisterFileSpiDevice, MockOutputPin> {
        Driver::new(spi, MockOutputPin::new())
    }

    #[test]
    fn len_small_mode_ignores_ext_bits() {
        for ext in 0..=3 {
            for length in [0x00, 0x01, 0x7F, 0xFF] {
                let control = FifoControl::from(0x80 | ext);
                assert_eq!(length as usize, fifo_len(FifoLength::from(length), control));
            }
        }
    }

    #[test]
    fn len_large_mode_uses_ext_bits() {
        assert_eq!(0x000, fifo_len(FifoLength::from(0x00), FifoControl::from(0x00)));
        assert_eq!(0x0FF, fifo_len(FifoLength::from(0xFF), FifoControl::from(0x00)));
        assert_eq!(0x100, fifo_len(FifoLength::from(0x00), FifoControl::from(0x01)));
        assert_eq!(0x1A5, fifo_len(FifoLength::from(0xA5), FifoControl::from(0x01)));
        assert_eq!(0x200, fifo_len(FifoLength::from(0x00), FifoControl::from(0x02)));
        // Other control bits do not leak into the length.
        assert_eq!(0x2FF, fifo_len(FifoLength::from(0xFF), FifoControl::from(0x7E)));
    }

    #[tokio::test]
    async fn len_reads_length_then_control() {
        // Given
        let spi = RegisterFileSpiDevice::new()
            .with(0x04, 0x10)
            .with(0x02, 0x01);
        let mut driver = driver(spi);

        // When
        let len = driver.fifo_len().await.unwrap();

        // Then
        assert_eq!(0x110, len);
        let (spi, _) = driver.release();
        assert_eq!(&[Access::Read(0x04), Access::Read(0x02)], spi.accesses());
    }

    #[tokio::test]
    async fn flush_sets_flush_bit() {
        // Given
        let mut driver = driver(RegisterFileSpiDevice::new().with(0x02, 0x80));

        // When
        driver.flush_fifo().await.unwrap();

        // Then
        let (spi, _) = driver.release();
        assert_eq!(&[Access::Read(0x02), Access::Write(0x02, 0x90)], spi.accesses());
    }

    #[tokio::test]
    async fn set_mode_flushes_first() {
        // Given
        let mut driver = driver(RegisterFileSpiDevice::new().with(0x02, 0x04));

        // When
        driver.set_fifo_mode(FifoMode::Small).await.unwrap();

        // Then
        let (spi, _) = driver.release();
        assert_eq!(
            &[
                Access::Read(0x02),
                Access::Write(0x02, 0x14),
                Access::Read(0x02),
                Access::Write(0x02, 0x94),
            ],
            spi.accesses()
        );
    }

    #[tokio::test]
    async fn set_large_mode_clears_size_bit() {
        // Given
        let mut driver = driver(RegisterFileSpiDevice::new().with(0x02, 0x80));

        // When
        driver.set_fifo_mode(FifoMode::Large).await.unwrap();

        // Then
        let (spi, _) = driver.release();
        assert_eq!(0x10, spi.register(0x02));
    }

    #[tokio::test]
    async fn write_and_read_bytes_in_order() {
        // Given
        let mut driver = driver(RegisterFileSpiDevice::new().with(0x05, 0x42));

        // When
        driver.write_fifo(&[0x01, 0x02, 0x03]).await.unwrap();
        let mut buffer = [0; 2];
        driver.read_fifo(&mut buffer).await.unwrap();

        // Then
        let (spi, _) = driver.release();
        assert_eq!(vec![0x01, 0x02, 0x03], spi.writes_to(0x05));
        assert_eq!(5, spi.transactions());
        assert_eq!(&[Access::Read(0x05), Access::Read(0x05)], &spi.accesses()[3..]);
    }
}
