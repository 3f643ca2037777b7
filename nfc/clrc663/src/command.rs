use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi;

use crate::{
    protocol::{RxProtocol, TxProtocol},
    regs::Command,
    Driver, DriverError, Protocol, KEY_LEN,
};

/// Chip commands, started by writing them to the `Command` register.
#[derive(Clone, Copy, Debug, PartialEq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipCommand {
    /// No action, cancels current command execution
    Idle = 0x00,
    /// Low-power card detection
    Lpcd = 0x01,
    /// Move a MIFARE Classic key (6 bytes) from the FIFO into the key buffer
    LoadKey = 0x02,
    /// Perform the MIFARE Classic authentication
    MfAuthent = 0x03,
    /// Query, Ack and Req-Rn for ISO/IEC 18000-3 mode 3 / EPC Class-1 HF
    AckReq = 0x04,
    /// Activate the receive circuit
    Receive = 0x05,
    /// Transmit data from the FIFO
    Transmit = 0x06,
    /// Transmit data from the FIFO and activate the receiver when done
    Transceive = 0x07,
    /// Write one byte from the FIFO to the EEPROM
    WriteE2 = 0x08,
    /// Write up to one EEPROM page (64 bytes) from the FIFO to the EEPROM
    WriteE2Page = 0x09,
    /// Copy EEPROM data into the FIFO
    ReadE2 = 0x0A,
    /// Initialize registers from EEPROM sector 2
    LoadReg = 0x0C,
    /// Initialize the registers needed for a protocol change from EEPROM
    LoadProtocol = 0x0D,
    /// Copy a key from the EEPROM into the key buffer
    LoadKeyE2 = 0x0E,
    /// Store a MIFARE Classic key (6 bytes) in the EEPROM
    StoreKeyE2 = 0x0F,
    /// Fill the FIFO from the random number generator
    ReadRnr = 0x1C,
    /// Reset the chip
    SoftReset = 0x1F,
}

/// Command sequences.
///
/// Commands taking a FIFO payload are always issued as Idle, FIFO flush,
/// payload, command so that the chip starts from a known state.
impl<Spi, ResetPin> Driver<Spi, ResetPin>
where
    Spi: spi::SpiDevice,
    ResetPin: OutputPin,
{
    /// Issue a chip command.
    pub async fn execute(&mut self, command: ChipCommand) -> Result<(), DriverError> {
        trace!("Execute {}", command);
        self.write_reg(Command::new(command)).await
    }

    /// Cancel any running command.
    pub async fn idle(&mut self) -> Result<(), DriverError> {
        self.execute(ChipCommand::Idle).await
    }

    /// Start low-power card detection.
    pub async fn low_power_card_detect(&mut self) -> Result<(), DriverError> {
        self.idle().await?;
        self.execute(ChipCommand::Lpcd).await
    }

    /// Load a MIFARE Classic key into the key buffer.
    pub async fn load_key(&mut self, key: &[u8; KEY_LEN]) -> Result<(), DriverError> {
        self.idle().await?;
        self.flush_fifo().await?;
        self.write_fifo(key).await?;
        self.execute(ChipCommand::LoadKey).await
    }

    /// Load the transmitter and receiver settings for a protocol.
    pub async fn load_protocol(&mut self, protocol: Protocol) -> Result<(), DriverError> {
        let descriptor = protocol.descriptor();
        debug!("Load protocol {}", protocol);

        self.load_rx_tx_protocol(descriptor.rx, descriptor.tx).await
    }

    /// Load receiver and transmitter settings independently.
    pub async fn load_rx_tx_protocol(
        &mut self,
        rx: RxProtocol,
        tx: TxProtocol,
    ) -> Result<(), DriverError> {
        self.idle().await?;
        self.flush_fifo().await?;
        // The chip expects the receiver protocol first.
        self.write_fifo(&[rx as u8, tx as u8]).await?;
        self.execute(ChipCommand::LoadProtocol).await
    }
}
