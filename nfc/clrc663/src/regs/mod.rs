use bitfield::bitfield;
use num_traits::FromPrimitive;

use crate::ChipCommand;

mod register_address;
pub use register_address::RegisterAddress;

/// A chip register with a fixed address and an 8 bit value.
pub trait Register: Copy + From<u8> + Into<u8> {
    const ADDRESS: RegisterAddress;
}

macro_rules! register {
    ($name:ident, $address:expr) => {
        impl Register for $name {
            const ADDRESS: RegisterAddress = $address;
        }

        impl From<u8> for $name {
            fn from(value: u8) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.0
            }
        }
    };
}

bitfield! {
    /// Starts and stops command execution.
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct Command(u8);
    /// Enter standby mode.
    pub standby, set_standby: 7;
    /// Keep the analog receiver and transmitter powered down.
    pub modem_off, set_modem_off: 6;
    command_bits, set_command_bits: 4, 0;
}

impl Command {
    pub fn new(command: ChipCommand) -> Self {
        let mut reg = Self(0);
        reg.set_command(command);
        reg
    }

    pub fn command(&self) -> Option<ChipCommand> {
        ChipCommand::from_u8(self.command_bits())
    }

    pub fn set_command(&mut self, command: ChipCommand) {
        self.set_command_bits(command as u8);
    }
}

register!(Command, RegisterAddress::COMMAND);

bitfield! {
    /// FIFO control.
    ///
    /// The capacity mode, the flush trigger, and the two high bits of the FIFO
    /// length all live in this register.
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct FifoControl(u8);
    /// FIFO size
    ///
    /// # Values
    ///
    /// - false: 512 bytes
    /// - true: 255 bytes
    pub fifo_size, set_fifo_size: 7;
    pub hi_alert, _: 6;
    pub lo_alert, _: 5;
    /// Clears the FIFO when set. Reads back as 0.
    pub fifo_flush, set_fifo_flush: 4;
    pub water_level_ext, set_water_level_ext: 2;
    /// Bits 9 and 8 of the FIFO length, only valid in 512 byte mode.
    pub fifo_length_ext, _: 1, 0;
}

register!(FifoControl, RegisterAddress::FIFO_CONTROL);

bitfield! {
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct FifoLength(u8);
    pub fifo_length, _: 7, 0;
}

register!(FifoLength, RegisterAddress::FIFO_LENGTH);

bitfield! {
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct FifoData(u8);
    pub data, set_data: 7, 0;
}

register!(FifoData, RegisterAddress::FIFO_DATA);

bitfield! {
    /// Driver mode of the TX1 and TX2 antenna drivers.
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct DrvMode(u8);
    pub tx2_inv, set_tx2_inv: 7;
    pub tx1_inv, set_tx1_inv: 6;
    /// Enable the antenna drivers, i.e. turn on the RF field.
    pub tx_en, set_tx_en: 3;
    pub tx_clk_mode, set_tx_clk_mode: 2, 0;
}

impl DrvMode {
    /// Drivers enabled with TX2 inverted and push/pull clock mode.
    pub const FIELD_ON: DrvMode = DrvMode(0x8E);
    pub const FIELD_OFF: DrvMode = DrvMode(0x00);
}

register!(DrvMode, RegisterAddress::DRV_MODE);

bitfield! {
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct Version(u8);
    pub version, _: 7, 4;
    pub subversion, _: 3, 0;
}

register!(Version, RegisterAddress::VERSION);
