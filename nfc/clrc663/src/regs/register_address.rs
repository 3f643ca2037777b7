use crate::DriverError;

/// Address of a chip register in the 7 bit register space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterAddress(u8);

impl RegisterAddress {
    pub const MAX: RegisterAddress = RegisterAddress(0x7F);

    /// Starts and stops command execution
    pub const COMMAND: Self = Self(0x00);
    /// Host control register
    pub const HOST_CTRL: Self = Self(0x01);
    /// Control register of the FIFO
    pub const FIFO_CONTROL: Self = Self(0x02);
    /// FIFO underflow and overflow warning level
    pub const WATER_LEVEL: Self = Self(0x03);
    /// Low byte of the number of bytes in the FIFO
    pub const FIFO_LENGTH: Self = Self(0x04);
    /// FIFO data in/out exchange register
    pub const FIFO_DATA: Self = Self(0x05);
    /// Interrupt register 0
    pub const IRQ0: Self = Self(0x06);
    /// Interrupt register 1
    pub const IRQ1: Self = Self(0x07);
    /// Interrupt enable register 0
    pub const IRQ0_EN: Self = Self(0x08);
    /// Interrupt enable register 1
    pub const IRQ1_EN: Self = Self(0x09);
    /// Error bits showing the error status of the last command execution
    pub const ERROR: Self = Self(0x0A);
    /// Contains status of the communication
    pub const STATUS: Self = Self(0x0B);
    /// Anticollision adjustments for bit oriented protocols
    pub const RX_BIT_CTRL: Self = Self(0x0C);
    /// Collision position register
    pub const RX_COLL: Self = Self(0x0D);
    /// Control of timers 0 to 3
    pub const T_CONTROL: Self = Self(0x0E);
    /// Control of Timer0
    pub const T0_CONTROL: Self = Self(0x0F);
    /// High register of the reload value of Timer0
    pub const T0_RELOAD_HI: Self = Self(0x10);
    /// Low register of the reload value of Timer0
    pub const T0_RELOAD_LO: Self = Self(0x11);
    /// Counter value high register of Timer0
    pub const T0_COUNTER_VAL_HI: Self = Self(0x12);
    /// Counter value low register of Timer0
    pub const T0_COUNTER_VAL_LO: Self = Self(0x13);
    /// Control of Timer1
    pub const T1_CONTROL: Self = Self(0x14);
    /// High register of the reload value of Timer1
    pub const T1_RELOAD_HI: Self = Self(0x15);
    /// Low register of the reload value of Timer1
    pub const T1_RELOAD_LO: Self = Self(0x16);
    /// Counter value high register of Timer1
    pub const T1_COUNTER_VAL_HI: Self = Self(0x17);
    /// Counter value low register of Timer1
    pub const T1_COUNTER_VAL_LO: Self = Self(0x18);
    /// Control of Timer2
    pub const T2_CONTROL: Self = Self(0x19);
    /// High byte of the reload value of Timer2
    pub const T2_RELOAD_HI: Self = Self(0x1A);
    /// Low byte of the reload value of Timer2
    pub const T2_RELOAD_LO: Self = Self(0x1B);
    /// Counter value high byte of Timer2
    pub const T2_COUNTER_VAL_HI: Self = Self(0x1C);
    /// Counter value low byte of Timer2
    pub const T2_COUNTER_VAL_LO: Self = Self(0x1D);
    /// Control of Timer3
    pub const T3_CONTROL: Self = Self(0x1E);
    /// High byte of the reload value of Timer3
    pub const T3_RELOAD_HI: Self = Self(0x1F);
    /// Low byte of the reload value of Timer3
    pub const T3_RELOAD_LO: Self = Self(0x20);
    /// Counter value high byte of Timer3
    pub const T3_COUNTER_VAL_HI: Self = Self(0x21);
    /// Counter value low byte of Timer3
    pub const T3_COUNTER_VAL_LO: Self = Self(0x22);
    /// Control of Timer4
    pub const T4_CONTROL: Self = Self(0x23);
    /// High byte of the reload value of Timer4
    pub const T4_RELOAD_HI: Self = Self(0x24);
    /// Low byte of the reload value of Timer4
    pub const T4_RELOAD_LO: Self = Self(0x25);
    /// Counter value high byte of Timer4
    pub const T4_COUNTER_VAL_HI: Self = Self(0x26);
    /// Counter value low byte of Timer4
    pub const T4_COUNTER_VAL_LO: Self = Self(0x27);
    /// Driver mode register
    pub const DRV_MODE: Self = Self(0x28);
    /// Transmitter amplifier register
    pub const TX_AMP: Self = Self(0x29);
    /// Driver configuration register
    pub const DRV_CON: Self = Self(0x2A);
    /// Transmitter register
    pub const TXL: Self = Self(0x2B);
    /// Transmitter CRC control register, preset value
    pub const TX_CRC_PRESET: Self = Self(0x2C);
    /// Receiver CRC control register, preset value
    pub const RX_CRC_PRESET: Self = Self(0x2D);
    /// Transmitter data number register
    pub const TX_DATA_NUM: Self = Self(0x2E);
    /// Transmitter modulation width register
    pub const TX_MOD_WIDTH: Self = Self(0x2F);
    /// Transmitter symbol 1 + symbol 0 burst length register
    pub const TX_SYM10_BURST_LEN: Self = Self(0x30);
    /// Transmitter wait control
    pub const TX_WAIT_CTRL: Self = Self(0x31);
    /// Transmitter wait low
    pub const TX_WAIT_LO: Self = Self(0x32);
    /// Transmitter frame control
    pub const FRAME_CON: Self = Self(0x33);
    /// Receiver start of frame detection
    pub const RX_SOF_D: Self = Self(0x34);
    /// Receiver control register
    pub const RX_CTRL: Self = Self(0x35);
    /// Receiver wait register
    pub const RX_WAIT: Self = Self(0x36);
    /// Receiver threshold register
    pub const RX_THRESHOLD: Self = Self(0x37);
    /// Receiver register
    pub const RCV: Self = Self(0x38);
    /// Receiver analog register
    pub const RX_ANA: Self = Self(0x39);
    /// Low-power card detection options (CLRC66303 only, RFU otherwise)
    pub const LPCD_OPTIONS: Self = Self(0x3A);
    /// Serial speed register
    pub const SERIAL_SPEED: Self = Self(0x3B);
    /// Low-power oscillator trimming register
    pub const LFO_TRIMM: Self = Self(0x3C);
    /// IntegerN PLL control, clock output adjustment
    pub const PLL_CTRL: Self = Self(0x3D);
    /// IntegerN PLL divider for the clock output
    pub const PLL_DIV_OUT: Self = Self(0x3E);
    /// Low-power card detection Q channel minimum threshold
    pub const LPCD_Q_MIN: Self = Self(0x3F);
    /// Low-power card detection Q channel maximum threshold
    pub const LPCD_Q_MAX: Self = Self(0x40);
    /// Low-power card detection I channel minimum threshold
    pub const LPCD_I_MIN: Self = Self(0x41);
    /// Low-power card detection I channel result register
    pub const LPCD_I_RESULT: Self = Self(0x42);
    /// Low-power card detection Q channel result register
    pub const LPCD_Q_RESULT: Self = Self(0x43);
    /// PIN enable register
    pub const PAD_EN: Self = Self(0x44);
    /// PIN out register
    pub const PAD_OUT: Self = Self(0x45);
    /// PIN in register
    pub const PAD_IN: Self = Self(0x46);
    /// Enables and controls the SIGOUT Pin
    pub const SIG_OUT: Self = Self(0x47);
    /// Transmitter bit mode register
    pub const TX_BIT_MOD: Self = Self(0x48);
    /// Transmitter data configuration register
    pub const TX_DATA_CON: Self = Self(0x4A);
    /// Transmitter data modulation register
    pub const TX_DATA_MOD: Self = Self(0x4B);
    /// Transmitter symbol frequency
    pub const TX_SYM_FREQ: Self = Self(0x4C);
    /// Transmitter symbol 0 high register
    pub const TX_SYM0_H: Self = Self(0x4D);
    /// Transmitter symbol 0 low register
    pub const TX_SYM0_L: Self = Self(0x4E);
    /// Transmitter symbol 1 high register
    pub const TX_SYM1_H: Self = Self(0x4F);
    /// Transmitter symbol 1 low register
    pub const TX_SYM1_L: Self = Self(0x50);
    /// Transmitter symbol 2 register
    pub const TX_SYM2: Self = Self(0x51);
    /// Transmitter symbol 3 register
    pub const TX_SYM3: Self = Self(0x52);
    /// Transmitter symbol 1 + symbol 0 length register
    pub const TX_SYM10_LEN: Self = Self(0x53);
    /// Transmitter symbol 3 + symbol 2 length register
    pub const TX_SYM32_LEN: Self = Self(0x54);
    /// Transmitter symbol 1 + symbol 0 burst control register
    pub const TX_SYM10_BURST_CTRL: Self = Self(0x55);
    /// Transmitter symbol 1 + symbol 0 modulation register
    pub const TX_SYM10_MOD: Self = Self(0x56);
    /// Transmitter symbol 3 + symbol 2 modulation register
    pub const TX_SYM32_MOD: Self = Self(0x57);
    /// Receiver bit modulation register
    pub const RX_BIT_MOD: Self = Self(0x58);
    /// Receiver end of frame symbol register
    pub const RX_EOF_SYM: Self = Self(0x59);
    /// Receiver synchronisation value high register
    pub const RX_SYNC_VAL_H: Self = Self(0x5A);
    /// Receiver synchronisation value low register
    pub const RX_SYNC_VAL_L: Self = Self(0x5B);
    /// Receiver synchronisation mode register
    pub const RX_SYNC_MOD: Self = Self(0x5C);
    /// Receiver modulation register
    pub const RX_MOD: Self = Self(0x5D);
    /// Receiver correlation register
    pub const RX_CORR: Self = Self(0x5E);
    /// Receiver calibration, set during production
    pub const FAB_CAL: Self = Self(0x5F);
    /// Version and subversion register
    pub const VERSION: Self = Self(0x7F);

    /// Get the address if it is within the register space.
    pub const fn new(address: u8) -> Option<Self> {
        if address <= Self::MAX.0 {
            Some(Self(address))
        } else {
            None
        }
    }

    /// The raw 7 bit address.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The address following this one, if any.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(address) => Self::new(address),
            None => None,
        }
    }
}

impl From<RegisterAddress> for u8 {
    fn from(value: RegisterAddress) -> Self {
        value.0
    }
}

impl TryFrom<u8> for RegisterAddress {
    type Error = DriverError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(DriverError::InvalidAddress(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        assert_eq!(Some(RegisterAddress::COMMAND), RegisterAddress::new(0x00));
        assert_eq!(Some(RegisterAddress::VERSION), RegisterAddress::new(0x7F));
        assert_eq!(None, RegisterAddress::new(0x80));
        assert_eq!(None, RegisterAddress::new(0xFF));
    }

    #[test]
    fn try_from() {
        assert_eq!(Ok(RegisterAddress::DRV_MODE), RegisterAddress::try_from(0x28));
        assert_eq!(
            Err(DriverError::InvalidAddress(0x80)),
            RegisterAddress::try_from(0x80)
        );
    }

    #[test]
    fn every_address_is_in_range() {
        for value in 0..=u8::MAX {
            match RegisterAddress::new(value) {
                Some(address) => assert_eq!(value, address.value()),
                None => assert!(value > RegisterAddress::MAX.value()),
            }
        }
    }

    #[test]
    fn next() {
        assert_eq!(Some(RegisterAddress::FIFO_LENGTH), RegisterAddress::WATER_LEVEL.next());
        assert_eq!(None, RegisterAddress::MAX.next());
    }
}
