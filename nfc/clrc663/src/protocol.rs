//! Protocol table for the `LoadProtocol` command.
//!
//! A protocol identifier selects a pair of transmitter and receiver settings
//! which the chip loads from its EEPROM.

use num_traits::FromPrimitive;

use crate::DriverError;

/// Transmitter protocol numbers understood by `LoadProtocol`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxProtocol {
    /// ISO/IEC 14443A, 106 kbit/s, Miller
    Iso14443a106 = 0x00,
    /// ISO/IEC 14443A, 212 kbit/s, Miller
    Iso14443a212 = 0x01,
    /// ISO/IEC 14443A, 424 kbit/s, Miller
    Iso14443a424 = 0x02,
    /// ISO/IEC 14443A, 848 kbit/s, Miller
    Iso14443a848 = 0x03,
    /// ISO/IEC 14443B, 106 kbit/s, NRZ
    Iso14443b106 = 0x04,
    /// ISO/IEC 14443B, 212 kbit/s, NRZ
    Iso14443b212 = 0x05,
    /// ISO/IEC 14443B, 424 kbit/s, NRZ
    Iso14443b424 = 0x06,
    /// ISO/IEC 14443B, 848 kbit/s, NRZ
    Iso14443b848 = 0x07,
    /// FeliCa, 212 kbit/s, Manchester
    Felica212 = 0x08,
    /// FeliCa, 424 kbit/s, Manchester
    Felica424 = 0x09,
}

/// Receiver protocol numbers understood by `LoadProtocol`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RxProtocol {
    /// ISO/IEC 14443A, 106 kbit/s, Manchester subcarrier
    Iso14443a106 = 0x00,
    /// ISO/IEC 14443A, 212 kbit/s, BPSK
    Iso14443a212 = 0x01,
    /// ISO/IEC 14443A, 424 kbit/s, BPSK
    Iso14443a424 = 0x02,
    /// ISO/IEC 14443A, 848 kbit/s, BPSK
    Iso14443a848 = 0x03,
    /// ISO/IEC 14443B, 106 kbit/s, BPSK
    Iso14443b106 = 0x04,
    /// ISO/IEC 14443B, 212 kbit/s, BPSK
    Iso14443b212 = 0x05,
    /// ISO/IEC 14443B, 424 kbit/s, BPSK
    Iso14443b424 = 0x06,
    /// ISO/IEC 14443B, 848 kbit/s, BPSK
    Iso14443b848 = 0x07,
    /// FeliCa, 212 kbit/s, Manchester
    Felica212 = 0x08,
    /// FeliCa, 424 kbit/s, Manchester
    Felica424 = 0x09,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProtocolDescriptor {
    pub tx: TxProtocol,
    pub rx: RxProtocol,
}

/// Logical protocol identifier as sent by the host.
#[derive(Clone, Copy, Debug, PartialEq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Protocol {
    /// MIFARE and other ISO/IEC 14443A cards at 106 kbit/s
    Iso14443a106 = 0,
    Iso14443a212 = 1,
    Iso14443a424 = 2,
    Iso14443a848 = 3,
    Iso14443b106 = 4,
    Iso14443b212 = 5,
    Iso14443b424 = 6,
    Iso14443b848 = 7,
    Felica212 = 8,
    Felica424 = 9,
}

impl Protocol {
    /// Look up a protocol by its identifier.
    pub fn from_id(id: u8) -> Result<Self, DriverError> {
        Self::from_u8(id).ok_or(DriverError::InvalidProtocol(id))
    }

    pub const fn descriptor(self) -> ProtocolDescriptor {
        let (tx, rx) = match self {
            Protocol::Iso14443a106 => (TxProtocol::Iso14443a106, RxProtocol::Iso14443a106),
            Protocol::Iso14443a212 => (TxProtocol::Iso14443a212, RxProtocol::Iso14443a212),
            Protocol::Iso14443a424 => (TxProtocol::Iso14443a424, RxProtocol::Iso14443a424),
            Protocol::Iso14443a848 => (TxProtocol::Iso14443a848, RxProtocol::Iso14443a848),
            Protocol::Iso14443b106 => (TxProtocol::Iso14443b106, RxProtocol::Iso14443b106),
            Protocol::Iso14443b212 => (TxProtocol::Iso14443b212, RxProtocol::Iso14443b212),
            Protocol::Iso14443b424 => (TxProtocol::Iso14443b424, RxProtocol::Iso14443b424),
            Protocol::Iso14443b848 => (TxProtocol::Iso14443b848, RxProtocol::Iso14443b848),
            Protocol::Felica212 => (TxProtocol::Felica212, RxProtocol::Felica212),
            Protocol::Felica424 => (TxProtocol::Felica424, RxProtocol::Felica424),
        };
        ProtocolDescriptor { tx, rx }
    }
}

impl TryFrom<u8> for Protocol {
    type Error = DriverError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_id(value)
    }
}
