/// Host command opcodes.
#[derive(Clone, Copy, Debug, PartialEq, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HostCommand {
    /// Read a register. Parameters: address.
    RegRead = 0x00,
    /// Write a register. Parameters: address, value.
    RegWrite = 0x01,
    /// Load a protocol. Parameters: protocol identifier.
    ProtocolSet = 0x02,
    RfFieldOn = 0x03,
    RfFieldOff = 0x04,
}

impl HostCommand {
    /// The number of parameter bytes following the opcode.
    pub const fn param_count(self) -> usize {
        match self {
            HostCommand::RegRead => 1,
            HostCommand::RegWrite => 2,
            HostCommand::ProtocolSet => 1,
            HostCommand::RfFieldOn => 0,
            HostCommand::RfFieldOff => 0,
        }
    }
}

/// A complete host request.
///
/// Parameters are kept as received; range checks happen when the request is
/// executed so that the host gets a response for them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request {
    RegRead { address: u8 },
    RegWrite { address: u8, value: u8 },
    ProtocolSet { protocol: u8 },
    RfFieldOn,
    RfFieldOff,
}

impl Request {
    /// Build a request from a command and exactly `command.param_count()` parameters.
    pub fn new(command: HostCommand, params: &[u8]) -> Self {
        assert_eq!(command.param_count(), params.len());

        match command {
            HostCommand::RegRead => Request::RegRead { address: params[0] },
            HostCommand::RegWrite => Request::RegWrite {
                address: params[0],
                value: params[1],
            },
            HostCommand::ProtocolSet => Request::ProtocolSet {
                protocol: params[0],
            },
            HostCommand::RfFieldOn => Request::RfFieldOn,
            HostCommand::RfFieldOff => Request::RfFieldOff,
        }
    }
}
