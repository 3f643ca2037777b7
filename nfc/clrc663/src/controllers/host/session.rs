use heapless::Vec;
use num_traits::FromPrimitive;

use super::{ControllerError, HostCommand, Request, PARAMS_MAX};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// The next byte is an opcode.
    WaitingForCommand,
    /// The next byte is a parameter for the pending command.
    WaitingForParams(HostCommand),
}

/// Outcome of feeding one byte to a session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// More parameter bytes are needed.
    Pending,
    /// The byte is not a known opcode.
    Unknown(u8),
    /// A request is complete and the session is back to waiting for a command.
    Ready(Request),
}

/// Framing state for one host connection.
pub struct Session<const N: usize = PARAMS_MAX> {
    state: SessionState,
    params: Vec<u8, N>,
}

impl<const N: usize> Session<N> {
    pub const fn new() -> Self {
        Self {
            state: SessionState::WaitingForCommand,
            params: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Parameters received so far for the pending command.
    pub fn params(&self) -> &[u8] {
        &self.params
    }

    pub fn reset(&mut self) {
        self.state = SessionState::WaitingForCommand;
        self.params.clear();
    }

    /// Feed a single byte from the host.
    pub fn accept(&mut self, byte: u8) -> Result<Step, ControllerError> {
        match self.state {
            SessionState::WaitingForCommand => match HostCommand::from_u8(byte) {
                None => Ok(Step::Unknown(byte)),
                Some(command) if command.param_count() == 0 => {
                    Ok(Step::Ready(Request::new(command, &[])))
                }
                Some(command) => {
                    self.params.clear();
                    self.state = SessionState::WaitingForParams(command);
                    Ok(Step::Pending)
                }
            },
            SessionState::WaitingForParams(command) => {
                if self.params.push(byte).is_err() {
                    self.reset();
                    return Err(ControllerError::ParamOverflow);
                }

                if self.params.len() < command.param_count() {
                    return Ok(Step::Pending);
                }

                let request = Request::new(command, &self.params);
                self.reset();
                Ok(Step::Ready(request))
            }
        }
    }
}

impl<const N: usize> Default for Session<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_param_command_is_ready_immediately() {
        let mut session: Session = Session::new();

        assert_eq!(Ok(Step::Ready(Request::RfFieldOn)), session.accept(0x03));
        assert_eq!(SessionState::WaitingForCommand, session.state());
    }

    #[test]
    fn too_few_params_stay_pending() {
        let mut session: Session = Session::new();

        assert_eq!(Ok(Step::Pending), session.accept(0x01));
        assert_eq!(Ok(Step::Pending), session.accept(0x28));

        assert_eq!(
            SessionState::WaitingForParams(HostCommand::RegWrite),
            session.state()
        );
        assert_eq!(&[0x28], session.params());
    }

    #[test]
    fn exact_params_complete_the_request() {
        let mut session: Session = Session::new();

        session.accept(0x01).unwrap();
        session.accept(0x28).unwrap();
        let step = session.accept(0x8E).unwrap();

        assert_eq!(
            Step::Ready(Request::RegWrite {
                address: 0x28,
                value: 0x8E
            }),
            step
        );
        assert_eq!(SessionState::WaitingForCommand, session.state());
        assert!(session.params().is_empty());
    }

    #[test]
    fn parameter_bytes_are_not_opcodes() {
        let mut session: Session = Session::new();

        // 0xFF would be an unknown opcode, 0x03 a complete RfFieldOn.
        session.accept(0x00).unwrap();
        assert_eq!(
            Ok(Step::Ready(Request::RegRead { address: 0xFF })),
            session.accept(0xFF)
        );
        session.accept(0x02).unwrap();
        assert_eq!(
            Ok(Step::Ready(Request::ProtocolSet { protocol: 0x03 })),
            session.accept(0x03)
        );
    }

    #[test]
    fn unknown_opcode() {
        let mut session: Session = Session::new();

        for opcode in [0x05, 0x7F, 0xAA, 0xFF] {
            assert_eq!(Ok(Step::Unknown(opcode)), session.accept(opcode));
            assert_eq!(SessionState::WaitingForCommand, session.state());
        }
    }

    #[test]
    fn param_overflow_resets() {
        let mut session: Session<1> = Session::new();

        session.accept(0x01).unwrap();
        session.accept(0x28).unwrap();

        assert_eq!(Err(ControllerError::ParamOverflow), session.accept(0x8E));
        assert_eq!(SessionState::WaitingForCommand, session.state());
        assert!(session.params().is_empty());
    }

    #[test]
    fn sessions_are_independent() {
        let mut first: Session = Session::new();
        let mut second: Session = Session::new();

        first.accept(0x01).unwrap();

        assert_eq!(
            Ok(Step::Ready(Request::RfFieldOff)),
            second.accept(0x04)
        );
        assert_eq!(
            SessionState::WaitingForParams(HostCommand::RegWrite),
            first.state()
        );
    }
}
