use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi;

use crate::{Driver, DriverError, Protocol};

use super::{
    ControllerError, Request, Session, Step, Transport, ACK, DRIVER_FAULT, INVALID_PARAMETER,
    NAK, UNKNOWN_COMMAND,
};

/// Bridges host requests from a transport to the chip.
pub struct HostController<'a, Spi, ResetPin, T>
where
    Spi: spi::SpiDevice,
    ResetPin: OutputPin,
    T: Transport,
{
    driver: &'a mut Driver<Spi, ResetPin>,
    transport: &'a mut T,
    session: Session,
}

impl<'a, Spi, ResetPin, T> HostController<'a, Spi, ResetPin, T>
where
    Spi: spi::SpiDevice,
    ResetPin: OutputPin,
    T: Transport,
{
    /// Create a new host controller
    pub fn new(driver: &'a mut Driver<Spi, ResetPin>, transport: &'a mut T) -> Self {
        Self {
            driver,
            transport,
            session: Session::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Process the next byte from the transport, if one is available.
    pub async fn tick(&mut self) -> Result<(), ControllerError> {
        match self.transport.read_byte() {
            Some(byte) => self.process_byte(byte).await,
            None => Ok(()),
        }
    }

    /// Process a single byte from the host.
    /// A request is executed as soon as its last parameter byte arrives.
    pub async fn process_byte(&mut self, byte: u8) -> Result<(), ControllerError> {
        match self.session.accept(byte) {
            Ok(Step::Pending) => Ok(()),
            Ok(Step::Unknown(opcode)) => {
                warn!("Unknown command {=u8:#x}", opcode);
                self.reject(UNKNOWN_COMMAND);
                Ok(())
            }
            Ok(Step::Ready(request)) => self.execute(request).await,
            Err(error) => {
                warn!("Session error {}", error);
                self.reject(DRIVER_FAULT);
                Err(error)
            }
        }
    }

    async fn execute(&mut self, request: Request) -> Result<(), ControllerError> {
        trace!("Execute {}", request);

        match self.handle(request).await {
            Ok(()) => Ok(()),
            Err(error @ (DriverError::InvalidAddress(_) | DriverError::InvalidProtocol(_))) => {
                warn!("Rejected {}", error);
                self.reject(INVALID_PARAMETER);
                Ok(())
            }
            Err(error) => {
                warn!("Driver error {}", error);
                self.reject(DRIVER_FAULT);
                Err(error.into())
            }
        }
    }

    async fn handle(&mut self, request: Request) -> Result<(), DriverError> {
        match request {
            Request::RegRead { address } => {
                let value = self.driver.read_raw(address.try_into()?).await?;
                self.respond(value);
            }
            Request::RegWrite { address, value } => {
                // Register writes are not acknowledged.
                self.driver.write_raw(address.try_into()?, value).await?;
            }
            Request::ProtocolSet { protocol } => {
                let protocol = Protocol::from_id(protocol)?;
                self.driver.load_protocol(protocol).await?;
                self.respond(ACK);
            }
            Request::RfFieldOn => {
                self.driver.enable_rf_field().await?;
                self.respond(ACK);
            }
            Request::RfFieldOff => {
                self.driver.disable_rf_field().await?;
                self.respond(ACK);
            }
        }

        Ok(())
    }

    fn respond(&mut self, byte: u8) {
        if !self.transport.write_byte(byte) {
            warn!("No host to receive {=u8:#x}", byte);
        }
    }

    fn reject(&mut self, reason: u8) {
        self.respond(NAK);
        self.respond(reason);
    }
}
