use embedded_hal::digital::OutputPin;
use embedded_hal_async::spi;

use crate::{
    cmd::SingleCommand,
    regs::{DrvMode, Register, RegisterAddress, Version},
    ConfigPatch, DriverError,
};

pub struct Driver<Spi, ResetPin>
where
    Spi: spi::SpiDevice,
    ResetPin: OutputPin,
{
    spi: Spi,
    reset_pin: ResetPin,
}

impl<Spi, ResetPin> Driver<Spi, ResetPin>
where
    Spi: spi::SpiDevice,
    ResetPin: OutputPin,
{
    pub const fn new(spi: Spi, reset_pin: ResetPin) -> Self {
        Self { spi, reset_pin }
    }

    /// Release the spi device and the reset pin.
    pub fn release(self) -> (Spi, ResetPin) {
        (self.spi, self.reset_pin)
    }

    /// Take the chip out of power down by releasing the reset pin.
    pub fn power_up(&mut self) -> Result<(), DriverError> {
        self.reset_pin.set_low().map_err(|_| DriverError::Pin)
    }

    /// Hold the chip in power down.
    pub fn power_down(&mut self) -> Result<(), DriverError> {
        self.reset_pin.set_high().map_err(|_| DriverError::Pin)
    }

    /// Read a single register value from chip.
    pub async fn read_raw(&mut self, address: RegisterAddress) -> Result<u8, DriverError> {
        let mut cmd = SingleCommand::read(address);

        self.spi
            .transfer(cmd.response.as_mut(), cmd.request.as_ref())
            .await?;

        Ok(cmd.response.value())
    }

    /// Write a single register value to chip.
    pub async fn write_raw(&mut self, address: RegisterAddress, value: u8) -> Result<(), DriverError> {
        let mut cmd = SingleCommand::write(address, value);

        self.spi
            .transfer(cmd.response.as_mut(), cmd.request.as_ref())
            .await?;

        Ok(())
    }

    /// Read a register.
    pub async fn read_reg<R: Register>(&mut self) -> Result<R, DriverError> {
        let value = self.read_raw(R::ADDRESS).await?;
        Ok(R::from(value))
    }

    /// Write a register.
    pub async fn write_reg<R: Register>(&mut self, reg: R) -> Result<(), DriverError> {
        self.write_raw(R::ADDRESS, reg.into()).await
    }

    /// Modify a register value.
    /// The register is read, passed to `configure`, and written back.
    pub async fn modify_reg<R: Register, F: FnOnce(&mut R)>(
        &mut self,
        configure: F,
    ) -> Result<(), DriverError> {
        let mut reg = self.read_reg::<R>().await?;
        configure(&mut reg);
        self.write_reg(reg).await
    }

    /// Write a configuration patch to chip, one register at a time.
    /// Nothing is written if the patch extends beyond the register space.
    pub async fn write_patch(&mut self, patch: ConfigPatch<'_>) -> Result<(), DriverError> {
        patch.validate()?;

        for (address, value) in patch.iter() {
            self.write_raw(address, value).await?;
        }
        Ok(())
    }

    /// Read the chip version register.
    pub async fn read_version(&mut self) -> Result<Version, DriverError> {
        self.read_reg().await
    }

    /// Turn on the RF field.
    pub async fn enable_rf_field(&mut self) -> Result<(), DriverError> {
        debug!("RF field on");
        self.write_reg(DrvMode::FIELD_ON).await
    }

    /// Turn off the RF field.
    pub async fn disable_rf_field(&mut self) -> Result<(), DriverError> {
        debug!("RF field off");
        self.write_reg(DrvMode::FIELD_OFF).await
    }
}
