use crate::{
    regs::{Register, RegisterAddress},
    DriverError,
};

/// A block of consecutive register values.
#[derive(Clone, Copy)]
pub struct ConfigPatch<'a> {
    pub first_address: RegisterAddress,
    pub values: &'a [u8],
}

impl<'a> ConfigPatch<'a> {
    /// Get a register value, or None if the register is not part of the configuration.
    pub fn get<R: Register>(&self) -> Option<R> {
        let index = R::ADDRESS
            .value()
            .checked_sub(self.first_address.value())? as usize;
        self.values.get(index).map(|&value| R::from(value))
    }

    /// Check that every value of the patch maps to a register.
    pub fn validate(&self) -> Result<(), DriverError> {
        let end = self.first_address.value() as usize + self.values.len();
        if end > RegisterAddress::MAX.value() as usize + 1 {
            return Err(DriverError::InvalidAddress(RegisterAddress::MAX.value() + 1));
        }
        Ok(())
    }

    /// Iterate the register addresses and their values.
    ///
    /// # Panics
    ///
    /// If the patch extends beyond the register space, see [`ConfigPatch::validate`].
    pub fn iter(&self) -> impl Iterator<Item = (RegisterAddress, u8)> + 'a {
        assert!(
            self.validate().is_ok(),
            "configuration exceeds the register space"
        );

        let first = self.first_address.value();
        let values = self.values;
        values.iter().enumerate().filter_map(move |(offset, &value)| {
            let address = RegisterAddress::new(first + offset as u8)?;
            Some((address, value))
        })
    }
}
