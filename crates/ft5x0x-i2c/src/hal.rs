use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::adapter::{Functionality, SmbusAdapter, I2C_SMBUS_BLOCK_MAX};

/// Register byte plus one full block.
const STAGING_LEN: usize = I2C_SMBUS_BLOCK_MAX + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError<E> {
    I2c(E),
    /// Block write payload larger than [`I2C_SMBUS_BLOCK_MAX`].
    Overflow,
}

/// [`SmbusAdapter`] over any blocking `embedded-hal` I2C bus.
///
/// Block reads are a register write followed by a repeated-start read;
/// block writes are a single message carrying the register and payload.
#[derive(Debug)]
pub struct HalAdapter<I> {
    i2c: I,
}

impl<I: I2c> HalAdapter<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give back the wrapped bus.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> SmbusAdapter for HalAdapter<I> {
    type Error = HalError<I::Error>;

    fn functionality(&self) -> Functionality {
        Functionality::I2C | Functionality::SMBUS_I2C_BLOCK
    }

    fn master_send(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<usize, Self::Error> {
        self.i2c.write(address, buf).map_err(HalError::I2c)?;
        Ok(buf.len())
    }

    fn master_recv(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.i2c.read(address, buf).map_err(HalError::I2c)?;
        Ok(buf.len())
    }

    fn read_i2c_block_data(
        &mut self,
        address: u8,
        command: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        let len = buf.len().min(I2C_SMBUS_BLOCK_MAX);
        self.i2c
            .write_read(address, &[command], &mut buf[..len])
            .map_err(HalError::I2c)?;
        Ok(len)
    }

    fn write_i2c_block_data(
        &mut self,
        address: u8,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Self::Error> {
        if buf.len() > I2C_SMBUS_BLOCK_MAX {
            return Err(HalError::Overflow);
        }

        let mut staging = Vec::<u8, STAGING_LEN>::new();
        staging.push(command).map_err(|_| HalError::Overflow)?;
        staging
            .extend_from_slice(buf)
            .map_err(|_| HalError::Overflow)?;

        self.i2c.write(address, &staging).map_err(HalError::I2c)
    }
}
