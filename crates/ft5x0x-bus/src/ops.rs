use crate::error::Error;

/// Bus a transport is bound to.
///
/// Discriminants are the Linux input subsystem bus identifiers, which the
/// controller core reports as part of its input device id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
#[repr(u16)]
pub enum BusType {
    I2c = 0x18,
}

/// The operations a bus binding exposes to the controller core.
///
/// All calls block until the bus transaction completes. Implementations do
/// no buffering: on success exactly `buf.len()` bytes were transferred, on
/// failure the error reports how far the transfer got.
pub trait BusOps {
    /// Status reported by the underlying bus primitives.
    type Error: core::fmt::Debug;

    /// Which bus this transport drives.
    fn bus_type(&self) -> BusType;

    /// Transmit `buf` with no register framing.
    fn send(&mut self, buf: &[u8]) -> Result<(), Error<Self::Error>>;

    /// Receive into `buf` with no register framing.
    fn recv(&mut self, buf: &mut [u8]) -> Result<(), Error<Self::Error>>;

    /// Read `buf.len()` bytes starting at register `address`.
    fn read(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<(), Error<Self::Error>>;

    /// Write `buf` starting at register `address`.
    fn write(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<(), Error<Self::Error>>;

    fn read_u8(&mut self, address: u8) -> Result<u8, Error<Self::Error>> {
        let mut value = [0];
        self.read(address, &mut value)?;
        Ok(value[0])
    }

    fn write_u8(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Error<Self::Error>> {
        self.write(address, &[value])
    }

    /// Read-modify-write of a single register.
    fn modify_u8<F>(
        &mut self,
        address: u8,
        f: F,
    ) -> Result<(), Error<Self::Error>>
    where
        F: FnOnce(u8) -> u8,
        Self: Sized,
    {
        let value = self.read_u8(address)?;
        self.write_u8(address, f(value))
    }
}

impl<T: BusOps + ?Sized> BusOps for &mut T {
    type Error = T::Error;

    #[inline]
    fn bus_type(&self) -> BusType {
        T::bus_type(self)
    }

    #[inline]
    fn send(&mut self, buf: &[u8]) -> Result<(), Error<Self::Error>> {
        T::send(self, buf)
    }

    #[inline]
    fn recv(&mut self, buf: &mut [u8]) -> Result<(), Error<Self::Error>> {
        T::recv(self, buf)
    }

    #[inline]
    fn read(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<(), Error<Self::Error>> {
        T::read(self, address, buf)
    }

    #[inline]
    fn write(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<(), Error<Self::Error>> {
        T::write(self, address, buf)
    }
}
