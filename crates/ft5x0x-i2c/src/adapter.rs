//! Host adapter primitives the binding is built on.
use bitflags::bitflags;

/// Largest payload of a single SMBus block transaction.
pub const I2C_SMBUS_BLOCK_MAX: usize = 32;

bitflags! {
    /// Transfer types a host adapter supports.
    ///
    /// Bit values follow the Linux `I2C_FUNC_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Functionality: u32 {
        /// Plain I2C messages.
        const I2C = 0x0000_0001;
        const SMBUS_READ_I2C_BLOCK = 0x0400_0000;
        const SMBUS_WRITE_I2C_BLOCK = 0x0800_0000;
        /// Register-addressed block reads and writes.
        const SMBUS_I2C_BLOCK = Self::SMBUS_READ_I2C_BLOCK.bits()
            | Self::SMBUS_WRITE_I2C_BLOCK.bits();
    }
}

/// The bus transactions a host adapter provides for one device address.
///
/// Methods mirror the host's message primitives; none of them split or
/// retry transfers.
pub trait SmbusAdapter {
    type Error: core::fmt::Debug;

    /// Transfer types this adapter can perform.
    fn functionality(&self) -> Functionality;

    /// Payload limit of one block transaction.
    fn block_max(&self) -> usize {
        I2C_SMBUS_BLOCK_MAX
    }

    /// Write `buf` as one message. Returns the number of bytes sent.
    fn master_send(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<usize, Self::Error>;

    /// Read into `buf` as one message. Returns the number of bytes received.
    fn master_recv(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;

    /// Read up to [`block_max`](Self::block_max) bytes starting at register
    /// `command`. Returns the number of bytes placed at the front of `buf`,
    /// which may be fewer than requested.
    fn read_i2c_block_data(
        &mut self,
        address: u8,
        command: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;

    /// Write `buf` (at most [`block_max`](Self::block_max) bytes) starting
    /// at register `command`. Reports only success or failure.
    fn write_i2c_block_data(
        &mut self,
        address: u8,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Self::Error>;
}

impl<T: SmbusAdapter + ?Sized> SmbusAdapter for &mut T {
    type Error = T::Error;

    #[inline]
    fn functionality(&self) -> Functionality {
        T::functionality(self)
    }

    #[inline]
    fn block_max(&self) -> usize {
        T::block_max(self)
    }

    #[inline]
    fn master_send(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<usize, Self::Error> {
        T::master_send(self, address, buf)
    }

    #[inline]
    fn master_recv(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        T::master_recv(self, address, buf)
    }

    #[inline]
    fn read_i2c_block_data(
        &mut self,
        address: u8,
        command: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        T::read_i2c_block_data(self, address, command, buf)
    }

    #[inline]
    fn write_i2c_block_data(
        &mut self,
        address: u8,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Self::Error> {
        T::write_i2c_block_data(self, address, command, buf)
    }
}
