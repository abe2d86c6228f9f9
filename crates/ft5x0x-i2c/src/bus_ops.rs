use ft5x0x_bus::{BusOps, BusType, Error};

use crate::adapter::SmbusAdapter;
use crate::client::I2cClient;

/// [`BusOps`] for a controller attached over I2C.
///
/// Register transfers longer than the adapter's block limit are issued as a
/// sequence of block transactions, each at the register following the last
/// byte of the previous one. Register addresses are 8 bit and wrap.
#[derive(Debug)]
pub struct I2cBusOps<A> {
    client: I2cClient<A>,
}

impl<A: SmbusAdapter> I2cBusOps<A> {
    pub fn new(client: I2cClient<A>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &I2cClient<A> {
        &self.client
    }

    pub fn release(self) -> I2cClient<A> {
        self.client
    }

    /// At least one byte per transaction, so the chunk loops terminate.
    fn block_max(&self) -> usize {
        self.client.block_max().max(1)
    }
}

impl<A: SmbusAdapter> BusOps for I2cBusOps<A> {
    type Error = A::Error;

    fn bus_type(&self) -> BusType {
        BusType::I2c
    }

    fn send(&mut self, buf: &[u8]) -> Result<(), Error<Self::Error>> {
        let address = self.client.address();
        self.client
            .adapter_mut()
            .master_send(address, buf)
            .map(|_| ())
            .map_err(Error::BusIo)
    }

    fn recv(&mut self, buf: &mut [u8]) -> Result<(), Error<Self::Error>> {
        let address = self.client.address();
        self.client
            .adapter_mut()
            .master_recv(address, buf)
            .map(|_| ())
            .map_err(Error::BusIo)
    }

    /// Advances by the number of bytes each block read reports.
    fn read(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<(), Error<Self::Error>> {
        let block = self.block_max();
        let device = self.client.address();
        let mut offset = 0;

        while offset < buf.len() {
            let want = (buf.len() - offset).min(block);
            let reg = address.wrapping_add(offset as u8);
            let count = self
                .client
                .adapter_mut()
                .read_i2c_block_data(
                    device,
                    reg,
                    &mut buf[offset..offset + want],
                )
                .map_err(|source| Error::PartialTransfer { offset, source })?;

            match count {
                0 => return Err(Error::ZeroProgress { offset }),
                n if n > want => {
                    return Err(Error::Overrun { offset, count: n })
                }
                n => offset += n,
            }
        }

        Ok(())
    }

    /// Advances by a fixed block stride: the block write primitive does not
    /// report how many bytes the device accepted.
    fn write(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<(), Error<Self::Error>> {
        let block = self.block_max();
        let device = self.client.address();

        for offset in (0..buf.len()).step_by(block) {
            let end = (offset + block).min(buf.len());
            let reg = address.wrapping_add(offset as u8);
            self.client
                .adapter_mut()
                .write_i2c_block_data(device, reg, &buf[offset..end])
                .map_err(|source| Error::PartialTransfer { offset, source })?;
        }

        Ok(())
    }
}
