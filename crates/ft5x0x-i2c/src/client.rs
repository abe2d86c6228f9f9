use ft5x0x_bus::{EndpointId, IrqLine};

use crate::adapter::{Functionality, SmbusAdapter};

/// One device on a host I2C adapter.
///
/// `A` is usually a `&mut` to an adapter owned by the host, so the client
/// only borrows the bus for as long as the device is attached.
#[derive(Debug)]
pub struct I2cClient<A> {
    adapter: A,
    adapter_nr: u8,
    address: u8,
    irq: IrqLine,
}

impl<A: SmbusAdapter> I2cClient<A> {
    pub fn new(adapter: A, adapter_nr: u8, address: u8, irq: IrqLine) -> Self {
        Self { adapter, adapter_nr, address, irq }
    }

    pub fn id(&self) -> EndpointId {
        EndpointId { adapter: self.adapter_nr, address: u16::from(self.address) }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn irq(&self) -> IrqLine {
        self.irq
    }

    /// Whether the adapter supports every transfer type in `required`.
    pub fn check_functionality(&self, required: Functionality) -> bool {
        self.adapter.functionality().contains(required)
    }

    pub(crate) fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub(crate) fn block_max(&self) -> usize {
        self.adapter.block_max()
    }

    /// Give back the adapter.
    pub fn release(self) -> A {
        self.adapter
    }
}
