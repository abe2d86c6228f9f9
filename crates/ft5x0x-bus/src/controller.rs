use crate::ops::BusOps;

/// Identity of one attached bus endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndpointId {
    /// Host adapter (bus) number.
    pub adapter: u8,
    /// Device address on that bus.
    pub address: u16,
}

/// Interrupt line the controller signals touch events on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrqLine(pub u32);

/// Entry points of the bus-agnostic controller core.
///
/// A bus binding calls `probe` once per endpoint, handing over its
/// transport, and passes the returned handle back on every later lifecycle
/// call. The transport is moved into the core so it stays valid for as long
/// as the handle does.
pub trait Controller<B: BusOps> {
    /// Per-device state owned by the core. Opaque to bus bindings.
    type Handle;
    type Error: core::fmt::Debug;

    fn probe(
        &mut self,
        endpoint: EndpointId,
        irq: IrqLine,
        bus: B,
    ) -> Result<Self::Handle, Self::Error>;

    /// Tear down a device. Consumes the handle and the transport inside it.
    fn remove(&mut self, handle: Self::Handle);

    fn suspend(&mut self, handle: &mut Self::Handle) -> Result<(), Self::Error>;

    fn resume(&mut self, handle: &mut Self::Handle) -> Result<(), Self::Error>;
}
