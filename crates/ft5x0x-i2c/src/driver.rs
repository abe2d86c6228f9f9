use ft5x0x_bus::{Controller, EndpointId};
use heapless::LinearMap;

use crate::adapter::{Functionality, SmbusAdapter};
use crate::bus_ops::I2cBusOps;
use crate::client::I2cClient;
use crate::error::DriverError;
use crate::pm::{PmHookup, PM_HOOKUP};

/// Name the driver registers under.
pub const DRIVER_NAME: &str = "ft5x0x_i2c";

/// Module alias the host uses to load the driver for a matching device.
pub const MODALIAS: &str = "i2c:ft5x0x_i2c";

/// Entry of the device match table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cDeviceId {
    pub name: &'static str,
    pub driver_data: usize,
}

/// Devices this driver binds to.
pub static ID_TABLE: [I2cDeviceId; 1] =
    [I2cDeviceId { name: "ft5x0x_i2c", driver_data: 0 }];

/// Look up a device name in [`ID_TABLE`].
pub fn match_id(name: &str) -> Option<&'static I2cDeviceId> {
    ID_TABLE.iter().find(|id| id.name == name)
}

/// What the host needs to register the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverInfo {
    pub name: &'static str,
    pub id_table: &'static [I2cDeviceId],
    pub pm: PmHookup,
}

#[derive(Debug, Clone, Copy)]
enum Transition {
    Suspend,
    Resume,
}

/// Lifecycle glue between the host's I2C driver callbacks and a controller
/// core.
///
/// Holds the core and the handle it returned for every attached endpoint,
/// at most `N` at a time. Handles are stored as-is and passed back to the
/// core untouched.
pub struct I2cDriver<A, C, const N: usize = 4>
where
    A: SmbusAdapter,
    C: Controller<I2cBusOps<A>>,
{
    core: C,
    attached: LinearMap<EndpointId, C::Handle, N>,
}

impl<A, C, const N: usize> I2cDriver<A, C, N>
where
    A: SmbusAdapter,
    C: Controller<I2cBusOps<A>>,
{
    pub fn new(core: C) -> Self {
        Self { core, attached: LinearMap::new() }
    }

    pub fn info() -> DriverInfo {
        DriverInfo { name: DRIVER_NAME, id_table: &ID_TABLE, pm: PM_HOOKUP }
    }

    /// Attach a newly discovered device.
    ///
    /// The adapter must support I2C block transfers. Nothing is constructed
    /// and the core is not called unless it does.
    ///
    /// On failure the client is handed back, so an owned adapter is not
    /// lost, unless the core already took it (`Construction`).
    pub fn probe(
        &mut self,
        client: I2cClient<A>,
    ) -> Result<(), (DriverError<C::Error>, Option<I2cClient<A>>)> {
        if !client.check_functionality(Functionality::SMBUS_I2C_BLOCK) {
            #[cfg(feature = "defmt")]
            defmt::error!(
                "{}: incompatible i2c adapter at {}",
                DRIVER_NAME,
                client.id()
            );
            return Err((DriverError::IncompatibleBus, Some(client)));
        }

        let id = client.id();
        if self.attached.contains_key(&id) {
            return Err((DriverError::AlreadyAttached(id), Some(client)));
        }
        if self.attached.len() == self.attached.capacity() {
            return Err((DriverError::NoSlot, Some(client)));
        }

        let irq = client.irq();
        let handle = self
            .core
            .probe(id, irq, I2cBusOps::new(client))
            .map_err(|e| (DriverError::Construction(e), None))?;

        if let Err((_, handle)) = self.attached.insert(id, handle) {
            // Unreachable after the capacity check.
            self.core.remove(handle);
            return Err((DriverError::NoSlot, None));
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: attached {}", DRIVER_NAME, id);

        Ok(())
    }

    /// Detach the device at `id`, handing its handle back to the core.
    pub fn remove(
        &mut self,
        id: EndpointId,
    ) -> Result<(), DriverError<C::Error>> {
        let handle = self
            .attached
            .remove(&id)
            .ok_or(DriverError::NotAttached(id))?;
        self.core.remove(handle);

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: detached {}", DRIVER_NAME, id);

        Ok(())
    }

    pub fn suspend(
        &mut self,
        id: EndpointId,
    ) -> Result<(), DriverError<C::Error>> {
        self.transition(id, Transition::Suspend)
    }

    pub fn resume(
        &mut self,
        id: EndpointId,
    ) -> Result<(), DriverError<C::Error>> {
        self.transition(id, Transition::Resume)
    }

    fn transition(
        &mut self,
        id: EndpointId,
        transition: Transition,
    ) -> Result<(), DriverError<C::Error>> {
        if !PM_HOOKUP.forwards_power_callbacks() {
            return Err(DriverError::PmNotInstalled);
        }

        let handle = self
            .attached
            .get_mut(&id)
            .ok_or(DriverError::NotAttached(id))?;

        let result = match transition {
            Transition::Suspend => self.core.suspend(handle),
            Transition::Resume => self.core.resume(handle),
        };
        result.map_err(DriverError::Core)
    }

    pub fn is_attached(&self, id: EndpointId) -> bool {
        self.attached.contains_key(&id)
    }

    /// Number of attached devices.
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    pub fn core(&self) -> &C {
        &self.core
    }
}
