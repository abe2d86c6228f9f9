use ft5x0x_bus::EndpointId;

/// Errors from the driver lifecycle callbacks.
///
/// `C` is the controller core's error type, passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError<C> {
    /// The adapter cannot do register-addressed block transfers.
    IncompatibleBus,
    /// The controller core failed to construct the device.
    Construction(C),
    /// A device is already attached at this endpoint.
    AlreadyAttached(EndpointId),
    /// Every attachment slot is in use.
    NoSlot,
    /// No device is attached at this endpoint.
    NotAttached(EndpointId),
    /// The controller core failed a suspend or resume.
    Core(C),
    /// Power callbacks are handled by early-suspend, not by this binding.
    PmNotInstalled,
}

impl<C: core::fmt::Debug> core::fmt::Display for DriverError<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DriverError::IncompatibleBus => {
                write!(f, "incompatible i2c adapter")
            }
            DriverError::Construction(err) => {
                write!(f, "controller construction failed: {:?}", err)
            }
            DriverError::AlreadyAttached(id) => write!(
                f,
                "device already attached at {}-{:04x}",
                id.adapter, id.address
            ),
            DriverError::NoSlot => write!(f, "no free attachment slot"),
            DriverError::NotAttached(id) => write!(
                f,
                "no device attached at {}-{:04x}",
                id.adapter, id.address
            ),
            DriverError::Core(err) => {
                write!(f, "controller power transition failed: {:?}", err)
            }
            DriverError::PmNotInstalled => {
                write!(f, "power callbacks not installed")
            }
        }
    }
}
