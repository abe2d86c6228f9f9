#![no_std]
//! I2C binding for the FT5x0x touch controller family.
//!
//! Implements [`ft5x0x_bus::BusOps`] on top of SMBus "I2C block" transfers,
//! splitting register reads and writes that exceed the per-transaction
//! block limit, and provides the attach/detach/power glue that hands the
//! transport to a generic [`ft5x0x_bus::Controller`].

mod adapter;
mod bus_ops;
mod client;
mod driver;
mod error;
mod hal;
mod pm;

pub use adapter::{Functionality, SmbusAdapter, I2C_SMBUS_BLOCK_MAX};
pub use bus_ops::I2cBusOps;
pub use client::I2cClient;
pub use driver::{
    match_id, DriverInfo, I2cDeviceId, I2cDriver, DRIVER_NAME, ID_TABLE,
    MODALIAS,
};
pub use error::DriverError;
pub use hal::{HalAdapter, HalError};
pub use pm::{PmHookup, PM_HOOKUP};
