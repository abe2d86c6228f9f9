#![no_std]
//! Transport contract for the FT5x0x touch controller family.
//!
//! The controller core is bus agnostic: it performs every device access
//! through [`BusOps`], and each physical bus provides one implementation of
//! it. The core's own lifecycle entry points, which a bus binding calls when
//! a device appears, goes away or changes power state, are described by
//! [`Controller`].

mod controller;
mod error;
mod ops;

pub use controller::{Controller, EndpointId, IrqLine};
pub use error::Error;
pub use ops::{BusOps, BusType};
