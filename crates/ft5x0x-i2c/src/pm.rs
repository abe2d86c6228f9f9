/// How controller power transitions are hooked up.
///
/// Chosen at build time by the `pm` and `early-suspend` cargo features;
/// exactly one of them must be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PmHookup {
    /// The binding forwards the host's suspend/resume callbacks to the core.
    DevPm,
    /// The core registers its own early-suspend hook; the binding installs
    /// no power callbacks.
    EarlySuspend,
}

impl PmHookup {
    /// Whether [`I2cDriver::suspend`](crate::I2cDriver::suspend) and
    /// [`I2cDriver::resume`](crate::I2cDriver::resume) are wired.
    pub const fn forwards_power_callbacks(self) -> bool {
        matches!(self, PmHookup::DevPm)
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "pm", feature = "early-suspend"))] {
        compile_error!("features `pm` and `early-suspend` are mutually exclusive");
    } else if #[cfg(feature = "early-suspend")] {
        pub const PM_HOOKUP: PmHookup = PmHookup::EarlySuspend;
    } else if #[cfg(feature = "pm")] {
        pub const PM_HOOKUP: PmHookup = PmHookup::DevPm;
    } else {
        compile_error!("enable one of the `pm` or `early-suspend` features");
    }
}
