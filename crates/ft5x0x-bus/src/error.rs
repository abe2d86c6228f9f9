/// Errors reported by a [`BusOps`](crate::BusOps) implementation.
///
/// `E` is the status type of the underlying bus primitive and is carried
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A raw send/receive did not complete.
    BusIo(E),
    /// A chunked transfer failed after `offset` bytes had been transferred.
    ///
    /// Bytes `[0, offset)` were committed (write) or are valid in the
    /// caller's buffer (read).
    PartialTransfer { offset: usize, source: E },
    /// The bus reported success without moving any data at `offset`.
    ZeroProgress { offset: usize },
    /// The bus reported more bytes at `offset` than were requested.
    Overrun { offset: usize, count: usize },
}

impl<E> Error<E> {
    /// Number of bytes known to have been transferred before the failure.
    pub fn offset(&self) -> usize {
        match self {
            Error::BusIo(_) => 0,
            Error::PartialTransfer { offset, .. }
            | Error::ZeroProgress { offset }
            | Error::Overrun { offset, .. } => *offset,
        }
    }

    /// The underlying bus status, if the failure came from the bus itself.
    pub fn source(&self) -> Option<&E> {
        match self {
            Error::BusIo(e) | Error::PartialTransfer { source: e, .. } => {
                Some(e)
            }
            Error::ZeroProgress { .. } | Error::Overrun { .. } => None,
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BusIo(err) => write!(f, "bus I/O error: {:?}", err),
            Error::PartialTransfer { offset, source } => {
                write!(f, "transfer failed at offset {}: {:?}", offset, source)
            }
            Error::ZeroProgress { offset } => {
                write!(f, "bus made no progress at offset {}", offset)
            }
            Error::Overrun { offset, count } => write!(
                f,
                "bus reported {} bytes at offset {}, more than requested",
                count, offset
            ),
        }
    }
}
