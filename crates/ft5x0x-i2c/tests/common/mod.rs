#![allow(dead_code)]

use std::collections::VecDeque;

use ft5x0x_i2c::{Functionality, SmbusAdapter, I2C_SMBUS_BLOCK_MAX};

/// Status returned by a failing mock transaction: the 1-based index of the
/// block transaction that failed, or 0 for raw transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nack(pub usize);

/// Register-file adapter that records every block transaction.
#[derive(Debug)]
pub struct MockAdapter {
    pub regs: [u8; 256],
    pub block_max: usize,
    pub functionality: Functionality,
    /// `(register, requested length)` of each block read.
    pub reads: Vec<(u8, usize)>,
    /// `(register, payload)` of each block write.
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Fail the n-th block transaction (counted separately for reads and
    /// writes, 1-based).
    pub fail_at: Option<usize>,
    /// Counts to report for successive block reads instead of a full chunk.
    pub read_counts: VecDeque<usize>,
    pub sent: Vec<(u8, Vec<u8>)>,
    pub fail_raw: bool,
}

impl MockAdapter {
    pub fn new() -> Self {
        let mut regs = [0u8; 256];
        for (i, r) in regs.iter_mut().enumerate() {
            *r = i as u8 ^ 0x5a;
        }
        Self {
            regs,
            block_max: I2C_SMBUS_BLOCK_MAX,
            functionality: Functionality::I2C | Functionality::SMBUS_I2C_BLOCK,
            reads: Vec::new(),
            writes: Vec::new(),
            fail_at: None,
            read_counts: VecDeque::new(),
            sent: Vec::new(),
            fail_raw: false,
        }
    }

    pub fn with_block_max(block_max: usize) -> Self {
        Self { block_max, ..Self::new() }
    }

    pub fn reg_range(&self, start: u8, len: usize) -> Vec<u8> {
        (0..len)
            .map(|i| self.regs[start.wrapping_add(i as u8) as usize])
            .collect()
    }
}

impl SmbusAdapter for MockAdapter {
    type Error = Nack;

    fn functionality(&self) -> Functionality {
        self.functionality
    }

    fn block_max(&self) -> usize {
        self.block_max
    }

    fn master_send(
        &mut self,
        address: u8,
        buf: &[u8],
    ) -> Result<usize, Self::Error> {
        if self.fail_raw {
            return Err(Nack(0));
        }
        self.sent.push((address, buf.to_vec()));
        Ok(buf.len())
    }

    fn master_recv(
        &mut self,
        _address: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        if self.fail_raw {
            return Err(Nack(0));
        }
        buf.fill(0xa5);
        Ok(buf.len())
    }

    fn read_i2c_block_data(
        &mut self,
        _address: u8,
        command: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.reads.push((command, buf.len()));
        let n = self.reads.len();
        if self.fail_at == Some(n) {
            // A failed transaction may still have clobbered its chunk.
            buf.fill(0xee);
            return Err(Nack(n));
        }

        let count = self
            .read_counts
            .pop_front()
            .unwrap_or_else(|| buf.len().min(self.block_max));
        let filled = count.min(buf.len());
        for (i, b) in buf[..filled].iter_mut().enumerate() {
            *b = self.regs[command.wrapping_add(i as u8) as usize];
        }
        Ok(count)
    }

    fn write_i2c_block_data(
        &mut self,
        _address: u8,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Self::Error> {
        self.writes.push((command, buf.to_vec()));
        let n = self.writes.len();
        if self.fail_at == Some(n) {
            return Err(Nack(n));
        }

        for (i, b) in buf.iter().enumerate() {
            self.regs[command.wrapping_add(i as u8) as usize] = *b;
        }
        Ok(())
    }
}
