//! Memory accounting for a ContactStore

use std::fmt;

/// Point-in-time view of how much memory a store holds and uses
///
/// All byte figures are derived from `count`, `capacity` and the fixed
/// record size, not measured from the allocator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryReport {
    /// Live contacts
    pub count: usize,
    /// Allocated slots
    pub capacity: usize,
    /// `count / capacity`, 0.0 when capacity is 0
    pub occupancy: f64,
    /// Size of the store struct itself
    pub struct_bytes: usize,
    /// `capacity * record_size`
    pub array_bytes: usize,
    /// `count * record_size`
    pub used_bytes: usize,
    /// `array_bytes - used_bytes`
    pub wasted_bytes: usize,
    /// `struct_bytes + array_bytes`
    pub total_bytes: usize,
}

impl MemoryReport {
    pub(crate) fn new(count: usize, capacity: usize, struct_bytes: usize, record_size: usize) -> Self {
        let array_bytes = capacity * record_size;
        let used_bytes = count * record_size;
        let occupancy = if capacity > 0 {
            count as f64 / capacity as f64
        } else {
            0.0
        };

        Self {
            count,
            capacity,
            occupancy,
            struct_bytes,
            array_bytes,
            used_bytes,
            wasted_bytes: array_bytes.saturating_sub(used_bytes),
            total_bytes: struct_bytes + array_bytes,
        }
    }
}

fn kib(bytes: usize) -> f64 {
    bytes as f64 / 1024.0
}

impl fmt::Display for MemoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Memory Report ===")?;
        writeln!(f, "Live contacts:     {}", self.count)?;
        writeln!(f, "Capacity:          {}", self.capacity)?;
        writeln!(f, "Occupancy:         {:.1}%", self.occupancy * 100.0)?;
        writeln!(f)?;
        writeln!(f, "Struct overhead:   {} bytes", self.struct_bytes)?;
        writeln!(f, "Allocated array:   {} bytes ({:.2} KB)", self.array_bytes, kib(self.array_bytes))?;
        writeln!(f, "In use:            {} bytes ({:.2} KB)", self.used_bytes, kib(self.used_bytes))?;
        writeln!(f, "Wasted:            {} bytes ({:.2} KB)", self.wasted_bytes, kib(self.wasted_bytes))?;
        write!(f, "Total:             {} bytes ({:.2} KB)", self.total_bytes, kib(self.total_bytes))
    }
}
