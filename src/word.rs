//! 256-bit words holding up to [`CAPACITY`] breakpoints of 24 bits.
//!
//! Breakpoint `j` occupies bits `24·j .. 24·j + 24` (breakpoint 0 in
//! the low-order bits).  Inside a slot, the position is stored in bits
//! 16–23, the value before the breakpoint in bits 8–15 and the value
//! after it in bits 0–7, each quantized to a byte.

use std::fmt;
use crate::palettes::ty::Breakpoint;

/// Maximum number of breakpoints a word holds.
pub const CAPACITY: usize = 10;

/// Width of a breakpoint slot in bits.
pub const SLOT_BITS: u32 = 24;

const SLOT_MASK: u64 = (1 << SLOT_BITS) - 1;

/// Quantize `x` ∈ \[0, 1\] to a byte, rounding toward zero.
///
/// Values outside \[0, 1\] are not checked; they saturate to `0x00`
/// or `0xFF` (NaN gives `0x00`).
#[inline]
pub fn quantize(x: f64) -> u8 { (x * 255.).floor() as u8 }

/// An unsigned 256-bit integer, as stored by the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PackedWord {
    limbs: [u64; 4], // least significant limb first
}

impl PackedWord {
    pub const ZERO: PackedWord = PackedWord { limbs: [0; 4] };

    /// Pack `curve` into a word.  Returns `None` if the curve has more
    /// than [`CAPACITY`] breakpoints.
    pub fn pack(curve: &[Breakpoint]) -> Option<PackedWord> {
        if curve.len() > CAPACITY { return None }
        let mut word = PackedWord::ZERO;
        for (j, bp) in curve.iter().enumerate() {
            word.or_slot(j, QuantizedBreakpoint::from(*bp).slot());
        }
        Some(word)
    }

    /// OR the 24 low bits of `slot` into the `j`th slot.
    fn or_slot(&mut self, j: usize, slot: u32) {
        let offset = j * SLOT_BITS as usize;
        let (limb, shift) = (offset / 64, offset % 64);
        let slot = slot as u64 & SLOT_MASK;
        self.limbs[limb] |= slot << shift;
        if shift + SLOT_BITS as usize > 64 {
            self.limbs[limb + 1] |= slot >> (64 - shift);
        }
    }

    /// Return the 24-bit slot `j` (`j < CAPACITY`).
    pub fn slot(&self, j: usize) -> u32 {
        let offset = j * SLOT_BITS as usize;
        let (limb, shift) = (offset / 64, offset % 64);
        let mut slot = self.limbs[limb] >> shift;
        if shift + SLOT_BITS as usize > 64 {
            slot |= self.limbs[limb + 1] << (64 - shift);
        }
        (slot & SLOT_MASK) as u32
    }

    /// Number of slots up to the last non-zero one.
    pub(crate) fn used_slots(&self) -> usize {
        (0 .. CAPACITY).rev().find(|&j| self.slot(j) != 0)
            .map_or(0, |j| j + 1)
    }

    pub fn is_zero(&self) -> bool { self.limbs == [0; 4] }

    /// Big-endian representation, as a `uint256` in EVM storage.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut bytes = [0; 32];
        for (i, limb) in self.limbs.iter().rev().enumerate() {
            bytes[8 * i .. 8 * i + 8].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    pub fn from_be_bytes(bytes: [u8; 32]) -> PackedWord {
        let mut limbs = [0; 4];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut b = [0; 8];
            b.copy_from_slice(chunk);
            limbs[3 - i] = u64::from_be_bytes(b);
        }
        PackedWord { limbs }
    }
}

impl From<u128> for PackedWord {
    fn from(x: u128) -> Self {
        PackedWord { limbs: [x as u64, (x >> 64) as u64, 0, 0] }
    }
}

/// Uppercase hexadecimal without leading zeros (`0` for zero).
impl fmt::UpperHex for PackedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.limbs.iter().rposition(|&l| l != 0) {
            None => f.write_str("0"),
            Some(top) => {
                write!(f, "{:X}", self.limbs[top])?;
                for l in self.limbs[.. top].iter().rev() {
                    write!(f, "{:016X}", l)?;
                }
                Ok(())
            }
        }
    }
}

/// A breakpoint as stored in a slot: bytes for the position, the
/// value before and the value after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantizedBreakpoint {
    pub position: u8,
    pub before: u8,
    pub after: u8,
}

impl QuantizedBreakpoint {
    #[inline]
    pub fn from_slot(slot: u32) -> Self {
        QuantizedBreakpoint { position: (slot >> 16) as u8,
                              before: (slot >> 8) as u8,
                              after: slot as u8 }
    }

    #[inline]
    pub fn slot(&self) -> u32 {
        (self.position as u32) << 16 | (self.before as u32) << 8
            | self.after as u32
    }

    /// Position in \[0, 1\].
    pub fn x(&self) -> f64 { self.position as f64 / 255. }
}

impl From<Breakpoint> for QuantizedBreakpoint {
    fn from(bp: Breakpoint) -> Self {
        QuantizedBreakpoint { position: quantize(bp.position),
                              before: quantize(bp.before),
                              after: quantize(bp.after) }
    }
}

/// Read the first `len` breakpoints of `word` (`len ≤ CAPACITY`).
pub fn decode(word: &PackedWord, len: usize) -> Vec<QuantizedBreakpoint> {
    (0 .. len.min(CAPACITY))
        .map(|j| QuantizedBreakpoint::from_slot(word.slot(j)))
        .collect()
}
