//! Hardware paths for whole-block operations.
//!
//! Bitwise operations are element-kind agnostic, so they run directly on the
//! lane block. On x86_64 with acceleration enabled they use SSE2; everywhere
//! else they fall back to 64-bit scalar chunks.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::storage::LaneBlock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BitOp {
    And,
    Or,
    Xor,
    /// `a & !b`
    AndNot,
}

impl BitOp {
    #[inline]
    fn apply(self, a: u64, b: u64) -> u64 {
        match self {
            Self::And => a & b,
            Self::Or => a | b,
            Self::Xor => a ^ b,
            Self::AndNot => a & !b,
        }
    }
}

pub(crate) fn bitwise(op: BitOp, a: &LaneBlock, b: &LaneBlock) -> LaneBlock {
    #[cfg(target_arch = "x86_64")]
    {
        if vecta_target::is_hardware_accelerated() && is_x86_feature_detected!("sse2") {
            // Safety: SSE2 was detected and lane blocks are 64-byte aligned.
            return unsafe { bitwise_sse2(op, a, b) };
        }
    }
    bitwise_scalar(op, a, b)
}

fn bitwise_scalar(op: BitOp, a: &LaneBlock, b: &LaneBlock) -> LaneBlock {
    let mut out = LaneBlock::ZERO;
    let lhs = a.lanes::<u64>();
    let rhs = b.lanes::<u64>();
    for ((o, &x), &y) in out.lanes_mut::<u64>().iter_mut().zip(lhs).zip(rhs) {
        *o = op.apply(x, y);
    }
    out
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn bitwise_sse2(op: BitOp, a: &LaneBlock, b: &LaneBlock) -> LaneBlock {
    let mut out = LaneBlock::ZERO;
    for offset in (0..LaneBlock::width()).step_by(16) {
        // Safety: offset + 16 <= width <= 64 and every offset is 16-aligned
        // within a 64-aligned block.
        unsafe {
            let x = _mm_load_si128(a.0.as_ptr().add(offset).cast());
            let y = _mm_load_si128(b.0.as_ptr().add(offset).cast());
            let r = match op {
                BitOp::And => _mm_and_si128(x, y),
                BitOp::Or => _mm_or_si128(x, y),
                BitOp::Xor => _mm_xor_si128(x, y),
                BitOp::AndNot => _mm_andnot_si128(y, x),
            };
            _mm_store_si128(out.0.as_mut_ptr().add(offset).cast(), r);
        }
    }
    out
}

pub(crate) fn not(a: &LaneBlock) -> LaneBlock {
    let mut out = LaneBlock::ZERO;
    for (o, &x) in out.lanes_mut::<u64>().iter_mut().zip(a.lanes::<u64>()) {
        *o = !x;
    }
    out
}

/// Write the active bytes of `block` to `dest`, bypassing the cache when the
/// hardware allows it.
///
/// # Safety
///
/// `dest` must be valid for writes of `LaneBlock::width()` bytes.
pub(crate) unsafe fn store_non_temporal(block: &LaneBlock, dest: *mut u8) {
    let width = LaneBlock::width();

    #[cfg(target_arch = "x86_64")]
    {
        if vecta_target::is_hardware_accelerated()
            && is_x86_feature_detected!("sse2")
            && (dest as usize) % 16 == 0
        {
            // Safety: dest is 16-aligned and valid for width bytes.
            unsafe { stream_sse2(block, dest) };
            return;
        }
    }

    // Safety: the caller guarantees dest is valid for width bytes.
    unsafe { std::ptr::copy_nonoverlapping(block.0.as_ptr(), dest, width) };
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn stream_sse2(block: &LaneBlock, dest: *mut u8) {
    for offset in (0..LaneBlock::width()).step_by(16) {
        // Safety: guaranteed by store_non_temporal.
        unsafe {
            let v = _mm_load_si128(block.0.as_ptr().add(offset).cast());
            _mm_stream_si128(dest.add(offset).cast(), v);
        }
    }
    _mm_sfence();
}
