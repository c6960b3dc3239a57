//! Lane storage.
//!
//! Every vector owns one 64-byte, 64-aligned block regardless of the active
//! width. Only the first `vector_bytes()` bytes carry lanes; the tail stays
//! zero so whole-block comparisons and bitwise ops never see stale data.

use vecta_target::MAX_VECTOR_BYTES;

#[derive(Clone, Copy)]
#[repr(C, align(64))]
pub(crate) struct LaneBlock(pub(crate) [u8; MAX_VECTOR_BYTES]);

impl LaneBlock {
    pub(crate) const ZERO: Self = Self([0; MAX_VECTOR_BYTES]);

    /// Active width in bytes.
    #[inline]
    pub(crate) fn width() -> usize {
        vecta_target::vector_bytes()
    }

    #[inline]
    pub(crate) fn bytes(&self) -> &[u8] {
        &self.0[..Self::width()]
    }

    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0[..Self::width()]
    }

    /// Lanes of `T`. The block is 64-aligned and every width is a multiple
    /// of every element size, so the cast cannot fail.
    #[inline]
    pub(crate) fn lanes<T: bytemuck::Pod>(&self) -> &[T] {
        bytemuck::cast_slice(self.bytes())
    }

    #[inline]
    pub(crate) fn lanes_mut<T: bytemuck::Pod>(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(self.bytes_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_layout() {
        assert_eq!(std::mem::size_of::<LaneBlock>(), MAX_VECTOR_BYTES);
        assert_eq!(std::mem::align_of::<LaneBlock>(), 64);
    }

    #[test]
    fn test_lane_views() {
        let mut block = LaneBlock::ZERO;
        let lanes = block.lanes_mut::<u32>();
        assert_eq!(lanes.len(), LaneBlock::width() / 4);
        lanes[0] = 0x0403_0201;
        assert_eq!(&block.bytes()[..4], &0x0403_0201u32.to_ne_bytes());
        assert_eq!(block.lanes::<u128>().len(), LaneBlock::width() / 16);
        assert!(block.0[LaneBlock::width()..].iter().all(|&b| b == 0));
    }
}
