//! Offset arithmetic for an arena of arbitrary (not necessarily power of two)
//! capacity. Every copy that crosses the end of the arena is split into at
//! most two linear runs: one from the start offset to the end of the arena,
//! and one from offset 0.

use std::ops::Range;

/// Offset `step` bytes past `start`, wrapped into `[0, capacity)`.
///
/// Requires `start < capacity` and `step <= capacity`, which every caller
/// guarantees through the `len <= capacity` invariant.
#[inline(always)]
pub fn advance(start: usize, step: usize, capacity: usize) -> usize {
    debug_assert!(start < capacity && step <= capacity);
    let next = start + step;
    if next >= capacity { next - capacity } else { next }
}

/// Splits a run of `count` bytes beginning at `start` into the part that fits
/// before the end of the arena and the part that continues at offset 0.
#[inline(always)]
pub fn split(start: usize, count: usize, capacity: usize) -> (Range<usize>, Range<usize>) {
    let first = count.min(capacity - start);
    (start..start + first, 0..count - first)
}

/// Copies `src` into `arena` beginning at `start`, wrapping at the end.
#[inline]
pub fn copy_in(arena: &mut [u8], start: usize, src: &[u8]) {
    let (first, second) = split(start, src.len(), arena.len());
    let (front, back) = src.split_at(first.len());
    arena[first].copy_from_slice(front);
    arena[second].copy_from_slice(back);
}

/// Fills `dst` from `arena` beginning at `start`, wrapping at the end.
#[inline]
pub fn copy_out(arena: &[u8], start: usize, dst: &mut [u8]) {
    let (first, second) = split(start, dst.len(), arena.len());
    let (front, back) = dst.split_at_mut(first.len());
    front.copy_from_slice(&arena[first]);
    back.copy_from_slice(&arena[second]);
}
