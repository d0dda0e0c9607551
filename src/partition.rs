// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Divides the image buffer among the render threads.
//!
//! Every thread gets one contiguous run of pixel offsets.  All runs
//! but the last are the same length; whatever is left over after the
//! division goes to the last one, which is the run the calling thread
//! renders itself.  The runs never overlap, and `split_mut` hands them
//! out as separate mutable slices, so no thread can touch another's
//! pixels and there is nothing to lock.

use std::mem;
use std::ops::Range;

/// Split `0..total` into `workers` contiguous ranges.  A worker count
/// of zero is treated as one.  When there are fewer pixels than
/// workers, the leading ranges are empty.
pub fn partition(total: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    let chunk = total / workers;
    (0..workers)
        .map(|worker| {
            let start = worker * chunk;
            let stop = if worker == workers - 1 {
                total
            } else {
                start + chunk
            };
            start..stop
        })
        .collect()
}

/// Carve `buffer` into disjoint mutable slices, one per range.  The
/// ranges must be the output of `partition` over the whole buffer:
/// contiguous, in order, starting at zero and ending at the buffer's
/// length.
pub fn split_mut<'a, T>(buffer: &'a mut [T], chunks: &[Range<usize>]) -> Vec<&'a mut [T]> {
    assert_eq!(
        chunks.last().map_or(0, |chunk| chunk.end),
        buffer.len(),
        "chunks must cover the buffer"
    );
    let mut regions = Vec::with_capacity(chunks.len());
    let mut rest = buffer;
    let mut cursor = 0;
    for chunk in chunks {
        assert_eq!(chunk.start, cursor, "chunks must be contiguous");
        let taken = mem::take(&mut rest);
        let (head, tail) = taken.split_at_mut(chunk.len());
        regions.push(head);
        rest = tail;
        cursor = chunk.end;
    }
    regions
}
