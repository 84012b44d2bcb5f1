use log::trace;

use crate::gallop_merge::gallop_merge;
use crate::minrun::min_run_length;
use crate::runs::{ascending_run_length, prepare_runs};
use crate::tracking;
use crate::util::*;

/// A sorted run of elements v[start..start + len].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

// The pending runs on the merge stack are adjacent and ordered by start
// index, together covering exactly the prefix of the slice scanned so far.
//
// After every push we look at the top three runs X (top), Y and Z. If
// |X| <= |Y| + |Z| and |Y| <= |Z| the stack is out of balance and we merge
// either Y with X (when |X| < |Z|) or Z with Y, repeating until the condition
// no longer holds. The top run is not bounded relative to the runs below it,
// so long inputs of equally sized blocks grow it one block at a time.
struct MergeStack {
    runs: Vec<Run>,
}

impl MergeStack {
    /// Creates an empty merge stack.
    fn new() -> Self {
        Self {
            runs: Vec::with_capacity(64),
        }
    }

    /// Push a newly found run, which must directly follow the top of the stack.
    fn push_run(&mut self, run: Run) {
        let expected_start = self.runs.last().map(Run::end).unwrap_or(0);
        assert_abort(run.start == expected_start);
        self.runs.push(run);
    }

    /// Merge the pending runs that are out of balance after a push.
    fn collapse<T, F: Cmp<T>>(&mut self, v: &mut [T], is_less: &mut F) {
        while self.runs.len() >= 3 {
            let n = self.runs.len();
            let (z, y, x) = (self.runs[n - 3], self.runs[n - 2], self.runs[n - 1]);
            if !(x.len <= y.len + z.len && y.len <= z.len) {
                break;
            }

            if x.len < z.len {
                self.merge_at(n - 2, v, is_less);
            } else {
                self.merge_at(n - 3, v, is_less);
            }
        }
    }

    /// Merge the top two runs until a single run remains.
    fn force_collapse<T, F: Cmp<T>>(&mut self, v: &mut [T], is_less: &mut F) {
        while self.runs.len() > 1 {
            self.merge_at(self.runs.len() - 2, v, is_less);
        }
    }

    /// Merge the runs at i and i + 1 into a single run at i.
    fn merge_at<T, F: Cmp<T>>(&mut self, i: usize, v: &mut [T], is_less: &mut F) {
        let left = self.runs[i];
        let right = self.runs[i + 1];
        assert_abort(left.end() == right.start && right.end() <= v.len());

        trace!("merging runs {:?} and {:?}", left, right);
        gallop_merge(&mut v[left.start..right.end()], left.len, is_less);

        self.runs[i] = Run {
            start: left.start,
            len: left.len + right.len,
        };
        self.runs.remove(i + 1);
    }
}

pub fn timsort<T, F: Cmp<T>>(v: &mut [T], is_less: &mut F) {
    let n = v.len();
    if n < 2 {
        return;
    }

    let _input = tracking::BufferGuard::register("input", v.as_ptr(), n);

    let min_run = min_run_length(n);
    trace!("sorting {} elements with min_run {}", n, min_run);
    prepare_runs(v, min_run, is_less);
    merge_runs(v, is_less);
}

/// Merges the sorted blocks left behind by prepare_runs into a single run.
///
/// The blocks are rediscovered by scanning for ascending runs, so blocks that
/// happen to continue each other in order are picked up as one run.
fn merge_runs<T, F: Cmp<T>>(v: &mut [T], is_less: &mut F) {
    let n = v.len();
    let mut merge_stack = MergeStack::new();

    let mut start = 0;
    while start < n {
        let len = ascending_run_length(&v[start..], is_less);
        merge_stack.push_run(Run { start, len });
        merge_stack.collapse(v, is_less);
        start += len;
    }

    merge_stack.force_collapse(v, is_less);
    debug_assert!(merge_stack.runs.len() <= 1);
}
