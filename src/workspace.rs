//! Subinterval bookkeeping for the adaptive drivers.
//!
//! Subintervals live in a flat list; a separate permutation `order` keeps
//! their indices sorted by decreasing error estimate. Bisection replaces the
//! worst subinterval in place with one child and appends the other, so only
//! two entries need to be re-inserted per step.

use num::Float;

use crate::utils::cast;

/// One piece of the bisected integration range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subinterval<T> {
    pub a: T,
    pub b: T,
    /// Local integral estimate.
    pub result: T,
    /// Local absolute error estimate.
    pub error: T,
    /// Number of bisections that produced this subinterval.
    pub level: usize,
}

/// Workspace for adaptive integrators
#[derive(Clone, Debug)]
pub struct IntegrationWorkSpace<T> {
    limit: usize,
    /// Position in `order` of the subinterval to bisect next.
    nrmax: usize,
    /// Index into `intervals` of the subinterval to bisect next.
    i: usize,
    maximum_level: usize,
    intervals: Vec<Subinterval<T>>,
    order: Vec<usize>,
}

impl<T: Float> IntegrationWorkSpace<T> {
    /// Workspace for at most `limit` subintervals.
    pub fn new(limit: usize) -> IntegrationWorkSpace<T> {
        IntegrationWorkSpace {
            limit,
            nrmax: 0,
            i: 0,
            maximum_level: 0,
            intervals: Vec::with_capacity(limit),
            order: Vec::with_capacity(limit),
        }
    }

    /// Seed the workspace with the whole range. Any previous contents are
    /// discarded.
    pub fn initialize(&mut self, a: T, b: T, result: T, error: T) {
        self.intervals.clear();
        self.order.clear();
        self.intervals.push(Subinterval {
            a,
            b,
            result,
            error,
            level: 0,
        });
        self.order.push(0);
        self.nrmax = 0;
        self.i = 0;
        self.maximum_level = 0;
    }

    /// `(a, b, result, error)` of the subinterval to bisect next.
    pub fn worst(&self) -> (T, T, T, T) {
        let s = &self.intervals[self.i];
        (s.a, s.b, s.result, s.error)
    }

    /// Replace the subinterval returned by [`worst`](Self::worst) with its two
    /// halves `point1 = (a1, b1, area1, error1)` and `point2`, then restore the
    /// error ordering.
    pub fn update(&mut self, point1: (T, T, T, T), point2: (T, T, T, T)) {
        let (a1, b1, area1, error1) = point1;
        let (a2, b2, area2, error2) = point2;

        let i_max = self.i;
        let new_level = self.intervals[i_max].level + 1;

        // The child with the larger error keeps the parent's slot.
        let (kept, appended) = if error2 > error1 {
            ((a2, b2, area2, error2), (a1, b1, area1, error1))
        } else {
            ((a1, b1, area1, error1), (a2, b2, area2, error2))
        };

        self.intervals[i_max] = Subinterval {
            a: kept.0,
            b: kept.1,
            result: kept.2,
            error: kept.3,
            level: new_level,
        };
        self.intervals.push(Subinterval {
            a: appended.0,
            b: appended.1,
            result: appended.2,
            error: appended.3,
            level: new_level,
        });
        self.order.push(0);

        if new_level > self.maximum_level {
            self.maximum_level = new_level;
        }

        self.sort();
    }

    /// Maintains the descending ordering of the error estimates after an
    /// update. The parent slot (largest error) is inserted top-down starting
    /// after position `nrmax`, the appended child (smallest) bottom-up. Only
    /// as many entries are kept sorted as subdivisions remain allowed.
    fn sort(&mut self) {
        let last = self.intervals.len() - 1;
        let mut i_nrmax = self.nrmax;
        let i_maxerr = self.order[i_nrmax];

        if last < 2 {
            self.order[0] = 0;
            self.order[1] = 1;
            self.i = i_maxerr;
            return;
        }

        let errmax = self.intervals[i_maxerr].error;

        // Only needed when a difficult integrand made the error grow on
        // bisection.
        while i_nrmax > 0 && errmax > self.error_at(i_nrmax - 1) {
            self.order[i_nrmax] = self.order[i_nrmax - 1];
            i_nrmax -= 1;
        }

        let top = if last < self.limit / 2 + 2 {
            last
        } else {
            (self.limit + 1).saturating_sub(last)
        };

        let mut jj = i_nrmax + 1;
        while jj < top && errmax < self.error_at(jj) {
            self.order[jj - 1] = self.order[jj];
            jj += 1;
        }
        self.order[jj - 1] = i_maxerr;

        let errmin = self.intervals[last].error;
        let mut kk = top as isize - 1;
        while kk > jj as isize - 2 && errmin >= self.error_at(kk as usize) {
            self.order[kk as usize + 1] = self.order[kk as usize];
            kk -= 1;
        }
        self.order[(kk + 1) as usize] = last;

        self.i = self.order[i_nrmax];
        self.nrmax = i_nrmax;
    }

    #[inline]
    fn error_at(&self, position: usize) -> T {
        self.intervals[self.order[position]].error
    }

    /// Sum of the local integral estimates over all subintervals.
    pub fn sum_results(&self) -> T {
        let mut sum = T::zero();
        for s in self.intervals.iter() {
            sum = sum + s.result;
        }
        sum
    }

    /// True when the bisection points `a1`, `a2`, `b2` can no longer be told
    /// apart in the working precision.
    pub fn subinterval_too_small(a1: T, a2: T, b2: T) -> bool {
        let e = T::epsilon();
        let u = T::min_positive_value();

        let tmp = (T::one() + cast::<T>(100.0) * e) * (a2.abs() + cast::<T>(1000.0) * u);

        a1.abs() <= tmp && b2.abs() <= tmp
    }

    /// Advance the cursor past subintervals already at the deepest level.
    /// Returns true if a larger-than-smallest subinterval was found.
    pub fn increase_nrmax(&mut self) -> bool {
        let id = self.nrmax;
        let last = self.intervals.len() - 1;

        let jupbnd = if last > 1 + self.limit / 2 {
            (self.limit + 1).saturating_sub(last)
        } else {
            last
        };

        for _ in id..=jupbnd {
            let i_max = self.order[self.nrmax];
            self.i = i_max;
            if self.intervals[i_max].level < self.maximum_level {
                return true;
            }
            self.nrmax += 1;
        }
        false
    }

    /// Point the cursor back at the subinterval with the largest error.
    pub fn reset_nrmax(&mut self) {
        self.nrmax = 0;
        self.i = self.order[0];
    }

    /// Move the cursor to position `nrmax` in the error ordering.
    pub fn set_nrmax(&mut self, nrmax: usize) {
        self.nrmax = nrmax;
    }

    /// Position of the cursor in the error ordering.
    pub fn nrmax(&self) -> usize {
        self.nrmax
    }

    /// Level of the subinterval to bisect next.
    pub fn current_level(&self) -> usize {
        self.intervals[self.i].level
    }

    pub fn max_level(&self) -> usize {
        self.maximum_level
    }

    /// True when the next subinterval is not among the smallest ones.
    pub fn large_interval(&self) -> bool {
        self.current_level() < self.maximum_level
    }

    /// Number of subintervals.
    pub fn size(&self) -> usize {
        self.intervals.len()
    }

    pub fn intervals(&self) -> &[Subinterval<T>] {
        &self.intervals
    }

    /// Indices into [`intervals`](Self::intervals) by decreasing error.
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}
