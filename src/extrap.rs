use num::Float;

use crate::utils::cast;

/// Maximum number of elements kept in the epsilon table.
const LIMEXP: usize = 50;

/// Data structure for performing the epsilon extrapolation algorithm
#[derive(Clone, Debug)]
pub struct ExtrapolationTable<T> {
    /// rlist2[n - 1] contains the new element in the first column of the
    /// epsilon table
    n: usize,
    /// The two lower diagonals of the triangular epsilon table. The elements
    /// are numbered starting at the right-hand corner of the triangle.
    rlist2: [T; LIMEXP + 2],
    /// Number of calls to `accelerate`
    nres: usize,
    /// The last 3 accelerated results
    res3la: [T; 3],
}

impl<T: Float> Default for ExtrapolationTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ExtrapolationTable<T> {
    /// Construct an empty extrapolation table filled with zeros.
    pub fn new() -> ExtrapolationTable<T> {
        ExtrapolationTable {
            n: 0,
            rlist2: [T::zero(); LIMEXP + 2],
            nres: 0,
            res3la: [T::zero(); 3],
        }
    }

    /// Add a new partial result to the table.
    pub fn append(&mut self, y: T) {
        self.rlist2[self.n] = y;
        self.n += 1;
    }

    /// Number of elements currently in the first column.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Determines the limit of the sequence of approximations by means of
    /// the epsilon algorithm of P. Wynn, returning `(result, abserr)`.
    ///
    /// Only the elements needed for the computation of the next diagonal are
    /// preserved. Until three accelerated values are available the error is
    /// reported as `T::max_value()`.
    pub fn accelerate(&mut self) -> (T, T) {
        let eps = T::epsilon();
        let five_eps = cast::<T>(5.0) * eps;

        if self.n == 0 {
            return (T::zero(), T::max_value());
        }

        let n = self.n - 1;
        let current = self.rlist2[n];

        if n < 2 {
            return (current, T::max_value().max(five_eps * current.abs()));
        }

        let newelm = n / 2;
        let norig = n;
        let mut nfinal = n;
        let nres_orig = self.nres;

        let mut result = current;
        let mut abserr = T::max_value();

        self.rlist2[n + 2] = self.rlist2[n];
        self.rlist2[n] = T::max_value();

        for i in 0..newelm {
            let mut res = self.rlist2[n - 2 * i + 2];
            let e0 = self.rlist2[n - 2 * i - 2];
            let e1 = self.rlist2[n - 2 * i - 1];
            let e2 = res;

            let e1abs = e1.abs();
            let delta2 = e2 - e1;
            let err2 = delta2.abs();
            let tol2 = e2.abs().max(e1abs) * eps;
            let delta3 = e1 - e0;
            let err3 = delta3.abs();
            let tol3 = e1abs.max(e0.abs()) * eps;

            if err2 <= tol2 && err3 <= tol3 {
                // e0, e1 and e2 are equal to within machine accuracy,
                // convergence is assumed.
                let absolute = err2 + err3;
                let relative = five_eps * res.abs();
                return (res, absolute.max(relative));
            }

            let e3 = self.rlist2[n - 2 * i];
            self.rlist2[n - 2 * i] = e1;
            let delta1 = e1 - e3;
            let err1 = delta1.abs();
            let tol1 = e1abs.max(e3.abs()) * eps;

            // Two elements are very close to each other, omit a part of the
            // table.
            if err1 <= tol1 || err2 <= tol2 || err3 <= tol3 {
                nfinal = 2 * i;
                break;
            }

            let ss = delta1.recip() + delta2.recip() - delta3.recip();

            // Irregular behaviour in the table.
            if (ss * e1).abs() <= cast::<T>(1e-4) {
                nfinal = 2 * i;
                break;
            }

            res = e1 + ss.recip();
            self.rlist2[n - 2 * i] = res;

            let error = err2 + (res - e2).abs() + err3;
            if error <= abserr {
                abserr = error;
                result = res;
            }
        }

        // Shift the table
        if nfinal == LIMEXP - 1 {
            nfinal = 2 * ((LIMEXP - 1) / 2);
        }

        if norig % 2 == 1 {
            for i in 0..=newelm {
                self.rlist2[1 + i * 2] = self.rlist2[i * 2 + 3];
            }
        } else {
            for i in 0..=newelm {
                self.rlist2[i * 2] = self.rlist2[i * 2 + 2];
            }
        }

        if norig != nfinal {
            for i in 0..=nfinal {
                self.rlist2[i] = self.rlist2[norig - nfinal + i];
            }
        }

        self.n = nfinal + 1;

        if nres_orig < 3 {
            self.res3la[nres_orig] = result;
            abserr = T::max_value();
        } else {
            abserr = (result - self.res3la[2]).abs()
                + (result - self.res3la[1]).abs()
                + (result - self.res3la[0]).abs();

            self.res3la[0] = self.res3la[1];
            self.res3la[1] = self.res3la[2];
            self.res3la[2] = result;
        }

        self.nres = nres_orig + 1;

        (result, abserr.max(five_eps * result.abs()))
    }
}
