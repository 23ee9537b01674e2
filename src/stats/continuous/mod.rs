//! Continuous probability distributions.

mod student_t;

pub use student_t::StudentT;

/// Special functions backing the distribution CDFs.
pub(crate) mod special {
    use numr::algorithm::special::scalar as numr_special;

    /// Log-gamma function.
    pub fn lgamma(x: f64) -> f64 {
        numr_special::lgamma_scalar(x)
    }

    /// Regularized incomplete beta function: I_x(a, b)
    pub fn betainc(a: f64, b: f64, x: f64) -> f64 {
        numr_special::betainc_scalar(a, b, x)
    }

    /// Inverse regularized incomplete beta function.
    pub fn betaincinv(a: f64, b: f64, p: f64) -> f64 {
        numr_special::betaincinv_scalar(a, b, p)
    }
}
