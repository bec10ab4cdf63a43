//! Modified Bessel functions of the first and second kind, orders 0 and 1.
//!
//! The exponential-disk velocity needs the products `I0(y)K0(y)` and
//! `I1(y)K1(y)`. All four functions are evaluated with the Abramowitz &
//! Stegun §9.8 polynomial approximations (relative error below ~2e-7 over
//! the full argument range).
//!
//! Numerical notes:
//! - `I0`/`I1` switch between a small-argument polynomial (|x| < 3.75) and
//!   the scaled large-argument form `x^{-1/2} e^x P(3.75/x)`.
//! - `K0`/`K1` diverge at `x = 0`; the small-argument branch carries the
//!   `ln(x/2)` term explicitly, and `x = 0` returns `+inf`.
//! - `K0`/`K1` are real only for `x >= 0`; negative arguments return NaN.

/// Crossover argument between the small- and large-argument `I` branches.
const I_BRANCH: f64 = 3.75;

/// Modified Bessel function of the first kind, order 0.
pub fn i0(x: f64) -> f64 {
    let ax = x.abs();
    if ax < I_BRANCH {
        let t = x / I_BRANCH;
        let t2 = t * t;
        1.0 + t2
            * (3.5156229
                + t2 * (3.0899424
                    + t2 * (1.2067492 + t2 * (0.2659732 + t2 * (0.0360768 + t2 * 0.0045813)))))
    } else {
        let t = I_BRANCH / ax;
        let p = 0.39894228
            + t * (0.01328592
                + t * (0.00225319
                    + t * (-0.00157565
                        + t * (0.00916281
                            + t * (-0.02057706
                                + t * (0.02635537 + t * (-0.01647633 + t * 0.00392377)))))));
        p * ax.exp() / ax.sqrt()
    }
}

/// Modified Bessel function of the first kind, order 1.
pub fn i1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < I_BRANCH {
        let t = x / I_BRANCH;
        let t2 = t * t;
        // Odd in x, so the leading factor keeps the sign.
        x * (0.5
            + t2 * (0.87890594
                + t2 * (0.51498869
                    + t2 * (0.15084934
                        + t2 * (0.02658733 + t2 * (0.00301532 + t2 * 0.00032411))))))
    } else {
        let t = I_BRANCH / ax;
        let p = 0.39894228
            + t * (-0.03988024
                + t * (-0.00362018
                    + t * (0.00163801
                        + t * (-0.01031555
                            + t * (0.02282967
                                + t * (-0.02895312 + t * (0.01787654 - t * 0.00420059)))))));
        let v = p * ax.exp() / ax.sqrt();
        if x < 0.0 { -v } else { v }
    }
}

/// Modified Bessel function of the second kind, order 0.
///
/// Returns `+inf` at `x = 0` and NaN for negative `x`.
pub fn k0(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }
    if x <= 2.0 {
        let t2 = x * x / 4.0;
        let p = -0.57721566
            + t2 * (0.42278420
                + t2 * (0.23069756
                    + t2 * (0.03488590
                        + t2 * (0.00262698 + t2 * (0.00010750 + t2 * 0.00000740)))));
        -(x / 2.0).ln() * i0(x) + p
    } else {
        let t = 2.0 / x;
        let p = 1.25331414
            + t * (-0.07832358
                + t * (0.02189568
                    + t * (-0.01062446
                        + t * (0.00587872 + t * (-0.00251540 + t * 0.00053208)))));
        p * (-x).exp() / x.sqrt()
    }
}

/// Modified Bessel function of the second kind, order 1.
///
/// Returns `+inf` at `x = 0` and NaN for negative `x`.
pub fn k1(x: f64) -> f64 {
    if x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return f64::INFINITY;
    }
    if x <= 2.0 {
        let t2 = x * x / 4.0;
        let p = 1.0
            + t2 * (0.15443144
                + t2 * (-0.67278579
                    + t2 * (-0.18156897
                        + t2 * (-0.01919402 + t2 * (-0.00110404 - t2 * 0.00004686)))));
        (x / 2.0).ln() * i1(x) + p / x
    } else {
        let t = 2.0 / x;
        let p = 1.25331414
            + t * (0.23498619
                + t * (-0.03655620
                    + t * (0.01504268
                        + t * (-0.00780353 + t * (0.00325614 - t * 0.00068245)))));
        p * (-x).exp() / x.sqrt()
    }
}
