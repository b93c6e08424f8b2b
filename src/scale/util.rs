use num_traits::Float;

/// Return `(min, max)` for two owned values.
pub fn sorted_pair<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Tolerance for comparing tick positions: a tenth of the step.
pub fn epsilon_from_step<T: Float>(step: &T) -> T {
    let two = T::one() + T::one();
    let ten = (two + two + T::one()) * two;
    *step / ten
}

/// Clamps `value` into `[min, max]`, accepting bounds in either order.
pub fn clamp_to<T: Float>(value: T, a: T, b: T) -> T {
    let (lo, hi) = sorted_pair(a, b);
    value.max(lo).min(hi)
}
