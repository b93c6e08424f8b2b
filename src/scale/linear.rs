use super::{Scale, Tick, TickIter, util};
use num_traits::Float;

type TickGenerator<D, N> = Box<dyn Fn(&Linear<D, N>) -> TickIter<D>>;

/// Linear scale: affine mapping between a numeric domain and `[0, 1]`.
///
/// Used for both plot axes. Domain values are kept exactly as set, so a
/// reversed domain (`new(10.0, -10.0)`) flips the axis. Values outside the
/// domain are not clamped and map below 0 or above 1.
///
/// # Type Parameters
///
/// - `D`: Domain type (the sampled values, typically `f64`)
/// - `N`: Normalized type (typically `f32` for rendering)
///
/// # Examples
///
/// ```rust
/// use hsmath::{Scale, scale::Linear};
///
/// let scale = Linear::<f64, f64>::new(-5.0, 5.0);
///
/// assert_eq!(scale.normalize_opt(&-5.0), Some(0.0));
/// assert_eq!(scale.normalize_opt(&0.0), Some(0.5));
/// assert_eq!(scale.normalize_opt(&10.0), Some(1.5));
/// assert_eq!(scale.denormalize_opt(0.25), Some(-2.5));
/// ```
///
/// Custom ticks:
///
/// ```rust
/// use hsmath::{Scale, scale::{Linear, Tick}};
///
/// let scale = Linear::<f64, f64>::new_with_tick_fn(-1.0, 1.0, |_scale| {
///     vec![Tick { value: 0.0, level: 0 }]
/// });
/// assert_eq!(scale.ticks().len(), 1);
/// ```
pub struct Linear<D, N = f64>
where
    D: Float,
    N: Float,
{
    min: D,
    max: D,
    tick_generator: TickGenerator<D, N>,
    _phantom: std::marker::PhantomData<N>,
}

/// Smallest of `1, 2, 5, 10 × 10ᵏ` that is at least `raw_step`.
///
/// Works on any `Float` without logarithms, so decimal types get exact steps.
fn nice_step<D: Float>(raw_step: D) -> D {
    let one = D::one();
    let two = one + one;
    let five = two + two + one;
    let ten = five + five;

    let abs_step = raw_step.abs();
    let mut base = one;

    // Bring base to the power of ten with base <= abs_step < 10 * base.
    while base * ten <= abs_step {
        base = base * ten;
    }
    while base > abs_step && base > D::min_positive_value() {
        base = base / ten;
    }

    [base, base * two, base * five]
        .into_iter()
        .find(|c| *c >= abs_step)
        .unwrap_or(base * ten)
}

const MAX_MINOR_TICKS: usize = 100_000;

/// Default tick sequence of a [`Linear`] scale.
///
/// Minor ticks every tenth of a "nice" major step; every tenth minor tick
/// is a major one. Ticks are ascending and stay inside the domain.
pub struct LinearTickIter<D: Float> {
    state: Option<Sweep<D>>,
    single: Option<D>,
    remaining: usize,
}

struct Sweep<D: Float> {
    start: D,
    minor_step: D,
    index: usize,
    index_d: D,
    lo: D,
    hi: D,
    epsilon: D,
    last_value: Option<D>,
}

impl<D: Float> LinearTickIter<D> {
    pub(crate) fn new(min: D, max: D) -> Self {
        if min == max || !(max - min).is_finite() {
            return Self {
                state: None,
                single: min.is_finite().then_some(min),
                remaining: 1,
            };
        }

        let (lo, hi) = util::sorted_pair(min, max);
        let two = D::one() + D::one();
        let ten = (two + two + D::one()) * two;

        let major_step = nice_step((hi - lo) / ten);
        let minor_step = major_step / ten;
        if minor_step == D::zero() {
            return Self {
                state: None,
                single: Some(lo),
                remaining: 1,
            };
        }

        Self {
            state: Some(Sweep {
                start: (lo / major_step).floor() * major_step,
                minor_step,
                index: 0,
                index_d: D::zero(),
                lo,
                hi,
                epsilon: util::epsilon_from_step(&minor_step),
                last_value: None,
            }),
            single: None,
            remaining: MAX_MINOR_TICKS,
        }
    }
}

impl<D: Float> Iterator for LinearTickIter<D> {
    type Item = Tick<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.single.take() {
            return Some(Tick { value, level: 0 });
        }
        let sweep = self.state.as_mut()?;

        while self.remaining > 0 {
            self.remaining -= 1;

            // Index-based so rounding does not accumulate across steps.
            let mut value = sweep.start + sweep.minor_step * sweep.index_d;
            let level = if sweep.index % 10 == 0 { 0 } else { 1 };
            sweep.index += 1;
            sweep.index_d = sweep.index_d + D::one();

            if value < sweep.lo {
                if sweep.lo - value > sweep.epsilon {
                    continue;
                }
                value = sweep.lo;
            } else if value > sweep.hi {
                if value - sweep.hi > sweep.epsilon {
                    break;
                }
                value = sweep.hi;
            }

            if sweep.last_value == Some(value) {
                continue;
            }
            sweep.last_value = Some(value);
            return Some(Tick { value, level });
        }

        self.state = None;
        None
    }
}

fn default_tick_generator<D: Float + 'static, N: Float>(scale: &Linear<D, N>) -> TickIter<D> {
    TickIter::from_linear(LinearTickIter::new(scale.min, scale.max))
}

impl<D, N> Linear<D, N>
where
    D: Float + 'static,
    N: Float + 'static,
{
    /// Creates a linear scale over `[min, max]` with the default "nice" ticks.
    pub fn new(min: D, max: D) -> Self {
        Self {
            min,
            max,
            tick_generator: Box::new(default_tick_generator),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Creates a linear scale whose ticks come from `tick_generator`.
    pub fn new_with_tick_generator<F>(min: D, max: D, tick_generator: F) -> Self
    where
        F: Fn(&Self) -> TickIter<D> + 'static,
    {
        Self {
            min,
            max,
            tick_generator: Box::new(tick_generator),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Like [`Linear::new_with_tick_generator`] for a function returning a `Vec`.
    pub fn new_with_tick_fn<F>(min: D, max: D, tick_fn: F) -> Self
    where
        F: Fn(&Self) -> Vec<Tick<D>> + 'static,
    {
        Self::new_with_tick_generator(min, max, move |scale| TickIter::from_vec(tick_fn(scale)))
    }
}

impl<D, N> Scale for Linear<D, N>
where
    D: Float,
    N: Float,
{
    type Domain = D;
    type Normalized = N;

    fn domain(&self) -> (&D, &D) {
        (&self.min, &self.max)
    }

    fn set_domain(&mut self, min: D, max: D) {
        self.min = min;
        self.max = max;
    }

    fn normalize_opt(&self, value: &D) -> Option<N> {
        let span = self.max - self.min;
        if span == D::zero() {
            return Some(N::zero());
        }

        // Divide in the domain type; `N` may be too narrow for the raw span.
        // Out-of-range values map outside [0, 1]; the renderer decides what to do.
        N::from((*value - self.min) / span)
    }

    fn denormalize_opt(&self, t: N) -> Option<D> {
        let t: D = D::from(t)?;
        Some(self.min + t * (self.max - self.min))
    }

    fn tick_iter(&self) -> TickIter<D> {
        (self.tick_generator)(self)
    }

    fn extend_domain(&mut self, other_min: &D, other_max: &D) {
        if other_min < &self.min {
            self.min = *other_min;
        }
        if other_max > &self.max {
            self.max = *other_max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_normalize_f64() {
        let scale = Linear::<f64, f64>::new(0.0, 100.0);

        assert_eq!(scale.normalize_opt(&0.0), Some(0.0));
        assert_eq!(scale.normalize_opt(&50.0), Some(0.5));
        assert_eq!(scale.normalize_opt(&100.0), Some(1.0));
        assert_eq!(scale.normalize_opt(&25.0), Some(0.25));
    }

    #[test]
    fn test_linear_mixed_types() {
        let scale = Linear::<f64, f32>::new(-10.0, 10.0);

        assert_eq!(scale.normalize_opt(&0.0), Some(0.5f32));
        assert_eq!(scale.denormalize_opt(0.75f32), Some(5.0));
    }

    #[test]
    fn test_linear_domain_wider_than_normalized_type() {
        let scale = Linear::<f64, f32>::new(0.0, 1e300);

        assert_eq!(scale.normalize_opt(&5e299), Some(0.5f32));
        assert_eq!(scale.normalize_opt(&1e300), Some(1.0f32));

        let back = scale.denormalize_opt(0.5f32).unwrap();
        assert!((back - 5e299).abs() <= 5e299 * 1e-12);
    }

    #[test]
    fn test_linear_reversed() {
        let scale = Linear::<f64, f64>::new(100.0, 0.0);

        assert_eq!(scale.normalize_opt(&100.0), Some(0.0));
        assert_eq!(scale.normalize_opt(&0.0), Some(1.0));
    }

    #[test]
    fn test_linear_zero_span_maps_to_zero() {
        let scale = Linear::<f64, f64>::new(3.0, 3.0);
        assert_eq!(scale.normalize_opt(&3.0), Some(0.0));
        assert_eq!(scale.normalize_opt(&7.0), Some(0.0));
        assert_eq!(scale.ticks(), vec![Tick { value: 3.0, level: 0 }]);
    }

    #[test]
    fn test_nice_step() {
        assert_eq!(nice_step(0.7), 1.0);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert_eq!(nice_step(20.0), 20.0);
        assert_eq!(nice_step(0.1), 0.1);
        assert_eq!(nice_step(0.15), 0.2);
    }

    #[test]
    fn test_linear_ticks_include_bounds_and_zero() {
        let scale = Linear::<f64, f64>::new(-10.0, 10.0);
        let majors = scale.major_ticks();

        assert!(majors.contains(&-10.0));
        assert!(majors.contains(&0.0));
        assert!(majors.contains(&10.0));
    }

    #[test]
    fn test_linear_ticks_sorted_and_unique() {
        let scale = Linear::<f32, f32>::new(-3.0, 7.5);
        let ticks = scale.ticks();

        assert!(!ticks.is_empty());
        for pair in ticks.windows(2) {
            assert!(pair[1].value > pair[0].value);
        }
    }

    #[test]
    fn test_linear_ticks_remain_within_domain() {
        let scale = Linear::<f64, f64>::new(13.2, 47.8);
        let (min, max) = scale.domain();

        for tick in scale.ticks() {
            assert!(
                tick.value >= *min && tick.value <= *max,
                "tick {} outside domain [{}, {}]",
                tick.value,
                min,
                max
            );
        }
    }

    #[test]
    fn test_linear_ticks_reversed_domain() {
        let scale = Linear::<f64, f64>::new(5.0, -5.0);
        let majors = scale.major_ticks();
        assert_eq!(majors.first(), Some(&-5.0));
        assert_eq!(majors.last(), Some(&5.0));
    }

    #[test]
    fn test_linear_custom_tick_generator() {
        let scale = Linear::<f64, f64>::new_with_tick_generator(0.0, 1.0, |_| TickIter::empty());
        assert!(scale.ticks().is_empty());
    }

    #[test]
    fn test_linear_set_domain() {
        let mut scale = Linear::<f64, f64>::new(0.0, 1.0);
        scale.set_domain(-4.0, 4.0);
        assert_eq!(scale.domain(), (&-4.0, &4.0));
        assert_eq!(scale.normalize_opt(&0.0), Some(0.5));
    }

    #[test]
    fn test_linear_extend_domain() {
        let mut scale = Linear::<f64, f64>::new(10.0, 20.0);
        scale.extend_domain(&0.0, &30.0);
        assert_eq!(scale.domain(), (&0.0, &30.0));

        scale.extend_domain(&5.0, &25.0);
        assert_eq!(scale.domain(), (&0.0, &30.0));
    }
}
