//! Shared trait abstractions for common patterns

/// Unified interpolation trait
pub trait Lerp {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(2.0_f64.lerp(&6.0, 0.0), 2.0);
        assert_eq!(2.0_f64.lerp(&6.0, 1.0), 6.0);
        assert_eq!(10.0_f64.lerp(&0.0, 0.25), 7.5);
    }
}
