use fixed::types::{I16F16, I32F32};

/// Q32.32 fixed-point: 32 integer bits, 32 fractional bits.
pub type Fixed64 = I32F32;

/// Q16.16 fixed-point for compact storage (visitor proportions, etc.).
pub type Fixed32 = I16F16;

/// Absolute wall-clock time in milliseconds. Supplied by the host; the
/// simulation never reads a clock of its own.
pub type Millis = u64;

/// Convert an f64 to Fixed64. Use only for initialization, never in sim loop.
#[inline]
pub fn f64_to_fixed64(v: f64) -> Fixed64 {
    Fixed64::from_num(v)
}

/// Convert an f64 to Fixed32. Use only for initialization.
#[inline]
pub fn f64_to_fixed32(v: f64) -> Fixed32 {
    Fixed32::from_num(v)
}

/// Convert Fixed32 to f64. Use only for display.
#[inline]
pub fn fixed32_to_f64(v: Fixed32) -> f64 {
    v.to_num::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed64_from_grid_values() {
        let v = f64_to_fixed64(12.5);
        assert_eq!(v.to_num::<f64>(), 12.5);
        assert_eq!(v.floor().to_num::<i32>(), 12);
    }

    #[test]
    fn fixed64_floor_of_negative() {
        let v = f64_to_fixed64(-0.25);
        assert_eq!(v.floor().to_num::<i32>(), -1);
    }

    #[test]
    fn fixed32_basic_arithmetic() {
        let a = f64_to_fixed32(0.15);
        let b = f64_to_fixed32(0.02);
        let sum = fixed32_to_f64(a + b);
        assert!((sum - 0.17).abs() < 1e-4);
    }

    #[test]
    fn fixed64_from_bits_matches_fraction() {
        // 0.5 in Q32.32.
        assert_eq!(Fixed64::from_bits(1 << 31), f64_to_fixed64(0.5));
    }
}
