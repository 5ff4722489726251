/// Coerces a numeric input into a non-negative unit count
/// Negative and NaN values become 0, fractions truncate toward zero,
/// anything above u64::MAX clamps to u64::MAX
pub trait ToUnits {
    fn to_units(&self) -> u64;
}

macro_rules! impl_to_units_unsigned {
    ($($ty:ty),*) => {
        $(impl ToUnits for $ty {
            fn to_units(&self) -> u64 {
                u64::try_from(*self).unwrap_or(u64::MAX)
            }
        })*
    };
}

macro_rules! impl_to_units_signed {
    ($($ty:ty),*) => {
        $(impl ToUnits for $ty {
            fn to_units(&self) -> u64 {
                if *self <= 0 {
                    return 0;
                }
                u64::try_from(*self).unwrap_or(u64::MAX)
            }
        })*
    };
}

impl_to_units_unsigned!(u8, u16, u32, u64, u128, usize);
impl_to_units_signed!(i8, i16, i32, i64, i128, isize);

impl ToUnits for f64 {
    fn to_units(&self) -> u64 {
        if self.is_nan() || *self <= 0.0 {
            return 0;
        }
        // Float-to-int casts saturate at u64::MAX
        self.trunc() as u64
    }
}

impl ToUnits for f32 {
    fn to_units(&self) -> u64 {
        f64::from(*self).to_units()
    }
}

impl<T: ToUnits + ?Sized> ToUnits for &T {
    fn to_units(&self) -> u64 {
        (**self).to_units()
    }
}

/// Calculate floor(value * numerator / denominator) in u128
/// Callers guarantee value <= denominator, so the quotient never exceeds numerator
pub fn mul_div_floor(value: u64, numerator: u64, denominator: u128) -> u64 {
    if denominator == 0 {
        return 0;
    }
    let quotient = u128::from(value) * u128::from(numerator) / denominator;
    u64::try_from(quotient).unwrap_or(numerator)
}

/// Greatest common divisor (Euclid)
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}
