/// Implements the bitwise and arithmetic operators for a newtype wrapping an
/// unsigned integer, both against itself and against the raw inner type.
macro_rules! impl_bit_ops {
    ($t:tt, $b:tt) => {
        impl BitAnd for $t {
            type Output = $t;
            #[inline(always)]
            fn bitand(self, other: $t) -> $t {
                $t(self.0 & other.0)
            }
        }

        impl BitOr for $t {
            type Output = $t;
            #[inline(always)]
            fn bitor(self, other: $t) -> $t {
                $t(self.0 | other.0)
            }
        }

        impl BitXor for $t {
            type Output = $t;
            #[inline(always)]
            fn bitxor(self, other: $t) -> $t {
                $t(self.0 ^ other.0)
            }
        }

        impl Not for $t {
            type Output = $t;
            #[inline(always)]
            fn not(self) -> $t {
                $t(!self.0)
            }
        }

        impl BitAndAssign for $t {
            #[inline(always)]
            fn bitand_assign(&mut self, other: $t) {
                self.0 &= other.0;
            }
        }

        impl BitOrAssign for $t {
            #[inline(always)]
            fn bitor_assign(&mut self, other: $t) {
                self.0 |= other.0;
            }
        }

        impl BitXorAssign for $t {
            #[inline(always)]
            fn bitxor_assign(&mut self, other: $t) {
                self.0 ^= other.0;
            }
        }

        impl Add for $t {
            type Output = $t;
            #[inline(always)]
            fn add(self, other: $t) -> $t {
                $t(self.0.wrapping_add(other.0))
            }
        }

        impl Sub for $t {
            type Output = $t;
            #[inline(always)]
            fn sub(self, other: $t) -> $t {
                $t(self.0.wrapping_sub(other.0))
            }
        }

        impl Sub<$b> for $t {
            type Output = $t;
            #[inline(always)]
            fn sub(self, other: $b) -> $t {
                $t(self.0.wrapping_sub(other))
            }
        }

        impl AddAssign for $t {
            #[inline(always)]
            fn add_assign(&mut self, other: $t) {
                self.0 = self.0.wrapping_add(other.0);
            }
        }

        impl SubAssign for $t {
            #[inline(always)]
            fn sub_assign(&mut self, other: $t) {
                self.0 = self.0.wrapping_sub(other.0);
            }
        }
    };
}
