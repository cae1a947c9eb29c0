//! Macros for lifting bit and arithmetic operations onto single-field
//! tuple structs.

/// Allows for shifting operations to be applied to a struct consisting of a
/// singular tuple containing a type that implements that shift operation.
macro_rules! impl_indv_shift_ops {
    ($t:ty, $tname:ident, $fname:ident, $w:ident, $ta_name:ident, $fa_name:ident) => {
        impl $tname<usize> for $t {
            type Output = $t;

            #[inline]
            fn $fname(self, rhs: usize) -> $t {
                Self::from((self.0).$w(rhs as u32))
            }
        }

        impl $ta_name<usize> for $t {
            #[inline]
            fn $fa_name(&mut self, rhs: usize) {
                *self = Self::from((self.0).$w(rhs as u32));
            }
        }
    };
}

/// Allows for bit operations to be applied to a struct consisting of a
/// singular tuple containing a type that implements that bit operation.
macro_rules! impl_indv_bit_ops {
    ($t:ty, $b:ty, $tname:ident, $fname:ident, $w:ident, $ta_name:ident, $fa_name:ident) => {
        impl $tname for $t {
            type Output = $t;

            #[inline]
            fn $fname(self, rhs: $t) -> $t {
                Self::from((self.0).$w(rhs.0))
            }
        }

        impl $ta_name for $t {
            #[inline]
            fn $fa_name(&mut self, rhs: $t) {
                *self = Self::from((self.0).$w(rhs.0));
            }
        }

        impl $tname<$b> for $t {
            type Output = $t;

            #[inline]
            fn $fname(self, rhs: $b) -> $t {
                Self::from((self.0).$w(rhs))
            }
        }

        impl $ta_name<$b> for $t {
            #[inline]
            fn $fa_name(&mut self, rhs: $b) {
                *self = Self::from((self.0).$w(rhs));
            }
        }
    };
}

/// Implements bit operations `&, |, ^, !`, shifting operations `<<, >>`,
/// wrapping `+` and `-`, and the `From` trait for a struct consisting of a
/// singular tuple.
macro_rules! impl_bit_ops {
    ($t:tt, $b:tt) => {
        impl From<$b> for $t {
            fn from(bits: $b) -> Self {
                $t(bits)
            }
        }

        impl From<$t> for $b {
            fn from(it: $t) -> Self {
                it.0
            }
        }

        impl_indv_bit_ops!($t, $b, BitOr, bitor, bitor, BitOrAssign, bitor_assign);
        impl_indv_bit_ops!($t, $b, BitAnd, bitand, bitand, BitAndAssign, bitand_assign);
        impl_indv_bit_ops!($t, $b, BitXor, bitxor, bitxor, BitXorAssign, bitxor_assign);

        impl_indv_bit_ops!($t, $b, Add, add, wrapping_add, AddAssign, add_assign);
        impl_indv_bit_ops!($t, $b, Sub, sub, wrapping_sub, SubAssign, sub_assign);

        impl_indv_shift_ops!($t, Shl, shl, wrapping_shl, ShlAssign, shl_assign);
        impl_indv_shift_ops!($t, Shr, shr, wrapping_shr, ShrAssign, shr_assign);

        impl Not for $t {
            type Output = $t;

            #[inline]
            fn not(self) -> $t {
                $t(!self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::ops::*;

    #[derive(Copy, Clone, Default, Hash, PartialEq, Eq)]
    struct DummyBB(pub u64);

    impl_bit_ops!(DummyBB, u64);

    #[test]
    fn macro_impls_bb() {
        let a = DummyBB(0xFF00);
        let b = DummyBB(0x0FF0);
        assert_eq!((a | b).0, 0xFFF0);
        assert_eq!((a & b).0, 0x0F00);
        assert_eq!((a ^ b).0, 0xF0F0);
        assert_eq!((!DummyBB(0)).0, !0u64);
        assert_eq!((a << 4).0, 0xFF000);
        assert_eq!((a >> 8).0, 0xFF);
        assert_eq!((a + b).0, 0xFF00u64.wrapping_add(0x0FF0));
        assert_eq!((a - b).0, 0xFF00u64.wrapping_sub(0x0FF0));
    }
}
