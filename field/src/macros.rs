// Owned and borrowed operator impls derived from the `*Assign<&Self>` impls
// each field type writes by hand.
macro_rules! impl_binop_from_assign {
    ($type:ident, $config:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<P: $config> core::ops::$trait<Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn $method(mut self, other: Self) -> Self {
                core::ops::$assign_trait::$assign_method(&mut self, &other);
                self
            }
        }

        impl<'a, P: $config> core::ops::$trait<&'a Self> for $type<P> {
            type Output = Self;

            #[inline]
            fn $method(mut self, other: &'a Self) -> Self {
                core::ops::$assign_trait::$assign_method(&mut self, other);
                self
            }
        }

        impl<'a, 'b, P: $config> core::ops::$trait<&'b $type<P>> for &'a $type<P> {
            type Output = $type<P>;

            #[inline]
            fn $method(self, other: &'b $type<P>) -> $type<P> {
                let mut result = self.clone();
                core::ops::$assign_trait::$assign_method(&mut result, other);
                result
            }
        }

        impl<P: $config> core::ops::$assign_trait<Self> for $type<P> {
            #[inline]
            fn $assign_method(&mut self, other: Self) {
                core::ops::$assign_trait::$assign_method(self, &other);
            }
        }
    };
}

macro_rules! impl_field_ops {
    ($type:ident, $config:ident) => {
        impl_binop_from_assign!($type, $config, Add, add, AddAssign, add_assign);
        impl_binop_from_assign!($type, $config, Sub, sub, SubAssign, sub_assign);
        impl_binop_from_assign!($type, $config, Mul, mul, MulAssign, mul_assign);

        impl<'a, P: $config> core::ops::Neg for &'a $type<P> {
            type Output = $type<P>;

            #[inline]
            fn neg(self) -> $type<P> {
                -self.clone()
            }
        }

        impl<P: $config> core::iter::Sum for $type<P> {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Field>::zero(), |acc, x| acc + x)
            }
        }

        impl<P: $config> core::iter::Product for $type<P> {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Field>::one(), |acc, x| acc * x)
            }
        }
    };
}
