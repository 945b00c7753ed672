use crate::{derive_infallible, Convert};
use num_traits::{One, Zero};

macro_rules! derive_bool_numeric {
    ($($num:ty),+ $(,)?) => {
        $(
            impl Convert<$num> for bool {
                fn convert(self) -> $num {
                    if self {
                        <$num>::one()
                    } else {
                        <$num>::zero()
                    }
                }
            }
            derive_infallible!(bool => $num);

            impl Convert<bool> for $num {
                fn convert(self) -> bool {
                    !self.is_zero()
                }
            }
            derive_infallible!($num => bool);
        )+
    };
}

derive_bool_numeric!(isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64);
