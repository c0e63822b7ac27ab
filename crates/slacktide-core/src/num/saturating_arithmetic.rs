// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use core::ops::{Add, Sub};

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

/// Saturating addition by value (no references).
///
/// This trait provides a by-value API for saturating addition, clamping the
/// result to the numeric bounds of the type instead of overflowing. It
/// mirrors the inherent `saturating_add` on primitive integers but avoids
/// any ambiguity with reference-based trait APIs.
///
/// # Examples
///
/// ```rust
/// # use slacktide_core::num::saturating_arithmetic::SaturatingAddVal;
///
/// let t: i64 = 1_483_228_800; // 2017-01-01T00:00:00Z in Unix seconds
/// assert_eq!(t.saturating_add_val(86_400), 1_483_315_200); // One day later
///
/// let x: i8 = 120;
/// let y: i8 = 10;
/// assert_eq!(x.saturating_add_val(y), 127); // Clamps at i8::MAX
///
/// let m: i8 = -120;
/// let n: i8 = -20;
/// assert_eq!(m.saturating_add_val(n), -128); // Clamps at i8::MIN
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::num::saturating_arithmetic::SaturatingAddVal;
    ///
    /// let x: i8 = 120;
    /// let y: i8 = 10;
    /// assert_eq!(x.saturating_add_val(y), 127); // Clamps at i8::MAX
    /// ```
    fn saturating_add_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u8, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u16, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u32, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u64, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, usize, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, u128, saturating_add);

saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i8, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i16, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i32, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i64, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, isize, saturating_add);
saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, i128, saturating_add);

/// Saturating subtraction by value (no references).
///
/// This trait provides a by-value API for saturating subtraction, clamping the
/// result to the numeric bounds of the type instead of under/overflowing.
///
/// # Examples
///
/// ```rust
/// # use slacktide_core::num::saturating_arithmetic::SaturatingSubVal;
///
/// let t: i64 = 1_483_228_800; // 2017-01-01T00:00:00Z in Unix seconds
/// assert_eq!(t.saturating_sub_val(86_400), 1_483_142_400); // One day earlier
///
/// let x: i8 = -120;
/// let y: i8 = 20;
/// assert_eq!(x.saturating_sub_val(y), -128); // Clamps at i8::MIN
///
/// let m: i8 = 120;
/// let n: i8 = -20;
/// assert_eq!(m.saturating_sub_val(n), 127); // Clamps at i8::MAX
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use slacktide_core::num::saturating_arithmetic::SaturatingSubVal;
    ///
    /// let x: i8 = -120;
    /// let y: i8 = 20;
    /// assert_eq!(x.saturating_sub_val(y), -128); // Clamps at i8::MIN
    /// ```
    fn saturating_sub_val(self, v: Self) -> Self;
}

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u8, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u16, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u32, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u64, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, usize, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, u128, saturating_sub);

saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i8, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i16, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i32, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i64, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, isize, saturating_sub);
saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, i128, saturating_sub);
