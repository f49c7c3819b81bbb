//! Fixed-width element encoding for the typed array layer.
//!
//! An [`Element`] knows its own byte width and how to write itself into,
//! and read itself back out of, a slot of exactly that width. Primitive
//! numbers are encoded little-endian.

/// A value with a fixed-size byte representation.
///
/// # Contract
///
/// `write_to` and `read_from` are only ever called with slices of exactly
/// [`SIZE`](Element::SIZE) bytes, and `read_from` only sees bytes produced
/// by `write_to` of the same type.
///
/// # Example (manual implementation)
///
/// ```
/// use strata_array::Element;
///
/// #[derive(Debug, PartialEq)]
/// struct Rgb(u8, u8, u8);
///
/// impl Element for Rgb {
///     const SIZE: usize = 3;
///
///     fn write_to(&self, out: &mut [u8]) {
///         out.copy_from_slice(&[self.0, self.1, self.2]);
///     }
///
///     fn read_from(bytes: &[u8]) -> Self {
///         Rgb(bytes[0], bytes[1], bytes[2])
///     }
/// }
/// ```
pub trait Element: Sized {
    /// Width of one encoded element in bytes. Must be non-zero.
    const SIZE: usize;

    /// Encode `self` into `out`.
    fn write_to(&self, out: &mut [u8]);

    /// Decode a value from `bytes`.
    fn read_from(bytes: &[u8]) -> Self;
}

macro_rules! impl_element_le {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const SIZE: usize = std::mem::size_of::<$t>();

                fn write_to(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_le_bytes());
                }

                fn read_from(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_element_le!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl<const N: usize> Element for [u8; N] {
    const SIZE: usize = N;

    fn write_to(&self, out: &mut [u8]) {
        out.copy_from_slice(self);
    }

    fn read_from(bytes: &[u8]) -> Self {
        let mut raw = [0u8; N];
        raw.copy_from_slice(bytes);
        raw
    }
}
