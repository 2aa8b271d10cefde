//! Canonical byte representation of appended values.
//!
//! Every value appended to a [`Sketch`](crate::Sketch) is first turned into bytes, and
//! only those bytes are hashed. Two values with equal canonical bytes are therefore the
//! same element as far as the sketch is concerned, e.g. `"11"` and `11u32`.
//!
//! - strings and byte containers contribute their own bytes,
//! - numbers, `char` and `bool` contribute their `Display` text.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value which can be appended to a sketch.
pub trait Element {
    /// Bytes fed to the sketch's hasher.
    fn canonical_bytes(&self) -> Cow<'_, [u8]>;
}

impl Element for str {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Element for String {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Element for [u8] {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Element for Vec<u8> {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<const N: usize> Element for [u8; N] {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: Element + ?Sized> Element for &T {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        (**self).canonical_bytes()
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        (**self).canonical_bytes()
    }
}

impl<T: Element + ?Sized> Element for Rc<T> {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        (**self).canonical_bytes()
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    #[inline]
    fn canonical_bytes(&self) -> Cow<'_, [u8]> {
        (**self).canonical_bytes()
    }
}

macro_rules! display_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                #[inline]
                fn canonical_bytes(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_string().into_bytes())
                }
            }
        )*
    };
}

display_element!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, char, bool
);

#[cfg(test)]
pub mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(&"abc" => b"abc".to_vec(); "str")]
    #[test_case(&11u32 => b"11".to_vec(); "integer")]
    #[test_case(&-7i64 => b"-7".to_vec(); "negative integer")]
    #[test_case(&11.717f64 => b"11.717".to_vec(); "float")]
    #[test_case(&654941.845f64 => b"654941.845".to_vec(); "large float")]
    #[test_case(&'x' => b"x".to_vec(); "char")]
    fn test_canonical_bytes(element: &dyn Element) -> Vec<u8> {
        element.canonical_bytes().into_owned()
    }

    #[test]
    fn test_borrowed_for_strings_and_bytes() {
        assert!(matches!("abc".canonical_bytes(), Cow::Borrowed(_)));
        assert!(matches!(String::from("abc").canonical_bytes(), Cow::Borrowed(_)));
        assert!(matches!([1u8, 2, 3].canonical_bytes(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_text_and_number_agree() {
        assert_eq!("11".canonical_bytes(), 11u64.canonical_bytes());
        assert_eq!(Box::new(12.207f64).canonical_bytes(), "12.207".canonical_bytes());
    }
}
