/// Discrete types know when two values are adjacent.
///
/// This is what lets a [`crate::Discrete`] order consider `[1,4]` and
/// `[5,9]` as connected (there is no integer left out between them), and
/// `(3,4)` as empty.
pub trait NothingBetween: Sized {
    /// True if no value of the type lies strictly between self and other.
    /// This is only called with self < other.
    fn nothing_between(&self, other: &Self) -> bool;

    /// The next value, None for the largest value of the type
    fn successor(&self) -> Option<Self>;

    /// The previous value, None for the smallest value of the type
    fn predecessor(&self) -> Option<Self>;
}

macro_rules! nothing_between_int {
    ($($t:ty)*) => {$(
        impl NothingBetween for $t {
            fn nothing_between(&self, other: &$t) -> bool {
                //  checked: the distance between two extreme values might
                //  not fit in the type
                self.checked_add(1).map_or(true, |next| next >= *other)
            }

            fn successor(&self) -> Option<$t> {
                self.checked_add(1)
            }

            fn predecessor(&self) -> Option<$t> {
                self.checked_sub(1)
            }
        }
    )*};
}

nothing_between_int! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

impl NothingBetween for char {
    fn nothing_between(&self, other: &char) -> bool {
        //  the surrogate range is not made of chars
        let mut next = *self as u32 + 1;
        if next == 0xD800 {
            next = 0xE000;
        }
        next >= *other as u32
    }

    fn successor(&self) -> Option<char> {
        match *self {
            '\u{D7FF}' => Some('\u{E000}'),
            c => char::from_u32(c as u32 + 1),
        }
    }

    fn predecessor(&self) -> Option<char> {
        match *self {
            '\u{E000}' => Some('\u{D7FF}'),
            c => (c as u32).checked_sub(1).and_then(char::from_u32),
        }
    }
}

#[cfg(feature = "chrono")]
impl NothingBetween for chrono::NaiveDate {
    fn nothing_between(&self, other: &chrono::NaiveDate) -> bool {
        self.succ_opt().map_or(true, |next| next >= *other)
    }

    fn successor(&self) -> Option<chrono::NaiveDate> {
        self.succ_opt()
    }

    fn predecessor(&self) -> Option<chrono::NaiveDate> {
        self.pred_opt()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_integers() {
        assert!(1_u8.nothing_between(&2));
        assert!(!1_u8.nothing_between(&3));
        assert!(254_u8.nothing_between(&255));
        assert!((-1_i8).nothing_between(&0));
        assert!(!(-128_i8).nothing_between(&127));
        assert!(!0_i64.nothing_between(&i64::MAX));
        assert!((i64::MAX - 1).nothing_between(&i64::MAX));
        assert!(!10_usize.nothing_between(&12));
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(3_i32.successor(), Some(4));
        assert_eq!(3_i32.predecessor(), Some(2));
        assert_eq!(i64::MAX.successor(), None);
        assert_eq!(0_u8.predecessor(), None);
        assert_eq!('a'.successor(), Some('b'));
        assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
        assert_eq!('\u{E000}'.predecessor(), Some('\u{D7FF}'));
        assert_eq!(char::MAX.successor(), None);
        assert_eq!('\0'.predecessor(), None);
    }

    #[test]
    fn test_chars() {
        assert!('a'.nothing_between(&'b'));
        assert!(!'a'.nothing_between(&'c'));
        assert!('\u{D7FF}'.nothing_between(&'\u{E000}'));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_dates() {
        let d1 = chrono::NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let d2 = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let d3 = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert!(d1.nothing_between(&d2));
        assert!(d2.nothing_between(&d3));
        assert!(!d1.nothing_between(&d3));
    }
}
