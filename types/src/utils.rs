//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type:
/// the truthy variant is the positive direction, the falsy one is the negative.
macro_rules! bool_enum {
    ($name:ident: $truthy:ident and $falsy:ident; displayed as $true_ch:literal:$false_ch:literal) => {
        use self::$name::{$falsy, $truthy};

        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[allow(missing_docs)]
        pub enum $name {
            $truthy,
            $falsy,
        }

        impl $name {
            /// Whether the direction makes the coordinate negative
            pub const fn is_negative(self) -> bool {
                matches!(self, $falsy)
            }
        }

        impl From<bool> for $name {
            fn from(is_positive: bool) -> Self {
                if is_positive {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}

/// Strip the given character from the end
pub(crate) trait StripChar {
    /// Strip all the trailing occurrences of the character
    fn trim_end_char(self, ch: char) -> String;
    /// Strip all the leading occurrences of the character
    /// keeping the last one when nothing else remains
    fn trim_start_char_keep_one(self, ch: char) -> String;
}

impl StripChar for &str {
    fn trim_end_char(self, ch: char) -> String {
        self.trim_end_matches(ch).to_string()
    }

    fn trim_start_char_keep_one(self, ch: char) -> String {
        let trimmed = self.trim_start_matches(ch);
        if trimmed.is_empty() && !self.is_empty() {
            ch.to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_trailing_zeros() {
        assert_eq!("540".trim_end_char('0'), "54");
        assert_eq!("000".trim_end_char('0'), "");
        assert_eq!("95".trim_end_char('0'), "95");
    }

    #[test]
    fn trim_leading_zeros() {
        assert_eq!("03".trim_start_char_keep_one('0'), "3");
        assert_eq!("0".trim_start_char_keep_one('0'), "0");
        assert_eq!("000".trim_start_char_keep_one('0'), "0");
        assert_eq!("10".trim_start_char_keep_one('0'), "10");
    }

    #[test]
    fn trim_empty() {
        assert_eq!("".trim_start_char_keep_one('0'), "");
        assert_eq!("".trim_end_char('0'), "");
    }
}
