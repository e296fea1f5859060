use crate::{CFloat, CInteger, IntegerSign, UnsupportedFieldType, fmt_c_integer};
use derive_more::IsVariant;
use std::{fmt::Display, str::FromStr};

/// A primitive C type that may appear as a record field.
///
/// Plain `char` is distinct from `signed char` and `unsigned char`. For every
/// other integer, the plain spelling is the signed type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, IsVariant)]
pub enum CPrimitive {
    Char,
    SignedChar,
    UnsignedChar,
    WChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Float,
    Double,
    LongDouble,
    Bool,
}

impl CPrimitive {
    pub const COUNT: usize = 16;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Char,
        Self::SignedChar,
        Self::UnsignedChar,
        Self::WChar,
        Self::Short,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Long,
        Self::UnsignedLong,
        Self::LongLong,
        Self::UnsignedLongLong,
        Self::Float,
        Self::Double,
        Self::LongDouble,
        Self::Bool,
    ];

    /// Position of this primitive within [`CPrimitive::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn integer(integer: CInteger, sign: Option<IntegerSign>) -> Self {
        match (integer, sign) {
            (CInteger::Char, None) => Self::Char,
            (CInteger::Char, Some(IntegerSign::Signed)) => Self::SignedChar,
            (CInteger::Char, Some(IntegerSign::Unsigned)) => Self::UnsignedChar,
            (CInteger::Short, Some(IntegerSign::Unsigned)) => Self::UnsignedShort,
            (CInteger::Short, _) => Self::Short,
            (CInteger::Int, Some(IntegerSign::Unsigned)) => Self::UnsignedInt,
            (CInteger::Int, _) => Self::Int,
            (CInteger::Long, Some(IntegerSign::Unsigned)) => Self::UnsignedLong,
            (CInteger::Long, _) => Self::Long,
            (CInteger::LongLong, Some(IntegerSign::Unsigned)) => Self::UnsignedLongLong,
            (CInteger::LongLong, _) => Self::LongLong,
        }
    }

    pub fn float(float: CFloat) -> Self {
        match float {
            CFloat::Float => Self::Float,
            CFloat::Double => Self::Double,
            CFloat::LongDouble => Self::LongDouble,
        }
    }

    pub fn as_integer(&self) -> Option<(CInteger, Option<IntegerSign>)> {
        Some(match self {
            Self::Char => (CInteger::Char, None),
            Self::SignedChar => (CInteger::Char, Some(IntegerSign::Signed)),
            Self::UnsignedChar => (CInteger::Char, Some(IntegerSign::Unsigned)),
            Self::Short => (CInteger::Short, Some(IntegerSign::Signed)),
            Self::UnsignedShort => (CInteger::Short, Some(IntegerSign::Unsigned)),
            Self::Int => (CInteger::Int, Some(IntegerSign::Signed)),
            Self::UnsignedInt => (CInteger::Int, Some(IntegerSign::Unsigned)),
            Self::Long => (CInteger::Long, Some(IntegerSign::Signed)),
            Self::UnsignedLong => (CInteger::Long, Some(IntegerSign::Unsigned)),
            Self::LongLong => (CInteger::LongLong, Some(IntegerSign::Signed)),
            Self::UnsignedLongLong => (CInteger::LongLong, Some(IntegerSign::Unsigned)),
            Self::WChar | Self::Float | Self::Double | Self::LongDouble | Self::Bool => {
                return None;
            }
        })
    }

    pub fn as_float(&self) -> Option<CFloat> {
        match self {
            Self::Float => Some(CFloat::Float),
            Self::Double => Some(CFloat::Double),
            Self::LongDouble => Some(CFloat::LongDouble),
            _ => None,
        }
    }
}

impl Display for CPrimitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some((integer, sign)) = self.as_integer() {
            return fmt_c_integer(f, integer, sign);
        }

        if let Some(float) = self.as_float() {
            return f.write_str(float.keyword());
        }

        match self {
            Self::WChar => f.write_str("wchar_t"),
            Self::Bool => f.write_str("bool"),
            _ => unreachable!("integers and floats are handled above"),
        }
    }
}

impl FromStr for CPrimitive {
    type Err = UnsupportedFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = s.split_whitespace().collect::<Vec<_>>();

        let primitive = match words.as_slice() {
            ["bool" | "_Bool"] => Some(Self::Bool),
            ["wchar_t"] => Some(Self::WChar),
            ["float"] => Some(Self::Float),
            ["double"] => Some(Self::Double),
            ["long", "double"] => Some(Self::LongDouble),
            _ => parse_integer(&words),
        };

        primitive.ok_or_else(|| UnsupportedFieldType(s.trim().into()))
    }
}

fn parse_integer(words: &[&str]) -> Option<CPrimitive> {
    let mut sign = None;
    let mut is_char = false;
    let mut is_short = false;
    let mut has_int = false;
    let mut longs = 0;

    for word in words {
        match *word {
            "signed" if sign.is_none() => sign = Some(IntegerSign::Signed),
            "unsigned" if sign.is_none() => sign = Some(IntegerSign::Unsigned),
            "char" if !is_char => is_char = true,
            "short" if !is_short => is_short = true,
            "int" if !has_int => has_int = true,
            "long" if longs < 2 => longs += 1,
            _ => return None,
        }
    }

    let integer = match (is_char, is_short, longs) {
        (true, false, 0) if !has_int => CInteger::Char,
        (false, true, 0) => CInteger::Short,
        (false, false, 0) if has_int || sign.is_some() => CInteger::Int,
        (false, false, 1) => CInteger::Long,
        (false, false, 2) => CInteger::LongLong,
        _ => return None,
    };

    Some(CPrimitive::integer(integer, sign))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all() {
        for (i, primitive) in CPrimitive::ALL.iter().enumerate() {
            assert_eq!(primitive.index(), i);
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        for primitive in CPrimitive::ALL {
            assert_eq!(primitive.to_string().parse::<CPrimitive>(), Ok(primitive));
        }
    }

    #[test]
    fn parses_long_spellings() {
        assert_eq!("unsigned".parse(), Ok(CPrimitive::UnsignedInt));
        assert_eq!("signed".parse(), Ok(CPrimitive::Int));
        assert_eq!("short int".parse(), Ok(CPrimitive::Short));
        assert_eq!("long unsigned int".parse(), Ok(CPrimitive::UnsignedLong));
        assert_eq!("signed long long int".parse(), Ok(CPrimitive::LongLong));
        assert_eq!("  unsigned   char ".parse(), Ok(CPrimitive::UnsignedChar));
        assert_eq!("_Bool".parse(), Ok(CPrimitive::Bool));
    }

    #[test]
    fn plain_char_is_distinct() {
        assert_eq!("char".parse(), Ok(CPrimitive::Char));
        assert_eq!("signed char".parse(), Ok(CPrimitive::SignedChar));
        assert_ne!(CPrimitive::Char, CPrimitive::SignedChar);
        assert_eq!(
            CPrimitive::integer(CInteger::Short, None),
            CPrimitive::integer(CInteger::Short, Some(IntegerSign::Signed))
        );
    }

    #[test]
    fn integers_keep_their_sign() {
        for integer in CInteger::ALL {
            for sign in [IntegerSign::Signed, IntegerSign::Unsigned] {
                let primitive = CPrimitive::integer(integer, Some(sign));
                assert_eq!(primitive.as_integer(), Some((integer, Some(sign))));
            }
        }

        assert_eq!(CPrimitive::WChar.as_integer(), None);
        assert_eq!(CPrimitive::float(CFloat::LongDouble).as_float(), Some(CFloat::LongDouble));
    }

    #[test]
    fn rejects_unsupported() {
        for spelling in [
            "",
            "void",
            "char int",
            "short long",
            "long long long",
            "unsigned signed int",
            "unsigned float",
            "struct foo",
            "int[4]",
        ] {
            assert_eq!(
                spelling.parse::<CPrimitive>(),
                Err(UnsupportedFieldType(spelling.trim().into())),
                "{spelling:?} should be rejected"
            );
        }
    }
}
