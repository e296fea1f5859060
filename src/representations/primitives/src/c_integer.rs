use super::IntegerSign;
use derive_more::IsVariant;

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, IsVariant, PartialOrd, Ord)]
pub enum CInteger {
    Char,
    Short,
    Int,
    Long,
    LongLong,
}

impl CInteger {
    pub const ALL: [Self; 5] = [
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::LongLong,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::LongLong => "long long",
        }
    }
}

pub fn fmt_c_integer(
    f: &mut std::fmt::Formatter<'_>,
    integer: CInteger,
    sign: Option<IntegerSign>,
) -> std::fmt::Result {
    match sign {
        // Only `char` has a distinct explicitly-signed spelling
        Some(IntegerSign::Signed) if !integer.is_char() => (),
        Some(sign) => write!(f, "{} ", sign.keyword())?,
        None => (),
    }

    f.write_str(integer.keyword())
}
