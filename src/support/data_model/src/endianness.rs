use derive_more::IsVariant;
use std::fmt::Display;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    pub const HOST: Self = if cfg!(target_endian = "big") {
        Self::Big
    } else {
        Self::Little
    };
}

impl Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Big => write!(f, "big-endian"),
            Self::Little => write!(f, "little-endian"),
        }
    }
}
