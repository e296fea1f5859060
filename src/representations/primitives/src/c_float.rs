use derive_more::IsVariant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum CFloat {
    Float,
    Double,
    LongDouble,
}

impl CFloat {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::LongDouble => "long double",
        }
    }
}
