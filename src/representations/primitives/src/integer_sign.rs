use derive_more::IsVariant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum IntegerSign {
    Signed,
    Unsigned,
}

impl IntegerSign {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
        }
    }
}
