use data_units::ByteUnits;
use derive_more::IsVariant;

/// Which of the two compared layouts a padding byte is unique to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum PaddingOwner {
    First,
    Second,
}

impl PaddingOwner {
    pub fn flipped(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub fn belongs_to_first_model(self) -> bool {
        self.is_first()
    }
}

/// A run of padding bytes that only one of the two layouts has.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct UniquePaddingElement {
    pub first_index: ByteUnits,
    pub span_length: ByteUnits,
    pub owner: PaddingOwner,
}

impl UniquePaddingElement {
    pub fn new(first_index: ByteUnits, span_length: ByteUnits, owner: PaddingOwner) -> Self {
        Self {
            first_index,
            span_length,
            owner,
        }
    }

    pub fn belongs_to_first_model(&self) -> bool {
        self.owner.belongs_to_first_model()
    }

    /// One past the last byte of the run.
    pub fn end(&self) -> ByteUnits {
        self.first_index + self.span_length
    }

    pub fn byte_indexes(&self) -> impl Iterator<Item = ByteUnits> {
        self.first_index.span(self.span_length)
    }

    pub fn flipped(self) -> Self {
        Self {
            owner: self.owner.flipped(),
            ..self
        }
    }
}
