use data_units::ByteUnits;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeLayout {
    pub width: ByteUnits,
    pub alignment: ByteUnits,
}

impl TypeLayout {
    /// A self-aligned type, whose alignment equals its width.
    pub const fn basic(size: u64) -> Self {
        Self::new(size, size)
    }

    pub const fn new(width: u64, alignment: u64) -> Self {
        Self {
            width: ByteUnits::of(width),
            alignment: ByteUnits::of(alignment),
        }
    }

    pub fn is_self_aligned(&self) -> bool {
        self.width == self.alignment
    }
}
