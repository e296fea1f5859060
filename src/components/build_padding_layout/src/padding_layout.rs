use data_units::ByteUnits;
use derive_more::IsVariant;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum PaddingKind {
    /// Inserted to align the field at this index
    BeforeField(usize),
    /// Rounds the record size up to the record alignment
    Trailing,
}

/// A maximal run of consecutive padding bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PaddingLocation {
    pub offset: ByteUnits,
    pub length: ByteUnits,
    pub kind: PaddingKind,
}

impl PaddingLocation {
    pub fn end(&self) -> ByteUnits {
        self.offset + self.length
    }

    pub fn byte_indexes(&self) -> impl Iterator<Item = ByteUnits> {
        self.offset.span(self.length)
    }
}

/// Where padding falls inside a record laid out under one data model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PaddingLayout {
    pub(crate) size: ByteUnits,
    pub(crate) alignment: ByteUnits,
    pub(crate) field_offsets: Vec<ByteUnits>,
    pub(crate) padding_locations: Vec<PaddingLocation>,
}

impl PaddingLayout {
    /// Total size of the record, including trailing padding.
    pub fn size(&self) -> ByteUnits {
        self.size
    }

    /// Size of the record without trailing padding.
    pub fn data_size(&self) -> ByteUnits {
        self.size - self.trailing_padding().map_or(ByteUnits::ZERO, |trailing| trailing.length)
    }

    /// Largest alignment of any field, or zero for a record without fields.
    pub fn alignment(&self) -> ByteUnits {
        self.alignment
    }

    pub fn field_offsets(&self) -> &[ByteUnits] {
        &self.field_offsets
    }

    pub fn padding_locations(&self) -> &[PaddingLocation] {
        &self.padding_locations
    }

    pub fn padding_location_count(&self) -> usize {
        self.padding_locations.len()
    }

    pub fn padding_location_lengths(&self) -> Vec<ByteUnits> {
        self.padding_locations
            .iter()
            .map(|location| location.length)
            .collect()
    }

    pub fn padding_byte_count(&self) -> ByteUnits {
        self.padding_locations
            .iter()
            .map(|location| location.length)
            .sum()
    }

    /// Absolute offset of every padding byte, in increasing order.
    pub fn padding_byte_indexes(&self) -> Vec<ByteUnits> {
        self.padding_locations
            .iter()
            .flat_map(PaddingLocation::byte_indexes)
            .collect()
    }

    pub fn trailing_padding(&self) -> Option<&PaddingLocation> {
        self.padding_locations
            .last()
            .filter(|location| location.kind.is_trailing())
    }

    pub fn is_padding_free(&self) -> bool {
        self.padding_locations.is_empty()
    }
}
