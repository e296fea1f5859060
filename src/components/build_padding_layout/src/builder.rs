use crate::{PaddingKind, PaddingLayout, PaddingLocation};
use data_model::DataModel;
use data_units::ByteUnits;
use record::{FieldDescriptor, RecordInfo};

/// Simulates natural sequential placement of fields, recording every run of
/// padding that the placement requires.
///
/// There are no packing directives: each field is placed at the next offset
/// that is a multiple of its alignment, and the record is rounded up to the
/// largest field alignment.
#[derive(Debug, Default)]
pub struct PaddingLayoutBuilder {
    /// Bytes consumed so far, padding included
    pub size: ByteUnits,
    pub alignment: ByteUnits,
    pub field_offsets: Vec<ByteUnits>,
    pub padding_locations: Vec<PaddingLocation>,
}

impl PaddingLayoutBuilder {
    pub fn generate(info: &RecordInfo, data_model: &DataModel) -> PaddingLayout {
        let layout = Self::generate_fields(&info.resolve(data_model));

        log::debug!(
            "Laid out '{}' with size {} and alignment {}, {} padding location(s)",
            info.friendly_name(),
            layout.size().bytes(),
            layout.alignment().bytes(),
            layout.padding_location_count(),
        );

        layout
    }

    pub fn generate_fields(fields: &[FieldDescriptor]) -> PaddingLayout {
        let mut builder = Self::new();
        builder.layout_fields(fields);
        builder.finish_layout();
        builder.build()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout_fields(&mut self, fields: &[FieldDescriptor]) {
        for (field_i, field) in fields.iter().enumerate() {
            self.layout_field(field, field_i);
        }
    }

    pub fn layout_field(&mut self, field: &FieldDescriptor, field_i: usize) {
        let padding = self.size.padding_to(field.alignment);

        if !padding.is_zero() {
            self.insert_padding(padding, PaddingKind::BeforeField(field_i));
        }

        assert!(self.size.is_aligned_to(field.alignment));

        // Place field at current location
        self.field_offsets.push(self.size);
        self.size += field.width;
        self.alignment = self.alignment.max(field.alignment);
    }

    pub fn finish_layout(&mut self) {
        // A record without fields has no alignment to round up to
        if self.alignment.is_zero() {
            return;
        }

        let padding = self.size.padding_to(self.alignment);

        if !padding.is_zero() {
            self.insert_padding(padding, PaddingKind::Trailing);
        }
    }

    fn insert_padding(&mut self, length: ByteUnits, kind: PaddingKind) {
        log::trace!(
            "Inserting {} padding byte(s) at offset {} ({:?})",
            length.bytes(),
            self.size.bytes(),
            kind
        );

        self.padding_locations.push(PaddingLocation {
            offset: self.size,
            length,
            kind,
        });

        self.size += length;
    }

    pub fn build(self) -> PaddingLayout {
        PaddingLayout {
            size: self.size,
            alignment: self.alignment,
            field_offsets: self.field_offsets,
            padding_locations: self.padding_locations,
        }
    }
}
