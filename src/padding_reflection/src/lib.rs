//! Reports where C compilers insert padding into records of primitive fields,
//! and which padding bytes differ between two data models.

pub use build_padding_layout::{
    PaddingKind, PaddingLayout, PaddingLayoutBuilder, PaddingLocation, check_padding,
};
pub use data_model::{
    DataModel, DataModelError, Endianness, Target, TargetArch, TargetOs, TypeLayout,
};
pub use data_units::ByteUnits;
pub use diagnostics::{DiagnosticFlags, Diagnostics, WarningDiagnostic};
pub use primitives::{CPrimitive, UnsupportedFieldType};
pub use record::{FieldDescriptor, RecordInfo};
use thiserror::Error;
pub use unique_padding::{
    PaddingOwner, UniquePaddingBuilder, UniquePaddingElement, covered_bytes, unique_padding,
};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    UnsupportedFieldType(#[from] UnsupportedFieldType),
    #[error(transparent)]
    DataModel(#[from] DataModelError),
}

/// Lays out a record given by the C spellings of its field types.
pub fn padding_layout_of<S: AsRef<str>>(
    field_types: impl IntoIterator<Item = S>,
    data_model: &DataModel,
) -> Result<PaddingLayout, Error> {
    let info = RecordInfo::parse(field_types)?;
    Ok(PaddingLayoutBuilder::generate(&info, data_model))
}

/// Lays out the same record under two data models and compares where their
/// padding falls.
pub fn unique_padding_of(
    info: &RecordInfo,
    first: &DataModel,
    second: &DataModel,
) -> Vec<UniquePaddingElement> {
    let first_layout = PaddingLayoutBuilder::generate(info, first);
    let second_layout = PaddingLayoutBuilder::generate(info, second);

    let elements = unique_padding(
        &first_layout.padding_byte_indexes(),
        &second_layout.padding_byte_indexes(),
    );

    log::debug!(
        "'{}' has {} unique padding run(s) between the two data models",
        info.friendly_name(),
        elements.len(),
    );

    elements
}
