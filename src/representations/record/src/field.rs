use data_model::{DataModel, TypeLayout};
use data_units::ByteUnits;
use primitives::CPrimitive;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub primitive: CPrimitive,
    pub width: ByteUnits,
    pub alignment: ByteUnits,
}

impl FieldDescriptor {
    pub fn resolve(primitive: CPrimitive, data_model: &DataModel) -> Self {
        let TypeLayout { width, alignment } = data_model.layout_of(primitive);

        Self {
            primitive,
            width,
            alignment,
        }
    }
}
