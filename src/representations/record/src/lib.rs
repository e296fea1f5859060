mod field;

pub use field::FieldDescriptor;
use data_model::DataModel;
use primitives::{CPrimitive, UnsupportedFieldType};

/// The fields of a record in declaration order, independent of any data model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RecordInfo {
    pub name: Option<String>,
    pub fields: Vec<CPrimitive>,
}

impl RecordInfo {
    pub fn new(fields: impl IntoIterator<Item = CPrimitive>) -> Self {
        Self {
            name: None,
            fields: fields.into_iter().collect(),
        }
    }

    pub fn named(name: impl Into<String>, fields: impl IntoIterator<Item = CPrimitive>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(fields)
        }
    }

    /// Builds a record from C type spellings, rejecting the first one that is
    /// not a supported primitive.
    pub fn parse<S: AsRef<str>>(
        field_types: impl IntoIterator<Item = S>,
    ) -> Result<Self, UnsupportedFieldType> {
        let fields = field_types
            .into_iter()
            .map(|field_type| field_type.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(fields))
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    pub fn friendly_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed record>")
    }

    pub fn iter(&self) -> impl Iterator<Item = CPrimitive> + '_ {
        self.fields.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn resolve(&self, data_model: &DataModel) -> Vec<FieldDescriptor> {
        self.iter()
            .map(|primitive| FieldDescriptor::resolve(primitive, data_model))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_units::ByteUnits;

    #[test]
    fn parse_keeps_declaration_order() {
        let record = RecordInfo::parse(["unsigned short", "char", "int"]).unwrap();

        assert_eq!(
            record.fields,
            [CPrimitive::UnsignedShort, CPrimitive::Char, CPrimitive::Int]
        );
        assert_eq!(record.friendly_name(), "<unnamed record>");
    }

    #[test]
    fn parse_fails_fast_on_unsupported_type() {
        assert_eq!(
            RecordInfo::parse(["char", "struct inner", "void *"]),
            Err(UnsupportedFieldType("struct inner".into()))
        );
    }

    #[test]
    fn empty_record_is_valid() {
        let record = RecordInfo::parse(Vec::<String>::new()).unwrap();

        assert!(record.is_empty());
        assert!(record.resolve(&DataModel::simple_32bit()).is_empty());
    }

    #[test]
    fn resolve_depends_on_data_model() {
        let record = RecordInfo::named("Mixed", [CPrimitive::Char, CPrimitive::Long]);

        let ilp32 = record.resolve(&DataModel::simple_32bit());
        let packed = record.resolve(&DataModel::packed());

        assert_eq!(record.friendly_name(), "Mixed");
        assert_eq!(ilp32[1].alignment, ByteUnits::of(4));
        assert_eq!(packed[1].alignment, ByteUnits::of(1));
        assert_eq!(ilp32[1].width, packed[1].width);
        assert_eq!(ilp32.len(), record.len());
    }
}
