mod endianness;
mod target;
mod type_layout;

use data_units::ByteUnits;
pub use endianness::Endianness;
use primitives::CPrimitive;
pub use target::{Target, TargetArch, TargetOs};
use thiserror::Error;
pub use type_layout::TypeLayout;

#[derive(Copy, Clone, Debug, Error, Hash, PartialEq, Eq)]
pub enum DataModelError {
    #[error("Alignment of `{primitive}` must be greater than zero")]
    ZeroAlignment { primitive: CPrimitive },
    #[error("Size of `{primitive}` must be greater than zero")]
    ZeroWidth { primitive: CPrimitive },
}

/// Sizes and alignments of every supported C primitive on some platform.
///
/// A data model is fully defined when constructed and never changes
/// afterwards. Width and alignment are independent: a type may be aligned
/// more or less strictly than its width.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataModel {
    endianness: Endianness,
    layouts: [TypeLayout; CPrimitive::COUNT],
}

impl DataModel {
    /// Creates a data model from one layout per primitive, in the order of
    /// [`CPrimitive::ALL`].
    pub fn try_new(
        endianness: Endianness,
        layouts: [TypeLayout; CPrimitive::COUNT],
    ) -> Result<Self, DataModelError> {
        for primitive in CPrimitive::ALL {
            validate(primitive, &layouts[primitive.index()])?;
        }

        Ok(Self {
            endianness,
            layouts,
        })
    }

    pub fn from_fn(
        endianness: Endianness,
        f: impl Fn(CPrimitive) -> TypeLayout,
    ) -> Result<Self, DataModelError> {
        Self::try_new(endianness, CPrimitive::ALL.map(f))
    }

    /// Derives a new data model that differs from this one in a single primitive.
    pub fn with_layout(
        &self,
        primitive: CPrimitive,
        layout: TypeLayout,
    ) -> Result<Self, DataModelError> {
        validate(primitive, &layout)?;

        let mut layouts = self.layouts;
        layouts[primitive.index()] = layout;

        Ok(Self {
            endianness: self.endianness,
            layouts,
        })
    }

    pub fn with_endianness(&self, endianness: Endianness) -> Self {
        Self {
            endianness,
            layouts: self.layouts,
        }
    }

    pub fn for_target(target: &Target) -> Self {
        // All supported targets are little-endian
        Self::from_layouts(
            Endianness::Little,
            CPrimitive::ALL.map(|primitive| target.layout_of(primitive)),
        )
    }

    pub fn host() -> Self {
        Self::for_target(&Target::HOST).with_endianness(Endianness::HOST)
    }

    /// Every type packed at its own width with no alignment requirement.
    pub fn packed() -> Self {
        Self::from_layouts(
            Endianness::Little,
            Self::simple_32bit().layouts.map(|layout| TypeLayout {
                width: layout.width,
                alignment: ByteUnits::ONE,
            }),
        )
    }

    /// A 32-bit model where nothing is aligned beyond 4 bytes.
    pub fn simple_32bit() -> Self {
        Self::from_layouts(
            Endianness::Little,
            [
                TypeLayout::basic(1),  // char
                TypeLayout::basic(1),  // signed char
                TypeLayout::basic(1),  // unsigned char
                TypeLayout::basic(2),  // wchar_t
                TypeLayout::basic(2),  // short
                TypeLayout::basic(2),  // unsigned short
                TypeLayout::basic(4),  // int
                TypeLayout::basic(4),  // unsigned int
                TypeLayout::new(8, 4), // long
                TypeLayout::new(8, 4), // unsigned long
                TypeLayout::new(8, 4), // long long
                TypeLayout::new(8, 4), // unsigned long long
                TypeLayout::basic(4),  // float
                TypeLayout::new(8, 4), // double
                TypeLayout::new(8, 4), // long double
                TypeLayout::basic(1),  // bool
            ],
        )
    }

    /// Same widths as [`DataModel::simple_32bit`], but aligned to 16-bit
    /// words at most, like the MSP430 family.
    pub fn simple_16bit() -> Self {
        Self::from_layouts(
            Endianness::Little,
            Self::simple_32bit().layouts.map(|layout| TypeLayout {
                width: layout.width,
                alignment: layout.alignment.min(ByteUnits::of(2)),
            }),
        )
    }

    // Only for tables whose widths and alignments are known to be non-zero
    fn from_layouts(endianness: Endianness, layouts: [TypeLayout; CPrimitive::COUNT]) -> Self {
        debug_assert!(
            layouts
                .iter()
                .all(|layout| !layout.alignment.is_zero() && !layout.width.is_zero())
        );

        Self {
            endianness,
            layouts,
        }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    pub fn layout_of(&self, primitive: CPrimitive) -> TypeLayout {
        self.layouts[primitive.index()]
    }

    pub fn size_of(&self, primitive: CPrimitive) -> ByteUnits {
        self.layout_of(primitive).width
    }

    pub fn alignment_of(&self, primitive: CPrimitive) -> ByteUnits {
        self.layout_of(primitive).alignment
    }

    pub fn iter(&self) -> impl Iterator<Item = (CPrimitive, TypeLayout)> + '_ {
        CPrimitive::ALL
            .into_iter()
            .map(|primitive| (primitive, self.layout_of(primitive)))
    }
}

fn validate(primitive: CPrimitive, layout: &TypeLayout) -> Result<(), DataModelError> {
    if layout.alignment.is_zero() {
        return Err(DataModelError::ZeroAlignment { primitive });
    }

    if layout.width.is_zero() {
        return Err(DataModelError::ZeroWidth { primitive });
    }

    Ok(())
}
