mod arch;
mod os;

use crate::TypeLayout;
pub use arch::TargetArch;
pub use os::TargetOs;
use primitives::CPrimitive;
use std::fmt::Display;

/// An operating system and architecture pair whose C compilers agree on a
/// single data model.
///
/// A missing architecture is treated as x86_64, and a missing operating
/// system as a generic System V platform.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Target {
    arch: Option<TargetArch>,
    os: Option<TargetOs>,
}

impl Target {
    pub const HOST: Self = Self::new(TargetOs::HOST, TargetArch::HOST);

    pub const fn new(os: Option<TargetOs>, arch: Option<TargetArch>) -> Self {
        Self { arch, os }
    }

    pub const fn generic_os(os: TargetOs) -> Self {
        let arch = match os {
            TargetOs::Windows | TargetOs::Linux | TargetOs::FreeBsd => TargetArch::X86_64,
            TargetOs::Mac => TargetArch::Aarch64,
        };

        Self::new(Some(os), Some(arch))
    }

    pub fn os(&self) -> Option<TargetOs> {
        self.os
    }

    pub fn arch(&self) -> Option<TargetArch> {
        self.arch
    }

    pub fn is_host(&self) -> bool {
        self.arch == TargetArch::HOST && self.os == TargetOs::HOST
    }

    fn is_32_bit(&self) -> bool {
        matches!(self.arch, Some(TargetArch::X86))
    }

    fn is_windows(&self) -> bool {
        matches!(self.os, Some(TargetOs::Windows))
    }

    fn is_mac(&self) -> bool {
        matches!(self.os, Some(TargetOs::Mac))
    }

    pub fn layout_of(&self, primitive: CPrimitive) -> TypeLayout {
        match primitive {
            CPrimitive::Char | CPrimitive::SignedChar | CPrimitive::UnsignedChar => {
                self.char_layout()
            }
            CPrimitive::WChar => self.wchar_layout(),
            CPrimitive::Short | CPrimitive::UnsignedShort => self.short_layout(),
            CPrimitive::Int | CPrimitive::UnsignedInt => self.int_layout(),
            CPrimitive::Long | CPrimitive::UnsignedLong => self.long_layout(),
            CPrimitive::LongLong | CPrimitive::UnsignedLongLong => self.longlong_layout(),
            CPrimitive::Float => self.float_layout(),
            CPrimitive::Double => self.double_layout(),
            CPrimitive::LongDouble => self.long_double_layout(),
            CPrimitive::Bool => self.bool_layout(),
        }
    }

    pub fn bool_layout(&self) -> TypeLayout {
        TypeLayout::basic(1)
    }

    pub fn char_layout(&self) -> TypeLayout {
        TypeLayout::basic(1)
    }

    pub fn wchar_layout(&self) -> TypeLayout {
        if self.is_windows() {
            TypeLayout::basic(2)
        } else {
            TypeLayout::basic(4)
        }
    }

    pub fn short_layout(&self) -> TypeLayout {
        TypeLayout::basic(2)
    }

    pub fn int_layout(&self) -> TypeLayout {
        TypeLayout::basic(4)
    }

    pub fn long_layout(&self) -> TypeLayout {
        if self.is_windows() || self.is_32_bit() {
            TypeLayout::basic(4)
        } else {
            TypeLayout::basic(8)
        }
    }

    pub fn longlong_layout(&self) -> TypeLayout {
        self.eight_byte_scalar_layout()
    }

    pub fn float_layout(&self) -> TypeLayout {
        TypeLayout::basic(4)
    }

    pub fn double_layout(&self) -> TypeLayout {
        self.eight_byte_scalar_layout()
    }

    pub fn long_double_layout(&self) -> TypeLayout {
        if self.is_windows() {
            return TypeLayout::basic(8);
        }

        match self.arch {
            // 80-bit x87 extended precision, stored in 12 bytes on i386 System V
            Some(TargetArch::X86) => TypeLayout::new(12, 4),
            Some(TargetArch::Aarch64) if self.is_mac() => TypeLayout::basic(8),
            Some(TargetArch::X86_64 | TargetArch::Aarch64) | None => TypeLayout::basic(16),
        }
    }

    fn eight_byte_scalar_layout(&self) -> TypeLayout {
        // The i386 System V ABI only aligns 8-byte scalars to 4 bytes inside records
        if self.is_32_bit() && !self.is_windows() {
            TypeLayout::new(8, 4)
        } else {
            TypeLayout::basic(8)
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.arch {
            Some(arch) => write!(f, "{} ", arch)?,
            None => write!(f, "unknown ")?,
        }

        match self.os {
            Some(os) => write!(f, "{}", os),
            None => write!(f, "unknown"),
        }
    }
}
