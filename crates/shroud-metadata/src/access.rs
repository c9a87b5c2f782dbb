// src/access.rs
//
// Access levels of members and visibility of declared types, decoded from
// the 3-bit masks of the metadata attribute flags.

/// Member access level (`MemberAccessMask` of method and field flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Access {
    /// No accessible member; also the value of a member with no accessor.
    #[default]
    CompilerControlled,
    Private,
    FamAndAssem,
    Assembly,
    Family,
    FamOrAssem,
    Public,
}

impl Access {
    pub const MASK: u16 = 0x0007;

    pub fn from_flags(flags: u16) -> Self {
        match flags & Self::MASK {
            0 => Access::CompilerControlled,
            1 => Access::Private,
            2 => Access::FamAndAssem,
            3 => Access::Assembly,
            4 => Access::Family,
            5 => Access::FamOrAssem,
            _ => Access::Public,
        }
    }

    pub fn flags(self) -> u16 {
        match self {
            Access::CompilerControlled => 0,
            Access::Private => 1,
            Access::FamAndAssem => 2,
            Access::Assembly => 3,
            Access::Family => 4,
            Access::FamOrAssem => 5,
            Access::Public => 6,
        }
    }

    /// Reachable from a subclass in another unit.
    pub fn is_family_visible(self) -> bool {
        matches!(self, Access::Public | Access::Family | Access::FamOrAssem)
    }
}

/// Declared type visibility (`VisibilityMask` of type flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeVisibility {
    #[default]
    NotPublic,
    Public,
    NestedPublic,
    NestedPrivate,
    NestedFamily,
    NestedAssembly,
    NestedFamAndAssem,
    NestedFamOrAssem,
}

impl TypeVisibility {
    pub const MASK: u32 = 0x0000_0007;

    pub fn from_flags(flags: u32) -> Self {
        match flags & Self::MASK {
            0 => TypeVisibility::NotPublic,
            1 => TypeVisibility::Public,
            2 => TypeVisibility::NestedPublic,
            3 => TypeVisibility::NestedPrivate,
            4 => TypeVisibility::NestedFamily,
            5 => TypeVisibility::NestedAssembly,
            6 => TypeVisibility::NestedFamAndAssem,
            _ => TypeVisibility::NestedFamOrAssem,
        }
    }

    pub fn is_nested(self) -> bool {
        !matches!(self, TypeVisibility::NotPublic | TypeVisibility::Public)
    }

    /// Visible outside the defining unit, assuming the declaring chain is.
    pub fn is_externally_visible(self) -> bool {
        matches!(
            self,
            TypeVisibility::Public
                | TypeVisibility::NestedPublic
                | TypeVisibility::NestedFamily
                | TypeVisibility::NestedFamOrAssem
        )
    }
}
