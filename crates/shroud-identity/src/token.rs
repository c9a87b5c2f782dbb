// src/token.rs
//
// Metadata tokens: a table tag in the high byte, a 1-based row id below it.

use std::fmt;

/// Metadata tables that own tokens handed out by the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenTable {
    TypeDef = 0x02,
    Field = 0x04,
    Method = 0x06,
    Event = 0x14,
    Property = 0x17,
}

impl TokenTable {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x02 => Some(Self::TypeDef),
            0x04 => Some(Self::Field),
            0x06 => Some(Self::Method),
            0x14 => Some(Self::Event),
            0x17 => Some(Self::Property),
            _ => None,
        }
    }
}

/// Stable in-unit identity of a metadata row.
///
/// Two tokens are only comparable when they come from the same unit; the
/// token alone does not identify a row across units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetadataToken(u32);

impl MetadataToken {
    const RID_MASK: u32 = 0x00ff_ffff;

    pub fn new(table: TokenTable, rid: u32) -> Self {
        Self(((table as u32) << 24) | (rid & Self::RID_MASK))
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn table(self) -> Option<TokenTable> {
        TokenTable::from_tag((self.0 >> 24) as u8)
    }

    pub fn rid(self) -> u32 {
        self.0 & Self::RID_MASK
    }
}

impl fmt::Display for MetadataToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_packs_table_and_rid() {
        let token = MetadataToken::new(TokenTable::TypeDef, 3);
        assert_eq!(token.raw(), 0x0200_0003);
        assert_eq!(token.table(), Some(TokenTable::TypeDef));
        assert_eq!(token.rid(), 3);
    }

    #[test]
    fn token_display_is_hex() {
        let token = MetadataToken::new(TokenTable::Event, 0x1f);
        assert_eq!(token.to_string(), "0x1400001f");
    }

    #[test]
    fn unknown_table_tag() {
        assert_eq!(MetadataToken::from_raw(0x7f00_0001).table(), None);
    }

    #[test]
    fn same_rid_different_table_differs() {
        assert_ne!(
            MetadataToken::new(TokenTable::TypeDef, 1),
            MetadataToken::new(TokenTable::Method, 1)
        );
    }
}
