use bimap::BiMap;
use once_cell::sync::Lazy;
use strum::{Display, EnumString};

// ----------------------------------------------------------------------------
// Tables

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Table {
    Dest,
    Jump,
    Comp,
}

pub static DEST: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    BiMap::from_iter([
        ("M", 0b001),
        ("D", 0b010),
        ("MD", 0b011),
        ("A", 0b100),
        ("AM", 0b101),
        ("AD", 0b110),
        ("AMD", 0b111),
    ])
});

pub static JUMP: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    BiMap::from_iter([
        ("JGT", 0b001),
        ("JEQ", 0b010),
        ("JGE", 0b011),
        ("JLT", 0b100),
        ("JNE", 0b101),
        ("JLE", 0b110),
        ("JMP", 0b111),
    ])
});

/// ALU operations. The top bit is the `a` bit selecting `M` over `A`.
pub static COMP: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    BiMap::from_iter([
        ("0", 0b0101010),
        ("1", 0b0111111),
        ("-1", 0b0111010),
        ("D", 0b0001100),
        ("A", 0b0110000),
        ("!D", 0b0001101),
        ("!A", 0b0110001),
        ("-D", 0b0001111),
        ("-A", 0b0110011),
        ("D+1", 0b0011111),
        ("A+1", 0b0110111),
        ("D-1", 0b0001110),
        ("A-1", 0b0110010),
        ("D+A", 0b0000010),
        ("D-A", 0b0010011),
        ("A-D", 0b0000111),
        ("D&A", 0b0000000),
        ("D|A", 0b0010101),
        ("M", 0b1110000),
        ("!M", 0b1110001),
        ("-M", 0b1110011),
        ("M+1", 0b1110111),
        ("M-1", 0b1110010),
        ("D+M", 0b1000010),
        ("D-M", 0b1010011),
        ("M-D", 0b1000111),
        ("D&M", 0b1000000),
        ("D|M", 0b1010101),
    ])
});

impl Table {
    fn map(&self) -> &'static BiMap<&'static str, u8> {
        match self {
            Table::Dest => &DEST,
            Table::Jump => &JUMP,
            Table::Comp => &COMP,
        }
    }

    /// Width of the field in the encoded word.
    pub fn width(&self) -> usize {
        match self {
            Table::Dest | Table::Jump => 3,
            Table::Comp => 7,
        }
    }
}

pub fn lookup(table: Table, mnemonic: &str) -> Option<u8> {
    table.map().get_by_left(mnemonic).copied()
}

pub fn mnemonic(table: Table, code: u8) -> Option<&'static str> {
    table.map().get_by_right(&code).copied()
}
