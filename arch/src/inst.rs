use crate::code::{mnemonic, Table};

use color_print::cformat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    /// `@value`
    A(u16),
    /// `dest=comp;jump`, each field already looked up in the code table
    C { comp: u8, dest: u8, jump: u8 },
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::A(value) => value & 0x7FFF,
            Inst::C { comp, dest, jump } => {
                (0b111 << 13)
                    | ((comp as u16 & 0x7F) << 6)
                    | ((dest as u16 & 0x7) << 3)
                    | (jump as u16 & 0x7)
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match *self {
            Inst::A(value) => cformat!("<r>@</><y>{}</>", value),
            Inst::C { comp, dest, jump } => {
                let comp = mnemonic(Table::Comp, comp).unwrap_or("?");
                let dest = match dest {
                    0 => String::new(),
                    d => format!("{}=", mnemonic(Table::Dest, d).unwrap_or("?")),
                };
                let jump = match jump {
                    0 => String::new(),
                    j => format!(";{}", mnemonic(Table::Jump, j).unwrap_or("?")),
                };
                cformat!("<b>{}</><r>{}</><b>{}</>", dest, comp, jump)
            }
        }
    }
}
