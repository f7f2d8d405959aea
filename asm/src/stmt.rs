use arch::code::{lookup, Table};
use arch::inst::Inst;
use arch::symbol::ADDR_LIMIT;

use crate::error::Error;

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Label(String),
    Addr(Imm),
    Code(Command),
}

impl Stmt {
    /// Classify a normalized line.
    pub fn parse(text: &str) -> Result<Stmt, Error> {
        let syntax = || Error::SyntaxError(text.to_string());

        // (LOOP)
        if let Some(rest) = text.strip_prefix('(') {
            let label = rest.strip_suffix(')').ok_or_else(syntax)?;
            if label.is_empty() {
                return Err(syntax());
            }
            return Ok(Stmt::Label(label.to_string()));
        }

        // @value
        if let Some(token) = text.strip_prefix('@') {
            if token.is_empty() {
                return Err(syntax());
            }
            return Ok(Stmt::Addr(Imm::parse(token)?));
        }

        if text.is_empty() {
            return Err(syntax());
        }
        Ok(Stmt::Code(Command::parse(text)))
    }
}

// ----------------------------------------------------------------------------
// Immediate

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm {
    Literal(u16),
    Ident(String),
}

impl Imm {
    fn parse(token: &str) -> Result<Imm, Error> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Ok(Imm::Ident(token.to_string()));
        }
        match token.parse::<u16>() {
            Ok(v) if (v as u32) < ADDR_LIMIT => Ok(Imm::Literal(v)),
            _ => Err(Error::AddressOverflow(token.to_string())),
        }
    }
}

// ----------------------------------------------------------------------------
// Command

/// `dest=comp;jump` split into its mnemonics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub dest: Option<String>,
    pub comp: String,
    pub jump: Option<String>,
}

impl Command {
    pub fn parse(text: &str) -> Command {
        let (dest, rest) = match text.split_once('=') {
            Some((dest, rest)) => (Some(dest.to_string()), rest),
            None => (None, text),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp, Some(jump.to_string())),
            None => (rest, None),
        };
        Command {
            dest,
            comp: comp.to_string(),
            jump,
        }
    }

    pub fn to_inst(&self) -> Result<Inst, Error> {
        let code = |table: Table, mnemonic: &str| {
            lookup(table, mnemonic).ok_or_else(|| Error::UnknownMnemonic(table, mnemonic.to_string()))
        };
        Ok(Inst::C {
            comp: code(Table::Comp, &self.comp)?,
            dest: match &self.dest {
                Some(dest) => code(Table::Dest, dest)?,
                None => 0,
            },
            jump: match &self.jump {
                Some(jump) => code(Table::Jump, jump)?,
                None => 0,
            },
        })
    }
}
