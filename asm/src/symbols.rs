use arch::symbol::{PREDEFINED, VAR_BASE};
use indexmap::IndexMap;

use crate::error::{Diag, Error};
use crate::normalize::Line;
use crate::stmt::{Imm, Stmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Predefined,
    Label,
    Variable,
}

/// Symbol name to address, kept in definition order.
#[derive(Debug, Clone)]
pub struct Symbols(IndexMap<String, (Kind, u16)>);

impl Symbols {
    pub fn new() -> Self {
        Symbols(
            PREDEFINED
                .iter()
                .map(|&(name, addr)| (name.to_string(), (Kind::Predefined, addr)))
                .collect(),
        )
    }

    pub fn insert(&mut self, name: &str, kind: Kind, value: u16) -> Result<(), Error> {
        if self.0.contains_key(name) {
            return Err(Error::RedefinedLabel(name.to_string()));
        }
        self.0.insert(name.to_string(), (kind, value));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<(Kind, u16)> {
        self.0.get(name).copied()
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|&(_, val)| val)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Kind, u16)> {
        self.0.iter().map(|(name, &(kind, val))| (name.as_str(), kind, val))
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}

/// Bind every label to the address of the instruction that follows it.
pub fn collect_labels(lines: &[Line], mut symbols: Symbols) -> Result<Symbols, Diag> {
    let mut pc: usize = 0;
    for line in lines {
        match Stmt::parse(&line.text).map_err(|e| e.at(line))? {
            Stmt::Label(label) => {
                let addr = u16::try_from(pc)
                    .map_err(|_| Error::AddressOverflow(label.clone()).at(line))?;
                symbols
                    .insert(&label, Kind::Label, addr)
                    .map_err(|e| e.at(line))?;
            }
            _ => pc += 1,
        }
    }
    Ok(symbols)
}

/// Give each symbol that is still unknown the next free RAM address, in order of first use.
pub fn allocate_variables(lines: &[Line], mut symbols: Symbols) -> Result<Symbols, Diag> {
    let mut next = VAR_BASE as usize;
    for line in lines {
        if let Stmt::Addr(Imm::Ident(name)) = Stmt::parse(&line.text).map_err(|e| e.at(line))? {
            if symbols.contains(&name) {
                continue;
            }
            let addr = u16::try_from(next)
                .map_err(|_| Error::AddressOverflow(name.clone()).at(line))?;
            symbols
                .insert(&name, Kind::Variable, addr)
                .map_err(|e| e.at(line))?;
            next += 1;
        }
    }
    Ok(symbols)
}

/// Fresh table with both passes applied.
pub fn build(lines: &[Line]) -> Result<Symbols, Diag> {
    let symbols = collect_labels(lines, Symbols::new())?;
    allocate_variables(lines, symbols)
}

#[cfg(test)]
pub(crate) fn lines(texts: &[&str]) -> Vec<Line> {
    texts
        .iter()
        .enumerate()
        .map(|(idx, text)| Line::new(idx, *text))
        .collect()
}
