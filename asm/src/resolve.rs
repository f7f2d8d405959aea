use crate::error::{Diag, Error};
use crate::normalize::Line;
use crate::stmt::{Imm, Stmt};
use crate::symbols::Symbols;

/// Replace symbolic addresses with numbers and drop label declarations.
pub fn resolve(lines: &[Line], symbols: &Symbols) -> Result<Vec<Line>, Diag> {
    let mut resolved = Vec::with_capacity(lines.len());
    for line in lines {
        match Stmt::parse(&line.text).map_err(|e| e.at(line))? {
            Stmt::Label(_) => {}
            Stmt::Addr(Imm::Ident(name)) => {
                let addr = symbols
                    .get_val(&name)
                    .ok_or_else(|| Error::UndefinedSymbol(name.clone()).at(line))?;
                resolved.push(Line::new(line.idx, format!("@{}", addr)));
            }
            Stmt::Addr(Imm::Literal(_)) | Stmt::Code(_) => resolved.push(line.clone()),
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{build, lines, Kind};

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn replaces_symbols_and_drops_labels() {
        let src = lines(&["@baz", "M=1", "(foo)", "@bar", "D=M", "(bar)", "@bah", "M=0"]);
        let mut symbols = Symbols::new();
        symbols.insert("foo", Kind::Label, 3).unwrap();
        symbols.insert("bar", Kind::Label, 5).unwrap();
        symbols.insert("baz", Kind::Variable, 16).unwrap();
        symbols.insert("bah", Kind::Variable, 17).unwrap();

        let resolved = resolve(&src, &symbols).unwrap();
        assert_eq!(texts(&resolved), ["@16", "M=1", "@5", "D=M", "@17", "M=0"]);
    }

    #[test]
    fn keeps_source_positions() {
        let src = lines(&["(START)", "@START", "0;JMP"]);
        let resolved = resolve(&src, &build(&src).unwrap()).unwrap();
        assert_eq!(resolved, [Line::new(1, "@0"), Line::new(2, "0;JMP")]);
    }

    #[test]
    fn literals_and_registers() {
        let src = lines(&["@7", "@R7", "@SCREEN", "@KBD"]);
        let resolved = resolve(&src, &Symbols::new()).unwrap();
        assert_eq!(texts(&resolved), ["@7", "@7", "@16384", "@24576"]);
    }

    #[test]
    fn length_matches_instruction_count() {
        let src = lines(&["(A)", "@A", "(B)", "(C)", "D=A", "@x", "(D)"]);
        let resolved = resolve(&src, &build(&src).unwrap()).unwrap();
        assert_eq!(resolved.len(), 3);
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let src = lines(&["@1", "@nowhere"]);
        let diag = resolve(&src, &Symbols::new()).unwrap_err();
        assert_eq!(diag.line, 1);
        assert!(matches!(diag.error, Error::UndefinedSymbol(ref s) if s == "nowhere"));
    }
}
