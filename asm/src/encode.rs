use arch::inst::Inst;

use crate::error::{Diag, Error};
use crate::normalize::Line;
use crate::stmt::{Imm, Stmt};

pub fn to_inst(text: &str) -> Result<Inst, Error> {
    match Stmt::parse(text)? {
        Stmt::Addr(Imm::Literal(value)) => Ok(Inst::A(value)),
        Stmt::Addr(Imm::Ident(name)) => Err(Error::UndefinedSymbol(name)),
        Stmt::Label(label) => Err(Error::UnexpectedLabel(label)),
        Stmt::Code(command) => command.to_inst(),
    }
}

pub fn encode_line(text: &str) -> Result<String, Error> {
    Ok(format!("{:016b}", to_inst(text)?.to_bin()))
}

pub fn encode(lines: &[Line]) -> Result<Vec<String>, Diag> {
    lines
        .iter()
        .map(|line| encode_line(&line.text).map_err(|e| e.at(line)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::lines;
    use arch::code::Table;

    macro_rules! test_encode {
        ($($name:ident: $src:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(encode_line($src).unwrap(), $bin, "src: {}", $src);
                }
            )*
        }
    }

    test_encode! {
        test_addr_zero: "@0" => "0000000000000000",
        test_addr: "@21" => "0000000000010101",
        test_addr_max: "@32767" => "0111111111111111",
        test_d_eq_m: "D=M" => "1111110000010000",
        test_jmp: "0;JMP" => "1110101010000111",
        test_d_jgt: "D;JGT" => "1110001100000001",
        test_md_dec: "MD=M-1" => "1111110010011000",
        test_am_not: "AM=!M" => "1111110001101000",
        test_all_fields: "AMD=D|A;JLE" => "1110010101111110",
        test_comp_only: "D+1" => "1110011111000000",
        test_neg_one: "A=-1" => "1110111010100000",
    }

    #[test]
    fn every_word_is_16_bits() {
        let src = lines(&["@5", "D=A", "@100", "M=D", "0;JMP"]);
        let words = encode(&src).unwrap();
        assert_eq!(words.len(), 5);
        assert!(words
            .iter()
            .all(|w| w.len() == 16 && w.chars().all(|c| c == '0' || c == '1')));
    }

    #[test]
    fn unknown_comp_names_line() {
        let src = lines(&["@1", "D=M", "D=Q+1"]);
        let diag = encode(&src).unwrap_err();
        assert_eq!(diag.line, 2);
        assert!(matches!(diag.error, Error::UnknownMnemonic(Table::Comp, ref m) if m == "Q+1"));
    }

    #[test]
    fn rejects_unresolved_input() {
        assert!(matches!(encode_line("@foo"), Err(Error::UndefinedSymbol(_))));
        assert!(matches!(encode_line("(foo)"), Err(Error::UnexpectedLabel(_))));
        assert!(matches!(encode_line("@40000"), Err(Error::AddressOverflow(_))));
        assert!(matches!(encode_line(""), Err(Error::SyntaxError(_))));
    }
}
