pub mod dump;
pub mod encode;
pub mod error;
pub mod normalize;
pub mod resolve;
pub mod stmt;
pub mod symbols;

use error::Diag;
use normalize::Line;
use symbols::Symbols;

/// Result of assembling one source file.
#[derive(Debug)]
pub struct Assembled {
    pub symbols: Symbols,
    /// Symbol-free instructions, one per word
    pub lines: Vec<Line>,
    pub words: Vec<String>,
}

impl Assembled {
    pub fn to_hack(&self) -> String {
        self.words.iter().map(|w| format!("{}\n", w)).collect()
    }
}

/// Run the whole pipeline over the raw lines of one file.
pub fn assemble<S: AsRef<str>>(raw: &[S]) -> Result<Assembled, Diag> {
    let lines = normalize::normalize(raw);
    let symbols = symbols::build(&lines)?;
    let lines = resolve::resolve(&lines, &symbols)?;
    let words = encode::encode(&lines)?;
    Ok(Assembled {
        symbols,
        lines,
        words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn golden(src: &str, expected: &str) {
        let raw: Vec<&str> = src.split('\n').collect();
        let assembled = assemble(&raw).unwrap();
        assert_eq!(assembled.to_hack(), expected);
    }

    #[test]
    fn test_add() {
        golden(
            include_str!("../testdata/Add.asm"),
            include_str!("../testdata/Add.hack"),
        );
    }

    #[test]
    fn test_max() {
        golden(
            include_str!("../testdata/Max.asm"),
            include_str!("../testdata/Max.hack"),
        );
    }

    #[test]
    fn test_countdown_crlf() {
        golden(
            include_str!("../testdata/Countdown.asm"),
            include_str!("../testdata/Countdown.hack"),
        );
    }

    #[test]
    fn test_lines_track_words() {
        let raw = ["(L)", "@1", "0;JMP"];
        let assembled = assemble(&raw).unwrap();
        assert_eq!(assembled.symbols.get_val("L"), Some(0));
        assert_eq!(assembled.lines.len(), assembled.words.len());
        assert_eq!(assembled.words, ["0000000000000001", "1110101010000111"]);
    }

    #[test]
    fn test_empty_source() {
        let raw: [&str; 2] = ["// nothing here", ""];
        let assembled = assemble(&raw).unwrap();
        assert!(assembled.words.is_empty());
        assert_eq!(assembled.to_hack(), "");
    }

    #[test]
    fn test_error_aborts_run() {
        let raw = ["@x", "(x)", "D=M", "(x)"];
        let diag = assemble(&raw).unwrap_err();
        assert_eq!(diag.line, 3);
        assert!(matches!(diag.error, Error::RedefinedLabel(_)));
    }

    #[test]
    fn test_label_past_rom_is_rejected() {
        let mut raw = vec!["D=A"; 32768];
        raw.push("(END)");
        raw.push("@END");
        raw.push("0;JMP");
        let diag = assemble(&raw).unwrap_err();
        assert!(matches!(diag.error, Error::AddressOverflow(ref v) if v == "32768"));
    }
}
