use arch::code::Table;
use color_print::cprintln;
use indexmap::IndexMap;
use thiserror::Error;

use crate::normalize::Line;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Syntax Error: Cannot parse `{0}`")]
    SyntaxError(String),

    #[error("Unknown {0} mnemonic: `{1}`")]
    UnknownMnemonic(Table, String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Undefined symbol: `{0}`")]
    UndefinedSymbol(String),

    #[error("Label declaration left in resolved code: `{0}`")]
    UnexpectedLabel(String),

    #[error("Address out of range: `{0}` (must be below 32768)")]
    AddressOverflow(String),

    #[error("`--output` requires exactly one input file")]
    OutputConflict,

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    pub fn at(self, line: &Line) -> Diag {
        Diag {
            line: line.idx,
            error: self,
        }
    }

    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self);
    }
}

/// An error raised while assembling a particular source line.
#[derive(Debug)]
pub struct Diag {
    /// 0-based index into the raw source
    pub line: usize,
    pub error: Error,
}

impl Diag {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, files: &IndexMap<String, Vec<String>>, file: &str) {
        self.error.print();

        let line_num = self.line + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
        cprintln!("      <blue>|</>");

        let line_content = files
            .get(file)
            .and_then(|lines| lines.get(self.line))
            .map(|s| s.as_str())
            .unwrap_or("");

        cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
        cprintln!("      <blue>|</>");
    }
}
