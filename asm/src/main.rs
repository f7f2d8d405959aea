use std::io::{BufRead, Write};
use std::path::Path;

use hackasm::dump::print_dump;
use hackasm::error::Error;
use indexmap::IndexMap;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files, each assembled on its own
    #[clap(default_value = "main.asm")]
    input: Vec<String>,

    /// Output file (single input only; defaults to the input with a `.hack` extension)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump symbols and binary listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    if !run(&args) {
        std::process::exit(1);
    }
}

fn run(args: &Args) -> bool {
    if args.output.is_some() && args.input.len() != 1 {
        Error::OutputConflict.print();
        return false;
    }

    println!("1. Read Files");
    let mut files: IndexMap<String, Vec<String>> = IndexMap::new();
    for path in &args.input {
        println!("  < {}", path);
        match read_lines(path) {
            Ok(lines) => {
                files.insert(path.clone(), lines);
            }
            Err(err) => {
                err.print();
                return false;
            }
        }
    }

    println!("2. Resolve Symbols & Generate Binary");
    for (path, raw) in &files {
        let assembled = match hackasm::assemble(raw) {
            Ok(assembled) => assembled,
            Err(diag) => {
                diag.print_diag(&files, path);
                return false;
            }
        };

        let output = match &args.output {
            Some(output) => output.clone(),
            None => Path::new(path)
                .with_extension("hack")
                .to_string_lossy()
                .into_owned(),
        };
        println!("  > {} ({} words)", output, assembled.words.len());
        if let Err(err) = write_hack(&output, &assembled.to_hack()) {
            err.print();
            return false;
        }

        if args.dump {
            print_dump(path, raw, &assembled);
        }
    }
    true
}

fn read_lines(path: &str) -> Result<Vec<String>, Error> {
    let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    std::io::BufReader::new(file)
        .lines()
        .collect::<Result<_, _>>()
        .map_err(Error::FileRead)
}

fn write_hack(path: &str, text: &str) -> Result<(), Error> {
    let mut file =
        std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}
