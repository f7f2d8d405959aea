use crate::encode::to_inst;
use crate::symbols::Kind;
use crate::Assembled;
use color_print::cformat;

pub fn print_dump(path: &str, raw: &[String], assembled: &Assembled) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(24),
        path,
        "-".repeat(40usize.saturating_sub(path.len()))
    );

    for (name, kind, val) in assembled.symbols.iter() {
        let entry = match kind {
            Kind::Predefined => continue,
            Kind::Label => cformat!("<g>({})</>", name),
            Kind::Variable => cformat!("<c>@{}</>", name),
        };
        println!("{:24}| {:>5} {}", "", val, entry);
    }

    for (pc, (line, word)) in assembled.lines.iter().zip(&assembled.words).enumerate() {
        let inst = match to_inst(&line.text) {
            Ok(inst) => inst.cformat(),
            Err(_) => cformat!("<r,s>!!</>"),
        };
        let source = raw.get(line.idx).map(|s| s.trim()).unwrap_or("");
        println!(
            "[{:04X}] {} | {:>4}: {:<24} {}",
            pc,
            word,
            line.idx + 1,
            source,
            inst
        );
    }
    println!("------------------------+------------------------------------------------");
}
