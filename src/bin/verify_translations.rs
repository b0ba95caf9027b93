use talks_i18n::services::{dataset, verify};

fn main() {
    if let Err(e) = run() {
        eprintln!("[verify] {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let input = dataset::data_path(dataset::TALKS_FILE);
    let talks = dataset::load_bilingual(&input)?;

    let report = verify::run(&talks);
    print!("{}", verify::render(&report));

    Ok(())
}
