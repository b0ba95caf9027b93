use talks_i18n::services::{dataset, migrate};

fn main() {
    if let Err(e) = run() {
        eprintln!("[migrate] {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let input = dataset::data_path(dataset::TALKS_FILE);
    let output = dataset::data_path(dataset::MIGRATED_FILE);

    let talks = dataset::load_legacy(&input)?;
    let migrated = migrate::migrate(&talks);

    // artefato novo; o arquivo de origem nunca é sobrescrito
    dataset::save_bilingual(&output, &migrated)?;

    println!("✅ Migrated {} talks", migrated.len());
    println!("   Input:  {}", input.display());
    println!("   Output: {}", output.display());

    Ok(())
}
