use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::talk::{BilingualTalk, LegacyTalk};

const DATA_DIR: &str = "data";

pub const TALKS_FILE: &str = "talks.json";
pub const MIGRATED_FILE: &str = "talks.migrated.json";

/// Formatos aceitos no topo do documento: lista pura ou objeto com a chave
/// `talks`. Normalizado logo após o parse; nenhum código adiante volta a
/// olhar o formato.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TalksDocument {
    BareList(Vec<BilingualTalk>),
    Wrapped {
        #[serde(default)]
        talks: Vec<BilingualTalk>,
    },
}

impl TalksDocument {
    pub fn into_talks(self) -> Vec<BilingualTalk> {
        match self {
            TalksDocument::BareList(talks) => talks,
            TalksDocument::Wrapped { talks } => talks,
        }
    }
}

/// Caminho fixo relativo à raiz do projeto; os scripts não recebem argumentos.
pub fn data_path(file_name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(DATA_DIR)
        .join(file_name)
}

fn read_file(path: &Path) -> Result<String, String> {
    if !path.exists() {
        return Err(format!("data file not found: {}", path.display()));
    }

    fs::read_to_string(path).map_err(|e| format!("failed to read {}: {e}", path.display()))
}

/// A migração só aceita a lista pura; qualquer outro shape aborta antes de
/// produzir saída.
pub fn load_legacy(path: &Path) -> Result<Vec<LegacyTalk>, String> {
    let data = read_file(path)?;

    serde_json::from_str(&data).map_err(|e| format!("invalid talks file {}: {e}", path.display()))
}

pub fn load_bilingual(path: &Path) -> Result<Vec<BilingualTalk>, String> {
    let data = read_file(path)?;

    let doc: TalksDocument = serde_json::from_str(&data)
        .map_err(|e| format!("invalid talks file {}: {e}", path.display()))?;

    Ok(doc.into_talks())
}

/// Grava pretty JSON (UTF-8 cru, nada de escapar não-ASCII) num artefato novo.
pub fn save_bilingual(path: &Path, talks: &[BilingualTalk]) -> Result<(), String> {
    let mut json = serde_json::to_string_pretty(talks)
        .map_err(|e| format!("failed to serialize talks: {e}"))?;
    json.push('\n');

    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), String> {
    let tmp = tmp_path(path);

    if let Some(parent) = tmp.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    fs::write(&tmp, bytes).map_err(|e| e.to_string())?;

    if path.exists() {
        fs::remove_file(path).map_err(|e| e.to_string())?;
    }

    fs::rename(&tmp, path).map_err(|e| e.to_string())?;

    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "talks".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}
