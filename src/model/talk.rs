use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Balde sentinela para registros sem `year` (e id de exibição ausente).
pub const UNKNOWN: &str = "unknown";

/// Registro no esquema legado monolíngue: conteúdo textual em inglês,
/// sem sufixo de idioma. Um `id` eventual na entrada é ignorado: ele não
/// faz parte do conjunto que a migração copia.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LegacyTalk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coauthors: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_learning: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
}

/// Registro no esquema bilíngue.
///
/// Duas políticas de presença, uma por família de campo:
/// - `talk_language`: ausência do legado é propagada (a chave some do JSON);
/// - pares `_en`/`_es`: sempre serializados, `null` marca "sem conteúdo" /
///   "ainda não traduzido". Assim todo registro migrado tem o mesmo shape.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BilingualTalk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coauthors: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talk_language: Option<String>,

    #[serde(default)]
    pub name_en: Option<String>,

    #[serde(default)]
    pub name_es: Option<String>,

    #[serde(default)]
    pub description_en: Option<String>,

    #[serde(default)]
    pub description_es: Option<String>,

    #[serde(default)]
    pub key_learning_en: Option<String>,

    #[serde(default)]
    pub key_learning_es: Option<String>,

    #[serde(default)]
    pub key_points_en: Option<Vec<String>>,

    #[serde(default)]
    pub key_points_es: Option<Vec<String>>,
}

impl BilingualTalk {
    /// Id só serve para exibição no relatório; qualquer valor JSON é aceito.
    pub fn display_id(&self) -> String {
        match &self.id {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => UNKNOWN.to_string(),
        }
    }

    /// Só `true` literal conta como core; ausente/null/false caem em non-core.
    pub fn is_core(&self) -> bool {
        matches!(self.core, Some(Value::Bool(true)))
    }

    /// Chave do balde anual: o valor do próprio registro, como string.
    pub fn year_key(&self) -> String {
        match &self.year {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => UNKNOWN.to_string(),
        }
    }
}

/// "Truthy" de campo textual: presente e não vazio.
pub fn truthy_text(field: &Option<String>) -> bool {
    field.as_deref().map_or(false, |s| !s.is_empty())
}

/// "Truthy" de campo lista: presente e com ao menos um item.
pub fn truthy_list(field: &Option<Vec<String>>) -> bool {
    field.as_ref().map_or(false, |items| !items.is_empty())
}
