use serde::Serialize;

use crate::model::talk::{truthy_list, truthy_text, BilingualTalk};

#[derive(Debug, Serialize)]
pub struct MissingTranslation {
    pub id: String,
    pub name: String,
    pub missing_fields: Vec<&'static str>,
}

#[derive(Debug, Serialize, Default)]
pub struct FieldCoverage {
    pub total_talks: usize,
    pub with_name_es: usize,
    pub with_description_es: usize,
    pub with_key_learning_es: usize,
    pub with_key_points_es: usize,
    pub missing_translations: Vec<MissingTranslation>,
}

/// Cobertura de tradução campo a campo.
///
/// `name_es` é exigido de todo registro (o nome sempre existe em inglês).
/// Os demais só são exigidos quando a versão `_en` tem conteúdo: campo que
/// nunca existiu em inglês não é pendência de tradução.
pub fn check_fields(talks: &[BilingualTalk]) -> FieldCoverage {
    let mut result = FieldCoverage {
        total_talks: talks.len(),
        ..Default::default()
    };

    for talk in talks {
        // ordem fixa dos nomes na lista de pendências
        let mut missing: Vec<&'static str> = Vec::new();

        if truthy_text(&talk.name_es) {
            result.with_name_es += 1;
        } else {
            missing.push("name_es");
        }

        if truthy_text(&talk.description_en) {
            if truthy_text(&talk.description_es) {
                result.with_description_es += 1;
            } else {
                missing.push("description_es");
            }
        }

        if truthy_text(&talk.key_learning_en) {
            if truthy_text(&talk.key_learning_es) {
                result.with_key_learning_es += 1;
            } else {
                missing.push("key_learning_es");
            }
        }

        if truthy_list(&talk.key_points_en) {
            if truthy_list(&talk.key_points_es) {
                result.with_key_points_es += 1;
            } else {
                missing.push("key_points_es");
            }
        }

        if !missing.is_empty() {
            result.missing_translations.push(MissingTranslation {
                id: talk.display_id(),
                name: talk.name_en.clone().unwrap_or_else(|| "N/A".to_string()),
                missing_fields: missing,
            });
        }
    }

    result
}
