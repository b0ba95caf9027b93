use serde_json::json;

use talks_i18n::model::talk::LegacyTalk;
use talks_i18n::services::{migrate, verify};

fn legacy_collection() -> Vec<LegacyTalk> {
    serde_json::from_value(json!([
        {
            "id": "tdd-intro",
            "year": 2022,
            "date": "2022-03-15",
            "core": true,
            "language": "es",
            "name": "Getting started with TDD",
            "description": "An introduction to test-driven development.",
            "key_learning": "Write the test first.",
            "key_points": ["Red", "Green", "Refactor"]
        },
        {
            "id": "devops-culture",
            "year": 2023,
            "core": false,
            "name": "DevOps culture",
            "description": "Why DevOps is about people."
        },
        {
            "name": "Lightning talk"
        }
    ]))
    .unwrap()
}

#[test]
fn migrated_collection_is_uniform_and_verifiable() {
    let migrated = migrate::migrate(&legacy_collection());
    assert_eq!(migrated.len(), 3);

    // logo após migrar nada tem espanhol: todo registro fica pendente
    let report = verify::run(&migrated);
    assert_eq!(report.fields.total_talks, 3);
    assert_eq!(report.fields.with_name_es, 0);
    assert_eq!(report.fields.missing_translations.len(), 3);

    // e nenhum texto espanhol existe ainda para o scan de termos
    assert_eq!(report.terms.total_checked, 0);

    assert_eq!(report.completeness.core_talks.total, 1);
    assert_eq!(report.completeness.non_core_talks.total, 2);
    assert_eq!(report.completeness.core_talks.fully_translated, 0);
}

#[test]
fn round_trips_through_json_preserving_schema() {
    let migrated = migrate::migrate(&legacy_collection());
    let text = serde_json::to_string_pretty(&migrated).unwrap();

    // conteúdo não-ASCII ficaria cru aqui; o esquema volta intacto
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let first = &value[0];

    assert_eq!(first["talk_language"], json!("es"));
    assert_eq!(first["name_en"], json!("Getting started with TDD"));
    assert_eq!(first["name_es"], json!(null));
    assert_eq!(first["key_points_en"], json!(["Red", "Green", "Refactor"]));
    assert_eq!(first["key_points_es"], json!(null));
    assert_eq!(first["year"], json!(2022));

    // terceiro registro não tinha language: a chave não existe
    assert!(value[2].get("talk_language").is_none());
    assert_eq!(value[2]["description_en"], json!(null));
    assert_eq!(value[2]["description_es"], json!(null));
}

#[test]
fn hand_translated_collection_verifies_clean() {
    let migrated = migrate::migrate(&legacy_collection());

    let mut translated = migrated;
    for talk in &mut translated {
        talk.name_es = Some("Charla".to_string());
        if talk.description_en.is_some() {
            talk.description_es = Some("Descripción con pipeline y TDD.".to_string());
        }
        if talk.key_learning_en.is_some() {
            talk.key_learning_es = Some("Escribe primero el test.".to_string());
        }
        if talk.key_points_en.is_some() {
            talk.key_points_es = Some(vec!["Rojo".to_string(), "Verde".to_string()]);
        }
    }

    let report = verify::run(&translated);

    assert!(report.fields.missing_translations.is_empty());
    assert_eq!(report.completeness.core_talks.fully_translated, 1);
    assert_eq!(report.completeness.non_core_talks.fully_translated, 2);

    // 2 descrições + 1 key_learning + 2 key_points
    assert_eq!(report.terms.total_checked, 5);
    assert_eq!(report.terms.terms_found.get("pipeline"), Some(&2));
    assert_eq!(report.terms.terms_found.get("TDD"), Some(&2));
    // "test" casa por substring dentro de "test" em key_learning_es
    assert_eq!(report.terms.terms_found.get("test"), Some(&1));
}
