use crate::model::talk::{BilingualTalk, LegacyTalk};

/// Migra a coleção inteira: um-para-um, na ordem de entrada, sem descartar
/// nem fundir registros.
pub fn migrate(talks: &[LegacyTalk]) -> Vec<BilingualTalk> {
    talks.iter().map(migrate_talk).collect()
}

/// Migra um registro para o esquema bilíngue.
///
/// - Campos não traduzíveis passam como estão; ausente continua ausente.
/// - `id` não pertence ao conjunto copiado: não aparece na saída migrada.
/// - `language` vira `talk_language` (sem inventar idioma default).
/// - O conteúdo atual é inglês: cada campo traduzível vira `_en` (cópia
///   direta, pode ser null) + `_es` null, aguardando tradução humana.
pub fn migrate_talk(talk: &LegacyTalk) -> BilingualTalk {
    BilingualTalk {
        id: None,
        year: talk.year.clone(),
        date: talk.date.clone(),
        blog: talk.blog.clone(),
        video: talk.video.clone(),
        presentation: talk.presentation.clone(),
        place: talk.place.clone(),
        coauthors: talk.coauthors.clone(),
        last_modified: talk.last_modified.clone(),
        core: talk.core.clone(),

        talk_language: talk.language.clone(),

        name_en: talk.name.clone(),
        name_es: None,
        description_en: talk.description.clone(),
        description_es: None,
        key_learning_en: talk.key_learning.clone(),
        key_learning_es: None,
        key_points_en: talk.key_points.clone(),
        key_points_es: None,
    }
}
