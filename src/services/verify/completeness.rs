use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::talk::{truthy_list, truthy_text, BilingualTalk};

#[derive(Debug, Serialize, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub total: usize,
    pub fully_translated: usize,
}

impl Bucket {
    fn add(&mut self, fully_translated: bool) {
        self.total += 1;
        if fully_translated {
            self.fully_translated += 1;
        }
    }

    /// Balde vazio vale 0.0, nunca erro.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.fully_translated as f64 / self.total as f64
    }
}

#[derive(Debug, Serialize, Default)]
pub struct Completeness {
    pub core_talks: Bucket,
    pub non_core_talks: Bucket,
    pub by_year: BTreeMap<String, Bucket>,
}

/// Completude por categoria (`core`) e por ano.
///
/// Cada registro entra em exatamente um balde core/non-core e um balde anual
/// (o do seu próprio `year`, ou o sentinela "unknown").
pub fn check_completeness(talks: &[BilingualTalk]) -> Completeness {
    let mut result = Completeness::default();

    for talk in talks {
        let fully = is_fully_translated(talk);

        if talk.is_core() {
            result.core_talks.add(fully);
        } else {
            result.non_core_talks.add(fully);
        }

        result.by_year.entry(talk.year_key()).or_default().add(fully);
    }

    result
}

/// Mesma política da cobertura de campos, colapsada num único booleano:
/// `name_es` com conteúdo, e cada um dos outros três campos ou nunca existiu
/// em inglês ou já tem espanhol.
pub fn is_fully_translated(talk: &BilingualTalk) -> bool {
    let mut fully = truthy_text(&talk.name_es);

    if truthy_text(&talk.description_en) {
        fully = fully && truthy_text(&talk.description_es);
    }
    if truthy_text(&talk.key_learning_en) {
        fully = fully && truthy_text(&talk.key_learning_es);
    }
    if truthy_list(&talk.key_points_en) {
        fully = fully && truthy_list(&talk.key_points_es);
    }

    fully
}
