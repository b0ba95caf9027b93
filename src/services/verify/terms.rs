use std::collections::HashMap;

use serde::Serialize;

use crate::model::talk::{truthy_text, BilingualTalk};

/// Jargão técnico que costuma ficar em inglês mesmo no texto em espanhol.
/// Lista literal de propósito: é um scan de substring, não um motor de regras.
pub const TECHNICAL_TERMS: &[&str] = &[
    "TDD",
    "DevOps",
    "MVP",
    "continuous delivery",
    "pipeline",
    "deploy",
    "API",
    "frontend",
    "backend",
    "test",
    "refactoring",
    "pull request",
    "commit",
    "SOLID",
    "clean code",
    "sprint",
    "backlog",
    "feature flag",
    "microservices",
];

#[derive(Debug, Serialize, Default)]
pub struct TermConsistency {
    pub total_checked: usize,
    pub terms_found: HashMap<&'static str, usize>,
}

impl TermConsistency {
    /// Termos mais frequentes; empate desempata pelo nome para saída estável.
    pub fn top_terms(&self, limit: usize) -> Vec<(&'static str, usize)> {
        let mut terms: Vec<(&'static str, usize)> = self
            .terms_found
            .iter()
            .map(|(term, count)| (*term, *count))
            .collect();

        terms.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        terms.truncate(limit);
        terms
    }
}

/// Varre o texto em espanhol atrás do vocabulário técnico.
///
/// Unidades de inspeção: `description_es` e `key_learning_es` inteiros, mais
/// cada item de `key_points_es` separadamente. Campo vazio/ausente não gera
/// unidade nenhuma. Cada termo conta no máximo uma vez por unidade.
pub fn check_terms(talks: &[BilingualTalk]) -> TermConsistency {
    let mut result = TermConsistency::default();

    for talk in talks {
        for field in [&talk.description_es, &talk.key_learning_es] {
            if truthy_text(field) {
                if let Some(content) = field {
                    scan_unit(content, &mut result);
                }
            }
        }

        if let Some(points) = &talk.key_points_es {
            for point in points {
                scan_unit(point, &mut result);
            }
        }
    }

    result
}

fn scan_unit(text: &str, result: &mut TermConsistency) {
    result.total_checked += 1;

    let lowered = text.to_lowercase();
    for &term in TECHNICAL_TERMS {
        if lowered.contains(term.to_lowercase().as_str()) {
            *result.terms_found.entry(term).or_insert(0) += 1;
        }
    }
}
