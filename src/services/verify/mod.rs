pub mod completeness;
pub mod fields;
pub mod terms;

use serde::Serialize;

use crate::model::talk::{BilingualTalk, UNKNOWN};
use self::completeness::{Bucket, Completeness};
use self::fields::FieldCoverage;
use self::terms::TermConsistency;

const RULE_WIDTH: usize = 70;
const MISSING_PREVIEW: usize = 5;
const TOP_TERMS: usize = 10;

#[derive(Debug, Serialize)]
pub struct VerificationReport {
    pub fields: FieldCoverage,
    pub terms: TermConsistency,
    pub completeness: Completeness,
}

/// Roda os três checks sobre a mesma coleção imutável. São leituras
/// independentes; a ordem aqui é indiferente, só o relatório é fixo.
pub fn run(talks: &[BilingualTalk]) -> VerificationReport {
    VerificationReport {
        fields: fields::check_fields(talks),
        terms: terms::check_terms(talks),
        completeness: completeness::check_completeness(talks),
    }
}

/// Relatório textual, seções em ordem fixa: campos → termos → completude.
pub fn render(report: &VerificationReport) -> String {
    let mut out: Vec<String> = Vec::new();
    let rule = "=".repeat(RULE_WIDTH);
    let dash = "-".repeat(RULE_WIDTH);

    out.push(rule.clone());
    out.push("TRANSLATION QUALITY VERIFICATION REPORT".to_string());
    out.push(rule.clone());
    out.push(String::new());

    render_fields(&report.fields, &dash, &mut out);
    render_terms(&report.terms, &dash, &mut out);
    render_completeness(&report.completeness, &dash, &mut out);

    out.push(String::new());
    out.push(rule.clone());
    out.push("VERIFICATION COMPLETE".to_string());
    out.push(rule);

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn render_fields(result: &FieldCoverage, dash: &str, out: &mut Vec<String>) {
    out.push("1. REQUIRED FIELDS VERIFICATION".to_string());
    out.push(dash.to_string());
    out.push(format!("Total talks: {}", result.total_talks));
    out.push(format!(
        "✓ With name_es: {}/{}",
        result.with_name_es, result.total_talks
    ));
    out.push(format!(
        "✓ With description_es: {} (where description_en exists)",
        result.with_description_es
    ));
    out.push(format!(
        "✓ With key_learning_es: {} (where key_learning_en exists)",
        result.with_key_learning_es
    ));
    out.push(format!(
        "✓ With key_points_es: {} (where key_points_en exists)",
        result.with_key_points_es
    ));
    out.push(String::new());

    if result.missing_translations.is_empty() {
        out.push("✅ All required translations are complete!".to_string());
    } else {
        out.push(format!(
            "⚠ Missing translations: {}",
            result.missing_translations.len()
        ));
        for item in result.missing_translations.iter().take(MISSING_PREVIEW) {
            out.push(format!(
                "  - {}: {} - missing {}",
                item.id,
                item.name,
                item.missing_fields.join(", ")
            ));
        }
    }
    out.push(String::new());
}

fn render_terms(result: &TermConsistency, dash: &str, out: &mut Vec<String>) {
    out.push("2. TECHNICAL TERMS CONSISTENCY".to_string());
    out.push(dash.to_string());
    out.push(format!("Fields checked: {}", result.total_checked));
    out.push(format!("Technical terms found (top {TOP_TERMS}):"));
    for (term, count) in result.top_terms(TOP_TERMS) {
        out.push(format!("  - {term}: {count} occurrences"));
    }
    out.push(String::new());
}

fn render_completeness(result: &Completeness, dash: &str, out: &mut Vec<String>) {
    out.push("3. TRANSLATION COMPLETENESS BY CATEGORY".to_string());
    out.push(dash.to_string());
    out.push(bucket_line("CORE talks", &result.core_talks));
    out.push(bucket_line("NON-CORE talks", &result.non_core_talks));
    out.push(String::new());
    out.push("By year:".to_string());
    for (year, bucket) in years_desc(result) {
        out.push(format!(
            "  {}: {}/{} ({:.1}%)",
            year,
            bucket.fully_translated,
            bucket.total,
            bucket.percent()
        ));
    }
}

fn bucket_line(label: &str, bucket: &Bucket) -> String {
    format!(
        "{}: {}/{} fully translated ({:.1}%)",
        label,
        bucket.fully_translated,
        bucket.total,
        bucket.percent()
    )
}

/// Anos em ordem decrescente, com o balde "unknown" por último.
fn years_desc(result: &Completeness) -> Vec<(&str, &Bucket)> {
    let mut rows: Vec<(&str, &Bucket)> = result
        .by_year
        .iter()
        .filter(|(year, _)| year.as_str() != UNKNOWN)
        .map(|(year, bucket)| (year.as_str(), bucket))
        .collect();

    // BTreeMap itera ascendente
    rows.reverse();

    if let Some(bucket) = result.by_year.get(UNKNOWN) {
        rows.push((UNKNOWN, bucket));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn talks(values: Vec<serde_json::Value>) -> Vec<BilingualTalk> {
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect()
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let report = run(&talks(vec![json!({ "name_es": "Charla" })]));
        let text = render(&report);

        let fields = text.find("1. REQUIRED FIELDS VERIFICATION").unwrap();
        let terms = text.find("2. TECHNICAL TERMS CONSISTENCY").unwrap();
        let completeness = text.find("3. TRANSLATION COMPLETENESS BY CATEGORY").unwrap();

        assert!(fields < terms && terms < completeness);
        assert!(text.contains("✅ All required translations are complete!"));
    }

    #[test]
    fn report_closes_with_completion_banner() {
        let text = render(&run(&[]));
        let rule = "=".repeat(70);

        assert!(text.ends_with(&format!("\n{rule}\nVERIFICATION COMPLETE\n{rule}\n")));
    }

    #[test]
    fn empty_collection_renders_zero_percent() {
        let text = render(&run(&[]));

        assert!(text.contains("Total talks: 0"));
        assert!(text.contains("CORE talks: 0/0 fully translated (0.0%)"));
        assert!(text.contains("NON-CORE talks: 0/0 fully translated (0.0%)"));
    }

    #[test]
    fn missing_preview_is_capped_at_five() {
        let values: Vec<_> = (0..7)
            .map(|i| json!({ "id": format!("t{i}"), "name_en": "Talk" }))
            .collect();

        let text = render(&run(&talks(values)));

        assert!(text.contains("⚠ Missing translations: 7"));
        assert!(text.contains("  - t4: Talk - missing name_es"));
        assert!(!text.contains("  - t5:"));
    }

    #[test]
    fn years_descend_with_unknown_last() {
        let report = run(&talks(vec![
            json!({ "year": 2021, "name_es": "A" }),
            json!({ "year": 2023, "name_es": "B" }),
            json!({ "name_es": "C" }),
        ]));

        let text = render(&report);
        let y2023 = text.find("  2023: 1/1 (100.0%)").unwrap();
        let y2021 = text.find("  2021: 1/1 (100.0%)").unwrap();
        let unknown = text.find("  unknown: 1/1 (100.0%)").unwrap();

        assert!(y2023 < y2021 && y2021 < unknown);
    }

    #[test]
    fn term_section_lists_counts() {
        let report = run(&talks(vec![json!({
            "name_es": "Charla",
            "description_es": "Usamos TDD en el pipeline"
        })]));

        let text = render(&report);

        assert!(text.contains("Fields checked: 1"));
        assert!(text.contains("  - TDD: 1 occurrences"));
        assert!(text.contains("  - pipeline: 1 occurrences"));
    }
}
