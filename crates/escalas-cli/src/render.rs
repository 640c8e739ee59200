//! Plain-text rendering of catalog entries, forms, scores and history rows.

use std::fmt::Write;

use escalas_core::models::result::{ScoreResult, StoredResult};
use escalas_core::models::severity::Severity;
use escalas_scales::{Catalog, ScaleDefinition, ScaleInstance};
use escalas_scales::engine::effective_cutoff;

fn marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "[ok]",
        Severity::Moderate => "[!]",
        Severity::High => "[!!]",
        Severity::Critical => "[!!!]",
    }
}

/// Menu: scales grouped by category.
pub fn scale_list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for (category, scales) in catalog.grouped() {
        let _ = writeln!(out, "{}", category.label());
        for def in scales {
            let _ = writeln!(out, "  {:<14} {}", def.id, def.name);
        }
    }
    out
}

/// One line score summary, as shown under the form.
pub fn score_line(def: &ScaleDefinition, result: &ScoreResult) -> String {
    let points = match def.max_score {
        Some(max) => format!("{}/{max}", result.total_score),
        None => result.total_score.to_string(),
    };
    let mut line = format!(
        "{points} points {} {}",
        marker(result.severity),
        result.interpretation
    );
    if result.overridden {
        line.push_str(" (single parameter override)");
    }
    line
}

/// The scale form: every parameter with its visible options, the current
/// selection marked, followed by the live score.
pub fn form(def: &ScaleDefinition, instance: &ScaleInstance, result: &ScoreResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", def.name, def.category.label());
    let _ = writeln!(out, "{}", def.description);

    for param in &def.parameters {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} [{}]", param.label, param.key);
        let current = instance.get(&param.key);
        for option in instance.visible_options(def, &param.key).unwrap_or_default() {
            let mark = if current == Some(option.value) { '*' } else { ' ' };
            let _ = writeln!(out, "  {mark} {:>3}  {}", option.value, option.label);
        }
    }

    let _ = writeln!(out);
    if let Some(cutoff) = effective_cutoff(def, instance) {
        let _ = writeln!(out, "Cutoff: {cutoff}");
    }
    let _ = writeln!(out, "Score: {}", score_line(def, result));
    out
}

/// History row with the saved parameter snapshot underneath.
pub fn history_row(result: &StoredResult) -> String {
    let when = result.created_at.strftime("%Y-%m-%d %H:%M");
    format!(
        "{id}  {when}  {name}: {points} points {marker} {interpretation}\n    {params}",
        id = result.id,
        name = result.scale_name,
        points = result.display_points(),
        marker = marker(result.severity),
        interpretation = result.interpretation,
        params = result.parameters,
    )
}
