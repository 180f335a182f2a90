//! Human-readable summary renderer for compatibility reports.

use crate::diff::model::CompatReport;

/// Render a Markdown summary of a [`CompatReport`].
///
/// Violations are grouped by resource, keeping report order within each
/// group.
pub fn render_human_summary(report: &CompatReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "## Schema Compatibility: {}\n\n",
        report.provider_name
    ));

    let verdict = if report.is_compatible() {
        "Compatible"
    } else {
        "Breaking changes detected"
    };
    out.push_str(&format!(
        "**Result**: {}  \n**Violations**: {}\n\n",
        verdict,
        report.violations.len()
    ));

    out.push_str(&format!(
        "| | Digest |\n|---|---|\n| Baseline | `{}` |\n| Current | `{}` |\n\n",
        short(&report.identity.baseline_digest),
        short(&report.identity.current_digest),
    ));

    out.push_str(&format!(
        "- **Resources compared**: {}\n",
        report.resources_compared.len()
    ));
    if !report.resources_skipped.is_empty() {
        out.push_str(&format!(
            "- **New resources (not checked)** ({}): {}\n",
            report.resources_skipped.len(),
            report.resources_skipped.join(", ")
        ));
    }
    if !report.data_sources_compared.is_empty() {
        out.push_str(&format!(
            "- **Data sources compared**: {}\n",
            report.data_sources_compared.len()
        ));
    }
    out.push('\n');

    if report.is_compatible() {
        out.push_str("_No breaking changes detected._\n");
        return out;
    }

    let mut current_resource: Option<&str> = None;
    for violation in &report.violations {
        let resource = violation.path.resource.as_str();
        if current_resource != Some(resource) {
            if current_resource.is_some() {
                out.push('\n');
            }
            out.push_str(&format!("### {}\n\n", resource));
            current_resource = Some(resource);
        }
        out.push_str(&format!(
            "- `{}` **{}**: {}\n",
            violation.path.attribute_name(),
            violation.rule,
            violation.message
        ));
    }
    out.push('\n');

    out.push_str("### By Rule\n\n");
    for (rule, count) in report.violations_by_rule() {
        out.push_str(&format!("- {}: {}\n", rule, count));
    }

    out
}

fn short(digest: &str) -> &str {
    let end = digest.len().min(12);
    &digest[..end]
}
