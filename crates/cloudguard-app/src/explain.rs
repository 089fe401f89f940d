//! The `explain` use case: look up rule documentation.

use cloudguard_types::catalog::{self, RuleMeta};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found catalog metadata for the rule.
    Found(&'static RuleMeta),
    /// Unknown identifier; includes available rule ids.
    NotFound {
        identifier: String,
        available_rule_ids: &'static [&'static str],
    },
}

/// Look up catalog metadata for a rule id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match catalog::lookup_rule(identifier) {
        Some(meta) => ExplainOutput::Found(meta),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: catalog::all_rule_ids(),
        },
    }
}

/// Format rule metadata for terminal display.
pub fn format_explanation(meta: &RuleMeta) -> String {
    let mut out = String::new();

    out.push_str(meta.title);
    out.push('\n');
    out.push_str(&"=".repeat(meta.title.len()));
    out.push_str("\n\n");
    out.push_str(&format!("Rule: {}\n", meta.id));
    out.push_str(&format!("Category: {} ({})\n\n", meta.category, meta.domain));
    out.push_str(meta.description);
    out.push_str("\n\n");
    out.push_str(meta.more_info);
    out.push_str("\n\n");
    out.push_str("Recommended action\n");
    out.push_str("------------------\n");
    out.push_str(meta.recommended_action);
    out.push_str("\n\n");
    out.push_str("Required APIs\n");
    out.push_str("-------------\n");
    for api in meta.apis {
        out.push_str(&format!("  - {api}\n"));
    }
    out.push('\n');
    out.push_str(&format!("More: {}\n", meta.link));

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, rule_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule id: {identifier}\n\n"));
    out.push_str("Available rule ids:\n");
    for id in rule_ids {
        out.push_str(&format!("  - {id}\n"));
    }

    out
}
