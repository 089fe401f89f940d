//! Developer tasks (schema generation, report conformance, catalog checks).
//!
//! Keeping this separate avoids bloating the library crates.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> anyhow::Result<PathBuf> {
    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => std::env::current_dir().context("Cannot determine current directory")?,
    };

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .context("xtask has no parent")
    } else {
        Ok(manifest_dir)
    }
}

/// Get the schemas directory path.
fn schemas_dir() -> anyhow::Result<PathBuf> {
    Ok(project_root()?.join("schemas"))
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(cloudguard_types::ScanReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(cloudguard_settings::CloudguardConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "cloudguard.scan.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "cloudguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir()?;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform <report>  Validate a scan report against the generated schema");
    eprintln!("  catalog-coverage  Validate every built-in rule has complete catalog metadata");
}

fn is_fingerprint(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validate one scan report.
///
/// This checks:
/// 1. Schema validation against the generated `cloudguard.scan.v1` schema
/// 2. Fingerprint hygiene: 64 hex characters. Findings are never deduplicated,
///    so repeated records of one resource legitimately share a fingerprint.
/// 3. Counts hygiene: `counts` agrees with the findings listed
fn conform(report_path: &Path) -> anyhow::Result<()> {
    let content = fs::read_to_string(report_path)
        .with_context(|| format!("Failed to read {}", report_path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).context("Failed to parse report as JSON")?;

    let schema_value =
        serde_json::to_value(generate_report_schema()).context("Failed to serialize schema")?;
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let mut errors = Vec::new();

    // 1. Schema validation
    for err in compiled.iter_errors(&value) {
        errors.push(format!("schema validation: {err}"));
    }

    // 2 + 3. Fingerprints and counts
    let mut tally = [0u64; 4];
    let rules = value
        .get("rules")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();
    for rule in rules {
        let rule_id = rule.get("rule_id").and_then(|v| v.as_str()).unwrap_or("?");
        let findings = rule
            .get("findings")
            .and_then(|v| v.as_array())
            .map(Vec::as_slice)
            .unwrap_or_default();

        for (i, finding) in findings.iter().enumerate() {
            match finding.get("fingerprint").and_then(|v| v.as_str()) {
                Some(fp) if is_fingerprint(fp) => {}
                other => errors.push(format!(
                    "{rule_id}: finding[{i}] has invalid fingerprint {other:?}"
                )),
            }
            if let Some(code) = finding.get("severity").and_then(|v| v.as_u64()) {
                if let Some(slot) = tally.get_mut(code as usize) {
                    *slot += 1;
                }
            }
        }
    }

    let counts = value.get("counts");
    for (idx, name) in ["ok", "warning", "failing", "unknown"].iter().enumerate() {
        let reported = counts.and_then(|c| c.get(*name)).and_then(|v| v.as_u64());
        if reported != Some(tally[idx]) {
            errors.push(format!(
                "counts.{name} is {reported:?}, findings contain {}",
                tally[idx]
            ));
        }
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("✓ {} conforms to cloudguard.scan.v1", report_path.display());
    Ok(())
}

/// Validate that every built-in rule has complete catalog metadata and that the
/// catalog lists no rule without an implementation.
fn catalog_coverage() -> anyhow::Result<()> {
    let rules = cloudguard_domain::rules::builtin_rules();
    let catalog_ids = cloudguard_types::all_rule_ids();
    let mut errors = Vec::new();

    for rule in &rules {
        let id = rule.id();
        let Some(meta) = cloudguard_types::lookup_rule(id) else {
            errors.push(format!("Rule '{id}' has no catalog entry"));
            continue;
        };
        for (field, text) in [
            ("title", meta.title),
            ("description", meta.description),
            ("more_info", meta.more_info),
            ("link", meta.link),
            ("recommended_action", meta.recommended_action),
        ] {
            if text.is_empty() {
                errors.push(format!("Rule '{id}' has empty {field}"));
            }
        }
        if !meta
            .apis
            .contains(&cloudguard_types::catalog::PROJECTS_GET)
        {
            errors.push(format!("Rule '{id}' does not declare the project lookup"));
        }
    }

    for id in catalog_ids {
        if !rules.iter().any(|r| r.id() == *id) {
            errors.push(format!("Catalog entry '{id}' has no built-in rule"));
        }
    }

    if errors.is_empty() {
        println!("✓ {} rules have complete catalog metadata", rules.len());
        println!("\n✓ All catalog coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {error}");
        }
        bail!(
            "Catalog coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => match args.get(2) {
            Some(path) => conform(Path::new(path)),
            None => bail!("usage: cargo xtask conform <report.json>"),
        },
        "catalog-coverage" => catalog_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{name}");
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
