//! Output rendering for command results

use toxpkg_builder::BuildReport;
use toxpkg_recipe::PackageMetadata;
use toxpkg_types::{PackageVersion, Platform, Requirement, ToolchainVariables};

/// Renders command results as plain text or JSON.
///
/// JSON goes to stdout only; logging is on stderr, so piped output stays
/// machine-readable.
pub struct OutputRenderer {
    json: bool,
}

impl OutputRenderer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn render_version(&self, version: PackageVersion) {
        if self.json {
            println!(
                "{}",
                serde_json::json!({ "version": version.to_string() })
            );
        } else {
            println!("{version}");
        }
    }

    pub fn render_requirements(&self, requirements: &[Requirement]) {
        if self.json {
            match serde_json::to_string_pretty(requirements) {
                Ok(out) => println!("{out}"),
                Err(e) => eprintln!("Error: failed to serialize requirements: {e}"),
            }
        } else {
            for req in requirements {
                println!("{req} ({})", req.kind);
            }
        }
    }

    pub fn render_variables(&self, vars: &ToolchainVariables) {
        if self.json {
            match serde_json::to_string_pretty(vars) {
                Ok(out) => println!("{out}"),
                Err(e) => eprintln!("Error: failed to serialize variables: {e}"),
            }
        } else {
            for (key, value) in vars {
                println!("{key} = {value}");
            }
        }
    }

    pub fn render_info(
        &self,
        metadata: &PackageMetadata,
        version: PackageVersion,
        platform: Platform,
        system_libs: &[&str],
    ) {
        if self.json {
            println!(
                "{}",
                serde_json::json!({
                    "name": metadata.name,
                    "version": version.to_string(),
                    "url": metadata.url,
                    "description": metadata.description,
                    "license": metadata.license,
                    "platform": platform.as_str(),
                    "system_libs": system_libs,
                })
            );
        } else {
            println!("{} {}", metadata.name, version);
            println!("  {}", metadata.description);
            println!("  url:     {}", metadata.url);
            println!("  license: {}", metadata.license);
            if !system_libs.is_empty() {
                println!("  system libs ({platform}): {}", system_libs.join(", "));
            }
        }
    }

    pub fn render_report(&self, version: PackageVersion, report: &BuildReport) {
        if self.json {
            let stages: Vec<&str> = report.stages.iter().map(|s| s.as_str()).collect();
            println!(
                "{}",
                serde_json::json!({
                    "version": version.to_string(),
                    "stages": stages,
                    "tests": report.tests.as_ref().map(|t| serde_json::json!({
                        "total": t.total,
                        "passed": t.passed,
                        "failed": t.failed,
                    })),
                })
            );
        } else {
            let stages: Vec<&str> = report.stages.iter().map(|s| s.as_str()).collect();
            println!("Built toxcore {version} ({})", stages.join(" -> "));
            if let Some(tests) = &report.tests {
                println!("Tests: {}/{} passed", tests.passed, tests.total);
            }
        }
    }
}
