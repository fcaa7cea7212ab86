use crate::report::{ErrorKind, ValidationError, ValidationResult, ValidationSummary};
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation, Region,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::{BTreeSet, HashMap};

pub fn format(summary: &ValidationSummary) -> String {
    let errors: Vec<(&ValidationResult, &ValidationError)> = summary
        .invalid_results()
        .flat_map(|r| r.errors.iter().map(move |e| (r, e)))
        .collect();

    // One rule per kind that actually fired, in declaration order.
    let kinds: BTreeSet<ErrorKind> = errors.iter().map(|(_, e)| e.kind).collect();

    let rule_index: HashMap<ErrorKind, i64> = kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| (*kind, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = kinds
        .iter()
        .map(|kind| {
            let mut rule = ReportingDescriptor::builder()
                .id(kind.id().to_string())
                .build();
            rule.short_description = Some(
                MultiformatMessageString::builder()
                    .text(kind.description().to_string())
                    .build(),
            );
            rule.help = Some(
                MultiformatMessageString::builder()
                    .text(kind.remediation().to_string())
                    .build(),
            );
            rule
        })
        .collect();

    let results: Vec<SarifResult> = errors
        .iter()
        .map(|(result, error)| {
            let text = match error.suggestion {
                Some(ref suggestion) => format!("{} ({suggestion})", error.message),
                None => error.message.clone(),
            };

            let mut sarif_result = SarifResult::builder()
                .message(Message::builder().text(text).build())
                .build();

            sarif_result.rule_id = Some(error.kind.id().to_string());
            sarif_result.level = Some(ResultLevel::Error);
            sarif_result.rule_index = rule_index.get(&error.kind).copied();

            let mut location = Location::builder().build();
            let mut physical = PhysicalLocation::builder().build();

            physical.artifact_location =
                Some(ArtifactLocation::builder().uri(result.file.clone()).build());

            if let Some(line) = result.line {
                physical.region = Some(Region::builder().start_line(line as i64).build());
            }

            location.physical_location = Some(physical);
            sarif_result.locations = Some(vec![location]);

            sarif_result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("preview-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
