//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use namescreen::core::models::{Category, IgnoreList, ResultTable};
use namescreen::core::services::NameChecker;
use namescreen::output::{AvoidListResult, CheckReport, OperationResult, OutputMode};

use crate::common::{NAMES, curated};

fn report() -> CheckReport {
    let table = NameChecker::default()
        .check_names(&NAMES, &IgnoreList::default(), &curated(), &Category::ALL)
        .unwrap();
    CheckReport::new(table, NAMES.len())
}

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// CheckReport
// =============================================================================

#[test]
fn check_report_serialization() {
    let json = serde_json::to_value(report()).unwrap();

    assert_eq!(json["names_checked"], 6);
    assert_eq!(json["clear"], false);
    assert_eq!(json["table"]["columns"][0], "Name");
    assert_eq!(json["table"]["rows"][2][0], "Daxorel");
    assert!(json["generated_at"].is_string());
}

#[test]
fn check_report_no_conflicts() {
    let report = CheckReport::new(ResultTable::no_conflicts(), 2);
    assert!(report.clear);

    let text = report.format_human();
    assert!(text.contains("Checked 2 name(s)."));
    assert!(text.contains("No Conflicts!"));
}

#[test]
fn check_report_human_lists_hits() {
    let text = report().format_human();

    assert!(text.contains("Daxorel"));
    assert!(text.contains("INN - USAN"));
    assert!(text.contains("Dax (prefix)"));
    assert!(text.contains("rel (suffix)"));
    assert!(text.contains("Holvira (string match)"));
    assert!(text.contains("4 name(s) with conflicts"));
    assert!(!text.contains("Enbrox"));
}

// =============================================================================
// Other results
// =============================================================================

#[test]
fn avoid_list_serialization() {
    let result = AvoidListResult {
        master_loaded: true,
        avoids: curated().records().to_vec(),
    };
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["master_loaded"], true);
    assert_eq!(json["avoids"][0]["value"], "Dax");
    assert_eq!(json["avoids"][0]["rule_type"], "prefix");
    assert_eq!(json["avoids"][0]["category"], "inn_usan");
}

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "Saved 3 avoid(s)".to_string(),
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("Saved 3 avoid(s)"));
}
