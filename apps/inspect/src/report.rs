//! Domain Reports
//!
//! Snapshot of a domain's identity and code table, rendered as text or JSON.

use std::fmt::Write as _;

use error_kernel::{CodeType, ErrorDomain};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub code: CodeType,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    pub name: String,
    pub id: String,
    pub codes: Vec<CodeEntry>,
    pub lookup: CodeEntry,
}

impl DomainReport {
    /// Look up `codes` and `lookup_code` through `domain`
    pub fn collect(domain: &dyn ErrorDomain, codes: &[CodeType], lookup_code: CodeType) -> Self {
        let entry = |code: CodeType| CodeEntry {
            code,
            message: domain.message(code).to_owned(),
        };
        Self {
            name: domain.name().to_owned(),
            id: domain.id().to_string(),
            codes: codes.iter().copied().map(entry).collect(),
            lookup: entry(lookup_code),
        }
    }
}

pub fn render_text(reports: &[DomainReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{} ({})", report.name, report.id);
        for entry in &report.codes {
            let _ = writeln!(out, "  {:>6}  {}", entry.code, entry.message);
        }
        let _ = writeln!(
            out,
            "  lookup {}: {}",
            report.lookup.code, report.lookup.message
        );
    }
    out
}

pub fn render_json(reports: &[DomainReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_kernel::{CoreErrc, UNKNOWN_ERROR_MESSAGE, core_error_domain};

    fn core_report() -> DomainReport {
        let codes: Vec<CodeType> = CoreErrc::ALL.iter().map(|errc| errc.code()).collect();
        DomainReport::collect(core_error_domain(), &codes, 9999)
    }

    #[test]
    fn test_collect() {
        let report = core_report();
        assert_eq!(report.name, "Core");
        assert_eq!(report.id, "0x8000000000000014");
        assert_eq!(report.codes.len(), 3);
        assert_eq!(report.codes[0].message, "Invalid argument");
        assert_eq!(report.lookup.message, UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&[core_report()]);
        assert!(text.starts_with("Core (0x8000000000000014)\n"));
        assert!(text.contains("    22  Invalid argument\n"));
        assert!(text.contains("lookup 9999: unknown error"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[core_report()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Core");
        assert_eq!(value[0]["codes"][2]["code"], 138);
        assert_eq!(value[0]["lookup"]["message"], "unknown error");
    }
}
