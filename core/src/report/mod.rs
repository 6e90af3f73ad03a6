// Report module - 扫描报告数据模型
// 与后端 API 的 wire 格式一一对应

pub mod breakdown;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 后端未指定时使用的默认 LLM 模型
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单条漏洞发现
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Issue {
    pub file_path: String,
    pub line_number: usize,
    pub column: usize,
    pub rule_id: String,
    pub vulnerability_type: String,
    pub severity: Severity,
    pub description: String,
    #[serde(default = "default_confidence")]
    pub confidence: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_theory: Option<String>,
}

fn default_confidence() -> String {
    "Low".to_string()
}

/// 扫描请求体 (POST /api/scan)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanRequest {
    pub path: String,
    pub model: String,
}

impl ScanRequest {
    pub fn new(path: impl Into<String>, model: Option<String>) -> Self {
        Self {
            path: path.into(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

/// 完整扫描结果
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_id: Option<i64>,
    pub project_path: String,
    pub issues: Vec<Issue>,
    pub smell_score: f64,
    pub scan_duration: f64,
    pub files_scanned: u64,
}

impl ScanResult {
    pub fn severity_breakdown(&self) -> breakdown::SeverityBreakdown {
        breakdown::SeverityBreakdown::from_issues(&self.issues)
    }

    pub fn issue_types(&self) -> BTreeMap<&str, usize> {
        breakdown::type_breakdown(&self.issues)
    }
}

/// 历史记录摘要 (GET /history)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanSummary {
    pub id: i64,
    pub timestamp: String,
    pub project_path: String,
    pub smell_score: f64,
    pub files_scanned: u64,
    pub scan_duration: f64,
}

impl ScanSummary {
    /// 解析后端的 ISO-8601 时间戳。后端用 `datetime.isoformat()` 产出，
    /// 通常不带时区；带偏移的形式也接受。
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .map(|dt| dt.naive_utc())
            .or_else(|_| self.timestamp.parse::<NaiveDateTime>())
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_wire_format_is_capitalized() {
        assert_eq!(
            serde_json::to_string(&Severity::Critical).unwrap(),
            "\"Critical\""
        );
        let sev: Severity = serde_json::from_str("\"High\"").unwrap();
        assert_eq!(sev, Severity::High);
    }

    #[test]
    fn severity_orders_most_severe_first() {
        let mut severities = vec![Severity::Low, Severity::Critical, Severity::Medium];
        severities.sort();
        assert_eq!(
            severities,
            vec![Severity::Critical, Severity::Medium, Severity::Low]
        );
    }

    #[test]
    fn issue_defaults_apply_on_missing_fields() {
        let json = r#"{
            "file_path": "src/db.py",
            "line_number": 42,
            "column": 5,
            "rule_id": "PY-SQLI-001",
            "vulnerability_type": "SQL Injection",
            "severity": "Critical",
            "description": "User input concatenated into query"
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.confidence, "Low");
        assert!(issue.snippet.is_none());
        assert!(issue.suggested_fix.is_none());
        assert!(issue.fix_theory.is_none());
    }

    #[test]
    fn scan_request_uses_default_model() {
        let req = ScanRequest::new("/home/u/proj", None);
        assert_eq!(req.model, DEFAULT_MODEL);
        let req = ScanRequest::new("/home/u/proj", Some("mistral".to_string()));
        assert_eq!(req.model, "mistral");
    }

    #[test]
    fn scan_result_roundtrip_preserves_missing_scan_id() {
        let json = r#"{
            "project_path": "/home/u/proj",
            "issues": [],
            "smell_score": 0.0,
            "scan_duration": 1.2,
            "files_scanned": 10
        }"#;
        let result: ScanResult = serde_json::from_str(json).unwrap();
        assert!(result.scan_id.is_none());
        let out = serde_json::to_string(&result).unwrap();
        assert!(!out.contains("scan_id"));
    }

    #[test]
    fn summary_timestamp_parses_isoformat() {
        let summary = ScanSummary {
            id: 1,
            timestamp: "2026-08-06T12:30:00.123456".to_string(),
            project_path: "/home/u/proj".to_string(),
            smell_score: 12.0,
            files_scanned: 3,
            scan_duration: 0.4,
        };
        assert!(summary.parsed_timestamp().is_some());
    }

    #[test]
    fn summary_timestamp_parses_rfc3339_and_rejects_garbage() {
        let mut summary = ScanSummary {
            id: 1,
            timestamp: "2026-08-06T12:30:00+00:00".to_string(),
            project_path: "/home/u/proj".to_string(),
            smell_score: 0.0,
            files_scanned: 0,
            scan_duration: 0.0,
        };
        assert!(summary.parsed_timestamp().is_some());
        summary.timestamp = "yesterday".to_string();
        assert!(summary.parsed_timestamp().is_none());
    }
}
