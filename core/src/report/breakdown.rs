use super::{Issue, Severity};
use std::collections::BTreeMap;
use std::fmt;

/// 按严重级别统计的问题数量，仪表盘图表的数据序列
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityBreakdown {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl SeverityBreakdown {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut breakdown = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => breakdown.critical += 1,
                Severity::High => breakdown.high += 1,
                Severity::Medium => breakdown.medium += 1,
                Severity::Low => breakdown.low += 1,
            }
        }
        breakdown
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }

    /// 固定 Critical → Low 顺序迭代
    pub fn iter(&self) -> impl Iterator<Item = (Severity, usize)> {
        [
            (Severity::Critical, self.critical),
            (Severity::High, self.high),
            (Severity::Medium, self.medium),
            (Severity::Low, self.low),
        ]
        .into_iter()
    }
}

impl fmt::Display for SeverityBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} critical / {} high / {} medium / {} low",
            self.critical, self.high, self.medium, self.low
        )
    }
}

/// 按漏洞类型统计
pub fn type_breakdown(issues: &[Issue]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.vulnerability_type.as_str()).or_insert(0) += 1;
    }
    counts
}
