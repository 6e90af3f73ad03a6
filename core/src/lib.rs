// Vulnora Client Core Library
// 客户端核心库，包含后端接口数据模型与 HTTP API 客户端

mod api;
mod report;

// 重新导出常用类型
pub use api::client::BackendClient;
pub use report::breakdown::{type_breakdown, SeverityBreakdown};
pub use report::{Issue, ScanRequest, ScanResult, ScanSummary, Severity, DEFAULT_MODEL};

pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum ClientError {
        #[error("request failed: {0}")]
        Http(#[from] reqwest::Error),

        #[error("backend returned HTTP {status}")]
        Backend { status: u16, detail: Option<String> },
    }

    impl ClientError {
        /// 面向用户展示的错误文案。
        /// 有 detail 时透传后端消息，否则退回通用提示。
        pub fn user_message(&self) -> String {
            match self {
                ClientError::Backend {
                    detail: Some(detail),
                    ..
                } => detail.clone(),
                ClientError::Backend { status, .. } => {
                    format!("Scanner API error (HTTP {status})")
                }
                ClientError::Http(_) => "Failed to connect to scanner API".to_string(),
            }
        }
    }

    pub type Result<T> = std::result::Result<T, ClientError>;
}
