use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, Result};
use crate::report::{ScanRequest, ScanResult, ScanSummary};

/// 健康检查的请求超时。探活必须有界，否则后端失联会挂住调用方。
const HEALTH_TIMEOUT: Duration = Duration::from_secs(3);
/// 历史/导出等只读请求的超时
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
/// TCP 连接超时
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// 扫描后端的 HTTP 客户端。
///
/// 扫描请求本身不设请求级超时：一次全量扫描合理耗时可达数分钟，
/// 由后端决定何时完成或报错。
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

/// FastAPI 风格的错误响应体
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 探活。任何传输层失败（拒绝连接、超时、DNS）都按不健康处理，
    /// 只有显式成功状态码才算健康。
    pub async fn health(&self) -> bool {
        let url = self.url("/health");
        match self.http.get(&url).timeout(HEALTH_TIMEOUT).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(err) => {
                log::debug!("health probe failed: {err}");
                false
            }
        }
    }

    /// 触发一次扫描 (POST /api/scan)
    pub async fn scan(&self, request: &ScanRequest) -> Result<ScanResult> {
        let resp = self
            .http
            .post(self.url("/api/scan"))
            .json(request)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// 拉取历史记录列表 (GET /history)
    pub async fn history(&self) -> Result<Vec<ScanSummary>> {
        let resp = self
            .http
            .get(self.url("/history"))
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// 重新加载一次历史扫描 (GET /history/{id})
    pub async fn scan_details(&self, scan_id: i64) -> Result<ScanResult> {
        let resp = self
            .http
            .get(self.url(&format!("/history/{scan_id}")))
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// 下载 PDF 报告字节流 (GET /export/{id})
    pub async fn export_report(&self, scan_id: i64) -> Result<Vec<u8>> {
        let resp = self
            .http
            .get(self.url(&format!("/export/{scan_id}")))
            .timeout(FETCH_TIMEOUT)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Ok(resp.bytes().await?.to_vec())
    }

    /// 非 2xx 响应转换为 Backend 错误，尽量提取 {"detail": ...}
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let detail = resp
            .bytes()
            .await
            .ok()
            .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
            .and_then(|body| body.detail);
        Err(ClientError::Backend {
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let resp = Self::check(resp).await?;
        Ok(resp.json::<T>().await?)
    }
}
