//! HTTP 传输 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"发送一次提交"的能力

use std::future::Future;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, AppError, Result};
use crate::models::submission::{FilePart, SubmissionRequest};

/// 后端响应
///
/// 不区分具体状态码含义，只区分成功与否
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 传输能力
///
/// 职责：
/// - 把 SubmissionRequest 编码为一次 multipart POST
/// - 返回原始状态码与响应体
/// - 不认识表单状态
/// - 不处理通知与下载
pub trait Transport {
    /// 发送提交请求
    fn send(
        &self,
        request: SubmissionRequest,
    ) -> impl Future<Output = Result<TransportResponse>> + Send;

    /// 目标地址（仅用于日志）
    fn endpoint(&self) -> &str;
}

/// 基于 reqwest 的传输实现
pub struct ReqwestTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl ReqwestTransport {
    /// 创建新的传输层
    ///
    /// 不设置超时，失败只来自请求本身或非成功响应
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::api_request_failed(&config.endpoint_url, e))?;
        Ok(Self {
            client,
            endpoint: config.endpoint_url.clone(),
        })
    }

    fn file_part(&self, file: FilePart) -> Result<Part> {
        Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(file.mime)
            .map_err(|e| AppError::api_request_failed(&self.endpoint, e))
    }

    fn build_form(&self, request: SubmissionRequest) -> Result<Form> {
        let pages_json = request.pages_json()?;
        debug!("pages 字段: {}", pages_json);

        let pdf_field = request.pdf.field;
        let excel_field = request.excel.field;
        Ok(Form::new()
            .part(pdf_field, self.file_part(request.pdf)?)
            .part(excel_field, self.file_part(request.excel)?)
            .text(SubmissionRequest::PAGES_FIELD, pages_json))
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: SubmissionRequest) -> Result<TransportResponse> {
        let form = self.build_form(request)?;

        debug!("正在发送提交请求: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&self.endpoint, e))?;

        let status = response.status().as_u16();
        debug!("收到响应，状态码: {}", status);

        let body = response.bytes().await.map_err(|e| {
            AppError::Api(ApiError::BodyReadFailed {
                endpoint: self.endpoint.clone(),
                source: Box::new(e),
            })
        })?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
