//! 提交服务 - 业务能力层
//!
//! 校验 → 构建表单 → 发送 Webhook，失败时不修改提交记录

use crate::clients::{SubmissionSink, WebhookPayload};
use crate::error::AppResult;
use crate::models::{EnrollmentKind, SubmissionRecord};
use crate::services::submission_validator;
use crate::utils::logging::{mask_tax_id, truncate_text};
use std::sync::Arc;
use tracing::{error, info};

/// 提交服务
pub struct SubmissionService {
    sink: Arc<dyn SubmissionSink>,
}

impl SubmissionService {
    /// 创建新的提交服务
    pub fn new(sink: Arc<dyn SubmissionSink>) -> Self {
        Self { sink }
    }

    /// 校验并发送提交记录
    ///
    /// 校验失败时不会发出请求
    pub async fn submit(&self, record: &SubmissionRecord, kind: EnrollmentKind) -> AppResult<()> {
        submission_validator::validate(record, kind)?;
        let payload = WebhookPayload::from_record(record)?;

        info!(
            "📤 正在提交: {} <{}> 学生 {} CPF {} 文件 {}",
            record.signer_name.trim(),
            record.email.trim(),
            record.student_code.as_deref().unwrap_or("-"),
            mask_tax_id(record.guardian_tax_id.as_deref().unwrap_or_default()),
            truncate_text(&payload.document.file_name, 40)
        );

        if let Err(e) = self.sink.submit(&payload).await {
            error!("❌ 提交失败: {}", e);
            return Err(e.into());
        }

        info!("✅ 表单已发送处理");
        Ok(())
    }
}
