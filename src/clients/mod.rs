//! 外部系统客户端
//!
//! 业务层只依赖这里的两个 trait，生产实现基于 reqwest

pub mod supabase_client;
pub mod webhook_client;

pub use supabase_client::SupabaseClient;
pub use webhook_client::{WebhookClient, WebhookPayload};

use crate::error::{LookupError, SubmitError};
use crate::models::{LookupKey, PrimaryStudentRecord, ReEnrollmentRecord};
use async_trait::async_trait;

/// 学生数据源（只读、幂等）
#[async_trait]
pub trait StudentDirectory: Send + Sync {
    /// 按学生代码精确查询主记录
    async fn primary_record(
        &self,
        key: LookupKey,
    ) -> Result<Option<PrimaryStudentRecord>, LookupError>;

    /// 查询重新注册记录，最多取一行
    async fn reenrollment_record(
        &self,
        key: LookupKey,
    ) -> Result<Option<ReEnrollmentRecord>, LookupError>;
}

/// 签名 Webhook
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// 发送一次，不重试
    async fn submit(&self, payload: &WebhookPayload) -> Result<(), SubmitError>;
}
