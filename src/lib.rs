//! # Matrícula / Assinatura
//!
//! 收集签名人和学生信息，可选地从 Supabase 预填监护人数据，
//! 最后把表单和文档提交给签名 Webhook。
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 外部系统访问，只暴露 `StudentDirectory` / `SubmissionSink` 两个 trait
//! - `SupabaseClient` - 学生主表查询和重新注册 RPC
//! - `WebhookClient` - multipart 提交
//!
//! ### ② 业务能力层（Services）
//! - `GuardianResolver` - 监护人解析（父亲 / 母亲 / 主记录备用）
//! - `submission_validator` - 提交前校验
//! - `SubmissionService` - 校验后发送
//! - `attachment` - 读取待签名文档
//!
//! ### ③ 流程层（Workflow）
//! - `Wizard` - Selector → Search → Form 状态机
//! - `EnrollmentFlow` - 把向导和业务能力串起来
//!
//! ### ④ 界面层
//! - `App` - 终端交互会话
//! - `notification` - 一次性提示消息

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod notification;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{StudentDirectory, SubmissionSink, SupabaseClient, WebhookClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{EnrollmentKind, GuardianContact, LookupKey, SubmissionRecord};
pub use notification::Notice;
pub use services::{GuardianResolver, SubmissionService};
pub use workflow::{EnrollmentFlow, Wizard, WizardState};
