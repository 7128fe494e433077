//! 注册流程 - 流程层
//!
//! 把向导和两个业务能力（监护人解析、提交）串起来：
//! 1. 选择类型
//! 2. 重新注册时按学生代码搜索并预填
//! 3. 提交成功后重置；任何失败都不修改当前记录

use crate::error::AppResult;
use crate::models::{Attachment, EnrollmentKind, LookupKey, ResolvedStudent};
use crate::services::{GuardianResolver, SubmissionService};
use crate::workflow::wizard::Wizard;
use tracing::{info, warn};

/// 注册流程
///
/// 所有操作都需要 `&mut self`，同一时间只有一个请求在进行
pub struct EnrollmentFlow {
    resolver: GuardianResolver,
    submitter: SubmissionService,
    wizard: Wizard,
}

impl EnrollmentFlow {
    /// 创建新的注册流程
    pub fn new(resolver: GuardianResolver, submitter: SubmissionService) -> Self {
        Self {
            resolver,
            submitter,
            wizard: Wizard::new(),
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// 选择注册类型
    pub fn select_type(&mut self, kind: EnrollmentKind) -> AppResult<()> {
        self.wizard.select_type(kind)?;
        info!("📋 注册类型: {}", kind);
        Ok(())
    }

    /// 按用户输入的学生代码搜索
    ///
    /// 代码无效时不发请求；查询失败时向导保持在搜索步骤
    pub async fn search(&mut self, input: &str) -> AppResult<ResolvedStudent> {
        let code: LookupKey = input.parse()?;
        let resolved = self.resolver.resolve(code).await?;
        self.wizard.student_found(&resolved)?;
        Ok(resolved)
    }

    /// 选择附件
    pub fn attach(&mut self, document: Attachment) -> AppResult<()> {
        self.wizard.attach(document)?;
        Ok(())
    }

    /// 提交当前表单，成功后重置向导
    pub async fn submit(&mut self) -> AppResult<()> {
        let (record, kind) = self.wizard.submission()?;

        if let Err(e) = self.submitter.submit(record, kind).await {
            warn!("⚠️ 表单保留，可修改后重试");
            return Err(e);
        }

        self.wizard.reset();
        Ok(())
    }
}
