//! 监护人解析服务 - 业务能力层
//!
//! 根据学生代码查询两个数据源，确定唯一的监护人联系方式：
//! 1. 主记录不存在 → NotFound
//! 2. 没有重新注册记录 → 主记录的备用监护人
//! 3. 财务负责人字段包含 "pai" → 父亲；包含 "mãe"/"mae" → 母亲
//! 4. 否则比较父母双方已填写字段数，多者胜出
//! 5. 数量相同 → 主记录的备用监护人

use crate::clients::StudentDirectory;
use crate::error::LookupError;
use crate::models::{
    GuardianContact, GuardianSubRecord, LookupKey, PrimaryStudentRecord, ReEnrollmentRecord,
    ResolvedStudent,
};
use crate::utils::fold_accents;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 选中的监护人来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardianChoice {
    Father,
    Mother,
    /// 使用主记录中的备用监护人
    Fallback,
}

/// 选择原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickReason {
    /// 财务负责人字段明确指定
    ExplicitPreference,
    /// 已填写字段更多
    MoreCompleteData,
    /// 字段数相同（包括都为 0）
    Tie,
}

/// `pick_guardian` 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardianPick {
    pub choice: GuardianChoice,
    pub reason: PickReason,
    pub father: GuardianSubRecord,
    pub mother: GuardianSubRecord,
}

/// 在父母之间做选择，不访问任何数据源
pub fn pick_guardian(record: &ReEnrollmentRecord) -> GuardianPick {
    let father = record.father();
    let mother = record.mother();
    let preference = fold_accents(record.preference());

    let (choice, reason) = if preference.contains("pai") {
        (GuardianChoice::Father, PickReason::ExplicitPreference)
    } else if preference.contains("mae") {
        (GuardianChoice::Mother, PickReason::ExplicitPreference)
    } else {
        let father_fields = father.filled_count();
        let mother_fields = mother.filled_count();
        match father_fields.cmp(&mother_fields) {
            std::cmp::Ordering::Greater => (GuardianChoice::Father, PickReason::MoreCompleteData),
            std::cmp::Ordering::Less => (GuardianChoice::Mother, PickReason::MoreCompleteData),
            std::cmp::Ordering::Equal => (GuardianChoice::Fallback, PickReason::Tie),
        }
    };

    GuardianPick {
        choice,
        reason,
        father,
        mother,
    }
}

/// 由两条记录得出最终结果
pub fn resolve_from_records(
    code: LookupKey,
    primary: &PrimaryStudentRecord,
    reenrollment: Option<&ReEnrollmentRecord>,
) -> ResolvedStudent {
    let contact = match reenrollment {
        None => GuardianContact::from(&primary.fallback_guardian()),
        Some(record) => {
            let pick = pick_guardian(record);
            debug!(
                "学生 {} 监护人选择: {:?} ({:?})",
                code, pick.choice, pick.reason
            );
            match pick.choice {
                GuardianChoice::Father => GuardianContact::from(&pick.father),
                GuardianChoice::Mother => GuardianContact::from(&pick.mother),
                GuardianChoice::Fallback => GuardianContact::from(&primary.fallback_guardian()),
            }
        }
    };

    let student_name = reenrollment
        .and_then(ReEnrollmentRecord::student_name)
        .unwrap_or_else(|| primary.student_name())
        .to_string();

    ResolvedStudent {
        code,
        student_name,
        contact,
    }
}

/// 监护人解析服务
pub struct GuardianResolver {
    directory: Arc<dyn StudentDirectory>,
}

impl GuardianResolver {
    /// 创建新的解析服务
    pub fn new(directory: Arc<dyn StudentDirectory>) -> Self {
        Self { directory }
    }

    /// 查询并解析监护人
    ///
    /// 主记录查询失败会终止查询；重新注册记录查询失败只记录日志，
    /// 按没有该记录处理。
    pub async fn resolve(&self, code: LookupKey) -> Result<ResolvedStudent, LookupError> {
        info!("🔍 查询学生 {}...", code);

        let primary = self
            .directory
            .primary_record(code)
            .await?
            .ok_or(LookupError::NotFound { code: code.value() })?;

        let reenrollment = match self.directory.reenrollment_record(code).await {
            Ok(record) => record,
            Err(e) => {
                warn!("⚠️ 查询重新注册数据失败，仅使用主记录: {}", e);
                None
            }
        };

        let resolved = resolve_from_records(code, &primary, reenrollment.as_ref());
        info!(
            "✓ 找到学生 {} ({}), 重新注册记录: {}",
            code,
            resolved.student_name,
            if reenrollment.is_some() { "有" } else { "无" }
        );

        Ok(resolved)
    }
}
