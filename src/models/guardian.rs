use super::student::{GuardianSubRecord, LookupKey};
use crate::utils::format::{format_phone, format_tax_id};

/// 解析出的监护人联系方式
///
/// 每个字段都有值，缺失数据用空字符串表示
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardianContact {
    pub name: String,
    pub email: String,
    /// `+55 (DD) DDDDD-DDDD`
    pub phone: String,
    /// `DDD.DDD.DDD-DD`
    pub tax_id: String,
}

impl From<&GuardianSubRecord> for GuardianContact {
    fn from(sub: &GuardianSubRecord) -> Self {
        Self {
            name: sub.name.clone(),
            email: sub.email.clone(),
            phone: format_phone(&sub.phone),
            tax_id: format_tax_id(&sub.tax_id),
        }
    }
}

/// 一次查询的完整结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStudent {
    pub code: LookupKey,
    pub student_name: String,
    pub contact: GuardianContact,
}
