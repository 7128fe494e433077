use super::guardian::ResolvedStudent;
use crate::error::FormField;
use crate::utils::format::{format_phone, format_tax_id};
use std::fmt::Display;

/// 注册类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentKind {
    /// 新生
    New,
    /// 老生重新注册
    ReEnrollment,
}

impl EnrollmentKind {
    /// 解析用户选择（`novo` / `rematricula`）
    pub fn parse(input: &str) -> Option<Self> {
        match crate::utils::fold_accents(input.trim()).as_str() {
            "novo" | "1" => Some(EnrollmentKind::New),
            "rematricula" | "2" => Some(EnrollmentKind::ReEnrollment),
            _ => None,
        }
    }
}

impl Display for EnrollmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentKind::New => write!(f, "Aluno Novo"),
            EnrollmentKind::ReEnrollment => write!(f, "Rematrícula"),
        }
    }
}

/// 待签名的文档
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// 提交记录
///
/// 向导开始时为空，随用户输入或查询结果逐字段填充，提交成功后清空
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub signer_name: String,
    pub email: String,
    pub phone: String,
    pub student_code: Option<String>,
    pub student_name: Option<String>,
    pub guardian_tax_id: Option<String>,
    pub document: Option<Attachment>,
}

impl SubmissionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 合并查询结果
    pub fn merge_student(&mut self, resolved: &ResolvedStudent) {
        self.signer_name = resolved.contact.name.clone();
        self.email = resolved.contact.email.clone();
        self.phone = resolved.contact.phone.clone();
        self.guardian_tax_id = Some(resolved.contact.tax_id.clone());
        self.student_code = Some(resolved.code.to_string());
        self.student_name = Some(resolved.student_name.clone());
    }

    /// 修改单个字段，电话和 CPF 会重新套用掩码
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::SignerName => self.signer_name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Phone => self.phone = format_phone(value),
            FormField::StudentCode => self.student_code = Some(value.to_string()),
            FormField::StudentName => self.student_name = Some(value.to_string()),
            FormField::TaxId => self.guardian_tax_id = Some(format_tax_id(value)),
            FormField::Document => {}
        }
    }

    pub fn attach(&mut self, document: Attachment) {
        self.document = Some(document);
    }

    /// 清空所有字段
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
