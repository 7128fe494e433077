//! 提交前校验
//!
//! 任何一条规则失败都会阻止提交，且不会发出网络请求

use crate::error::{FormField, ValidationError};
use crate::models::{EnrollmentKind, SubmissionRecord};
use crate::utils::format::{digits_only, is_filled, national_phone_digits, TAX_ID_DIGITS};

/// 电话最少位数（DDD + 号码，不含国家代码）
const MIN_PHONE_DIGITS: usize = 11;

/// 校验提交记录，返回第一个失败的字段
///
/// 学生代码、学生姓名和 CPF 只在重新注册流程中检查
pub fn validate(record: &SubmissionRecord, kind: EnrollmentKind) -> Result<(), ValidationError> {
    if !is_filled(&record.signer_name) {
        return Err(ValidationError::new(
            FormField::SignerName,
            "Nome do signatário é obrigatório",
        ));
    }

    if !is_filled(&record.email) || !record.email.contains('@') {
        return Err(ValidationError::new(
            FormField::Email,
            "Email válido é obrigatório",
        ));
    }

    if national_phone_digits(&record.phone) < MIN_PHONE_DIGITS {
        return Err(ValidationError::new(
            FormField::Phone,
            "WhatsApp deve ter pelo menos 11 dígitos",
        ));
    }

    if kind == EnrollmentKind::ReEnrollment {
        if !record.student_code.as_deref().is_some_and(is_filled) {
            return Err(ValidationError::new(
                FormField::StudentCode,
                "Código do aluno é obrigatório",
            ));
        }

        if !record.student_name.as_deref().is_some_and(is_filled) {
            return Err(ValidationError::new(
                FormField::StudentName,
                "Nome do aluno é obrigatório",
            ));
        }

        let tax_digits = record
            .guardian_tax_id
            .as_deref()
            .map(digits_only)
            .unwrap_or_default();
        if tax_digits.len() != TAX_ID_DIGITS {
            return Err(ValidationError::new(
                FormField::TaxId,
                "CPF do responsável deve ter 11 dígitos",
            ));
        }
    }

    if record.document.is_none() {
        return Err(ValidationError::new(
            FormField::Document,
            "Arquivo é obrigatório",
        ));
    }

    Ok(())
}
