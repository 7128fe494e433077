//! 表单向导状态机
//!
//! Selector → Search（仅重新注册）→ Form，可从 Form 返回 Search，任意状态可重置

use crate::error::{FormField, WizardError};
use crate::models::{Attachment, EnrollmentKind, ResolvedStudent, SubmissionRecord};
use std::fmt::Display;
use tracing::debug;

/// 向导状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// 选择注册类型（初始状态）
    Selector,
    /// 按学生代码搜索
    Search,
    /// 填写并提交表单
    Form { kind: EnrollmentKind },
}

impl WizardState {
    fn name(self) -> &'static str {
        match self {
            WizardState::Selector => "selector",
            WizardState::Search => "search",
            WizardState::Form { .. } => "form",
        }
    }
}

impl Display for WizardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 表单向导
///
/// 持有当前状态和正在填写的提交记录。非法操作返回错误且不改变状态。
#[derive(Debug, Clone)]
pub struct Wizard {
    state: WizardState,
    record: SubmissionRecord,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            state: WizardState::Selector,
            record: SubmissionRecord::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }

    /// 当前表单所属流程，不在 Form 状态时为 `None`
    pub fn kind(&self) -> Option<EnrollmentKind> {
        match self.state {
            WizardState::Form { kind } => Some(kind),
            _ => None,
        }
    }

    /// 选择注册类型
    pub fn select_type(&mut self, kind: EnrollmentKind) -> Result<(), WizardError> {
        self.expect_state(WizardState::Selector, "select_type")?;

        self.state = match kind {
            EnrollmentKind::New => {
                self.record.clear();
                WizardState::Form { kind }
            }
            EnrollmentKind::ReEnrollment => WizardState::Search,
        };
        debug!("向导: selector → {}", self.state);
        Ok(())
    }

    /// 搜索到学生后合并监护人信息并进入表单
    pub fn student_found(&mut self, resolved: &ResolvedStudent) -> Result<(), WizardError> {
        self.expect_state(WizardState::Search, "student_found")?;

        self.record.merge_student(resolved);
        self.state = WizardState::Form {
            kind: EnrollmentKind::ReEnrollment,
        };
        debug!("向导: search → form (学生 {})", resolved.code);
        Ok(())
    }

    /// 从重新注册表单返回搜索，保留已关联的学生代码
    pub fn back_to_search(&mut self) -> Result<(), WizardError> {
        match self.state {
            WizardState::Form {
                kind: EnrollmentKind::ReEnrollment,
            } => {
                self.state = WizardState::Search;
                debug!("向导: form → search");
                Ok(())
            }
            WizardState::Form {
                kind: EnrollmentKind::New,
            } => Err(WizardError::NotReEnrollment),
            other => Err(WizardError::InvalidTransition {
                state: other.name(),
                action: "back_to_search",
            }),
        }
    }

    /// 清空记录并回到初始状态
    pub fn reset(&mut self) {
        self.record.clear();
        self.state = WizardState::Selector;
        debug!("向导: 已重置");
    }

    /// 修改表单字段，仅在 Form 状态可用
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<(), WizardError> {
        self.expect_form("set_field")?;
        self.record.set_field(field, value);
        Ok(())
    }

    /// 选择附件，仅在 Form 状态可用
    pub fn attach(&mut self, document: Attachment) -> Result<(), WizardError> {
        self.expect_form("attach")?;
        self.record.attach(document);
        Ok(())
    }

    /// 取出待提交的记录和流程类型
    pub fn submission(&self) -> Result<(&SubmissionRecord, EnrollmentKind), WizardError> {
        let kind = self.expect_form("submit")?;
        Ok((&self.record, kind))
    }

    fn expect_state(&self, expected: WizardState, action: &'static str) -> Result<(), WizardError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                state: self.state.name(),
                action,
            })
        }
    }

    fn expect_form(&self, action: &'static str) -> Result<EnrollmentKind, WizardError> {
        self.kind().ok_or(WizardError::InvalidTransition {
            state: self.state.name(),
            action,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GuardianContact, LookupKey};

    fn resolved() -> ResolvedStudent {
        ResolvedStudent {
            code: LookupKey(500),
            student_name: "João".to_string(),
            contact: GuardianContact {
                name: "Maria".to_string(),
                email: "maria@x.com".to_string(),
                phone: "+55 (11) 98888-7777".to_string(),
                tax_id: "111.222.333-44".to_string(),
            },
        }
    }

    #[test]
    fn test_new_path_goes_straight_to_form() {
        let mut wizard = Wizard::new();
        wizard.select_type(EnrollmentKind::New).unwrap();

        assert_eq!(wizard.state(), WizardState::Form { kind: EnrollmentKind::New });
        assert_eq!(wizard.record(), &SubmissionRecord::default());
        assert_eq!(wizard.back_to_search(), Err(WizardError::NotReEnrollment));
    }

    #[test]
    fn test_reenrollment_path() {
        let mut wizard = Wizard::new();
        wizard.select_type(EnrollmentKind::ReEnrollment).unwrap();
        assert_eq!(wizard.state(), WizardState::Search);

        wizard.student_found(&resolved()).unwrap();
        assert_eq!(wizard.kind(), Some(EnrollmentKind::ReEnrollment));
        assert_eq!(wizard.record().signer_name, "Maria");

        wizard.back_to_search().unwrap();
        assert_eq!(wizard.state(), WizardState::Search);
        assert_eq!(wizard.record().student_code.as_deref(), Some("500"));
    }

    #[test]
    fn test_invalid_transitions_leave_state_unchanged() {
        let mut wizard = Wizard::new();

        let err = wizard.student_found(&resolved()).unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidTransition {
                state: "selector",
                action: "student_found"
            }
        );
        assert_eq!(wizard.state(), WizardState::Selector);
        assert!(wizard.set_field(FormField::Email, "a@b.com").is_err());
        assert!(wizard.submission().is_err());

        wizard.select_type(EnrollmentKind::ReEnrollment).unwrap();
        assert!(wizard.select_type(EnrollmentKind::New).is_err());
        assert_eq!(wizard.state(), WizardState::Search);
    }

    #[test]
    fn test_ten_digit_phone_entered_in_form_is_rejected() {
        let mut wizard = Wizard::new();
        wizard.select_type(EnrollmentKind::New).unwrap();
        wizard.set_field(FormField::SignerName, "Pedro").unwrap();
        wizard.set_field(FormField::Email, "pedro@x.com").unwrap();
        wizard.set_field(FormField::Phone, "1198888777").unwrap();
        wizard
            .attach(Attachment {
                file_name: "contrato.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                bytes: vec![1],
            })
            .unwrap();

        let (record, kind) = wizard.submission().unwrap();
        let err = crate::services::validate(record, kind).unwrap_err();
        assert_eq!(err.field, FormField::Phone);

        wizard.set_field(FormField::Phone, "11988887777").unwrap();
        let (record, kind) = wizard.submission().unwrap();
        assert!(crate::services::validate(record, kind).is_ok());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut wizard = Wizard::new();
        wizard.select_type(EnrollmentKind::ReEnrollment).unwrap();
        wizard.student_found(&resolved()).unwrap();
        wizard.set_field(FormField::SignerName, "Outra Pessoa").unwrap();

        wizard.reset();
        assert_eq!(wizard.state(), WizardState::Selector);
        assert_eq!(wizard.record(), &SubmissionRecord::default());
    }
}
