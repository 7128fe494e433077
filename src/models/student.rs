//! 数据库中的学生记录
//!
//! 字段名与 Supabase 表 / RPC 返回的列名一一对应

use crate::error::LookupError;
use crate::utils::format::is_filled;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// 学生代码，两个数据源的连接键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupKey(pub i64);

impl LookupKey {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for LookupKey {
    type Err = LookupError;

    /// 解析用户输入的学生代码，空输入和非整数都视为无效
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .trim()
            .parse::<i64>()
            .map(LookupKey)
            .map_err(|_| LookupError::InvalidKey {
                input: input.to_string(),
            })
    }
}

impl Display for LookupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 主学生记录（表 `alunosIntegraSae`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryStudentRecord {
    pub codigo_aluno: Option<i64>,
    /// 学生姓名
    pub aluno: Option<String>,
    /// 备用监护人姓名
    pub nome_responsavel: Option<String>,
    pub email_resp: Option<String>,
    pub whatsapp_fin: Option<String>,
    #[serde(rename = "CPF_resp_fin")]
    pub cpf_resp_fin: Option<String>,
}

impl PrimaryStudentRecord {
    /// 主记录中的备用监护人字段
    pub fn fallback_guardian(&self) -> GuardianSubRecord {
        GuardianSubRecord::from_options(
            &self.nome_responsavel,
            &self.email_resp,
            &self.whatsapp_fin,
            &self.cpf_resp_fin,
        )
    }

    pub fn student_name(&self) -> &str {
        self.aluno.as_deref().unwrap_or_default()
    }
}

/// 重新注册记录（RPC `rematricula_by_codigo_aluno` 的一行）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReEnrollmentRecord {
    #[serde(rename = "Cod Aluno", default)]
    pub cod_aluno: Option<i64>,
    #[serde(rename = "Nome do Aluno", default)]
    pub nome_aluno: Option<String>,
    /// 财务负责人偏好，自由文本
    #[serde(rename = "Resp. Financeiro", default)]
    pub resp_financeiro: Option<String>,

    #[serde(rename = "Nome do Pai", default)]
    pub nome_pai: Option<String>,
    #[serde(rename = "Email do Pai", default)]
    pub email_pai: Option<String>,
    #[serde(rename = "Telefone do Pai", default)]
    pub telefone_pai: Option<String>,
    #[serde(rename = "CPF do Pai", default)]
    pub cpf_pai: Option<String>,

    #[serde(rename = "Nome da mãe", default)]
    pub nome_mae: Option<String>,
    #[serde(rename = "Email da Mãe", default)]
    pub email_mae: Option<String>,
    #[serde(rename = "Telefone da Mãe", default)]
    pub telefone_mae: Option<String>,
    #[serde(rename = "CPF da mãe", default)]
    pub cpf_mae: Option<String>,
}

impl ReEnrollmentRecord {
    pub fn father(&self) -> GuardianSubRecord {
        GuardianSubRecord::from_options(
            &self.nome_pai,
            &self.email_pai,
            &self.telefone_pai,
            &self.cpf_pai,
        )
    }

    pub fn mother(&self) -> GuardianSubRecord {
        GuardianSubRecord::from_options(
            &self.nome_mae,
            &self.email_mae,
            &self.telefone_mae,
            &self.cpf_mae,
        )
    }

    pub fn preference(&self) -> &str {
        self.resp_financeiro.as_deref().unwrap_or_default()
    }

    /// 学生姓名，空字符串视为缺失
    pub fn student_name(&self) -> Option<&str> {
        self.nome_aluno.as_deref().filter(|name| !name.is_empty())
    }
}

/// 未格式化的监护人字段
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardianSubRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub tax_id: String,
}

impl GuardianSubRecord {
    fn from_options(
        name: &Option<String>,
        email: &Option<String>,
        phone: &Option<String>,
        tax_id: &Option<String>,
    ) -> Self {
        Self {
            name: name.clone().unwrap_or_default(),
            email: email.clone().unwrap_or_default(),
            phone: phone.clone().unwrap_or_default(),
            tax_id: tax_id.clone().unwrap_or_default(),
        }
    }

    /// 非空字段数量（姓名、邮箱、电话、CPF）
    pub fn filled_count(&self) -> usize {
        [&self.name, &self.email, &self.phone, &self.tax_id]
            .into_iter()
            .filter(|value| is_filled(value))
            .count()
    }
}
