/// Supabase (PostgREST) 客户端
///
/// 封装学生主表查询和重新注册 RPC 调用
use super::StudentDirectory;
use crate::config::Config;
use crate::error::{ConfigError, LookupError};
use crate::models::{LookupKey, PrimaryStudentRecord, ReEnrollmentRecord};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

/// 学生主表
const PRIMARY_TABLE: &str = "alunosIntegraSae";
/// 主表查询列
const PRIMARY_COLUMNS: &str =
    "codigo_aluno,aluno,nome_responsavel,email_resp,whatsapp_fin,CPF_resp_fin";
/// 重新注册 RPC
const REENROLLMENT_RPC: &str = "rematricula_by_codigo_aluno";

/// Supabase 客户端
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// 创建新的 Supabase 客户端
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
        })
    }

    /// 主表查询地址
    pub fn primary_record_url(&self, key: LookupKey) -> String {
        format!(
            "{}/rest/v1/{}?select={}&codigo_aluno=eq.{}",
            self.base_url, PRIMARY_TABLE, PRIMARY_COLUMNS, key
        )
    }

    /// RPC 调用地址
    pub fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, function)
    }

    /// 加上认证头
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
    }

    /// 发送请求并解析为行数组
    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: RequestBuilder,
    ) -> Result<Vec<T>, LookupError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LookupError::transport(endpoint, e))?;

        let rows: Vec<T> = response
            .json()
            .await
            .map_err(|e| LookupError::transport(endpoint, e))?;

        debug!("{} 返回 {} 行", endpoint, rows.len());
        Ok(rows)
    }
}

#[async_trait]
impl StudentDirectory for SupabaseClient {
    async fn primary_record(
        &self,
        key: LookupKey,
    ) -> Result<Option<PrimaryStudentRecord>, LookupError> {
        let url = self.primary_record_url(key);
        debug!("查询主记录: {}", url);

        let rows = self
            .fetch_rows::<PrimaryStudentRecord>(PRIMARY_TABLE, self.http.get(&url))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn reenrollment_record(
        &self,
        key: LookupKey,
    ) -> Result<Option<ReEnrollmentRecord>, LookupError> {
        let url = self.rpc_url(REENROLLMENT_RPC);
        let body = json!({ "p_cod_aluno": key.value() });
        debug!("调用 RPC {}: {}", REENROLLMENT_RPC, body);

        let rows = self
            .fetch_rows::<ReEnrollmentRecord>(REENROLLMENT_RPC, self.http.post(&url).json(&body))
            .await?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> SupabaseClient {
        let config = Config {
            supabase_url: "https://exemplo.supabase.co/".to_string(),
            supabase_anon_key: "anon".to_string(),
            ..Config::default()
        };
        SupabaseClient::new(&config).unwrap()
    }

    #[test]
    fn test_primary_record_url() {
        let client = create_test_client();
        assert_eq!(
            client.primary_record_url(LookupKey(500)),
            "https://exemplo.supabase.co/rest/v1/alunosIntegraSae?select=codigo_aluno,aluno,nome_responsavel,email_resp,whatsapp_fin,CPF_resp_fin&codigo_aluno=eq.500"
        );
    }

    #[test]
    fn test_rpc_url() {
        let client = create_test_client();
        assert_eq!(
            client.rpc_url(REENROLLMENT_RPC),
            "https://exemplo.supabase.co/rest/v1/rpc/rematricula_by_codigo_aluno"
        );
    }

    /// 连接真实数据库，需要 SUPABASE_URL / SUPABASE_ANON_KEY
    #[tokio::test]
    #[ignore]
    async fn test_live_primary_lookup() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env().unwrap();
        let client = SupabaseClient::new(&config).unwrap();

        let result = client.primary_record(LookupKey(500)).await;
        println!("查询结果: {:?}", result);
        assert!(result.is_ok());
    }
}
