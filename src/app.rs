use crate::clients::{SupabaseClient, WebhookClient};
use crate::config::Config;
use crate::error::{AppError, FormField};
use crate::models::{EnrollmentKind, SubmissionRecord};
use crate::notification::Notice;
use crate::services::{load_attachment, GuardianResolver, SubmissionService};
use crate::utils::logging::log_startup;
use crate::workflow::{EnrollmentFlow, WizardState};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    flow: EnrollmentFlow,
}

/// 一条输入处理后的去向
enum Step {
    Continue,
    Quit,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let directory = SupabaseClient::new(&config).context("无法创建 Supabase 客户端")?;
        let webhook = WebhookClient::new(&config).context("无法创建 Webhook 客户端")?;

        let flow = EnrollmentFlow::new(
            GuardianResolver::new(Arc::new(directory)),
            SubmissionService::new(Arc::new(webhook)),
        );

        Ok(Self { config, flow })
    }

    /// 运行交互式会话，直到输入 `q` 或标准输入结束
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(stdin()).lines();

        loop {
            print_prompt(
                self.flow.wizard().state(),
                self.flow.wizard().record(),
                self.config.max_upload_mb,
            );

            let Some(line) = next_line(&mut lines).await? else {
                info!("输入结束，程序退出");
                break;
            };

            match self.handle(line.trim()).await {
                Ok(Step::Continue) => {}
                Ok(Step::Quit) => break,
                Err(e) => {
                    error!("{}", e);
                    println!("{}", Notice::from(&e));
                }
            }
        }

        Ok(())
    }

    async fn handle(&mut self, input: &str) -> Result<Step, AppError> {
        if input.eq_ignore_ascii_case("q") {
            return Ok(Step::Quit);
        }

        match self.flow.wizard().state() {
            WizardState::Selector => match EnrollmentKind::parse(input) {
                Some(kind) => self.flow.select_type(kind)?,
                None => println!("Opção inválida: digite 1 (novo) ou 2 (rematrícula)"),
            },
            WizardState::Search => {
                if input.eq_ignore_ascii_case("v") {
                    self.flow.wizard_mut().reset();
                } else {
                    let resolved = self.flow.search(input).await?;
                    println!(
                        "{}",
                        Notice::success(
                            "Aluno encontrado",
                            format!("{} - responsável {}", resolved.student_name, resolved.contact.name),
                        )
                    );
                }
            }
            WizardState::Form { .. } => self.handle_form(input).await?,
        }

        Ok(Step::Continue)
    }

    async fn handle_form(&mut self, input: &str) -> Result<(), AppError> {
        let (command, value) = input.split_once(' ').unwrap_or((input, ""));
        let value = value.trim();

        let field = match command.to_lowercase().as_str() {
            "nome" => Some(FormField::SignerName),
            "email" => Some(FormField::Email),
            "whatsapp" => Some(FormField::Phone),
            "codigo" => Some(FormField::StudentCode),
            "aluno" => Some(FormField::StudentName),
            "cpf" => Some(FormField::TaxId),
            _ => None,
        };
        if let Some(field) = field {
            self.flow.wizard_mut().set_field(field, value)?;
            return Ok(());
        }

        match command.to_lowercase().as_str() {
            "arquivo" => {
                let document =
                    load_attachment(Path::new(value), self.config.max_upload_bytes()).await?;
                self.flow.attach(document)?;
            }
            "enviar" => {
                self.flow.submit().await?;
                println!("{}", Notice::submitted());
            }
            "voltar" => self.flow.wizard_mut().back_to_search()?,
            "reiniciar" => self.flow.wizard_mut().reset(),
            _ => println!("Comando desconhecido: {}", command),
        }

        Ok(())
    }
}

async fn next_line(lines: &mut Lines<BufReader<Stdin>>) -> Result<Option<String>> {
    lines.next_line().await.context("读取标准输入失败")
}

// ========== 界面输出 ==========

fn print_prompt(state: WizardState, record: &SubmissionRecord, max_upload_mb: u64) {
    match state {
        WizardState::Selector => {
            println!("\nTipo de Matrícula");
            println!("  1) Aluno Novo");
            println!("  2) Rematrícula");
            println!("(q para sair)");
        }
        WizardState::Search => {
            println!("\nBuscar Aluno - digite o código do aluno (v para voltar)");
        }
        WizardState::Form { kind } => {
            println!("\nEnvio para Assinatura ({})", kind);
            println!("  nome      {}", record.signer_name);
            println!("  email     {}", record.email);
            println!("  whatsapp  {}", record.phone);
            if kind == EnrollmentKind::ReEnrollment {
                println!("  codigo    {}", record.student_code.as_deref().unwrap_or_default());
                println!("  aluno     {}", record.student_name.as_deref().unwrap_or_default());
                println!("  cpf       {}", record.guardian_tax_id.as_deref().unwrap_or_default());
            }
            match &record.document {
                Some(doc) => println!("  arquivo   {} ✓", doc.file_name),
                None => println!("  arquivo   (PDF, DOC, DOCX até {}MB)", max_upload_mb),
            }
            println!("Comandos: <campo> <valor>, arquivo <caminho>, enviar, voltar, reiniciar, q");
        }
    }
}
