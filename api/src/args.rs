use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use ferrisfit_core::domain::common::{
    CatalogConfig, DatabaseConfig, EmbeddingConfig, FerrisfitConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ferrisfit", version, about = "FerrisFit wellness API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub embedding: EmbeddingArgs,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(
        long = "server-host",
        id = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        long = "server-port",
        id = "server-port",
        env = "SERVER_PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    #[arg(
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        long = "database-host",
        id = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        long = "database-port",
        id = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(
        long = "database-user",
        env = "DATABASE_USER",
        default_value = "postgres"
    )]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(
        long = "database-name",
        env = "DATABASE_NAME",
        default_value = "ferrisfit"
    )]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(
        long = "llm-base-url",
        id = "llm-base-url",
        env = "LLM_BASE_URL",
        default_value = "https://api.groq.com/openai/v1"
    )]
    pub base_url: String,

    #[arg(
        long = "llm-api-key",
        id = "llm-api-key",
        env = "GROQ_API_KEY",
        default_value = ""
    )]
    pub api_key: String,

    #[arg(
        long = "llm-model",
        id = "llm-model",
        env = "LLM_MODEL",
        default_value = "llama-3.1-8b-instant"
    )]
    pub model: String,

    #[arg(
        long = "llm-timeout-secs",
        id = "llm-timeout-secs",
        env = "LLM_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct EmbeddingArgs {
    #[arg(
        long = "embedding-base-url",
        id = "embedding-base-url",
        env = "EMBEDDING_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    /// Without a key every embedding is computed locally.
    #[arg(
        long = "embedding-api-key",
        id = "embedding-api-key",
        env = "OPENAI_API_KEY"
    )]
    pub api_key: Option<String>,

    #[arg(
        long = "embedding-model",
        id = "embedding-model",
        env = "EMBEDDING_MODEL",
        default_value = "text-embedding-3-small"
    )]
    pub model: String,

    #[arg(
        long = "embedding-timeout-secs",
        id = "embedding-timeout-secs",
        env = "EMBEDDING_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct CatalogArgs {
    /// JSON file replacing the built-in recipe corpus.
    #[arg(long = "recipes-path", env = "RECIPES_PATH")]
    pub recipes_path: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for FerrisfitConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                base_url: args.llm.base_url,
                api_key: args.llm.api_key,
                model: args.llm.model,
                timeout_secs: args.llm.timeout_secs,
            },
            embedding: EmbeddingConfig {
                base_url: args.embedding.base_url,
                api_key: args.embedding.api_key,
                model: args.embedding.model,
                timeout_secs: args.embedding.timeout_secs,
            },
            catalog: CatalogConfig {
                recipes_path: args.catalog.recipes_path,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_conversion() {
        let args = Args::try_parse_from([
            "ferrisfit",
            "--database-name",
            "meals",
            "--allowed-origins",
            "http://a.test,http://b.test",
            "--embedding-api-key",
            "sk-test",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );

        let config = FerrisfitConfig::from(args);
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.llm.timeout_secs, 30);
        assert_eq!(config.embedding.model, "text-embedding-3-small");
        assert_eq!(config.embedding.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.database.name, "meals");
        assert!(config.catalog.recipes_path.is_none());
    }
}
