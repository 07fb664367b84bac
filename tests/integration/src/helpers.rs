//! Test helpers for integration tests
//!
//! Provides a service context on a fresh database plus assertion helpers.

use anyhow::Result;
use memo_common::{try_init_tracing, AppConfig};
use memo_service::{
    ErrorKind, MemoCommentService, MemoRelationService, MemoService, NestService,
    ReactionService, ServiceContext, ServiceError, ServiceResult,
};
use serde::Serialize;

/// Fresh service context for one test
pub struct TestContext {
    pub ctx: ServiceContext,
}

impl TestContext {
    /// Start on a private in-memory SQLite database
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()?).await
    }

    /// Start with a custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let _ = try_init_tracing();
        let ctx = ServiceContext::connect(&config).await?;
        Ok(Self { ctx })
    }

    pub fn memos(&self) -> MemoService<'_> {
        MemoService::new(&self.ctx)
    }

    pub fn comments(&self) -> MemoCommentService<'_> {
        MemoCommentService::new(&self.ctx)
    }

    pub fn reactions(&self) -> ReactionService<'_> {
        ReactionService::new(&self.ctx)
    }

    pub fn relations(&self) -> MemoRelationService<'_> {
        MemoRelationService::new(&self.ctx)
    }

    pub fn nests(&self) -> NestService<'_> {
        NestService::new(&self.ctx)
    }
}

/// Config for an in-memory SQLite database
pub fn test_config() -> Result<AppConfig> {
    Ok(AppConfig::from_vars(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "APP_NAME" => Some("memos-test".to_string()),
        _ => None,
    })?)
}

/// Assert that a service call failed with the given kind and error code
pub fn assert_error<T: std::fmt::Debug>(
    result: ServiceResult<T>,
    expected_kind: ErrorKind,
    expected_code: &str,
) -> Result<ServiceError> {
    match result {
        Ok(value) => anyhow::bail!("Expected {expected_kind:?} {expected_code}, got Ok({value:?})"),
        Err(err) => {
            if err.kind() != expected_kind || err.error_code() != expected_code {
                anyhow::bail!(
                    "Expected {:?} {}, got {:?} {}: {}",
                    expected_kind,
                    expected_code,
                    err.kind(),
                    err.error_code(),
                    err
                );
            }
            Ok(err)
        }
    }
}

/// Serialize a response DTO the way a transport would
pub fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
