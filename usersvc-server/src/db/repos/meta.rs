//! Server-level queries: reachability and version

use crate::db::{DbError, Gateway};

/// Queries about the database server itself
pub struct MetaRepo<'a> {
    gateway: &'a Gateway,
}

impl<'a> MetaRepo<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Round-trip a trivial statement.
    pub async fn ping(&self) -> Result<(), DbError> {
        let mut conn = self.gateway.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }

    /// The server's `version()` string, e.g. `PostgreSQL 16.2 on x86_64-pc-linux-gnu ...`
    pub async fn server_version(&self) -> Result<String, DbError> {
        let mut conn = self.gateway.acquire().await?;
        let (version,): (String,) = sqlx::query_as("SELECT version()")
            .fetch_one(&mut *conn)
            .await?;
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn version_mentions_postgres() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let gateway = Gateway::connect(&url, &Default::default())
            .await
            .expect("connect failed");

        let repo = MetaRepo::new(&gateway);
        repo.ping().await.expect("ping failed");
        let version = repo.server_version().await.expect("version failed");
        assert!(version.starts_with("PostgreSQL"));
    }
}
