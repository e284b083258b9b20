//! Schema initialization for the users table

use super::{DbError, Gateway};

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(100) UNIQUE NOT NULL
    )
"#;

/// Ensure the `users` table exists. Idempotent; run once before serving.
pub async fn init(gateway: &Gateway) -> Result<(), DbError> {
    tracing::info!("Initializing users schema...");

    let mut conn = gateway.acquire().await?;
    sqlx::query(CREATE_USERS_TABLE).execute(&mut *conn).await?;

    tracing::info!("Users schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_is_idempotent_and_bounded() {
        assert!(CREATE_USERS_TABLE.contains("IF NOT EXISTS"));
        assert!(CREATE_USERS_TABLE.contains("name VARCHAR(100) NOT NULL"));
        assert!(CREATE_USERS_TABLE.contains("email VARCHAR(100) UNIQUE NOT NULL"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn init_twice_succeeds() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let gateway = Gateway::connect(&url, &Default::default())
            .await
            .expect("connect failed");

        init(&gateway).await.expect("first init");
        init(&gateway).await.expect("second init");
    }
}
