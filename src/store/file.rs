use std::path::Path;

use tokio::io::AsyncWriteExt;

use crate::error::TokenError;
use crate::token::Token;

/// Single-file JSON store holding the current token.
///
/// There is no locking: concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: String,
}

impl TokenFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Read and parse the stored token.
    pub async fn load(&self) -> Result<Token, TokenError> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|source| TokenError::TokenFileRead {
                path: self.path.clone(),
                source,
            })?;

        Token::from_slice(&data).map_err(|source| TokenError::TokenFileParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file contents with `bytes`. New files are created
    /// owner read/write only.
    pub async fn write(&self, bytes: &[u8]) -> Result<(), TokenError> {
        self.write_inner(bytes)
            .await
            .map_err(|source| TokenError::TokenFileWrite {
                path: self.path.clone(),
                source,
            })
    }

    async fn write_inner(&self, bytes: &[u8]) -> std::io::Result<()> {
        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(Path::new(&self.path)).await?;
        file.write_all(bytes).await?;
        file.flush().await
    }
}
