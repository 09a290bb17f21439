pub type MapreelResult<T> = Result<T, MapreelError>;

#[derive(thiserror::Error, Debug)]
pub enum MapreelError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("input error: {0}")]
    Input(String),

    #[error("tool error: {0}")]
    Tool(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MapreelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn tool(msg: impl Into<String>) -> Self {
        Self::Tool(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            MapreelError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(MapreelError::input("x").to_string().contains("input error:"));
        assert!(MapreelError::tool("x").to_string().contains("tool error:"));
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = MapreelError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
