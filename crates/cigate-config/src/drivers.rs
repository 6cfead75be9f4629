use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiDriver {
    Null,
    GitHub,
}

impl FromStr for ApiDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "github" => Ok(Self::GitHub),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDriver {
    Null,
    CodeBuild,
}

impl FromStr for BuildDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "codebuild" => Ok(Self::CodeBuild),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretsDriver {
    Env,
    Aws,
}

impl FromStr for SecretsDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "env" => Ok(Self::Env),
            "aws" => Ok(Self::Aws),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_drivers() {
        assert_eq!(ApiDriver::from_str("GitHub").unwrap(), ApiDriver::GitHub);
        assert_eq!(BuildDriver::from_str("codebuild").unwrap(), BuildDriver::CodeBuild);
        assert_eq!(SecretsDriver::from_str("ENV").unwrap(), SecretsDriver::Env);
        assert!(BuildDriver::from_str("jenkins").is_err());
    }
}
