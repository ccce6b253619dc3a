//! S3 URI parsing.

use crate::error::ApiError;
use std::fmt;
use std::str::FromStr;

/// A parsed `s3://bucket/key` URI. The key may be empty but the slash after
/// the bucket must be present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Uri {
    pub bucket: String,
    pub key: String,
}

impl FromStr for S3Uri {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("s3://")
            .ok_or_else(|| ApiError::InvalidUri(s.to_string()))?;
        let (bucket, key) = rest
            .split_once('/')
            .ok_or_else(|| ApiError::InvalidUri(s.to_string()))?;
        if bucket.is_empty() {
            return Err(ApiError::InvalidUri(s.to_string()));
        }
        Ok(Self {
            bucket: bucket.to_string(),
            key: key.to_string(),
        })
    }
}

impl fmt::Display for S3Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bucket_and_key() {
        let uri: S3Uri = "s3://my-bucket/projects/alpha/data.csv".parse().unwrap();
        assert_eq!(uri.bucket, "my-bucket");
        assert_eq!(uri.key, "projects/alpha/data.csv");
    }

    #[test]
    fn parses_empty_key() {
        let uri: S3Uri = "s3://my-bucket/".parse().unwrap();
        assert_eq!(uri.bucket, "my-bucket");
        assert_eq!(uri.key, "");
    }

    #[test]
    fn rejects_missing_scheme_slash_or_bucket() {
        assert!("my-bucket/key".parse::<S3Uri>().is_err());
        assert!("s3://my-bucket".parse::<S3Uri>().is_err());
        assert!("s3:///key".parse::<S3Uri>().is_err());
        assert!("http://my-bucket/key".parse::<S3Uri>().is_err());
    }

    #[test]
    fn display_round_trips() {
        let uri: S3Uri = "s3://my-bucket/a/b.txt".parse().unwrap();
        assert_eq!(uri.to_string(), "s3://my-bucket/a/b.txt");
    }
}
