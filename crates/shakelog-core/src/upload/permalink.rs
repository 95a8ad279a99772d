//! Public permalink parsing for the Slack file-sharing flow
//!
//! Sharing a file publicly yields a permalink of the form
//! `https://slack-files.com/{team_id}-{file_id}-{pub_secret}`. The
//! direct download link the announcement message needs is
//! `https://files.slack.com/files-pri/{team_id}-{file_id}/{filename}?pub_secret={pub_secret}`,
//! so the permalink has to be taken apart first.

use thiserror::Error;

/// Host prefix every public permalink is expected to carry
pub const PUBLIC_PERMALINK_HOST: &str = "https://slack-files.com/";

const DIRECT_DOWNLOAD_BASE: &str = "https://files.slack.com/files-pri";

/// Errors that can occur while parsing a public permalink
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermalinkError {
    /// The permalink did not start with the expected host
    #[error("Unexpected permalink host in {url}")]
    UnexpectedHost { url: String },

    /// The permalink remainder did not split into team, file and secret
    #[error("Expected 3 dash-separated permalink segments, found {found}")]
    InvalidSegmentCount { found: usize },
}

/// The three components of a parsed public permalink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPermalink {
    pub team_id: String,
    pub file_id: String,
    pub pub_secret: String,
}

impl PublicPermalink {
    /// Parse a `slack-files.com` permalink into its components
    ///
    /// The remainder after the host must split on `-` into exactly
    /// three segments; anything else is a structural error rather than
    /// a best-effort guess.
    pub fn parse(url: &str) -> Result<Self, PermalinkError> {
        let rest = url
            .strip_prefix(PUBLIC_PERMALINK_HOST)
            .ok_or_else(|| PermalinkError::UnexpectedHost {
                url: url.to_string(),
            })?;

        let segments: Vec<&str> = rest.split('-').collect();
        if segments.len() != 3 {
            return Err(PermalinkError::InvalidSegmentCount {
                found: segments.len(),
            });
        }

        Ok(Self {
            team_id: segments[0].to_string(),
            file_id: segments[1].to_string(),
            pub_secret: segments[2].to_string(),
        })
    }

    /// Build the direct download URL for the given filename
    pub fn direct_download_url(&self, file_name: &str) -> String {
        format!(
            "{}/{}-{}/{}?pub_secret={}",
            DIRECT_DOWNLOAD_BASE, self.team_id, self.file_id, file_name, self.pub_secret
        )
    }
}
