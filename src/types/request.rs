//! Request type definitions
//!
//! Typed field sets for the facade. Each converts into a camelCase
//! [`ParameterSet`]; the signing layer snake_cases keys on the way out.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::signing::ParameterSet;

/// Fields accepted when creating or updating a video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoParams {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma-separated on the wire
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: Option<String>,
    /// Publish date, Unix seconds
    pub date: Option<i64>,
    pub link: Option<String>,
    pub duration: Option<f64>,
    pub size: Option<u64>,
    pub md5: Option<String>,
    pub upload_content_type: Option<String>,
    pub sourcetype: Option<String>,
    pub sourceurl: Option<String>,
    pub sourceformat: Option<String>,
}

impl VideoParams {
    /// Create an empty set of video fields
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_date(mut self, date: i64) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_upload_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.upload_content_type = Some(content_type.into());
        self
    }

    /// Convert to camelCase parameters, skipping unset fields
    pub fn to_params(&self) -> ParameterSet {
        let tags = (!self.tags.is_empty()).then(|| self.tags.join(", "));
        ParameterSet::new()
            .with_opt("title", self.title.as_ref())
            .with_opt("description", self.description.as_ref())
            .with_opt("tags", tags)
            .with_opt("author", self.author.as_ref())
            .with_opt("date", self.date)
            .with_opt("link", self.link.as_ref())
            .with_opt("duration", self.duration)
            .with_opt("size", self.size)
            .with_opt("md5", self.md5.as_ref())
            .with_opt("uploadContentType", self.upload_content_type.as_ref())
            .with_opt("sourcetype", self.sourcetype.as_ref())
            .with_opt("sourceurl", self.sourceurl.as_ref())
            .with_opt("sourceformat", self.sourceformat.as_ref())
    }
}

/// One entry of a batch creation from remote URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchContent {
    pub download_url: String,
    pub title: Option<String>,
    /// Comma-separated tags
    pub tags: Option<String>,
}

impl BatchContent {
    pub fn new(download_url: impl Into<String>) -> Self {
        Self {
            download_url: download_url.into(),
            title: None,
            tags: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Load a JSON array of batch entries from disk
    ///
    /// A malformed file fails as an invalid argument.
    pub async fn load_all(path: &Path) -> crate::Result<Vec<Self>> {
        let content = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&content).map_err(|e| {
            crate::Error::invalid_argument(format!(
                "Invalid batch file {}: {}",
                path.display(),
                e
            ))
        })
    }

    pub fn to_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("downloadUrl", &self.download_url)
            .with_opt("title", self.title.as_ref())
            .with_opt("tags", self.tags.as_ref())
    }
}

/// Fields accepted when creating or updating a player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerParams {
    pub name: Option<String>,
    pub version: Option<String>,
    pub release_channel: Option<String>,
    pub displaytitle: Option<bool>,
    pub displaydescription: Option<bool>,
    pub playlist: Option<String>,
    pub playlistlayout: Option<String>,
    pub playlistsize: Option<u32>,
    pub visualplaylist: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub responsive: Option<bool>,
    pub autostart: Option<bool>,
    pub skin: Option<String>,
}

impl PlayerParams {
    /// Create an empty set of player fields
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_release_channel(mut self, channel: impl Into<String>) -> Self {
        self.release_channel = Some(channel.into());
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = Some(responsive);
        self
    }

    pub fn to_params(&self) -> ParameterSet {
        ParameterSet::new()
            .with_opt("name", self.name.as_ref())
            .with_opt("version", self.version.as_ref())
            .with_opt("releaseChannel", self.release_channel.as_ref())
            .with_opt("displaytitle", self.displaytitle)
            .with_opt("displaydescription", self.displaydescription)
            .with_opt("playlist", self.playlist.as_ref())
            .with_opt("playlistlayout", self.playlistlayout.as_ref())
            .with_opt("playlistsize", self.playlistsize)
            .with_opt("visualplaylist", self.visualplaylist)
            .with_opt("width", self.width)
            .with_opt("height", self.height)
            .with_opt("responsive", self.responsive)
            .with_opt("autostart", self.autostart)
            .with_opt("skin", self.skin.as_ref())
    }
}

/// Options for picking a video frame as thumbnail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailOptions {
    /// Position in seconds of the frame to use
    pub position: Option<f64>,
}

impl ThumbnailOptions {
    pub fn at(position: f64) -> Self {
        Self {
            position: Some(position),
        }
    }

    pub fn to_params(&self) -> ParameterSet {
        ParameterSet::new().with_opt("position", self.position)
    }
}

/// A file to send as the `file` part of a multipart upload
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Read a file from disk, naming the part after the file
    pub async fn from_path(path: &Path) -> crate::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
