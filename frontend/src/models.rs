use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct VideoEntry {
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub url: String,
}

impl VideoEntry {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// Body of `GET /api/v1/get-video`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoListResponse {
    #[serde(default)]
    pub data: Vec<VideoEntry>,
}

/// Body of `add-video` and `delete-video`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoUrlRequest {
    pub url: String,
}

/// Whatever the store answers to a mutation. Every field is optional.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct StoreReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<CreatedVideo>,
    #[serde(default, alias = "_id", deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreatedVideo {
    #[serde(default, alias = "_id", deserialize_with = "deserialize_optional_id")]
    pub id: Option<String>,
}

impl StoreReply {
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Identity the store assigned to a freshly created entry, if it told us.
    pub fn created_id(&self) -> Option<String> {
        self.data
            .as_ref()
            .and_then(|created| created.id.clone())
            .or_else(|| self.id.clone())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Unsigned(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_accepts_string_numeric_and_mongo_ids() {
        let body = r#"{"data":[
            {"id":"a1","url":"https://www.tiktok.com/@x/video/1"},
            {"id":42,"url":"https://www.tiktok.com/@x/video/2"},
            {"_id":"65f0c0ffee","url":"https://www.tiktok.com/@x/video/3","createdAt":"2025-01-01"}
        ]}"#;
        let list: VideoListResponse = serde_json::from_str(body).unwrap();
        let ids: Vec<&str> = list.data.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a1", "42", "65f0c0ffee"]);
        assert_eq!(list.data[2].url, "https://www.tiktok.com/@x/video/3");
    }

    #[test]
    fn missing_data_is_an_empty_list() {
        let list: VideoListResponse = serde_json::from_str("{}").unwrap();
        assert!(list.data.is_empty());
    }

    #[test]
    fn created_id_prefers_nested_data() {
        let reply = StoreReply::parse(r#"{"message":"ok","data":{"_id":7,"url":"u"},"id":"outer"}"#);
        assert_eq!(reply.created_id().as_deref(), Some("7"));

        let reply = StoreReply::parse(r#"{"id":"outer"}"#);
        assert_eq!(reply.created_id().as_deref(), Some("outer"));
    }

    #[test]
    fn unparseable_reply_is_empty() {
        let reply = StoreReply::parse("Created");
        assert_eq!(reply, StoreReply::default());
        assert_eq!(reply.created_id(), None);

        let reply = StoreReply::parse(r#"{"message":"URL không hợp lệ"}"#);
        assert_eq!(reply.message.as_deref(), Some("URL không hợp lệ"));
    }
}
