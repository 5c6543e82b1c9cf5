//! Hand-written models shared by the unit tests

use crate::{Decodable, Decoder, Encodable, Encoder, JsonObject};
use std::fmt;
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Swift,
    Rust,
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Swift" => Ok(Language::Swift),
            "Rust" => Ok(Language::Rust),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Swift => f.write_str("Swift"),
            Language::Rust => f.write_str("Rust"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: u64,
    pub login: String,
    pub html_url: Option<Url>,
}

impl Decodable for Owner {
    fn from_json(json: &JsonObject) -> Option<Self> {
        let decoder = Decoder::new(json);
        Some(Self {
            id: decoder.field("id")?,
            login: decoder.field("login")?,
            html_url: decoder.field("html_url"),
        })
    }
}

impl Encodable for Owner {
    fn to_json(&self) -> JsonObject {
        Encoder::new()
            .field("id", &self.id)
            .field("login", &self.login)
            .optional("html_url", &self.html_url)
            .build()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Repo {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub url: Url,
    pub owner: Owner,
    pub owner_url: Url,
    pub language: Option<Language>,
}

impl Decodable for Repo {
    fn from_json(json: &JsonObject) -> Option<Self> {
        let decoder = Decoder::new(json);
        Some(Self {
            id: decoder.field("id")?,
            name: decoder.field("name")?,
            description: decoder.field("description"),
            url: decoder.field("html_url")?,
            owner: decoder.nested("owner")?,
            owner_url: decoder.field("owner.html_url")?,
            language: decoder.parsed("language"),
        })
    }
}

impl Encodable for Repo {
    fn to_json(&self) -> JsonObject {
        Encoder::new()
            .field("id", &self.id)
            .field("name", &self.name)
            .optional("description", &self.description)
            .field("html_url", &self.url)
            .nested("owner", &self.owner)
            .field("owner.html_url", &self.owner_url)
            .optional_display("language", &self.language)
            .build()
    }
}

pub fn repo_json() -> crate::JsonValue {
    serde_json::json!({
        "id": 1,
        "name": "Gloss",
        "description": "desc",
        "html_url": "http://x",
        "owner": {"id": 2, "login": "a", "html_url": "http://y"}
    })
}
