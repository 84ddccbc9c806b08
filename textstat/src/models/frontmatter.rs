// src/models/frontmatter.rs
use serde::Deserialize;

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: Option<String>,
}
