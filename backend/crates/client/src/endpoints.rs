//! API Endpoints

/// URLs of the bookstore API relative to a base address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// `base_url` is the server root, e.g. `http://localhost:31113`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn authors(&self) -> String {
        format!("{}/api/authors", self.base_url)
    }

    pub fn books(&self) -> String {
        format!("{}/api/books", self.base_url)
    }

    pub fn register(&self) -> String {
        format!("{}/api/users/register", self.base_url)
    }

    pub fn login(&self) -> String {
        format!("{}/api/users/login", self.base_url)
    }
}

/// `{collection}/{id}`
pub fn item_url(collection: &str, id: i32) -> String {
    format!("{}/{}", collection.trim_end_matches('/'), id)
}
