use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shopping platforms a query is compared across
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Amazon,
    Flipkart,
    Meesho,
    Ajio,
    Myntra,
    Snapdeal,
}

impl Platform {
    /// Every supported platform, in display order
    pub const ALL: [Platform; 6] = [
        Platform::Amazon,
        Platform::Flipkart,
        Platform::Meesho,
        Platform::Ajio,
        Platform::Myntra,
        Platform::Snapdeal,
    ];

    /// Drops repeats, keeping the first occurrence of each platform
    pub fn distinct(platforms: &[Platform]) -> Vec<Platform> {
        let mut seen = Vec::with_capacity(platforms.len());
        for &platform in platforms {
            if !seen.contains(&platform) {
                seen.push(platform);
            }
        }
        seen
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::Flipkart => "Flipkart",
            Platform::Meesho => "Meesho",
            Platform::Ajio => "Ajio",
            Platform::Myntra => "Myntra",
            Platform::Snapdeal => "Snapdeal",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::Flipkart => "flipkart",
            Platform::Meesho => "meesho",
            Platform::Ajio => "ajio",
            Platform::Myntra => "myntra",
            Platform::Snapdeal => "snapdeal",
        }
    }

    /// Search page URL; the encoded query is appended verbatim
    fn search_url_prefix(&self) -> &'static str {
        match self {
            Platform::Amazon => "https://www.amazon.in/s?k=",
            Platform::Flipkart => "https://www.flipkart.com/search?q=",
            Platform::Meesho => "https://www.meesho.com/search?q=",
            Platform::Ajio => "https://www.ajio.com/search/?text=",
            Platform::Myntra => "https://www.myntra.com/search?rawQuery=",
            Platform::Snapdeal => "https://www.snapdeal.com/search?keyword=",
        }
    }

    /// Deep link to this platform's search results for `query`
    pub fn search_url(&self, query: &str) -> String {
        format!("{}{}", self.search_url_prefix(), urlencoding::encode(query))
    }

    /// Recovers the query from a URL built by [`Platform::search_url`]
    ///
    /// Returns `None` if the URL belongs to another platform or is not valid UTF-8
    /// once decoded.
    pub fn query_from_url(&self, url: &str) -> Option<String> {
        let encoded = url.strip_prefix(self.search_url_prefix())?;
        urlencoding::decode(encoded).ok().map(|q| q.into_owned())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid platform: {}. Supported platforms: {}",
                    s,
                    Platform::ALL
                        .iter()
                        .map(|p| p.slug())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
