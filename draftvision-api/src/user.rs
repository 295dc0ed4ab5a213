#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserId(pub String);

/// The currently authenticated viewer of the feed
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Avatar {
    Image(String),
    Initial(String),
}

/// Picks the avatar to show for an author
///
/// The picture wins when there is one, otherwise the first letter of the
/// username is shown uppercased, or `fallback` if there is no usable username.
pub fn avatar(avatar_url: Option<&str>, username: Option<&str>, fallback: char) -> Avatar {
    if let Some(url) = avatar_url.filter(|u| !u.trim().is_empty()) {
        return Avatar::Image(url.to_string());
    }
    let initial = username
        .and_then(|n| n.chars().next())
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| fallback.to_string());
    Avatar::Initial(initial)
}

/// Treats empty strings the same as missing ones
pub(crate) fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}
