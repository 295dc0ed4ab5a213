use std::collections::HashMap;

use crate::{
    user::{avatar, non_empty},
    Avatar, DraftId, Error, Time, User, Uuid,
};

#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CommentId(pub String);

/// Comments of every draft in the feed, each list in display order
pub type DraftComments = HashMap<DraftId, Vec<Comment>>;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default, rename = "userLiked")]
    pub user_liked: bool,
}

impl Comment {
    /// Builds a comment posted by `user` that the backend has not seen yet
    pub fn new_local(user: &User, text: &str, now: Time) -> Result<Comment, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyComment);
        }
        Ok(Comment {
            id: CommentId(Uuid::new_v4().to_string()),
            username: Some(user.name.clone()),
            avatar_url: None,
            created_at: Some(now.to_rfc3339()),
            comment: text.to_string(),
            likes: Some(0),
            user_liked: false,
        })
    }

    pub fn author_name(&self) -> &str {
        non_empty(&self.username).unwrap_or("Anonymous")
    }

    pub fn author_avatar(&self) -> Avatar {
        avatar(
            self.avatar_url.as_deref(),
            non_empty(&self.username),
            'U',
        )
    }

    pub fn likes(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    pub fn toggle_like(&mut self) {
        self.likes = Some(match self.user_liked {
            true => self.likes().saturating_sub(1),
            false => self.likes() + 1,
        });
        self.user_liked = !self.user_liked;
    }

    pub fn find_in<'a>(comments: &'a mut DraftComments, id: &CommentId) -> Option<&'a mut Comment> {
        comments
            .values_mut()
            .flat_map(|v| v.iter_mut())
            .find(|c| c.id == *id)
    }

    pub fn count_for(comments: &DraftComments, draft: &DraftId) -> usize {
        comments.get(draft).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserId;

    fn user() -> User {
        User {
            id: UserId(String::from("u1")),
            name: String::from("alice"),
        }
    }

    #[test]
    fn new_local_comment() {
        let c = Comment::new_local(&user(), "  Great picks!  ", chrono::Utc::now()).unwrap();
        assert_eq!(c.comment, "Great picks!");
        assert_eq!(c.author_name(), "alice");
        assert_eq!(c.author_avatar(), Avatar::Initial(String::from("A")));
        assert_eq!(c.likes(), 0);
        assert_eq!(
            Comment::new_local(&user(), " \n ", chrono::Utc::now()),
            Err(Error::EmptyComment),
        );
    }

    #[test]
    fn anonymous_comment() {
        let c: Comment = serde_json::from_str(r#"{"id": "c1", "comment": "hi"}"#).unwrap();
        assert_eq!(c.author_name(), "Anonymous");
        assert_eq!(c.author_avatar(), Avatar::Initial(String::from("U")));
    }

    #[test]
    fn toggle_like() {
        let mut c: Comment = serde_json::from_str(r#"{"id": "c1", "comment": "hi"}"#).unwrap();
        c.toggle_like();
        assert_eq!((c.likes(), c.user_liked), (1, true));
        c.toggle_like();
        assert_eq!((c.likes(), c.user_liked), (0, false));

        // Liked according to the server, but the count is missing
        c.user_liked = true;
        c.likes = None;
        c.toggle_like();
        assert_eq!((c.likes(), c.user_liked), (0, false));
    }

    #[test]
    fn lookup() {
        let mut comments = DraftComments::new();
        let draft = DraftId(String::from("d1"));
        assert_eq!(Comment::count_for(&comments, &draft), 0);
        let c = Comment::new_local(&user(), "hi", chrono::Utc::now()).unwrap();
        let id = c.id.clone();
        comments.entry(draft.clone()).or_default().push(c);
        assert_eq!(Comment::count_for(&comments, &draft), 1);
        Comment::find_in(&mut comments, &id).unwrap().toggle_like();
        assert!(comments[&draft][0].user_liked);
        assert!(Comment::find_in(&mut comments, &CommentId(String::from("nope"))).is_none());
    }
}
