use chrono::Utc;

pub use uuid::Uuid;
pub type Time = chrono::DateTime<Utc>;

mod comment;
pub use comment::{Comment, CommentId, DraftComments};

mod date;
pub use date::{format_date, parse_created_at, parse_timestamp, UNKNOWN_DATE};

mod draft;
pub use draft::{Draft, DraftId, Pick, Report};

mod error;
pub use error::Error;

mod feed;
pub use feed::{sort_drafts, FeedFilter};

mod panel;
pub use panel::PanelState;

mod user;
pub use user::{avatar, Avatar, User, UserId};
