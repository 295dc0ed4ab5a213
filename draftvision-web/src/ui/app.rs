use draftvision_api::{
    sort_drafts, Comment, CommentId, Draft, DraftComments, DraftId, FeedFilter, PanelState, User,
    UserId, Uuid,
};
use std::rc::Rc;
use yew::prelude::*;

use crate::{ui, util};

const KEY_USER: &str = "user";
const KEY_DRAFTS: &str = "community-drafts";
const KEY_COMMENTS: &str = "community-comments";
const KEY_FILTER: &str = "community-filter";

pub enum AppMsg {
    SetFilter(FeedFilter),
    ToggleExpand(PanelState),
    ViewDetails(DraftId),
    CloseDetails,
    Like(DraftId),

    NewCommentChanged(String),
    AddComment(DraftId),
    CommentPosted(DraftId, Comment),
    CommentLike(CommentId),

    ShowAuthModal(bool),
    SetLoginMode(bool),
    Login(String),
    Logout,
}

pub struct App {
    drafts: Vec<Draft>,
    comments: Rc<DraftComments>,
    filter: FeedFilter,
    expanded: PanelState,
    viewing: Option<DraftId>,
    new_comment: String,
    comment_loading: bool,
    user: Option<User>,
    show_auth_modal: bool,
    is_login_modal: bool,
}

fn load_or_default<T: Default + for<'de> serde::Deserialize<'de>>(key: &str) -> T {
    util::load(key)
        .unwrap_or_else(|e| {
            tracing::warn!(error=?e, "discarding unreadable local data");
            None
        })
        .unwrap_or_default()
}

fn load_filter() -> FeedFilter {
    saved_filter(load_or_default(KEY_FILTER))
}

fn saved_filter(raw: Option<String>) -> FeedFilter {
    raw.and_then(|f| {
        f.parse::<FeedFilter>()
            .map_err(|e| tracing::warn!(error=%e, "ignoring saved filter"))
            .ok()
    })
    .unwrap_or_default()
}

impl App {
    fn save_drafts(&self) {
        util::save(KEY_DRAFTS, &self.drafts);
    }

    fn save_comments(&self) {
        util::save(KEY_COMMENTS, &*self.comments);
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let filter = load_filter();
        let mut drafts: Vec<Draft> = load_or_default(KEY_DRAFTS);
        if drafts.is_empty() {
            tracing::debug!("no cached drafts, showing samples");
            drafts = util::sample_drafts();
        }
        sort_drafts(filter, &mut drafts);
        App {
            drafts,
            comments: Rc::new(load_or_default(KEY_COMMENTS)),
            filter,
            expanded: PanelState::Closed,
            viewing: None,
            new_comment: String::new(),
            comment_loading: false,
            user: load_or_default(KEY_USER),
            show_auth_modal: false,
            is_login_modal: true,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::SetFilter(f) => {
                self.filter = f;
                sort_drafts(f, &mut self.drafts);
                util::save(KEY_FILTER, &f.as_str());
            }
            AppMsg::ToggleExpand(requested) => {
                self.expanded = self.expanded.toggled(requested);
            }
            AppMsg::ViewDetails(id) => {
                tracing::debug!(draft=%id, "showing draft details");
                self.viewing = Some(id);
            }
            AppMsg::CloseDetails => self.viewing = None,
            AppMsg::Like(id) => {
                let liked = util::find_draft(&mut self.drafts, &id)
                    .map(|d| d.record_like())
                    .unwrap_or(false);
                if !liked {
                    return false;
                }
                tracing::debug!(draft=%id, "draft liked");
                self.save_drafts();
            }
            AppMsg::NewCommentChanged(c) => self.new_comment = c,
            AppMsg::AddComment(id) => {
                let user = match &self.user {
                    Some(u) => u,
                    None => {
                        tracing::warn!("comment submitted without a logged-in user");
                        return false;
                    }
                };
                if self.comment_loading {
                    return false;
                }
                let comment = match Comment::new_local(user, &self.new_comment, chrono::Utc::now()) {
                    Ok(c) => c,
                    Err(e) => {
                        tracing::debug!(error=%e, "ignoring comment submission");
                        return false;
                    }
                };
                self.comment_loading = true;
                ctx.link()
                    .send_future(async move { AppMsg::CommentPosted(id, comment) });
            }
            AppMsg::CommentPosted(id, comment) => {
                tracing::debug!(draft=%id, comment=?comment.id, "comment posted");
                Rc::make_mut(&mut self.comments)
                    .entry(id)
                    .or_default()
                    .push(comment);
                self.new_comment.clear();
                self.comment_loading = false;
                self.save_comments();
            }
            AppMsg::CommentLike(id) => {
                match Comment::find_in(Rc::make_mut(&mut self.comments), &id) {
                    Some(c) => c.toggle_like(),
                    None => {
                        tracing::warn!(comment=?id, "like for unknown comment");
                        return false;
                    }
                }
                self.save_comments();
            }
            AppMsg::ShowAuthModal(show) => self.show_auth_modal = show,
            AppMsg::SetLoginMode(is_login) => self.is_login_modal = is_login,
            AppMsg::Login(name) => {
                let user = User {
                    id: UserId(Uuid::new_v4().to_string()),
                    name,
                };
                tracing::info!(user=%user.name, "logged in");
                util::save(KEY_USER, &Some(&user));
                self.user = Some(user);
                self.show_auth_modal = false;
            }
            AppMsg::Logout => {
                util::save(KEY_USER, &None::<User>);
                self.user = None;
                self.new_comment.clear();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let cards = self.drafts.iter().map(|d| {
            html! {
                <ui::DraftCard
                    key={ d.id.0.clone() }
                    draft={ d.clone() }
                    expanded={ self.expanded.clone() }
                    on_toggle_expand={ link.callback(AppMsg::ToggleExpand) }
                    on_view_details={ link.callback(AppMsg::ViewDetails) }
                    on_like={ link.callback(AppMsg::Like) }
                    user={ self.user.clone() }
                    comments={ self.comments.clone() }
                    new_comment={ self.new_comment.clone() }
                    on_new_comment_change={ link.callback(AppMsg::NewCommentChanged) }
                    on_add_comment={ link.callback(AppMsg::AddComment) }
                    on_comment_like={ link.callback(AppMsg::CommentLike) }
                    comment_loading={ self.comment_loading }
                    on_show_auth_modal={ link.callback(AppMsg::ShowAuthModal) }
                    on_set_login_mode={ link.callback(AppMsg::SetLoginMode) }
                />
            }
        });
        let session = match &self.user {
            Some(u) => html! {
                <div class="d-flex align-items-center gap-2">
                    <span class="text-muted">{ &u.name }</span>
                    <button type="button" class="btn btn-outline-secondary btn-sm" onclick={ link.callback(|_| AppMsg::Logout) }>
                        { "Logout" }
                    </button>
                </div>
            },
            None => html! {
                <button
                    type="button"
                    class="btn btn-primary btn-sm"
                    onclick={ link.batch_callback(|_| vec![AppMsg::SetLoginMode(true), AppMsg::ShowAuthModal(true)]) }
                >
                    { "Sign In" }
                </button>
            },
        };
        let auth_modal = self.show_auth_modal.then(|| html! {
            <ui::AuthModal
                is_login={ self.is_login_modal }
                on_submit={ link.callback(AppMsg::Login) }
                on_set_login_mode={ link.callback(AppMsg::SetLoginMode) }
                on_close={ link.callback(|_| AppMsg::ShowAuthModal(false)) }
            />
        });
        let details = self
            .viewing
            .as_ref()
            .and_then(|id| self.drafts.iter().find(|d| d.id == *id))
            .map(|d| html! {
                <ui::DraftDetailModal
                    draft={ d.clone() }
                    on_close={ link.callback(|_| AppMsg::CloseDetails) }
                />
            });
        html! {
            <div class="container py-4">
                <div class="d-flex align-items-center justify-content-between mb-3">
                    <h1 class="h3 mb-0">{ "Community Drafts" }</h1>
                    { session }
                </div>
                <ui::FilterBar active={ self.filter } on_select_filter={ link.callback(AppMsg::SetFilter) } />
                <div class="draft-feed">
                    { for cards }
                </div>
                { for details }
                { for auth_modal }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_filter_names() {
        for f in FeedFilter::ALL {
            assert_eq!(saved_filter(Some(f.as_str().to_string())), f);
        }
        assert_eq!(saved_filter(Some(String::from("Score"))), FeedFilter::Popular);
        assert_eq!(saved_filter(None), FeedFilter::Popular);
    }
}
