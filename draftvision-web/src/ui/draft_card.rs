use draftvision_api::{
    format_date, Avatar, Comment, CommentId, Draft, DraftComments, DraftId, PanelState, Report,
    User,
};
use std::rc::Rc;
use yew::prelude::*;

use crate::util;

pub const NO_COMMENTS: &str = "No comments yet. Be the first to comment!";

#[derive(Clone, PartialEq, Properties)]
pub struct DraftCardProps {
    pub draft: Draft,
    pub expanded: PanelState,
    pub on_toggle_expand: Callback<PanelState>,
    pub on_view_details: Callback<DraftId>,
    pub on_like: Callback<DraftId>,
    pub user: Option<User>,
    pub comments: Rc<DraftComments>,
    pub new_comment: String,
    pub on_new_comment_change: Callback<String>,
    pub on_add_comment: Callback<DraftId>,
    pub on_comment_like: Callback<CommentId>,
    pub comment_loading: bool,
    pub on_show_auth_modal: Callback<bool>,
    pub on_set_login_mode: Callback<bool>,
}

#[function_component(DraftCard)]
pub fn draft_card(p: &DraftCardProps) -> Html {
    html! {
        <div class="card draft-card mb-4 shadow-sm">
            <div class="card-body">
                { header(p) }
                <h2 class="h5 card-title mb-2">{ p.draft.title() }</h2>
                { tag_row(&p.draft) }
                { analysis_section(p) }
                { comments_section(p) }
                { footer(p) }
            </div>
        </div>
    }
}

fn header(p: &DraftCardProps) -> Html {
    let d = &p.draft;
    html! {
        <div class="d-flex align-items-center mb-3">
            { avatar(d.author_avatar(), "avatar-md") }
            <div class="ms-3">
                <p class="fw-semibold mb-0">{ d.author_name() }</p>
                <p class="small text-muted mb-0">
                    { format_date(d.created_at.as_deref(), &util::local_tz()) }
                </p>
            </div>
            <div class="ms-auto">
                <div class={ classes!("grade-badge", d.grade_color().to_string(), "rounded-pill", "px-3", "py-1", "fw-bold") }>
                    <span class="me-1">{ d.grade_letter() }</span>
                    <span class="small">{ format!("({})", d.display_score()) }</span>
                </div>
            </div>
        </div>
    }
}

fn avatar(a: Avatar, size: &'static str) -> Html {
    match a {
        Avatar::Image(url) => html! {
            <img src={ url } alt="User" class={ classes!("avatar", size, "rounded-circle") } />
        },
        Avatar::Initial(i) => html! {
            <div class={ classes!("avatar", size, "rounded-circle", "d-flex", "align-items-center", "justify-content-center", "fw-bold") }>
                <span>{ i }</span>
            </div>
        },
    }
}

fn tag_row(d: &Draft) -> Html {
    html! {
        <div class="d-flex gap-2 mb-3">
            <span class="badge bg-indigo">{ d.rounds_label() }</span>
            { for d.team_tag().map(|t| html! {
                <span class="badge bg-purple text-truncate team-tag">{ t }</span>
            }) }
        </div>
    }
}

fn toggle_button(p: &DraftCardProps, panel: PanelState, label: String) -> Html {
    let is_open = p.expanded == panel;
    html! {
        <button
            type="button"
            class="btn btn-link btn-sm p-0 d-flex align-items-center"
            aria-expanded={ if is_open { "true" } else { "false" } }
            onclick={ toggle_callback(p, panel).reform(|_| ()) }
        >
            <span class={ classes!("bi-chevron-right", "me-1", "panel-chevron", is_open.then(|| "rotate-90")) }></span>
            { label }
        </button>
    }
}

fn analysis_section(p: &DraftCardProps) -> Html {
    let panel = PanelState::Analysis(p.draft.id.clone());
    let body = open_report(p).map(|r| {
        let list = |title: &'static str, class: &'static str, items: &[String]| {
            (!items.is_empty()).then(|| html! {
                <div class="mt-2">
                    <h4 class={ classes!("h6", "fw-semibold", "mb-1", class) }>{ title }</h4>
                    <ul class="ps-4 mb-0">
                        { for items.iter().map(|i| html! { <li>{ i }</li> }) }
                    </ul>
                </div>
            })
        };
        html! {
            <div class="analysis-panel mt-3 p-3 rounded small">
                { for r.analysis.as_ref().map(|a| html! { <p class="mb-2">{ a }</p> }) }
                { for list("Strengths:", "text-success", &r.strengths) }
                { for list("Areas for Improvement:", "text-danger", &r.weaknesses) }
                { for r.comparison.as_ref().filter(|c| !c.is_empty()).map(|c| html! {
                    <div class="mt-2 text-info fst-italic">{ c }</div>
                }) }
            </div>
        }
    });
    html! {
        <div class="mt-3">
            { toggle_button(p, panel, String::from("Draft Analysis")) }
            { for body }
        </div>
    }
}

fn comments_section(p: &DraftCardProps) -> Html {
    let id = &p.draft.id;
    let panel = PanelState::Comments(id.clone());
    let count = Comment::count_for(&p.comments, id);
    let body = p.expanded.is_comments_open(id).then(|| {
        let comments = p.comments.get(id).filter(|c| !c.is_empty());
        html! {
            <div class="comments-panel mt-3 p-3 rounded">
                { comment_input(p) }
                {
                    match comments {
                        Some(comments) => html! {
                            <div class="d-flex flex-column gap-3">
                                { for comments.iter().map(|c| comment_item(p, c)) }
                            </div>
                        },
                        None => html! { <p class="small text-muted mb-0">{ NO_COMMENTS }</p> },
                    }
                }
            </div>
        }
    });
    html! {
        <div class="mt-4">
            { toggle_button(p, panel, comments_label(count)) }
            { for body }
        </div>
    }
}

fn comment_input(p: &DraftCardProps) -> Html {
    if p.user.is_none() {
        return html! {
            <div class="login-prompt mb-3 text-center p-2 rounded">
                <p class="mb-0 text-muted">
                    <button type="button" class="btn btn-link p-0 align-baseline" onclick={ login_prompt(p, true).reform(|_| ()) }>
                        { "Sign in" }
                    </button>
                    { " or " }
                    <button type="button" class="btn btn-link p-0 align-baseline" onclick={ login_prompt(p, false).reform(|_| ()) }>
                        { "create an account" }
                    </button>
                    { " to comment" }
                </p>
            </div>
        };
    }
    let button = PostButton::new(p.comment_loading);
    let on_submit = {
        let id = p.draft.id.clone();
        p.on_add_comment.reform(move |_| id.clone())
    };
    html! {
        <div class="input-group mb-3">
            <input
                type="text"
                class="form-control"
                placeholder="Add a comment..."
                value={ p.new_comment.clone() }
                oninput={ p.on_new_comment_change.reform(|e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    input.value()
                }) }
            />
            <button
                type="button"
                class="btn btn-primary"
                disabled={ button.disabled }
                onclick={ on_submit }
            >
                {
                    match button.show_spinner {
                        true => html! {
                            <span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span>
                        },
                        false => html! { { PostButton::LABEL } },
                    }
                }
            </button>
        </div>
    }
}

fn comment_item(p: &DraftCardProps, c: &Comment) -> Html {
    let (heart, heart_color) = match c.user_liked {
        true => ("bi-heart-fill", "text-danger"),
        false => ("bi-heart", "text-muted"),
    };
    html! {
        <div class="comment p-2 rounded" key={ c.id.0.clone() }>
            <div class="d-flex align-items-center mb-1">
                { avatar(c.author_avatar(), "avatar-sm") }
                <span class="ms-2 small fw-medium">{ c.author_name() }</span>
                <span class="ms-2 small text-muted">
                    { format_date(c.created_at.as_deref(), &util::local_tz()) }
                </span>
            </div>
            <p class="small mb-0">{ &c.comment }</p>
            <div class="mt-1 d-flex justify-content-end">
                <button
                    type="button"
                    class="btn btn-sm btn-link p-0 d-flex align-items-center"
                    aria-label="Like comment"
                    onclick={ comment_like_callback(p, c.id.clone()).reform(|_| ()) }
                >
                    <span class={ classes!(heart, heart_color, "me-1") }></span>
                    <span>{ c.likes() }</span>
                </button>
            </div>
        </div>
    }
}

fn footer(p: &DraftCardProps) -> Html {
    let d = &p.draft;
    let (heart, heart_color) = match d.user_liked {
        true => ("bi-heart-fill", Some("text-danger")),
        false => ("bi-heart", None),
    };
    html! {
        <div class="d-flex align-items-center justify-content-between mt-4">
            <div class="d-flex align-items-center gap-3">
                <button
                    type="button"
                    class="btn btn-link p-0 d-flex align-items-center"
                    aria-label="Like draft"
                    onclick={ like_callback(p).reform(|_| ()) }
                >
                    <span class={ classes!(heart, heart_color, "me-1") }></span>
                    <span>{ d.likes() }</span>
                </button>
                <div class="d-flex align-items-center text-muted" title="Views">
                    <span class="bi-eye me-1"></span>
                    <span>{ d.views() }</span>
                </div>
            </div>
            <button type="button" class="btn btn-primary btn-sm" onclick={ view_details_callback(p) }>
                { "View Draft" }
            </button>
        </div>
    }
}

/// Report to show, if the analysis panel of this draft is open and there is one
fn open_report(p: &DraftCardProps) -> Option<&Report> {
    p.draft
        .report
        .as_ref()
        .filter(|_| p.expanded.is_analysis_open(&p.draft.id))
}

fn comments_label(count: usize) -> String {
    format!("Comments ({count})")
}

#[derive(Debug, Eq, PartialEq)]
struct PostButton {
    disabled: bool,
    show_spinner: bool,
}

impl PostButton {
    const LABEL: &'static str = "Post";

    fn new(comment_loading: bool) -> PostButton {
        PostButton {
            disabled: comment_loading,
            show_spinner: comment_loading,
        }
    }
}

fn toggle_callback(p: &DraftCardProps, panel: PanelState) -> Callback<()> {
    p.on_toggle_expand.reform(move |_| panel.clone())
}

/// Asks the parent to open the auth modal, in sign-in mode if `is_login`
fn login_prompt(p: &DraftCardProps, is_login: bool) -> Callback<()> {
    let on_set_login_mode = p.on_set_login_mode.clone();
    let on_show_auth_modal = p.on_show_auth_modal.clone();
    Callback::from(move |_| {
        on_set_login_mode.emit(is_login);
        on_show_auth_modal.emit(true);
    })
}

/// Emits `value` on `cb` when someone is logged in, and prompts for login otherwise
fn auth_gated<T: Clone + 'static>(p: &DraftCardProps, cb: &Callback<T>, value: T) -> Callback<()> {
    match p.user {
        Some(_) => cb.reform(move |_| value.clone()),
        None => login_prompt(p, true),
    }
}

fn view_details_callback(p: &DraftCardProps) -> Callback<MouseEvent> {
    let id = p.draft.id.clone();
    p.on_view_details.reform(move |_| id.clone())
}

fn like_callback(p: &DraftCardProps) -> Callback<()> {
    auth_gated(p, &p.on_like, p.draft.id.clone())
}

fn comment_like_callback(p: &DraftCardProps, id: CommentId) -> Callback<()> {
    auth_gated(p, &p.on_comment_like, id)
}
