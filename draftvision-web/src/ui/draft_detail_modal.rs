use draftvision_api::{format_date, Draft, Pick};
use yew::prelude::*;

use crate::util;

#[derive(Clone, PartialEq, Properties)]
pub struct DraftDetailModalProps {
    pub draft: Draft,
    pub on_close: Callback<()>,
}

#[function_component(DraftDetailModal)]
pub fn draft_detail_modal(p: &DraftDetailModalProps) -> Html {
    let d = &p.draft;
    html! {
        <div class="modal d-block" tabindex="-1" role="dialog">
            <div class="modal-dialog modal-dialog-centered modal-lg modal-dialog-scrollable">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{ d.title() }</h5>
                        <span class={ classes!("grade-badge", d.grade_color().to_string(), "rounded-pill", "px-3", "py-1", "ms-3", "fw-bold") }>
                            { format!("{} ({})", d.grade_letter(), d.display_score()) }
                        </span>
                        <button
                            type="button"
                            class="btn-close"
                            aria-label="Close"
                            onclick={ p.on_close.reform(|_| ()) }
                        >
                        </button>
                    </div>
                    <div class="modal-body">
                        <div class="row g-3 mb-3">
                            <div class="col-md-6">{ info(d) }</div>
                            <div class="col-md-6">{ teams(d) }</div>
                        </div>
                        { for d.report.as_ref().and_then(|r| r.analysis.as_ref()).map(|a| html! {
                            <div class="analysis-panel p-3 rounded small mb-3">
                                <h4 class="h6 fw-semibold">{ "Draft Analysis" }</h4>
                                <p class="mb-0">{ a }</p>
                            </div>
                        }) }
                        { picks(d) }
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-secondary" onclick={ p.on_close.reform(|_| ()) }>
                            { "Close" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn info(d: &Draft) -> Html {
    html! {
        <>
            <h4 class="h6 fw-semibold">{ "Draft Info" }</h4>
            <dl class="row small mb-0">
                <dt class="col-4">{ "Created" }</dt>
                <dd class="col-8">{ format_date(d.created_at.as_deref(), &util::local_tz()) }</dd>
                <dt class="col-4">{ "Rounds" }</dt>
                <dd class="col-8">{ d.rounds() }</dd>
                <dt class="col-4">{ "Created by" }</dt>
                <dd class="col-8">{ d.author_name() }</dd>
            </dl>
        </>
    }
}

fn teams(d: &Draft) -> Html {
    let body = match d.selected_teams.is_empty() {
        true => html! { <p class="small text-muted mb-0">{ "No team data available" }</p> },
        false => html! {
            <div class="d-flex flex-wrap gap-2">
                { for d.selected_teams.iter().map(|t| html! {
                    <span class="badge bg-purple">{ t }</span>
                }) }
            </div>
        },
    };
    html! {
        <>
            <h4 class="h6 fw-semibold">{ "Teams" }</h4>
            { body }
        </>
    }
}

fn picks(d: &Draft) -> Html {
    if d.results.is_empty() {
        return html! { <p class="small text-muted mb-0">{ "No draft pick data available" }</p> };
    }
    html! {
        <div class="d-flex flex-column gap-3">
            { for d.picks_by_round().into_iter().map(|(round, picks)| html! {
                <div class="draft-round">
                    <h4 class="h6 fw-semibold mb-2">{ format!("Round {round}") }</h4>
                    {
                        match picks.is_empty() {
                            true => html! { <p class="small text-muted mb-0">{ "No picks for this round" }</p> },
                            false => html! {
                                <ul class="list-group list-group-flush small">
                                    { for picks.into_iter().map(|pick| pick_item(d, pick)) }
                                </ul>
                            },
                        }
                    }
                </div>
            }) }
        </div>
    }
}

fn pick_item(d: &Draft, pick: &Pick) -> Html {
    let selected = d.is_selected_team_pick(pick);
    html! {
        <li class={ classes!("list-group-item", "d-flex", "gap-3", selected.then(|| "selected-pick")) }>
            <span class="fw-semibold">{ format!("#{}", pick.pick_number) }</span>
            <span class="text-muted">{ &pick.team }</span>
            <span class="ms-auto">{ &pick.player_name }</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftvision_api::Report;

    async fn render(draft: Draft) -> String {
        yew::ServerRenderer::<DraftDetailModal>::with_props(move || DraftDetailModalProps {
            draft,
            on_close: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    fn pick(round: u32, pick_number: u32, team: &str, player: &str) -> Pick {
        Pick {
            round,
            pick_number,
            team: String::from(team),
            player_name: String::from(player),
        }
    }

    #[tokio::test]
    async fn bare_draft() {
        let html = render(Draft::stub("x")).await;
        assert!(html.contains("Unnamed Draft"), "{html}");
        assert!(html.contains("Anonymous"));
        assert!(html.contains("No team data available"));
        assert!(html.contains("No draft pick data available"));
        assert!(!html.contains("analysis-panel"));
    }

    #[tokio::test]
    async fn picks_by_round() {
        let mut d = Draft::stub("x");
        d.rounds = Some(2);
        d.selected_teams = vec![String::from("Chicago Bears")];
        d.report = Some(Report {
            analysis: Some(String::from("Strong board")),
            ..Report::default()
        });
        d.results = vec![
            pick(1, 10, "Chicago Bears", "Second"),
            pick(1, 2, "Cleveland Browns", "First"),
        ];
        let html = render(d).await;
        assert!(html.contains("Strong board"), "{html}");
        assert!(html.contains("Round 1"));
        assert!(html.contains("Round 2"));
        assert!(html.contains("No picks for this round"));
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
        assert_eq!(html.matches("selected-pick").count(), 1);
    }
}
