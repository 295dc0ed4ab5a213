use std::str::FromStr;

use anyhow::Context;
use draftvision_api::{Draft, DraftId, Pick, Report};
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

// Server-side rendering (tests) has no browser to ask
#[cfg(not(target_arch = "wasm32"))]
fn get_timezone() -> String {
    String::from("UTC")
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        chrono_tz::Tz::from_str(&name).unwrap_or_else(|_| {
            tracing::warn!(timezone=%name, "host timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

/// Loads `key` from local storage, `None` if it was never saved
pub fn load<T: for<'de> serde::Deserialize<'de>>(key: &str) -> anyhow::Result<Option<T>> {
    match LocalStorage::get(key) {
        Ok(v) => Ok(Some(v)),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("loading {key:?} from local storage")),
    }
}

/// Storage failures only cost persistence across reloads, so they are logged and ignored
pub fn save<T: serde::Serialize>(key: &str, value: &T) {
    if let Err(e) = LocalStorage::set(key, value) {
        tracing::warn!(key, error=%e, "failed saving to local storage");
    }
}

fn sample_report(letter: &str, color: &str, score: f64, analysis: &str) -> Report {
    Report {
        letter: Some(String::from(letter)),
        color: Some(String::from(color)),
        display_score: Some(format!("{score:.2}")),
        score: Some(score),
        analysis: Some(String::from(analysis)),
        strengths: vec![
            String::from("Consistent value picks across rounds"),
            String::from("Addressed the biggest team needs early"),
        ],
        weaknesses: vec![String::from("Thin at secondary positions")],
        comparison: Some(String::from("Better than 72% of community drafts")),
    }
}

fn sample_draft(id: &str, name: &str, created_at: &str, rounds: u32, teams: [&str; 2], user: &str) -> Draft {
    Draft {
        name: Some(String::from(name)),
        created_at: Some(String::from(created_at)),
        rounds: Some(rounds),
        selected_teams: teams.into_iter().map(String::from).collect(),
        username: Some(format!("user_{user}")),
        ..Draft::stub(id)
    }
}

/// Drafts shown when the feed has nothing yet
pub fn sample_drafts() -> Vec<Draft> {
    let mut drafts = vec![
        sample_draft(
            "1a2b3c",
            "2025 First Round Focus",
            "2025-02-20T15:30:00",
            3,
            ["Arizona Cardinals", "Chicago Bears"],
            "sampl",
        ),
        sample_draft(
            "4d5e6f",
            "QB-Heavy Strategy",
            "2025-02-18T12:15:00",
            7,
            ["Miami Dolphins", "New York Jets"],
            "sampl",
        ),
        sample_draft(
            "7g8h9i",
            "Defense First Approach",
            "2025-02-22T09:45:00",
            5,
            ["Baltimore Ravens", "Pittsburgh Steelers"],
            "sampl",
        ),
    ];
    let reports = [
        sample_report(
            "B+",
            "bg-blue-500",
            87.5,
            "Very strong draft with high-value picks addressing key team needs.",
        ),
        sample_report(
            "C+",
            "bg-yellow-500",
            78.25,
            "Above average draft with good value in several rounds.",
        ),
        sample_report(
            "A-",
            "bg-green-500",
            91.,
            "Outstanding draft with excellent value selections and strong team need consideration.",
        ),
    ];
    for ((d, r), (likes, views)) in drafts
        .iter_mut()
        .zip(reports)
        .zip([(42, 310), (17, 128), (65, 402)])
    {
        d.report = Some(r);
        d.likes = Some(likes);
        d.views = Some(views);
    }
    drafts[0].results = [
        (1, 3, "Arizona Cardinals", "Travis Hunter"),
        (1, 10, "Chicago Bears", "Will Campbell"),
        (2, 35, "Arizona Cardinals", "Mike Green"),
        (2, 42, "Chicago Bears", "Kenneth Grant"),
    ]
    .into_iter()
    .map(|(round, pick_number, team, player)| Pick {
        round,
        pick_number,
        team: String::from(team),
        player_name: String::from(player),
    })
    .collect();
    drafts
}

pub fn find_draft<'a>(drafts: &'a mut [Draft], id: &DraftId) -> Option<&'a mut Draft> {
    drafts.iter_mut().find(|d| d.id == *id)
}
