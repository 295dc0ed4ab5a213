use crate::{
    user::{avatar, non_empty},
    Avatar,
};

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct DraftId(pub String);

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Grade metadata computed by the scoring pipeline
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Report {
    pub letter: Option<String>,

    /// CSS class for the badge background
    pub color: Option<String>,

    #[serde(deserialize_with = "display_score::deserialize")]
    pub display_score: Option<String>,

    pub score: Option<f64>,
    pub analysis: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
    pub comparison: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pick {
    pub round: u32,
    pub pick_number: u32,
    pub team: String,
    pub player_name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Draft {
    pub id: DraftId,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub report: Option<Report>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rounds: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub selected_teams: Vec<String>,
    #[serde(default)]
    pub likes: Option<u64>,
    #[serde(default, rename = "userLiked")]
    pub user_liked: bool,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default, deserialize_with = "results::deserialize")]
    pub results: Vec<Pick>,
}

impl Draft {
    pub const DEFAULT_LETTER: &'static str = "B";
    pub const DEFAULT_DISPLAY_SCORE: &'static str = "85";
    pub const DEFAULT_COLOR: &'static str = "bg-gray-600";

    pub fn stub(id: &str) -> Draft {
        Draft {
            id: DraftId(id.to_string()),
            username: None,
            avatar_url: None,
            created_at: None,
            report: None,
            name: None,
            rounds: None,
            selected_teams: Vec::new(),
            likes: None,
            user_liked: false,
            views: None,
            results: Vec::new(),
        }
    }

    pub fn author_name(&self) -> &str {
        non_empty(&self.username).unwrap_or("Anonymous")
    }

    pub fn author_avatar(&self) -> Avatar {
        avatar(
            self.avatar_url.as_deref(),
            non_empty(&self.username),
            'D',
        )
    }

    pub fn title(&self) -> &str {
        non_empty(&self.name).unwrap_or("Unnamed Draft")
    }

    pub fn grade_letter(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| non_empty(&r.letter))
            .unwrap_or(Self::DEFAULT_LETTER)
    }

    pub fn display_score(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| non_empty(&r.display_score))
            .unwrap_or(Self::DEFAULT_DISPLAY_SCORE)
    }

    pub fn grade_color(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| non_empty(&r.color))
            .unwrap_or(Self::DEFAULT_COLOR)
    }

    /// Number of rounds, a missing or zero count shows as one round
    pub fn rounds(&self) -> u32 {
        self.rounds.filter(|r| *r != 0).unwrap_or(1)
    }

    pub fn rounds_label(&self) -> String {
        match self.rounds() {
            1 => String::from("1 Round"),
            n => format!("{n} Rounds"),
        }
    }

    /// First selected team, followed by `+N` for the others
    pub fn team_tag(&self) -> Option<String> {
        let (first, rest) = self.selected_teams.split_first()?;
        Some(match rest.len() {
            0 => first.clone(),
            n => format!("{first}+{n}"),
        })
    }

    pub fn likes(&self) -> u64 {
        self.likes.unwrap_or(0)
    }

    pub fn views(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    pub fn score(&self) -> f64 {
        self.report.as_ref().and_then(|r| r.score).unwrap_or(0.)
    }

    /// Picks of every round, in pick order
    pub fn picks_by_round(&self) -> Vec<(u32, Vec<&Pick>)> {
        (1..=self.rounds())
            .map(|round| {
                let mut picks = self
                    .results
                    .iter()
                    .filter(|p| p.round == round)
                    .collect::<Vec<_>>();
                picks.sort_by_key(|p| p.pick_number);
                (round, picks)
            })
            .collect()
    }

    pub fn is_selected_team_pick(&self, pick: &Pick) -> bool {
        self.selected_teams.contains(&pick.team)
    }

    /// Returns whether the like was actually recorded
    pub fn record_like(&mut self) -> bool {
        if self.user_liked {
            return false;
        }
        self.likes = Some(self.likes() + 1);
        self.user_liked = true;
        true
    }
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Picks are stored either as a list or as a JSON-encoded string of one
mod results {
    use super::Pick;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<Pick>),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Pick>, D::Error> {
        Ok(match Option::<Raw>::deserialize(d)? {
            None => Vec::new(),
            Some(Raw::List(l)) => l,
            Some(Raw::Text(t)) => serde_json::from_str(&t).unwrap_or_else(|e| {
                tracing::debug!(error=%e, "ignoring unparsable draft results");
                Vec::new()
            }),
        })
    }
}

mod display_score {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(Option::<Raw>::deserialize(d)?.map(|r| match r {
            Raw::Text(s) => s,
            Raw::Number(n) => n.to_string(),
        }))
    }
}
