use std::{cmp::Reverse, str::FromStr};

use crate::{parse_timestamp, Draft, Error, Time};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FeedFilter {
    #[default]
    Popular,
    Recent,
    Score,
}

impl FeedFilter {
    pub const ALL: [FeedFilter; 3] = [FeedFilter::Popular, FeedFilter::Recent, FeedFilter::Score];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedFilter::Popular => "popular",
            FeedFilter::Recent => "recent",
            FeedFilter::Score => "score",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedFilter::Popular => "Most Popular",
            FeedFilter::Recent => "Most Recent",
            FeedFilter::Score => "Top Scored",
        }
    }
}

impl FromStr for FeedFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<FeedFilter, Error> {
        FeedFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnknownFilter(s.to_string()))
    }
}

/// Stable sort of the feed, best first
pub fn sort_drafts(filter: FeedFilter, drafts: &mut [Draft]) {
    match filter {
        FeedFilter::Popular => drafts.sort_by_key(|d| Reverse(d.likes())),
        FeedFilter::Recent => drafts.sort_by_cached_key(|d| {
            // Undated drafts go last
            let date: Option<Time> = d
                .created_at
                .as_deref()
                .and_then(|c| parse_timestamp(c).ok());
            Reverse(date)
        }),
        FeedFilter::Score => drafts.sort_by(|a, b| b.score().total_cmp(&a.score())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Report;

    fn draft(id: &str, likes: u64, created_at: Option<&str>, score: Option<f64>) -> Draft {
        let mut d = Draft::stub(id);
        d.likes = Some(likes);
        d.created_at = created_at.map(String::from);
        d.report = score.map(|s| Report {
            score: Some(s),
            ..Report::default()
        });
        d
    }

    fn ids(drafts: &[Draft]) -> Vec<&str> {
        drafts.iter().map(|d| &d.id.0 as &str).collect()
    }

    fn example_feed() -> Vec<Draft> {
        vec![
            draft("a", 5, Some("2025-02-20T15:30:00"), Some(81.)),
            draft("b", 40, None, None),
            draft("c", 5, Some("2025-02-22T09:45:00Z"), Some(93.5)),
            draft("d", 12, Some("garbage"), Some(70.)),
        ]
    }

    #[test]
    fn parse_filter() {
        assert_eq!("recent".parse::<FeedFilter>(), Ok(FeedFilter::Recent));
        assert_eq!(
            "trending".parse::<FeedFilter>(),
            Err(Error::UnknownFilter(String::from("trending")))
        );
    }

    #[test]
    fn popular() {
        let mut feed = example_feed();
        sort_drafts(FeedFilter::Popular, &mut feed);
        assert_eq!(ids(&feed), ["b", "d", "a", "c"]);
    }

    #[test]
    fn recent() {
        let mut feed = example_feed();
        sort_drafts(FeedFilter::Recent, &mut feed);
        assert_eq!(ids(&feed), ["c", "a", "b", "d"]);
    }

    #[test]
    fn recent_same_day() {
        let mut feed = vec![
            draft("morning", 0, Some("2025-02-20T09:00:00"), None),
            draft("evening", 0, Some("2025-02-20T18:00:00"), None),
            draft("noon", 0, Some("2025-02-20T13:00:00+01:00"), None),
        ];
        sort_drafts(FeedFilter::Recent, &mut feed);
        assert_eq!(ids(&feed), ["evening", "noon", "morning"]);
    }

    #[test]
    fn labels() {
        let labels = FeedFilter::ALL.map(|f| f.label());
        assert_eq!(labels, ["Most Popular", "Most Recent", "Top Scored"]);
    }

    #[test]
    fn score() {
        let mut feed = example_feed();
        sort_drafts(FeedFilter::Score, &mut feed);
        assert_eq!(ids(&feed), ["c", "a", "d", "b"]);
    }
}
