// src/domain/vote/tally.rs
use crate::domain::ids::UserId;
use crate::domain::vote::entity::Vote;

/// Aggregated view of the votes cast on one question or answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub votes_count: u64,
    /// Sum of vote values. Not clamped.
    pub score: i64,
    /// The viewer's own vote, when a viewer was given and has voted.
    pub viewer_vote: Option<Vote>,
}

impl VoteTally {
    /// Fold the votes cast on a single target. Votes for other targets must
    /// already be filtered out by the caller.
    pub fn from_votes<'a, I>(votes: I, viewer: Option<UserId>) -> Self
    where
        I: IntoIterator<Item = &'a Vote>,
    {
        votes.into_iter().fold(Self::default(), |mut tally, vote| {
            tally.votes_count += 1;
            tally.score += vote.value.as_i64();
            if tally.viewer_vote.is_none() && viewer == Some(vote.voter) {
                tally.viewer_vote = Some(vote.clone());
            }
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::{QuestionId, VoteId};
    use crate::domain::post::PostRef;
    use crate::domain::vote::VoteValue;

    fn vote(id: i64, voter: i64, value: VoteValue) -> Vote {
        Vote {
            id: VoteId(id),
            target: PostRef::Question(QuestionId(1)),
            voter: UserId(voter),
            value,
        }
    }

    #[test]
    fn empty_tally_is_zero() {
        let tally = VoteTally::from_votes(&[], Some(UserId(1)));
        assert_eq!(tally, VoteTally::default());
    }

    #[test]
    fn score_is_sum_and_count_is_len() {
        let votes = vec![
            vote(1, 1, VoteValue::Up),
            vote(2, 2, VoteValue::Down),
            vote(3, 3, VoteValue::Down),
            vote(4, 4, VoteValue::Down),
        ];

        let tally = VoteTally::from_votes(&votes, None);

        assert_eq!(tally.votes_count, 4);
        assert_eq!(tally.score, -2);
        assert!(tally.viewer_vote.is_none());
    }

    #[test]
    fn picks_the_viewers_vote() {
        let votes = vec![vote(1, 1, VoteValue::Up), vote(2, 2, VoteValue::Down)];

        let tally = VoteTally::from_votes(&votes, Some(UserId(2)));

        assert_eq!(tally.viewer_vote, Some(votes[1].clone()));
        let stranger = VoteTally::from_votes(&votes, Some(UserId(9)));
        assert!(stranger.viewer_vote.is_none());
        assert_eq!(stranger.score, 0);
    }
}
