use teloxide::types::{Poll, PollAnswer};
use tracing::info;

pub fn poll_handler(poll: &Poll) {
    info!(
        question = %poll.question,
        total_voters = poll.total_voter_count,
        is_closed = poll.is_closed,
        "Poll update received"
    );
}

pub fn poll_answer_handler(answer: &PollAnswer) {
    info!(
        option = ?answer.option_ids.first(),
        options = ?answer.option_ids,
        "Poll answer received"
    );
}
