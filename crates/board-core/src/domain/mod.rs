//! Domain entities - the core business objects.

mod comment;
mod page;
mod post;

pub use comment::{Comment, NewComment};
pub use page::{Direction, Page, PageRequest, Sort, SortField};
pub use post::{NewPost, Post, PostChanges, PostWithComments};

use chrono::{DateTime, Duration, SubsecRound, Utc};

/// Current time, truncated to the microsecond precision the store keeps.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A timestamp strictly later than `previous`, even if the clock has not moved.
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
