//! Text instance format.
//!
//! ```text
//! item_count group_count capacity
//! profit[0] .. profit[item_count-1]
//! weight[0] .. weight[item_count-1]
//! -- group_count times --
//! limit penalty member_count
//! member_0 .. member_{member_count-1}
//! ```
//!
//! Tokens are whitespace separated; line breaks carry no meaning.

use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use super::{ForfeitSet, Instance};
use crate::error::{KpfsError, KpfsResult};

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> KpfsResult<T> {
        let token = self
            .inner
            .next()
            .ok_or(KpfsError::UnexpectedEof { expected })?;
        token.parse().map_err(|_| KpfsError::InvalidToken {
            token: token.to_string(),
            expected,
        })
    }

    fn take<T: FromStr>(&mut self, n: usize, expected: &'static str) -> KpfsResult<Vec<T>> {
        (0..n).map(|_| self.next(expected)).collect()
    }
}

impl FromStr for Instance {
    type Err = KpfsError;

    fn from_str(text: &str) -> KpfsResult<Self> {
        let mut tokens = Tokens::new(text);

        let item_count: usize = tokens.next("item count")?;
        let group_count: usize = tokens.next("group count")?;
        let capacity: i64 = tokens.next("capacity")?;
        let profits = tokens.take(item_count, "profit")?;
        let weights = tokens.take(item_count, "weight")?;

        let mut sets = Vec::new();
        for _ in 0..group_count {
            let limit = tokens.next("group limit")?;
            let penalty = tokens.next("group penalty")?;
            let member_count: usize = tokens.next("group member count")?;
            let members = tokens.take(member_count, "group member")?;
            sets.push(ForfeitSet::new(limit, penalty, members));
        }

        Instance::new(profits, weights, capacity, sets)
    }
}

impl Instance {
    /// Reads and parses an instance file.
    pub fn from_path(path: impl AsRef<Path>) -> KpfsResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| KpfsError::io(path, e))?;
        text.parse()
    }
}
