//! Rank pairs and the prefix doubling loop that sorts suffixes by them.

use tracing::{debug, trace};

use crate::Symbol;

/// The sort key of a suffix during a doubling round with window `k`.
///
/// `secondary` is the primary rank of the suffix starting `k` positions later. If that suffix does not
/// exist, it is `None`, which orders before every rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct RankPair {
    pub(crate) primary: usize,
    pub(crate) secondary: Option<usize>,
}

/// Sorted suffix offsets together with the rank of every suffix.
///
/// After the window covered `w` symbols, two suffixes share a rank exactly when their first
/// `w` symbols are equal, and `order` is sorted by rank.
#[derive(Debug)]
pub(crate) struct Ranking {
    order: Vec<usize>,
    rank: Vec<usize>,
    num_classes: usize,
    scratch: Vec<usize>,
}

impl Ranking {
    pub(crate) fn from_symbols<S: Symbol>(text: &[S]) -> Self {
        let mut order: Vec<usize> = (0..text.len()).collect();
        order.sort_by_key(|&offset| text[offset]);

        let mut rank = vec![0; text.len()];
        let mut class = 0;

        for window in order.windows(2) {
            if text[window[0]] != text[window[1]] {
                class += 1;
            }
            rank[window[1]] = class;
        }

        Self {
            num_classes: if text.is_empty() { 0 } else { class + 1 },
            order,
            rank,
            scratch: Vec::new(),
        }
    }

    pub(crate) fn rank_pair(&self, offset: usize, k: usize) -> RankPair {
        RankPair {
            primary: self.rank[offset],
            secondary: self.rank.get(offset + k).copied(),
        }
    }

    pub(crate) fn is_fully_refined(&self) -> bool {
        self.num_classes == self.rank.len()
    }

    /// Extends the compared window from `k` to `2k` symbols.
    pub(crate) fn refine(&mut self, k: usize) {
        let n = self.rank.len();

        // least significant key first, both passes are stable
        let rank = &self.rank;
        counting_sort(&self.order, &mut self.scratch, self.num_classes + 1, |offset| {
            rank.get(offset + k).map_or(0, |r| r + 1)
        });
        counting_sort(&self.scratch, &mut self.order, self.num_classes, |offset| {
            rank[offset]
        });

        let mut new_rank = std::mem::take(&mut self.scratch);
        new_rank.clear();
        new_rank.resize(n, 0);

        let mut class = 0;
        for window in self.order.windows(2) {
            if self.rank_pair(window[0], k) != self.rank_pair(window[1], k) {
                class += 1;
            }
            new_rank[window[1]] = class;
        }

        self.scratch = std::mem::replace(&mut self.rank, new_rank);
        self.num_classes = class + 1;
    }

    pub(crate) fn into_order(self) -> Vec<usize> {
        self.order
    }
}

fn counting_sort(
    input: &[usize],
    output: &mut Vec<usize>,
    num_keys: usize,
    key: impl Fn(usize) -> usize,
) {
    let mut bucket_starts = vec![0; num_keys + 1];
    for &offset in input {
        bucket_starts[key(offset) + 1] += 1;
    }
    for i in 1..bucket_starts.len() {
        bucket_starts[i] += bucket_starts[i - 1];
    }

    output.clear();
    output.resize(input.len(), 0);

    for &offset in input {
        let bucket = &mut bucket_starts[key(offset)];
        output[*bucket] = offset;
        *bucket += 1;
    }
}

/// Sorts all suffixes of the text by prefix doubling.
#[tracing::instrument(level = "debug", skip_all, fields(text_len = text.len()))]
pub(crate) fn sort_suffixes<S: Symbol>(text: &[S]) -> Vec<usize> {
    let mut ranking = Ranking::from_symbols(text);
    let mut window = 1;
    let mut rounds = 0;

    while window < text.len() && !ranking.is_fully_refined() {
        ranking.refine(window);
        window *= 2;
        rounds += 1;

        trace!(window, num_classes = ranking.num_classes, "refined suffix ranks");
    }

    debug!(rounds, "sorted suffixes by prefix doubling");

    ranking.into_order()
}
