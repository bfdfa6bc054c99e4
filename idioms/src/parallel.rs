// parallel.rs - Fork/join reduction on tokio's work-stealing scheduler

use std::future::Future;
use std::ops::Range;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::ParallelError;

/// Slices shorter than this are summed on the current task.
pub const THRESHOLD: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub weight: i32,
    pub color: Color,
}

impl Shape {
    pub fn new(weight: i32, color: Color) -> Self {
        Self { weight, color }
    }
}

pub fn sum_of_blue_weights(shapes: &[Shape]) -> i64 {
    shapes
        .iter()
        .filter(|s| s.color == Color::Blue)
        .map(|s| i64::from(s.weight))
        .sum()
}

type SumFuture = Pin<Box<dyn Future<Output = Result<i64, ParallelError>> + Send>>;

fn sum_range(shapes: Arc<[Shape]>, range: Range<usize>) -> SumFuture {
    Box::pin(async move {
        if range.len() < THRESHOLD {
            return Ok(sum_of_blue_weights(&shapes[range]));
        }

        let mid = range.start + range.len() / 2;
        let left = tokio::spawn(sum_range(Arc::clone(&shapes), range.start..mid));
        let right = tokio::spawn(sum_range(shapes, mid..range.end));

        // Both halves must finish before combining.
        let (left, right) = tokio::join!(left, right);
        Ok(left?? + right??)
    })
}

/// Same result as [`sum_of_blue_weights`], computed by halving the input
/// until it drops under [`THRESHOLD`] and spawning each half as a task.
pub async fn fork_join_sum(shapes: Arc<[Shape]>) -> Result<i64, ParallelError> {
    let len = shapes.len();
    sum_range(shapes, 0..len).await
}

/// Runs [`fork_join_sum`] on a fresh multi-thread runtime.
pub fn fork_join_sum_blocking(shapes: Arc<[Shape]>) -> Result<i64, ParallelError> {
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(fork_join_sum(shapes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes(n: i32) -> Vec<Shape> {
        (0..n)
            .map(|i| Shape::new(i, if i & 1 == 0 { Color::Blue } else { Color::Red }))
            .collect()
    }

    #[test]
    fn sequential_sum_of_ten() {
        assert_eq!(sum_of_blue_weights(&shapes(10)), 20);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn fork_join_matches_sequential() {
        for n in [0, 10, 99, 100, 101, 5_000] {
            let input = shapes(n);
            let expected = sum_of_blue_weights(&input);
            let got = fork_join_sum(Arc::from(input)).await.expect("tasks");
            assert_eq!(got, expected, "n = {n}");
        }
    }

    #[test]
    fn blocking_entry_point() {
        let input: Arc<[Shape]> = Arc::from(shapes(1_000));
        let got = fork_join_sum_blocking(Arc::clone(&input)).expect("runtime");
        assert_eq!(got, sum_of_blue_weights(&input));
    }
}
