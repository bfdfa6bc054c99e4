// arrays.rs - Building index-valued arrays sequentially and in parallel

use crate::error::ParallelError;

const CHUNK: usize = 4096;

pub fn sequential(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

pub fn as_strings(size: usize) -> Vec<String> {
    (0..size).map(|i| i.to_string()).collect()
}

/// Fills `0..size` by spawning one task per chunk, then stitches the
/// chunks back together in order.
pub async fn parallel(size: usize) -> Result<Vec<i32>, ParallelError> {
    let handles: Vec<_> = (0..size)
        .step_by(CHUNK)
        .map(|start| {
            let end = (start + CHUNK).min(size);
            tokio::spawn(async move { (start as i32..end as i32).collect::<Vec<i32>>() })
        })
        .collect();

    let mut values = Vec::with_capacity(size);
    for handle in handles {
        values.extend(handle.await?);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_and_strings() {
        assert_eq!(sequential(4), vec![0, 1, 2, 3]);
        assert_eq!(as_strings(3), vec!["0", "1", "2"]);
        assert!(sequential(0).is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn parallel_matches_sequential() {
        for size in [0, 1, CHUNK - 1, CHUNK, 3 * CHUNK + 7] {
            assert_eq!(parallel(size).await.expect("tasks"), sequential(size), "size {size}");
        }
    }
}
