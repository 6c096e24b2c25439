//! Task polling utilities
//!
//! Helpers for observing tokio tasks from the frame loop without blocking.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Extract the result of a finished task, leaving the slot empty.
///
/// Returns `None` while the slot is empty or the task is still running; the
/// slot staying occupied is the "still pending" signal for callers that need
/// to keep repainting. The `Err` branch of the returned result carries a join
/// error (the task panicked or was aborted).
pub fn take_finished<T>(slot: &mut Option<JoinHandle<T>>) -> Option<Result<T, JoinError>> {
    if !slot.as_ref().is_some_and(|handle| handle.is_finished()) {
        return None;
    }

    let handle = slot.take()?;
    match handle.now_or_never() {
        Some(result) => Some(result),
        None => {
            // Shouldn't happen since we checked is_finished()
            tracing::warn!("finished task produced no result");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_slot_yields_nothing() {
        let mut slot: Option<JoinHandle<u32>> = None;
        assert!(take_finished(&mut slot).is_none());
    }

    #[tokio::test]
    async fn test_running_task_stays_in_slot() {
        let mut slot = Some(tokio::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            1u32
        }));

        assert!(take_finished(&mut slot).is_none());
        assert!(slot.is_some());
        slot.take().unwrap().abort();
    }

    #[tokio::test]
    async fn test_finished_task_is_taken() {
        let handle = tokio::spawn(async { 7u32 });
        // Let the task run to completion before polling the slot
        tokio::time::sleep(Duration::from_millis(20)).await;

        let mut slot = Some(handle);
        let result = take_finished(&mut slot);
        assert_eq!(result.unwrap().unwrap(), 7);
        assert!(slot.is_none());
    }
}
