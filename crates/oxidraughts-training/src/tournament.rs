//! Parallel execution of many matches.
//!
//! The [`TournamentScheduler`] owns no threads between calls. Each
//! [`play`](TournamentScheduler::play) spawns a fixed number of scoped
//! workers that take [`Battle`]s from a shared queue until it is empty. Every
//! finished battle is handed to the caller's callback, one at a time.
//!
//! When a match fails, the failing worker stops every running match through
//! the shared [`StopHandle`](oxidraughts_engine::StopHandle), and no worker
//! takes further battles. The first error is returned.

use std::{
    num::NonZeroUsize,
    sync::{Mutex, PoisonError},
    thread,
};

use oxidraughts_engine::{Board, MatchError, MatchOutcome, MatchRunner, StopHandle};
use oxidraughts_evaluator::heuristic::EvaluatedHeuristic;

/// Battles left in the queue are logged every this many battles.
const PROGRESS_LOG_INTERVAL: usize = 10;

/// One match between two population members.
#[derive(Debug, Clone)]
pub struct Battle {
    pub light: EvaluatedHeuristic,
    pub dark: EvaluatedHeuristic,
    pub light_id: usize,
    pub dark_id: usize,
    /// Set once the match has been played.
    pub outcome: Option<MatchOutcome>,
}

impl Battle {
    #[must_use]
    pub fn new(
        light: EvaluatedHeuristic,
        dark: EvaluatedHeuristic,
        light_id: usize,
        dark_id: usize,
    ) -> Self {
        Self {
            light,
            dark,
            light_id,
            dark_id,
            outcome: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SchedulerConfigError {
    #[display("tournament scheduler needs at least one worker")]
    NoWorkers,
}

#[derive(Debug, Clone)]
pub struct TournamentScheduler {
    workers: NonZeroUsize,
    runner: MatchRunner,
}

impl TournamentScheduler {
    pub fn new(workers: usize) -> Result<Self, SchedulerConfigError> {
        let workers = NonZeroUsize::new(workers).ok_or(SchedulerConfigError::NoWorkers)?;
        Ok(Self {
            workers,
            runner: MatchRunner::new(),
        })
    }

    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    /// Cancels the matches of this scheduler, now and in later calls.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.runner.stop_handle()
    }

    /// Plays every battle and calls `on_finish` with each finished one.
    ///
    /// Battles are taken from the end of `battles`. Calls to `on_finish`
    /// never overlap. A failed call leaves the scheduler stopped.
    pub fn play<F>(&self, battles: Vec<Battle>, on_finish: F) -> Result<(), MatchError>
    where
        F: FnMut(&Battle) + Send,
    {
        let queue = Mutex::new(battles);
        let on_finish = Mutex::new(on_finish);
        let failure = Mutex::new(None);

        thread::scope(|s| {
            for worker in 0..self.workers.get() {
                let (queue, on_finish, failure) = (&queue, &on_finish, &failure);
                s.spawn(move || {
                    tracing::trace!(worker, "worker started");
                    let result = self.work(queue, on_finish);
                    if let Err(err) = result {
                        tracing::trace!(worker, %err, "worker failed");
                        let mut failure = failure.lock().unwrap_or_else(PoisonError::into_inner);
                        if failure.is_none() || failure.as_ref().is_some_and(MatchError::is_stopped)
                        {
                            *failure = Some(err);
                        }
                        self.runner.stop_handle().stop();
                    }
                    tracing::trace!(worker, "worker finished");
                });
            }
        });

        match failure.into_inner().unwrap_or_else(PoisonError::into_inner) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn work<F>(&self, queue: &Mutex<Vec<Battle>>, on_finish: &Mutex<F>) -> Result<(), MatchError>
    where
        F: FnMut(&Battle),
    {
        while let Some(mut battle) = next_battle(queue) {
            let outcome = self
                .runner
                .run(Board::INITIAL, &mut battle.light, &mut battle.dark)?;
            battle.outcome = Some(outcome);
            let mut on_finish = on_finish.lock().unwrap_or_else(PoisonError::into_inner);
            (*on_finish)(&battle);
        }
        Ok(())
    }
}

fn next_battle(queue: &Mutex<Vec<Battle>>) -> Option<Battle> {
    let mut queue = queue.lock().unwrap_or_else(PoisonError::into_inner);
    let left = queue.len();
    if left > 0 && left % PROGRESS_LOG_INTERVAL == 0 {
        tracing::debug!(left, "battles left");
    }
    queue.pop()
}
