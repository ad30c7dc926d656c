//! Snapshot publication for front ends.
//!
//! Every effective change to a session publishes a full copy of its
//! [`QuizSnapshot`]. Readers on other threads hold a `watch::Receiver` and
//! always see a complete snapshot, never a half-applied update. Callback
//! observers run synchronously on the mutating thread.

use crate::types::AnswerStatus;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Everything a front end needs to render the current quiz screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSnapshot {
    pub current_index: usize,
    pub question: String,
    pub answer: String,
    pub answer_status: AnswerStatus,
    pub attempts: u32,
    pub success_rate: f64,
    pub mastered_count: usize,
    pub total_cards: usize,
}

impl QuizSnapshot {
    /// Success rate as a whole percentage, truncated.
    pub fn success_percent(&self) -> u32 {
        (self.success_rate * 100.0) as u32
    }

    pub fn is_finished(&self) -> bool {
        self.answer_status == AnswerStatus::AllDone
    }

    /// The answer is only revealed once the card has been judged.
    pub fn revealed_answer(&self) -> Option<&str> {
        match self.answer_status {
            AnswerStatus::NotAttempted => None,
            _ => Some(&self.answer),
        }
    }
}

type Callback = Box<dyn Fn(&QuizSnapshot) + Send + Sync>;

/// Fans snapshots out to a watch channel and registered callbacks.
pub(crate) struct Publisher {
    tx: watch::Sender<QuizSnapshot>,
    callbacks: Vec<Callback>,
}

impl Publisher {
    pub(crate) fn new(initial: QuizSnapshot) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            tx,
            callbacks: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.tx.subscribe()
    }

    pub(crate) fn register(&mut self, callback: Callback) {
        self.callbacks.push(callback);
    }

    /// Store the snapshot and notify everyone. Works with zero receivers.
    pub(crate) fn publish(&self, snapshot: QuizSnapshot) {
        for callback in &self.callbacks {
            callback(&snapshot);
        }
        self.tx.send_replace(snapshot);
    }
}

impl std::fmt::Debug for Publisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("receivers", &self.tx.receiver_count())
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}
