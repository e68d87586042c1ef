//! Lockstep replay of scripted requests.
//!
//! Every round advances each request by one step. After the round, the
//! per-request tags and the overall status are captured in a [`RoundReport`].

use std::fmt;

use remote_data::{RemoteData, RequestTracker, Tag, Ticket, TransitionError, fold_many};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, Step};

/// Errors that abort a replay.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("request '{request}' round {round}: step '{step}' rejected: {source}")]
    Transition {
        request: String,
        round: usize,
        step: Step,
        #[source]
        source: TransitionError,
    },
}

/// Status of all requests combined, worst first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overall {
    /// Nothing has been requested.
    Idle,
    /// At least one request is in flight; `showing` of them still have data.
    Loading { showing: usize },
    /// Everything requested so far succeeded.
    Ready,
    /// At least one request failed.
    Failed(Vec<String>),
}

impl Overall {
    /// Combine the states of several requests.
    pub fn of(states: Vec<RemoteData<String, String>>) -> Self {
        fold_many(
            states,
            || Overall::Idle,
            |data| Overall::Loading {
                showing: data.iter().flatten().count(),
            },
            |_| Overall::Ready,
            |errors| Overall::Failed(errors.into_iter().flatten().collect()),
        )
    }
}

impl fmt::Display for Overall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Overall::Idle => f.write_str("idle"),
            Overall::Loading { showing } => write!(f, "loading ({showing} showing data)"),
            Overall::Ready => f.write_str("ready"),
            Overall::Failed(errors) => write!(f, "error: {}", errors.join(", ")),
        }
    }
}

/// Snapshot taken after one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Round number, starting at 1.
    pub round: usize,
    /// Each request's name and tag, in config order.
    pub statuses: Vec<(String, Tag)>,
    /// Combined status.
    pub overall: Overall,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}:", self.round)?;
        for (name, tag) in &self.statuses {
            write!(f, " {name}={tag}")?;
        }
        write!(f, " => {}", self.overall)
    }
}

struct Lane<'a> {
    name: &'a str,
    steps: &'a [Step],
    tracker: RequestTracker<String, String>,
    /// Ticket of the latest successful start.
    ticket: Option<Ticket>,
}

impl Lane<'_> {
    fn apply(&mut self, step: &Step) -> Result<(), TransitionError> {
        match step {
            Step::Start => {
                self.ticket = Some(self.tracker.start()?);
                Ok(())
            }
            Step::Ok(data) => {
                let ticket = self.current_ticket()?;
                self.tracker.resolve(ticket, data.clone())
            }
            Step::Fail(err) => {
                let ticket = self.current_ticket()?;
                self.tracker.fail(ticket, err.clone())
            }
            Step::Reset => {
                self.tracker.reset();
                self.ticket = None;
                Ok(())
            }
            Step::Wait => Ok(()),
        }
    }

    fn current_ticket(&self) -> Result<Ticket, TransitionError> {
        self.ticket.ok_or_else(|| TransitionError::NotLoading {
            current: self.tracker.state().tag(),
        })
    }
}

/// Replay every request in `config`, one report per round.
///
/// Rejected transitions are logged and skipped unless `replay.strict` is set,
/// in which case the first one aborts the replay.
pub fn run(config: &Config) -> Result<Vec<RoundReport>, ReplayError> {
    let mut lanes: Vec<Lane<'_>> = config
        .requests
        .iter()
        .map(|request| Lane {
            name: &request.name,
            steps: &request.steps,
            tracker: RequestTracker::new(config.tracker.clone()),
            ticket: None,
        })
        .collect();

    let rounds = lanes.iter().map(|lane| lane.steps.len()).max().unwrap_or(0);
    info!(
        replay = %config.replay.name,
        requests = lanes.len(),
        rounds,
        "Starting replay"
    );

    let mut reports = Vec::with_capacity(rounds);
    for round in 1..=rounds {
        for lane in &mut lanes {
            let steps = lane.steps;
            let Some(step) = steps.get(round - 1) else {
                continue;
            };
            debug!(request = lane.name, round, step = %step, "Applying step");

            if let Err(source) = lane.apply(step) {
                if config.replay.strict {
                    return Err(ReplayError::Transition {
                        request: lane.name.to_string(),
                        round,
                        step: step.clone(),
                        source,
                    });
                }
                warn!(request = lane.name, round, step = %step, error = %source, "Step rejected");
            }
        }

        let report = RoundReport {
            round,
            statuses: lanes
                .iter()
                .map(|lane| (lane.name.to_string(), lane.tracker.state().tag()))
                .collect(),
            overall: Overall::of(
                lanes
                    .iter()
                    .map(|lane| lane.tracker.state().clone())
                    .collect(),
            ),
        };
        info!(round, overall = %report.overall, "Round complete");
        reports.push(report);
    }

    Ok(reports)
}
