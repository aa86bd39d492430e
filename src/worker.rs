// src/worker.rs
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use anyhow::{Result, Context};
use tracing::{info, warn};

use crate::api::{AnalyticsApi, Credentials};
use crate::report;
use crate::state::{Action, Job, JobKind};

/// Background thread that runs jobs one at a time, in submission order.
pub struct Worker {
    jobs: Sender<Job>,
    outcomes: Receiver<Vec<Action>>,
}

impl Worker {
    pub fn spawn<A, F>(api: A, download_dir: PathBuf, notify: F) -> Result<Self>
    where
        A: AnalyticsApi + 'static,
        F: Fn() + Send + 'static,
    {
        let (job_tx, job_rx) = mpsc::channel::<Job>();
        let (outcome_tx, outcome_rx) = mpsc::channel();

        thread::Builder::new()
            .name("api-worker".to_string())
            .spawn(move || {
                for job in job_rx {
                    let outcome = execute(&api, &download_dir, job);
                    if outcome_tx.send(outcome).is_err() {
                        break;
                    }
                    notify();
                }
            })
            .context("Failed to start API worker")?;

        Ok(Self {
            jobs: job_tx,
            outcomes: outcome_rx,
        })
    }

    pub fn submit(&self, job: Job) {
        if self.jobs.send(job).is_err() {
            warn!("API worker has stopped; request dropped");
        }
    }

    /// Outcomes that arrived since the last call, oldest first.
    pub fn drain(&self) -> Vec<Vec<Action>> {
        self.outcomes.try_iter().collect()
    }
}

/// Runs one job to completion. The last action is always `JobFinished`.
pub fn execute(api: &dyn AnalyticsApi, download_dir: &Path, job: Job) -> Vec<Action> {
    let credentials = &job.credentials;
    let mut actions = Vec::new();

    match job.kind {
        JobKind::Login => {
            let result = api
                .verify_credentials(credentials)
                .and_then(|_| api.list_history(credentials));
            match result {
                Ok(history) => actions.push(Action::LoginSucceeded {
                    credentials: credentials.clone(),
                    history,
                }),
                Err(e) => {
                    warn!(username = %credentials.username, "login failed: {}", e);
                    actions.push(Action::LoginFailed);
                }
            }
        }
        JobKind::Upload(path) => match api.upload(credentials, &path) {
            Ok(summary) => {
                info!(file = %path.display(), "upload analyzed");
                actions.push(Action::UploadSucceeded(summary));
                actions.extend(refresh_history(api, credentials));
            }
            Err(e) => {
                warn!(file = %path.display(), "upload failed: {}", e);
                actions.push(Action::UploadFailed);
            }
        },
        JobKind::RefreshHistory => actions.extend(refresh_history(api, credentials)),
        JobKind::DownloadReport(id) => {
            let saved = api
                .fetch_report(credentials, id)
                .map_err(anyhow::Error::from)
                .and_then(|bytes| report::save_report(download_dir, id, &bytes));
            match saved {
                Ok(path) => {
                    info!(id, path = %path.display(), "report saved");
                    actions.push(Action::ReportSaved(path));
                }
                Err(e) => {
                    warn!(id, "report download failed: {:#}", e);
                    actions.push(Action::ReportFailed);
                }
            }
        }
        JobKind::Delete(id) => match api.delete_record(credentials, id) {
            Ok(()) => {
                info!(id, "record deleted");
                actions.push(Action::DeleteSucceeded);
                actions.extend(refresh_history(api, credentials));
            }
            Err(e) => {
                warn!(id, "delete failed: {}", e);
                actions.push(Action::DeleteFailed);
            }
        },
    }

    actions.push(Action::JobFinished);
    actions
}

// A failed refresh keeps the cached list and raises no alert
fn refresh_history(api: &dyn AnalyticsApi, credentials: &Credentials) -> Option<Action> {
    match api.list_history(credentials) {
        Ok(history) => Some(Action::HistoryLoaded(history)),
        Err(e) => {
            warn!("history refresh failed: {}", e);
            None
        }
    }
}
