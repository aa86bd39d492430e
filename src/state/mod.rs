// src/state/mod.rs
use std::path::PathBuf;
use chrono::{DateTime, Local};
use tracing::info;

use crate::config::{AnalysisSummary, RecordId, UploadRecord};

pub mod action;
pub mod session;

pub use action::{Action, Job, JobKind};
pub use session::Session;

pub const LOGIN_FAILED_MESSAGE: &str = "Unauthorized: Invalid Username or Password";
pub const NO_FILE_MESSAGE: &str = "Select a CSV first";
pub const UPLOAD_FAILED_MESSAGE: &str = "Upload failed. Check file format.";
pub const REPORT_FAILED_MESSAGE: &str = "Could not download report.";
pub const DELETE_FAILED_MESSAGE: &str = "Could not delete record.";

// Screen tracking
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen {
    LoggedOut,
    LoggedIn,
}

// Modal dialog tracking
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    None,
    ConfirmDelete { id: RecordId },
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub session: Session,

    // Dashboard data
    pub selected_file: Option<PathBuf>,
    pub analytics: Option<AnalysisSummary>,
    pub history: Vec<UploadRecord>,
    pub last_synced: Option<DateTime<Local>>,
    pub last_download: Option<PathBuf>,

    // Minimal UI state
    pub current_dialog: DialogState,
    pub alert: Option<String>,
    pub pending_jobs: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            selected_file: None,
            analytics: None,
            history: Vec::new(),
            last_synced: None,
            last_download: None,
            current_dialog: DialogState::None,
            alert: None,
            pending_jobs: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        if self.session.is_authenticated {
            Screen::LoggedIn
        } else {
            Screen::LoggedOut
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending_jobs > 0
    }

    /// Applies one transition. Returns the request to run, if the transition needs one.
    pub fn update(&mut self, action: Action) -> Option<Job> {
        match action {
            Action::SubmitLogin => {
                if !self.session.credentials.is_complete() {
                    return None;
                }
                self.start(JobKind::Login)
            }
            Action::LoginSucceeded { credentials, history } => {
                // The session keeps what the server accepted, not what the form holds now
                self.session.credentials = credentials;
                info!(username = %self.session.username(), "logged in");
                self.session.is_authenticated = true;
                self.set_history(history);
                None
            }
            Action::LoginFailed => {
                self.history.clear();
                self.alert = Some(LOGIN_FAILED_MESSAGE.to_string());
                None
            }

            Action::ChooseFile(path) => {
                self.selected_file = Some(path);
                None
            }
            Action::RequestUpload => match self.selected_file.clone() {
                Some(path) => self.start(JobKind::Upload(path)),
                None => {
                    self.alert = Some(NO_FILE_MESSAGE.to_string());
                    None
                }
            },
            Action::UploadSucceeded(summary) => {
                self.analytics = Some(summary);
                None
            }
            Action::UploadFailed => {
                self.alert = Some(UPLOAD_FAILED_MESSAGE.to_string());
                None
            }

            Action::RefreshHistory => self.start(JobKind::RefreshHistory),
            Action::HistoryLoaded(history) => {
                self.set_history(history);
                None
            }

            Action::DownloadReport(id) => self.start(JobKind::DownloadReport(id)),
            Action::ReportSaved(path) => {
                self.last_download = Some(path);
                None
            }
            Action::ReportFailed => {
                self.alert = Some(REPORT_FAILED_MESSAGE.to_string());
                None
            }

            Action::RequestDelete(id) => {
                self.current_dialog = DialogState::ConfirmDelete { id };
                None
            }
            Action::ConfirmDelete => {
                match std::mem::replace(&mut self.current_dialog, DialogState::None) {
                    DialogState::ConfirmDelete { id } => self.start(JobKind::Delete(id)),
                    DialogState::None => None,
                }
            }
            Action::CancelDelete => {
                self.current_dialog = DialogState::None;
                None
            }
            Action::DeleteSucceeded => {
                // Cleared even when a different record is on display
                self.analytics = None;
                None
            }
            Action::DeleteFailed => {
                self.alert = Some(DELETE_FAILED_MESSAGE.to_string());
                None
            }

            Action::SelectHistoryItem(id) => {
                if let Some(record) = self.history.iter().find(|r| r.id == id) {
                    self.analytics = Some(record.summary.clone());
                }
                None
            }
            Action::DismissAlert => {
                self.alert = None;
                None
            }
            Action::JobFinished => {
                self.pending_jobs = self.pending_jobs.saturating_sub(1);
                None
            }
        }
    }

    fn start(&mut self, kind: JobKind) -> Option<Job> {
        self.pending_jobs += 1;
        Some(Job {
            credentials: self.session.credentials.clone(),
            kind,
        })
    }

    fn set_history(&mut self, history: Vec<UploadRecord>) {
        self.history = history;
        self.last_synced = Some(Local::now());
    }
}
