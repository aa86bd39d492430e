// src/state/action.rs
use std::path::PathBuf;
use crate::api::Credentials;
use crate::config::{AnalysisSummary, RecordId, UploadRecord};

/// Every named transition the dashboard can go through.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // User intents
    SubmitLogin,
    ChooseFile(PathBuf),
    RequestUpload,
    RefreshHistory,
    DownloadReport(RecordId),
    RequestDelete(RecordId),
    ConfirmDelete,
    CancelDelete,
    SelectHistoryItem(RecordId),
    DismissAlert,

    // Request outcomes
    LoginSucceeded {
        credentials: Credentials,
        history: Vec<UploadRecord>,
    },
    LoginFailed,
    UploadSucceeded(AnalysisSummary),
    UploadFailed,
    HistoryLoaded(Vec<UploadRecord>),
    ReportSaved(PathBuf),
    ReportFailed,
    DeleteSucceeded,
    DeleteFailed,
    JobFinished,
}

/// Network work the reducer asks for, run off the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub credentials: Credentials,
    pub kind: JobKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobKind {
    Login,
    Upload(PathBuf),
    RefreshHistory,
    DownloadReport(RecordId),
    Delete(RecordId),
}
