use crate::domain::models::{Report, Status};
use crate::services::errors::AppError;
use crate::services::photo;
use crate::services::store::ReportStore;
use chrono::Utc;
use std::path::PathBuf;

/// Captured form fields for one submission attempt.
#[derive(Debug, Clone)]
pub struct SubmissionInput {
    pub category: String,
    pub location: String,
    pub description: String,
    pub photo: Option<PathBuf>,
}

/// Progress of a submission attempt. Reading the photo is the only
/// suspension-like step; everything else runs straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    ReadingImage,
    Persisting,
    Succeeded,
    Failed,
}

/// One submission attempt. Inputs are retained across failure so the
/// attempt stays retryable exactly as entered.
pub struct SubmissionAttempt {
    input: SubmissionInput,
    state: SubmissionState,
}

impl SubmissionAttempt {
    pub fn new(input: SubmissionInput) -> Self {
        Self {
            input,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn input(&self) -> &SubmissionInput {
        &self.input
    }

    /// Drives the attempt to completion: validate, read the photo, build
    /// the report, append it. The store sees nothing until every earlier
    /// step has succeeded.
    pub fn run(&mut self, store: &dyn ReportStore) -> Result<Report, AppError> {
        self.state = SubmissionState::Validating;
        let photo_path = match self.validate() {
            Ok(path) => path,
            Err(err) => return self.fail(err),
        };

        self.state = SubmissionState::ReadingImage;
        let image_data = match photo::to_data_uri(&photo_path) {
            Ok(data) => data,
            Err(err) => return self.fail(err),
        };

        self.state = SubmissionState::Persisting;
        // Fields persist exactly as entered; trimming is only for the
        // emptiness check in validate().
        let report = Report {
            id: new_report_id(),
            category: self.input.category.clone(),
            location: self.input.location.clone(),
            description: self.input.description.clone(),
            image_data,
            status: Status::Pending,
            submitted_at: Utc::now(),
        };
        if let Err(err) = store.append(report.clone()) {
            let err = match err.downcast::<AppError>() {
                Ok(app) => app,
                Err(other) => AppError::StorageWrite(other.to_string()),
            };
            return self.fail(err);
        }

        self.state = SubmissionState::Succeeded;
        Ok(report)
    }

    fn validate(&self) -> Result<PathBuf, AppError> {
        if self.input.category.trim().is_empty() || self.input.location.trim().is_empty() {
            return Err(AppError::Validation);
        }
        self.input.photo.clone().ok_or(AppError::Validation)
    }

    fn fail(&mut self, err: AppError) -> Result<Report, AppError> {
        self.state = SubmissionState::Failed;
        Err(err)
    }
}

/// Report ids combine a millisecond timestamp with a random nonce. There
/// is no server to enforce uniqueness, so the nonce guards against two
/// submissions landing in the same millisecond.
pub fn new_report_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let nonce: [u8; 4] = rand::random();
    format!("{}-{}", millis, hex::encode(nonce))
}
