//! Upload and input validation. All bounds come from `Limits` so tests can
//! exercise them with non-default values.

use crate::config::Limits;
use crate::errors::AppError;

/// The uploaded file must carry a `.pdf` extension (case-insensitive).
pub fn validate_pdf_filename(filename: &str) -> Result<(), AppError> {
    if filename.to_lowercase().ends_with(".pdf") {
        Ok(())
    } else {
        Err(AppError::Validation(
            "Invalid file type. Only PDF files are allowed.".to_string(),
        ))
    }
}

/// The uploaded file may not exceed the configured byte cap.
pub fn validate_file_size(size: usize, limits: &Limits) -> Result<(), AppError> {
    if size > limits.max_file_size {
        return Err(AppError::PayloadTooLarge(format!(
            "File size ({:.2}MB) exceeds maximum allowed size ({}MB)",
            size as f64 / (1024.0 * 1024.0),
            limits.max_file_size / (1024 * 1024),
        )));
    }
    Ok(())
}

/// The job description must be non-empty and within the configured length
/// bounds after trimming.
pub fn validate_job_description(job_description: &str, limits: &Limits) -> Result<(), AppError> {
    let trimmed = job_description.trim();

    if trimmed.is_empty() {
        return Err(AppError::Validation(
            "Job description cannot be empty.".to_string(),
        ));
    }
    if trimmed.len() < limits.min_job_description_len {
        return Err(AppError::Validation(format!(
            "Job description is too short. Minimum {} characters required.",
            limits.min_job_description_len
        )));
    }
    if trimmed.len() > limits.max_job_description_len {
        return Err(AppError::Validation(format!(
            "Job description is too long. Maximum {} characters allowed.",
            limits.max_job_description_len
        )));
    }
    Ok(())
}

/// Extracted resume text is capped to bound per-request memory.
pub fn validate_resume_text_length(resume_text: &str, limits: &Limits) -> Result<(), AppError> {
    if resume_text.len() > limits.max_resume_text_len {
        return Err(AppError::Validation(format!(
            "Resume text is too long ({} chars). Maximum {} characters allowed.",
            resume_text.len(),
            limits.max_resume_text_len
        )));
    }
    Ok(())
}
