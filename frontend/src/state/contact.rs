//! Two-step contact wizard: details, then subject/message/attachments.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]+$").expect("static mobile pattern"));

pub const MAX_FILES: usize = 10;
pub const MAX_FILE_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_TOTAL_BYTES: u64 = 50 * 1024 * 1024;
pub const MESSAGE_LIMIT: usize = 500;
pub const MESSAGE_WARN_AT: usize = 450;

/// Why a step refused to advance. The message is what the toast shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid mobile number.")]
    InvalidMobile,
    #[error("Please select a subject.")]
    MissingSubject,
    #[error("Please write a message before submitting.")]
    EmptyMessage,
    #[error("Form is already being sent.")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentRejection {
    #[error("Maximum {max} files allowed. You can add {remaining} more.")]
    TooMany { max: usize, remaining: usize },
    #[error("\"{0}\" already added.")]
    Duplicate(String),
    #[error("\"{name}\" exceeds {limit_mb}MB limit.")]
    FileTooLarge { name: String, limit_mb: u64 },
    #[error("Total size exceeds {limit_mb}MB limit.")]
    TotalTooLarge { limit_mb: u64 },
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
}

impl ContactDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        let mobile = self.mobile.trim();

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() || mobile.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_mobile(mobile) {
            return Err(ValidationError::InvalidMobile);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    pub fn icon(&self) -> &'static str {
        file_icon(&self.mime)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentLimits {
    pub max_files: usize,
    pub max_file_bytes: u64,
    pub max_total_bytes: u64,
}

impl Default for AttachmentLimits {
    fn default() -> Self {
        Self {
            max_files: MAX_FILES,
            max_file_bytes: MAX_FILE_BYTES,
            max_total_bytes: MAX_TOTAL_BYTES,
        }
    }
}

fn whole_mb(bytes: u64) -> u64 {
    bytes / (1024 * 1024)
}

/// Attachments bounded by count, per-file size and cumulative size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachments {
    limits: AttachmentLimits,
    files: Vec<FileDescriptor>,
}

impl Attachments {
    pub fn with_limits(limits: AttachmentLimits) -> Self {
        Self {
            limits,
            files: Vec::new(),
        }
    }

    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    pub fn at_capacity(&self) -> bool {
        self.files.len() >= self.limits.max_files
    }

    /// Adds a picked or dropped batch. A batch that would exceed the file
    /// count is refused whole; otherwise each file is checked on its own.
    pub fn add_batch(&mut self, batch: Vec<FileDescriptor>) -> Vec<AttachmentRejection> {
        if self.files.len() + batch.len() > self.limits.max_files {
            return vec![AttachmentRejection::TooMany {
                max: self.limits.max_files,
                remaining: self.limits.max_files.saturating_sub(self.files.len()),
            }];
        }
        batch
            .into_iter()
            .filter_map(|file| self.add(file).err())
            .collect()
    }

    fn add(&mut self, file: FileDescriptor) -> Result<(), AttachmentRejection> {
        if self
            .files
            .iter()
            .any(|f| f.name == file.name && f.size == file.size)
        {
            return Err(AttachmentRejection::Duplicate(file.name));
        }
        if file.size > self.limits.max_file_bytes {
            return Err(AttachmentRejection::FileTooLarge {
                name: file.name,
                limit_mb: whole_mb(self.limits.max_file_bytes),
            });
        }
        if self.total_bytes() + file.size > self.limits.max_total_bytes {
            return Err(AttachmentRejection::TotalTooLarge {
                limit_mb: whole_mb(self.limits.max_total_bytes),
            });
        }
        self.files.push(file);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.files.len() {
            self.files.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn count_label(&self) -> String {
        format!("{} / {} files", self.files.len(), self.limits.max_files)
    }

    pub fn total_label(&self) -> String {
        if self.files.is_empty() {
            return "0 MB total".to_string();
        }
        format!("{} total", format_file_size(self.total_bytes()))
    }
}

/// Human size with at most one decimal: `1.5 KB`, `5 MB`, `0 Bytes`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut exponent = 0;
    let mut scale = 1u64;
    while exponent < UNITS.len() - 1 && bytes >= scale * 1024 {
        scale *= 1024;
        exponent += 1;
    }
    let value = bytes as f64 / scale as f64;
    let rounded = (value * 10.0).round() / 10.0;
    format!("{} {}", rounded, UNITS[exponent])
}

pub fn file_icon(mime: &str) -> &'static str {
    if mime.starts_with("image/") {
        "fas fa-image"
    } else if mime.starts_with("video/") {
        "fas fa-video"
    } else if mime.starts_with("audio/") {
        "fas fa-music"
    } else if mime.contains("pdf") {
        "fas fa-file-pdf"
    } else if mime.contains("word") || mime.contains("document") {
        "fas fa-file-word"
    } else if mime.contains("excel") || mime.contains("sheet") {
        "fas fa-file-excel"
    } else if mime.contains("zip") || mime.contains("compressed") {
        "fas fa-file-archive"
    } else {
        "fas fa-file"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTone {
    Normal,
    Warning,
}

impl CounterTone {
    pub fn class(&self) -> &'static str {
        match self {
            CounterTone::Normal => "text-primaryPink",
            CounterTone::Warning => "text-red-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Details,
    Message,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Message => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Active,
    Done,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Sending,
    Sent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    step: Step,
    pub details: ContactDetails,
    pub subject: String,
    message: String,
    pub attachments: Attachments,
    submission: Submission,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            step: Step::Details,
            details: ContactDetails::default(),
            subject: String::new(),
            message: String::new(),
            attachments: Attachments::default(),
            submission: Submission::Idle,
        }
    }
}

impl ContactForm {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    /// Stores the message, cut at the character limit.
    pub fn set_message(&mut self, text: &str) {
        self.message = text.chars().take(MESSAGE_LIMIT).collect();
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.message.chars().count(), MESSAGE_LIMIT)
    }

    pub fn counter_tone(&self) -> CounterTone {
        if self.message.chars().count() > MESSAGE_WARN_AT {
            CounterTone::Warning
        } else {
            CounterTone::Normal
        }
    }

    pub fn proceed(&mut self) -> Result<(), ValidationError> {
        self.details.validate()?;
        self.step = Step::Message;
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = Step::Details;
    }

    pub fn progress_percent(&self) -> u8 {
        match self.step {
            Step::Details => 0,
            Step::Message => 100,
        }
    }

    pub fn indicators(&self) -> [Indicator; 2] {
        match self.step {
            Step::Details => [Indicator::Active, Indicator::Pending],
            Step::Message => [Indicator::Done, Indicator::Active],
        }
    }

    /// Validates step two and enters the sending phase. The caller waits
    /// out the simulated latency and then calls [`ContactForm::finish`].
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        if self.submission != Submission::Idle {
            return Err(ValidationError::AlreadySubmitting);
        }
        if self.subject.is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        self.submission = Submission::Sending;
        Ok(())
    }

    pub fn finish(&mut self) -> bool {
        if self.submission != Submission::Sending {
            return false;
        }
        self.submission = Submission::Sent;
        true
    }

    pub fn loading_visible(&self) -> bool {
        self.submission == Submission::Sending
    }

    pub fn success_visible(&self) -> bool {
        self.submission == Submission::Sent
    }

    pub fn submit_enabled(&self) -> bool {
        self.submission == Submission::Idle
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    fn valid_details() -> ContactDetails {
        ContactDetails {
            first_name: "Asha".to_string(),
            last_name: "Raman".to_string(),
            email: "asha@studio.in".to_string(),
            mobile: "+91 (44) 1234-5678".to_string(),
        }
    }

    fn file(name: &str, size: u64) -> FileDescriptor {
        FileDescriptor::new(name, size, "image/png")
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("plainstring"));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn mobile_pattern() {
        assert!(is_valid_mobile("+1 (555) 010-9999"));
        assert!(!is_valid_mobile("555-CALL"));
        assert!(!is_valid_mobile(""));
    }

    #[test]
    fn details_validation_order() {
        let mut details = valid_details();
        assert_eq!(details.validate(), Ok(()));

        details.last_name = "   ".to_string();
        assert_eq!(details.validate(), Err(ValidationError::MissingFields));

        details = valid_details();
        details.email = "asha@studio".to_string();
        assert_eq!(details.validate(), Err(ValidationError::InvalidEmail));

        details = valid_details();
        details.mobile = "call me".to_string();
        assert_eq!(details.validate(), Err(ValidationError::InvalidMobile));
    }

    #[test]
    fn failed_validation_keeps_step_one() {
        let mut form = ContactForm::default();
        assert_eq!(form.proceed(), Err(ValidationError::MissingFields));
        assert_eq!(form.step(), Step::Details);
        assert_eq!(form.progress_percent(), 0);
    }

    #[test]
    fn eleventh_file_is_rejected() {
        let mut files = Attachments::default();
        let batch = (0..10).map(|i| file(&format!("f{i}.png"), 1_000)).collect();
        assert!(files.add_batch(batch).is_empty());
        let before = files.clone();
        assert_eq!(
            files.add_batch(vec![file("extra.png", 1_000)]),
            vec![AttachmentRejection::TooMany { max: 10, remaining: 0 }]
        );
        assert_eq!(files, before);
        assert!(files.at_capacity());
    }

    #[test]
    fn oversized_batch_is_refused_whole() {
        let mut files = Attachments::default();
        files.add_batch(vec![file("a.png", 10)]);
        let batch = (0..10).map(|i| file(&format!("b{i}.png"), 10)).collect();
        let rejections = files.add_batch(batch);
        assert_eq!(
            rejections[0].to_string(),
            "Maximum 10 files allowed. You can add 9 more."
        );
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn duplicate_by_name_and_size_is_rejected() {
        let mut files = Attachments::default();
        files.add_batch(vec![file("logo.png", 2_048)]);
        let before = files.clone();
        assert_eq!(
            files.add_batch(vec![file("logo.png", 2_048)]),
            vec![AttachmentRejection::Duplicate("logo.png".to_string())]
        );
        assert_eq!(files, before);
        // Same name, different size is a different file.
        assert!(files.add_batch(vec![file("logo.png", 4_096)]).is_empty());
    }

    #[test]
    fn per_file_limit() {
        let mut files = Attachments::default();
        let rejections = files.add_batch(vec![file("huge.mov", 5 * MB + 1), file("ok.png", 5 * MB)]);
        assert_eq!(rejections.len(), 1);
        assert_eq!(rejections[0].to_string(), "\"huge.mov\" exceeds 5MB limit.");
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn total_limit_rejects_only_the_overflowing_file() {
        // With the stock limits ten 5 MB files land exactly on 50 MB, so the
        // cumulative guard is exercised with a tighter budget.
        let mut files = Attachments::with_limits(AttachmentLimits {
            max_files: 10,
            max_file_bytes: 5 * MB,
            max_total_bytes: 8 * MB,
        });
        assert!(files.add_batch(vec![file("a.png", 4 * MB)]).is_empty());
        let before = files.clone();
        assert_eq!(
            files.add_batch(vec![file("b.png", 5 * MB)]),
            vec![AttachmentRejection::TotalTooLarge { limit_mb: 8 }]
        );
        assert_eq!(files, before);
        assert!(files.add_batch(vec![file("c.png", 4 * MB)]).is_empty());
        assert_eq!(files.total_bytes(), 8 * MB);
    }

    #[test]
    fn stock_limits_fill_exactly() {
        let mut files = Attachments::default();
        let batch = (0..10).map(|i| file(&format!("p{i}.png"), 5 * MB)).collect();
        assert!(files.add_batch(batch).is_empty());
        assert_eq!(files.total_bytes(), MAX_TOTAL_BYTES);
        assert_eq!(files.count_label(), "10 / 10 files");
        assert_eq!(files.total_label(), "50 MB total");
    }

    #[test]
    fn file_sizes_read_like_the_upload_list() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * MB), "5 MB");
        assert_eq!(format_file_size(3 * 1024 * MB), "3 GB");
    }

    #[test]
    fn icons_follow_mime_type() {
        assert_eq!(file_icon("image/jpeg"), "fas fa-image");
        assert_eq!(file_icon("application/pdf"), "fas fa-file-pdf");
        assert_eq!(file_icon("application/vnd.ms-excel"), "fas fa-file-excel");
        // "document" is matched before "sheet".
        assert_eq!(
            file_icon("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            "fas fa-file-word"
        );
        assert_eq!(file_icon("application/zip"), "fas fa-file-archive");
        assert_eq!(file_icon("text/plain"), "fas fa-file");
    }

    #[test]
    fn message_counter_caps_and_warns() {
        let mut form = ContactForm::default();
        form.set_message(&"a".repeat(451));
        assert_eq!(form.counter_label(), "451 / 500");
        assert_eq!(form.counter_tone(), CounterTone::Warning);
        form.set_message(&"a".repeat(600));
        assert_eq!(form.counter_label(), "500 / 500");
        form.set_message("hello");
        assert_eq!(form.counter_tone(), CounterTone::Normal);
    }

    #[test]
    fn step_two_requires_subject_then_message() {
        let mut form = ContactForm::default();
        form.details = valid_details();
        form.proceed().unwrap();
        assert_eq!(form.submit(), Err(ValidationError::MissingSubject));
        form.subject = "branding".to_string();
        form.set_message("   ");
        assert_eq!(form.submit(), Err(ValidationError::EmptyMessage));
        assert_eq!(form.submission(), Submission::Idle);
    }

    #[test]
    fn end_to_end_submission() {
        let mut form = ContactForm::default();
        form.details = valid_details();
        assert_eq!(form.proceed(), Ok(()));
        assert_eq!(form.step(), Step::Message);
        assert_eq!(form.indicators(), [Indicator::Done, Indicator::Active]);
        assert_eq!(form.progress_percent(), 100);

        form.subject = "web-design".to_string();
        form.set_message("We need a new site.");
        assert_eq!(form.submit(), Ok(()));
        assert!(form.loading_visible());
        assert!(!form.submit_enabled());
        assert_eq!(form.submit(), Err(ValidationError::AlreadySubmitting));

        assert!(form.finish());
        assert!(form.success_visible());
        assert!(!form.loading_visible());
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut form = ContactForm::default();
        form.details = valid_details();
        form.proceed().unwrap();
        form.subject = "ui-ux".to_string();
        form.set_message("Hi");
        form.attachments.add_batch(vec![file("a.png", 10)]);
        form.submit().unwrap();
        form.finish();

        form.reset();
        assert_eq!(form, ContactForm::default());
        assert_eq!(form.counter_label(), "0 / 500");
        assert_eq!(form.attachments.total_label(), "0 MB total");
        assert!(form.submit_enabled());
        assert_eq!(form.indicators(), [Indicator::Active, Indicator::Pending]);
    }
}
