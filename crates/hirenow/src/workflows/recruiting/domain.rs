use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a job posting, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u32);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a candidate record, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u32);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Percentage-style score bounded to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("score {0} is outside 0..=100")]
pub struct ScoreOutOfRange(pub u8);

impl Score {
    pub const fn new(value: u8) -> Result<Self, ScoreOutOfRange> {
        if value > 100 {
            Err(ScoreOutOfRange(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Clamp to 100 instead of failing; used for fixture literals.
    pub const fn saturating(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    Active,
    Hot,
}

impl JobStatus {
    pub const fn label(self) -> &'static str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Hot => "Hot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub employment_type: String,
    pub salary: String,
    pub applicants: u32,
    pub posted: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub status: JobStatus,
}

impl JobPosting {
    /// Label shown in the job description picker on the AI match screen.
    pub fn listing_label(&self) -> String {
        format!("{} - {}", self.title, self.company)
    }
}

/// Opaque handle for an uploaded resume or job description attachment. Never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Values captured by the post-job form. Blank optional fields count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attachment: Option<UploadedFile>,
}

impl JobDraft {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_employment_type(mut self, employment_type: impl Into<String>) -> Self {
        self.employment_type = Some(employment_type.into());
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    pub fn with_attachment(mut self, file: UploadedFile) -> Self {
        self.attachment = Some(file);
        self
    }
}

/// Hiring pipeline status. The named stages drive badge colouring; anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CandidateStatus {
    UnderReview,
    InterviewScheduled,
    TechnicalAssessment,
    FinalInterview,
    OfferExtended,
    Other(String),
}

impl CandidateStatus {
    pub fn label(&self) -> &str {
        match self {
            CandidateStatus::UnderReview => "Under Review",
            CandidateStatus::InterviewScheduled => "Interview Scheduled",
            CandidateStatus::TechnicalAssessment => "Technical Assessment",
            CandidateStatus::FinalInterview => "Final Interview",
            CandidateStatus::OfferExtended => "Offer Extended",
            CandidateStatus::Other(label) => label,
        }
    }

    pub fn badge(&self) -> StatusBadge {
        match self {
            CandidateStatus::UnderReview => StatusBadge::Yellow,
            CandidateStatus::InterviewScheduled => StatusBadge::Blue,
            CandidateStatus::TechnicalAssessment => StatusBadge::Purple,
            CandidateStatus::FinalInterview => StatusBadge::Indigo,
            CandidateStatus::OfferExtended => StatusBadge::Green,
            CandidateStatus::Other(_) => StatusBadge::Gray,
        }
    }
}

impl From<String> for CandidateStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Under Review" => CandidateStatus::UnderReview,
            "Interview Scheduled" => CandidateStatus::InterviewScheduled,
            "Technical Assessment" => CandidateStatus::TechnicalAssessment,
            "Final Interview" => CandidateStatus::FinalInterview,
            "Offer Extended" => CandidateStatus::OfferExtended,
            _ => CandidateStatus::Other(value),
        }
    }
}

impl From<&str> for CandidateStatus {
    fn from(value: &str) -> Self {
        CandidateStatus::from(value.to_string())
    }
}

impl From<CandidateStatus> for String {
    fn from(status: CandidateStatus) -> Self {
        match status {
            CandidateStatus::Other(label) => label,
            named => named.label().to_string(),
        }
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBadge {
    Yellow,
    Blue,
    Purple,
    Indigo,
    Green,
    Gray,
}

impl StatusBadge {
    pub const fn color(self) -> &'static str {
        match self {
            StatusBadge::Yellow => "yellow",
            StatusBadge::Blue => "blue",
            StatusBadge::Purple => "purple",
            StatusBadge::Indigo => "indigo",
            StatusBadge::Green => "green",
            StatusBadge::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub applied_job: String,
    pub status: CandidateStatus,
    pub ai_score: Score,
    pub email: String,
    pub phone: String,
    pub notice_period: String,
    pub current_location: String,
    pub current_salary: String,
    pub expected_salary: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Option<String>,
    pub avatar: String,
}

/// Candidate record produced by the AI match step, carrying its own match percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub match_percentage: Score,
}

/// "From job" reference carried from the jobs screen into the candidates screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub job_id: JobId,
    pub job_title: String,
}

/// Outreach actions offered on a candidate row. They only produce notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outreach {
    InterviewEmail,
    FeedbackEmail,
    RejectionEmail,
    PhoneCall,
}

impl Outreach {
    pub const fn label(self) -> &'static str {
        match self {
            Outreach::InterviewEmail => "Interview",
            Outreach::FeedbackEmail => "Feedback",
            Outreach::RejectionEmail => "Not Selected",
            Outreach::PhoneCall => "Call",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_rejects_values_above_hundred() {
        assert_eq!(Score::new(100).map(Score::value), Ok(100));
        assert_eq!(Score::new(101), Err(ScoreOutOfRange(101)));
        assert!(serde_json::from_str::<Score>("150").is_err());
        assert_eq!(serde_json::from_str::<Score>("87").ok(), Score::new(87).ok());
    }

    #[test]
    fn candidate_status_round_trips_through_labels() {
        let named = CandidateStatus::from("Final Interview");
        assert_eq!(named, CandidateStatus::FinalInterview);
        assert_eq!(named.badge(), StatusBadge::Indigo);

        let open = CandidateStatus::from("Open to offers");
        assert_eq!(open.label(), "Open to offers");
        assert_eq!(open.badge(), StatusBadge::Gray);
        assert_eq!(
            serde_json::to_string(&open).expect("status serializes"),
            "\"Open to offers\""
        );
    }

    #[test]
    fn listing_label_joins_title_and_company() {
        let job = JobPosting {
            id: JobId(9),
            title: "Data Scientist".to_string(),
            company: "AI Innovations".to_string(),
            location: "Boston, MA".to_string(),
            employment_type: "Full-time".to_string(),
            salary: "Competitive".to_string(),
            applicants: 0,
            posted: "Just now".to_string(),
            description: String::new(),
            requirements: Vec::new(),
            status: JobStatus::Active,
        };
        assert_eq!(job.listing_label(), "Data Scientist - AI Innovations");
    }
}
