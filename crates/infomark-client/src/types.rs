//! Request and response types for the InfoMark API

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Common Types
// =============================================================================

/// Error body used by some endpoints instead of a status payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Response of `GET /version`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub commit: String,
    pub version: String,
}

/// Response of `GET /privacy_statement`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyStatement {
    pub text: String,
}

/// Preference of a student for a group, from 0 (avoid) to 10 (want)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Bid(u8);

impl Bid {
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Bid {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("bid must be between 0 and 10, got {}", value))
    }
}

impl From<Bid> for u8 {
    fn from(bid: Bid) -> Self {
        bid.0
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Auth Types
// =============================================================================

/// Credentials for `POST /auth/token` and `POST /auth/sessions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub plain_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmEmailRequest {
    pub email: String,
    pub confirmation_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePasswordRequest {
    pub email: String,
    pub reset_password_token: String,
    pub plain_password: String,
}

/// A single JWT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token: String,
}

/// Token pair issued by `POST /auth/token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access: Token,
    pub refresh: Token,
}

/// Response of `POST /auth/sessions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub root: bool,
}

// =============================================================================
// Account / User Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_number: String,
    pub semester: u32,
    pub subject: String,
    pub language: String,
    pub plain_password: String,
}

/// Profile update for the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMeRequest {
    pub first_name: String,
    pub last_name: String,
    pub student_number: String,
    pub semester: u32,
    pub subject: String,
    /// Two-letter language code
    pub language: String,
}

/// Full user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avatar_url: String,
    pub email: String,
    pub student_number: String,
    pub semester: u32,
    pub subject: String,
    pub language: String,
    pub root: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserShort {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Profile part of [`CreateUserAccountRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_number: String,
    pub semester: u32,
    pub subject: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserAccountRequest {
    pub user: NewUser,
    pub account: LoginRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRequest {
    pub account: LoginRequest,
    pub old_plain_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub subject: String,
    pub body: String,
}

// =============================================================================
// Course Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRequest {
    pub name: String,
    pub description: String,
    pub begins_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub required_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub begins_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub required_percentage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRoleInCourseRequest {
    pub role: i64,
}

// =============================================================================
// Sheet / Task Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRequest {
    pub name: String,
    pub publish_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetResponse {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub file_url: String,
    pub publish_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetPointsResponse {
    pub acquired_points: i64,
    pub max_points: i64,
    pub sheet_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub max_points: i64,
    pub name: String,
    pub public_docker_image: String,
    pub private_docker_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub id: i64,
    pub name: String,
    pub max_points: i64,
    pub public_docker_image: String,
    pub private_docker_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRatingRequest {
    pub rating: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRatingResponse {
    pub task_id: i64,
    pub average_rating: f32,
    pub own_rating: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPointsResponse {
    pub acquired_points: i64,
    pub max_points: i64,
    pub task_id: i64,
}

/// Entry of `GET /courses/{id}/sheets/{id}/tasks`.
///
/// The documented example matches none of the named response schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTaskResponse {
    pub id: i64,
    pub name: String,
    pub max_points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingTaskResponse {
    pub task: TaskResponse,
    pub course_id: i64,
    pub sheet_id: i64,
}

// =============================================================================
// Submission / Grade Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub id: i64,
    pub user_id: i64,
    pub task_id: i64,
    pub file_url: String,
}

/// Query filter for `GET /courses/{id}/submissions`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRequest {
    pub acquired_points: i64,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeResponse {
    pub id: i64,
    pub public_execution_state: i32,
    pub private_execution_state: i32,
    pub public_test_log: String,
    pub private_test_log: String,
    pub public_test_status: i32,
    pub private_test_status: i32,
    pub acquired_points: i64,
    pub feedback: String,
    pub tutor_id: i64,
    pub submission_id: i64,
    pub file_url: String,
    pub user: UserShort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingGradeResponse {
    pub grade: GradeResponse,
    pub course_id: i64,
    pub sheet_id: i64,
    pub task_id: i64,
}

// =============================================================================
// Group / Enrollment Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorRef {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRequest {
    pub tutor: TutorRef,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: i64,
    pub course_id: i64,
    pub description: String,
    pub tutor: UserResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBidRequest {
    pub bid: Bid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBidResponse {
    pub bid: Bid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBidsResponse {
    pub id: i64,
    pub user_id: i64,
    pub group_id: i64,
    pub bid: Bid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEnrollmentRequest {
    pub user_id: i64,
}

/// User details embedded in [`EnrollmentResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrolledUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub avatar_url: String,
    pub email: String,
    pub student_number: String,
    pub semester: u32,
    pub subject: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentResponse {
    pub role: i64,
    pub user: EnrolledUser,
}

/// Query filter for enrollment listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnrollmentResponse {
    pub id: i64,
    pub course_id: i64,
    pub role: i64,
}

// =============================================================================
// Material Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRequest {
    pub name: String,
    pub kind: i32,
    pub publish_at: DateTime<Utc>,
    pub lecture_at: DateTime<Utc>,
    pub required_role: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialResponse {
    pub id: i64,
    pub name: String,
    pub file_url: String,
    pub kind: i32,
    pub publish_at: DateTime<Utc>,
    pub lecture_at: DateTime<Utc>,
    pub required_role: i32,
}

// =============================================================================
// Exam Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamRequest {
    pub name: String,
    pub description: String,
    pub exam_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub exam_time: DateTime<Utc>,
    pub course_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserExamRequest {
    pub status: i32,
    pub mark: String,
    pub user_id: i64,
}

/// Enrollment of a user in an exam
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamEnrollmentResponse {
    pub status: i32,
    pub mark: String,
    pub user_id: i64,
    pub course_id: i64,
    pub exam_id: i64,
}
