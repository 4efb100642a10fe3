use db::models::cohort;
use db::models::student::{self, CreateStudent, Language, Languages, ProjectRefs, UpdateStudent};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    pub linkedin_url: Option<String>,
    #[validate(length(min = 1, message = "At least one language is required"))]
    pub languages: Vec<Language>,
    pub program: cohort::Program,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort: Option<i64>,
    pub projects: Option<Vec<i64>>,
}

impl From<CreateStudentRequest> for CreateStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            linkedin_url: req.linkedin_url,
            languages: req.languages,
            program: req.program,
            background: req.background,
            image: req.image,
            cohort: req.cohort,
            projects: req.projects,
        }
    }
}

/// Partial update payload: absent fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateStudentRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    #[validate(length(min = 1, message = "At least one language is required"))]
    pub languages: Option<Vec<Language>>,
    pub program: Option<cohort::Program>,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort: Option<i64>,
    pub projects: Option<Vec<i64>>,
}

impl From<UpdateStudentRequest> for UpdateStudent {
    fn from(req: UpdateStudentRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            linkedin_url: req.linkedin_url,
            languages: req.languages,
            program: req.program,
            background: req.background,
            image: req.image,
            cohort: req.cohort,
            projects: req.projects,
        }
    }
}

/// A student with its cohort reference resolved into the full cohort record.
/// `cohort` is omitted entirely when unset or dangling.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub languages: Languages,
    pub program: cohort::Program,
    pub background: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<cohort::Model>,
    pub projects: ProjectRefs,
}

impl From<(student::Model, Option<cohort::Model>)> for StudentResponse {
    fn from((student, cohort): (student::Model, Option<cohort::Model>)) -> Self {
        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            phone: student.phone,
            linkedin_url: student.linkedin_url,
            languages: student.languages,
            program: student.program,
            background: student.background,
            image: student.image,
            cohort,
            projects: student.projects,
        }
    }
}
