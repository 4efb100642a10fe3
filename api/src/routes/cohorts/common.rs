use chrono::NaiveDate;
use db::models::cohort::{Campus, CreateCohort, Format, Program, UpdateCohort};
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCohortRequest {
    #[validate(length(min = 1, message = "cohortSlug is required"))]
    pub cohort_slug: String,
    #[validate(length(min = 1, message = "cohortName is required"))]
    pub cohort_name: String,
    pub program: Program,
    pub format: Format,
    pub campus: Campus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub in_progress: Option<bool>,
    pub program_manager: Option<i64>,
    pub lead_teacher: Option<i64>,
    pub total_hours: Option<i32>,
}

impl From<CreateCohortRequest> for CreateCohort {
    fn from(req: CreateCohortRequest) -> Self {
        Self {
            cohort_slug: req.cohort_slug,
            cohort_name: req.cohort_name,
            program: req.program,
            format: req.format,
            campus: req.campus,
            start_date: req.start_date,
            end_date: req.end_date,
            in_progress: req.in_progress,
            program_manager: req.program_manager,
            lead_teacher: req.lead_teacher,
            total_hours: req.total_hours,
        }
    }
}

/// Partial update payload: absent fields leave the stored value untouched.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCohortRequest {
    pub cohort_slug: Option<String>,
    pub cohort_name: Option<String>,
    pub program: Option<Program>,
    pub format: Option<Format>,
    pub campus: Option<Campus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub in_progress: Option<bool>,
    pub program_manager: Option<i64>,
    pub lead_teacher: Option<i64>,
    pub total_hours: Option<i32>,
}

impl From<UpdateCohortRequest> for UpdateCohort {
    fn from(req: UpdateCohortRequest) -> Self {
        Self {
            cohort_slug: req.cohort_slug,
            cohort_name: req.cohort_name,
            program: req.program,
            format: req.format,
            campus: req.campus,
            start_date: req.start_date,
            end_date: req.end_date,
            in_progress: req.in_progress,
            program_manager: req.program_manager,
            lead_teacher: req.lead_teacher,
            total_hours: req.total_hours,
        }
    }
}
