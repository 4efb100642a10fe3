use sea_orm::ActiveValue::Set;
use sea_orm::IntoActiveModel;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Hours a cohort runs for when none are given.
pub const DEFAULT_TOTAL_HOURS: i32 = 360;

/// Represents a training cohort in the `cohorts` table.
///
/// `program_manager` and `lead_teacher` hold plain user ids; there is no
/// cascade, so deleting a user leaves them dangling.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cohorts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique URL-friendly identifier, e.g. `wd-2024-01`.
    #[sea_orm(unique)]
    pub cohort_slug: String,
    pub cohort_name: String,
    pub program: Program,
    pub format: Format,
    pub campus: Campus,
    pub start_date: Date,
    pub end_date: Date,
    pub in_progress: bool,
    pub program_manager: Option<i64>,
    pub lead_teacher: Option<i64>,
    pub total_hours: i32,
}

/// Training program offered, shared with students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "program")]
pub enum Program {
    #[sea_orm(string_value = "Web Dev")]
    #[serde(rename = "Web Dev")]
    WebDev,
    #[sea_orm(string_value = "UX/UI")]
    #[serde(rename = "UX/UI")]
    UxUi,
    #[sea_orm(string_value = "Data Analytics")]
    #[serde(rename = "Data Analytics")]
    DataAnalytics,
    #[sea_orm(string_value = "Cybersecurity")]
    Cybersecurity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "format")]
pub enum Format {
    #[sea_orm(string_value = "Full Time")]
    #[serde(rename = "Full Time")]
    FullTime,
    #[sea_orm(string_value = "Part Time")]
    #[serde(rename = "Part Time")]
    PartTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "campus")]
pub enum Campus {
    #[sea_orm(string_value = "Madrid")]
    Madrid,
    #[sea_orm(string_value = "Barcelona")]
    Barcelona,
    #[sea_orm(string_value = "Miami")]
    Miami,
    #[sea_orm(string_value = "Paris")]
    Paris,
    #[sea_orm(string_value = "Berlin")]
    Berlin,
    #[sea_orm(string_value = "Amsterdam")]
    Amsterdam,
    #[sea_orm(string_value = "Lisbon")]
    Lisbon,
    #[sea_orm(string_value = "Remote")]
    Remote,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when creating a cohort. Optional fields fall back to
/// their documented defaults.
#[derive(Debug, Clone)]
pub struct CreateCohort {
    pub cohort_slug: String,
    pub cohort_name: String,
    pub program: Program,
    pub format: Format,
    pub campus: Campus,
    pub start_date: Date,
    pub end_date: Date,
    pub in_progress: Option<bool>,
    pub program_manager: Option<i64>,
    pub lead_teacher: Option<i64>,
    pub total_hours: Option<i32>,
}

/// Partial update: only fields carrying a value are written, everything
/// else is left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateCohort {
    pub cohort_slug: Option<String>,
    pub cohort_name: Option<String>,
    pub program: Option<Program>,
    pub format: Option<Format>,
    pub campus: Option<Campus>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub in_progress: Option<bool>,
    pub program_manager: Option<i64>,
    pub lead_teacher: Option<i64>,
    pub total_hours: Option<i32>,
}

impl Model {
    pub async fn create(db: &DbConn, data: CreateCohort) -> Result<Model, DbErr> {
        let cohort = ActiveModel {
            cohort_slug: Set(data.cohort_slug),
            cohort_name: Set(data.cohort_name),
            program: Set(data.program),
            format: Set(data.format),
            campus: Set(data.campus),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            in_progress: Set(data.in_progress.unwrap_or(false)),
            program_manager: Set(data.program_manager),
            lead_teacher: Set(data.lead_teacher),
            total_hours: Set(data.total_hours.unwrap_or(DEFAULT_TOTAL_HOURS)),
            ..Default::default()
        };

        cohort.insert(db).await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Merges `changes` into the stored record. Returns `None` when no
    /// cohort has the given id.
    pub async fn update_by_id(
        db: &DbConn,
        id: i64,
        changes: UpdateCohort,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut cohort = existing.clone().into_active_model();
        if let Some(cohort_slug) = changes.cohort_slug {
            cohort.cohort_slug = Set(cohort_slug);
        }
        if let Some(cohort_name) = changes.cohort_name {
            cohort.cohort_name = Set(cohort_name);
        }
        if let Some(program) = changes.program {
            cohort.program = Set(program);
        }
        if let Some(format) = changes.format {
            cohort.format = Set(format);
        }
        if let Some(campus) = changes.campus {
            cohort.campus = Set(campus);
        }
        if let Some(start_date) = changes.start_date {
            cohort.start_date = Set(start_date);
        }
        if let Some(end_date) = changes.end_date {
            cohort.end_date = Set(end_date);
        }
        if let Some(in_progress) = changes.in_progress {
            cohort.in_progress = Set(in_progress);
        }
        if let Some(program_manager) = changes.program_manager {
            cohort.program_manager = Set(Some(program_manager));
        }
        if let Some(lead_teacher) = changes.lead_teacher {
            cohort.lead_teacher = Set(Some(lead_teacher));
        }
        if let Some(total_hours) = changes.total_hours {
            cohort.total_hours = Set(total_hours);
        }

        if !cohort.is_changed() {
            return Ok(Some(existing));
        }

        cohort.update(db).await.map(Some)
    }

    /// Removes the cohort and returns the deleted record, or `None` when the
    /// id does not exist. Students referencing it are deliberately left
    /// untouched; their `cohort` field becomes a dangling reference.
    pub async fn delete_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        Entity::delete_by_id(id).exec(db).await?;
        Ok(Some(existing))
    }
}
