use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::IntoActiveModel;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use super::cohort;

/// Placeholder avatar applied when a student is created without an image.
pub const DEFAULT_IMAGE: &str = "https://i.imgur.com/r8bo8u7.png";

/// Represents a student in the `students` table.
///
/// `cohort` holds a plain cohort id without a foreign key constraint, so it
/// can dangle after the cohort is deleted; read paths resolve that to null.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub languages: Languages,
    pub program: cohort::Program,
    pub background: String,
    pub image: String,
    pub cohort: Option<i64>,
    pub projects: ProjectRefs,
}

/// Spoken languages, stored as a JSON array in one column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Languages(pub Vec<Language>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Portuguese,
    Dutch,
    Other,
}

/// Opaque references to project records, stored as a JSON array of ids.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ProjectRefs(pub Vec<i64>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cohort::Entity",
        from = "Column::Cohort",
        to = "super::cohort::Column::Id"
    )]
    Cohort,
}

impl Related<super::cohort::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cohort.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields accepted when creating a student. Optional fields fall back to
/// their documented defaults.
#[derive(Debug, Clone)]
pub struct CreateStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub languages: Vec<Language>,
    pub program: cohort::Program,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort: Option<i64>,
    pub projects: Option<Vec<i64>>,
}

/// Partial update: only fields carrying a value are written, everything
/// else is left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateStudent {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub languages: Option<Vec<Language>>,
    pub program: Option<cohort::Program>,
    pub background: Option<String>,
    pub image: Option<String>,
    pub cohort: Option<i64>,
    pub projects: Option<Vec<i64>>,
}

impl Model {
    pub async fn create(db: &DbConn, data: CreateStudent) -> Result<Model, DbErr> {
        let student = ActiveModel {
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            phone: Set(data.phone),
            linkedin_url: Set(data.linkedin_url.unwrap_or_default()),
            languages: Set(Languages(data.languages)),
            program: Set(data.program),
            background: Set(data.background.unwrap_or_default()),
            image: Set(data.image.unwrap_or_else(|| DEFAULT_IMAGE.to_owned())),
            cohort: Set(data.cohort),
            projects: Set(ProjectRefs(data.projects.unwrap_or_default())),
            ..Default::default()
        };

        student.insert(db).await
    }

    /// Fetches students with their cohort resolved via a LEFT JOIN, optionally
    /// restricted to one cohort. A dangling cohort reference resolves to
    /// `None` rather than an error.
    pub async fn find_all(
        db: &DbConn,
        cohort: Option<i64>,
    ) -> Result<Vec<(Model, Option<cohort::Model>)>, DbErr> {
        let mut query = Entity::find().find_also_related(cohort::Entity);
        if let Some(cohort_id) = cohort {
            query = query.filter(Column::Cohort.eq(cohort_id));
        }
        query.all(db).await
    }

    /// Fetches one student with the cohort resolved, `None` if the id is
    /// unknown.
    pub async fn find_by_id(
        db: &DbConn,
        id: i64,
    ) -> Result<Option<(Model, Option<cohort::Model>)>, DbErr> {
        Entity::find_by_id(id)
            .find_also_related(cohort::Entity)
            .one(db)
            .await
    }

    /// Merges `changes` into the stored record. Returns `None` when no
    /// student has the given id.
    pub async fn update_by_id(
        db: &DbConn,
        id: i64,
        changes: UpdateStudent,
    ) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut student = existing.clone().into_active_model();
        if let Some(first_name) = changes.first_name {
            student.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            student.last_name = Set(last_name);
        }
        if let Some(email) = changes.email {
            student.email = Set(email);
        }
        if let Some(phone) = changes.phone {
            student.phone = Set(phone);
        }
        if let Some(linkedin_url) = changes.linkedin_url {
            student.linkedin_url = Set(linkedin_url);
        }
        if let Some(languages) = changes.languages {
            student.languages = Set(Languages(languages));
        }
        if let Some(program) = changes.program {
            student.program = Set(program);
        }
        if let Some(background) = changes.background {
            student.background = Set(background);
        }
        if let Some(image) = changes.image {
            student.image = Set(image);
        }
        if let Some(cohort) = changes.cohort {
            student.cohort = Set(Some(cohort));
        }
        if let Some(projects) = changes.projects {
            student.projects = Set(ProjectRefs(projects));
        }

        if !student.is_changed() {
            return Ok(Some(existing));
        }

        student.update(db).await.map(Some)
    }

    /// Removes the student and returns the deleted record, or `None` when
    /// the id does not exist.
    pub async fn delete_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        let Some(existing) = Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        Entity::delete_by_id(id).exec(db).await?;
        Ok(Some(existing))
    }
}
