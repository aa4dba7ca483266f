use sea_orm::entity::prelude::*;

/// A single medical-history entry owned by a user.
///
/// Doctor details, diagnosis, and vital signs are stored flat on the record;
/// attached files and reminders live in their own tables.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "medical_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub record_type: String,
    pub description: String,
    pub doctor_name: String,
    pub doctor_specialization: Option<String>,
    pub doctor_hospital: Option<String>,
    pub date_of_record: DateTimeUtc,
    pub date_of_next_visit: Option<DateTimeUtc>,
    pub status: String,
    pub diagnosis_primary: Option<String>,
    pub diagnosis_notes: Option<String>,
    pub systolic: Option<i32>,
    pub diastolic: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    /// Derived from weight and height on every write, never client-supplied.
    pub bmi: Option<f64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::record_file::Entity")]
    RecordFile,
    #[sea_orm(has_many = "super::reminder::Entity")]
    Reminder,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::record_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecordFile.def()
    }
}

impl Related<super::reminder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reminder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
