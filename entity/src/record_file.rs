use sea_orm::entity::prelude::*;

/// Uploaded attachment belonging to a medical record.
///
/// `file_name` is the unique server-generated name on disk; `original_name`
/// is what the client called it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "record_file")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub record_id: i32,
    #[sea_orm(unique)]
    pub file_name: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::medical_record::Entity",
        from = "Column::RecordId",
        to = "super::medical_record::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MedicalRecord,
}

impl Related<super::medical_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
