use sea_orm::entity::prelude::*;

/// Prescription issued to a user; line items live in `prescription_medicine`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "prescription")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub doctor_name: String,
    pub clinic: Option<String>,
    pub date_issued: DateTimeUtc,
    pub notes: Option<String>,
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
    #[sea_orm(has_many = "super::prescription_medicine::Entity")]
    PrescriptionMedicine,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::prescription_medicine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrescriptionMedicine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
