use sea_orm::entity::prelude::*;

/// Application user and credential state.
///
/// Holds the argon2 password hash, profile fields, email verification and
/// password reset token digests, and the failed-login lockout counters.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub email_verified: bool,
    /// Hex-encoded sha256 digest of the emailed verification token.
    pub email_verification_token: Option<String>,
    pub login_attempts: i32,
    pub lock_until: Option<DateTimeUtc>,
    /// Hex-encoded sha256 digest of the emailed reset token.
    pub reset_password_token: Option<String>,
    pub reset_password_expires: Option<DateTimeUtc>,
    pub last_login: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::medical_record::Entity")]
    MedicalRecord,
    #[sea_orm(has_many = "super::medication::Entity")]
    Medication,
    #[sea_orm(has_many = "super::prescription::Entity")]
    Prescription,
}

impl Related<super::medical_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicalRecord.def()
    }
}

impl Related<super::medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medication.def()
    }
}

impl Related<super::prescription::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prescription.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
