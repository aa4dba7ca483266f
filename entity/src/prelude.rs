pub use super::medical_record::Entity as MedicalRecord;
pub use super::medication::Entity as Medication;
pub use super::prescription::Entity as Prescription;
pub use super::prescription_medicine::Entity as PrescriptionMedicine;
pub use super::record_file::Entity as RecordFile;
pub use super::reminder::Entity as Reminder;
pub use super::user::Entity as User;
