pub mod prelude;

pub mod medical_record;
pub mod medication;
pub mod prescription;
pub mod prescription_medicine;
pub mod record_file;
pub mod reminder;
pub mod user;
