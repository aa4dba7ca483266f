mod medical_record;
mod medication;
mod prescription;
mod record_file;
mod reminder;
mod user;
