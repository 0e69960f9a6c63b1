use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriageError {
    #[error("No symptoms selected")]
    NoSymptoms,

    #[error("severity {value} for symptom '{symptom_name}' (id {symptom_id}) is outside range [0, 3]")]
    InvalidSeverity {
        symptom_id: i64,
        symptom_name: String,
        value: i64,
    },

    #[error("log date {log_date} is after today ({today})")]
    FutureLogDate {
        log_date: jiff::civil::Date,
        today: jiff::civil::Date,
    },
}
