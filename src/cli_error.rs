use crate::booking_manager::BookingError;
use crate::data_store::StoreError;
use crate::setup::SetupError;

#[derive(Debug)]
pub enum CliError {
    /// The application setup (environment variables) are not complete or invalid
    SetupError(String),
    /// Somehow, our data_store abstraction failed during a cli data transaction
    UnexpectedStoreError(String),
    /// Failure while handling the data file for a cli data transaction
    FileError(String),
    /// Could not complete command because the provided data (e.g. a requested date range) is not
    /// valid
    DataError(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SetupError(_) => 1,
            CliError::DataError(_) => 1,
            CliError::FileError(_) => 1,
            CliError::UnexpectedStoreError(_) => 2,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::SetupError(e) => {
                write!(f, "Setup invalid: {}", e)
            }
            CliError::DataError(e) => {
                write!(f, "Provided data is invalid: {}", e)
            }
            CliError::FileError(e) => f.write_str(e),
            CliError::UnexpectedStoreError(e) => {
                write!(f, "Unexpected error in data store: {}", e)
            }
        }
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotExisting => Self::DataError("Item not existing".to_string()),
            StoreError::ConflictEntityExists => {
                Self::DataError("Conflicting entity exists".to_string())
            }
            StoreError::LockPoisoned => Self::UnexpectedStoreError(e.to_string()),
        }
    }
}

impl From<BookingError> for CliError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::StartDateNotInFuture | BookingError::StartDateAfterEndDate => {
                Self::DataError(e.to_string())
            }
            BookingError::Store(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::DataError(value.to_string())
    }
}

impl From<SetupError> for CliError {
    fn from(value: SetupError) -> Self {
        Self::SetupError(value.to_string())
    }
}
