use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};

// ReasonCode tells callers why an operation was refused without parsing messages
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ReasonCode {
    BlankIdentifier,
    DuplicateIsbn,
    DuplicateMemberId,
    InvalidGenre,
    InvalidCopies,
    CopiesBelowBorrowed,
    BookNotFound,
    MemberNotFound,
    NoCopiesAvailable,
    BorrowLimitReached,
    CopiesOnLoan,
    MemberHasLoans,
    NotBorrowed,
    RecordNotFound,
    DuplicateRecord,
    StaleVersion,
    Internal,
}

impl Display for ReasonCode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ReasonCode::BlankIdentifier => write!(f, "BlankIdentifier"),
            ReasonCode::DuplicateIsbn => write!(f, "DuplicateIsbn"),
            ReasonCode::DuplicateMemberId => write!(f, "DuplicateMemberId"),
            ReasonCode::InvalidGenre => write!(f, "InvalidGenre"),
            ReasonCode::InvalidCopies => write!(f, "InvalidCopies"),
            ReasonCode::CopiesBelowBorrowed => write!(f, "CopiesBelowBorrowed"),
            ReasonCode::BookNotFound => write!(f, "BookNotFound"),
            ReasonCode::MemberNotFound => write!(f, "MemberNotFound"),
            ReasonCode::NoCopiesAvailable => write!(f, "NoCopiesAvailable"),
            ReasonCode::BorrowLimitReached => write!(f, "BorrowLimitReached"),
            ReasonCode::CopiesOnLoan => write!(f, "CopiesOnLoan"),
            ReasonCode::MemberHasLoans => write!(f, "MemberHasLoans"),
            ReasonCode::NotBorrowed => write!(f, "NotBorrowed"),
            ReasonCode::RecordNotFound => write!(f, "RecordNotFound"),
            ReasonCode::DuplicateRecord => write!(f, "DuplicateRecord"),
            ReasonCode::StaleVersion => write!(f, "StaleVersion"),
            ReasonCode::Internal => write!(f, "Internal"),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum LibraryError {
    // Structurally invalid identifier, such as a blank isbn or member id. This is a
    // programming error on the caller side rather than a business outcome.
    InvalidIdentifier {
        message: String,
    },
    DuplicateKey {
        message: String,
        reason_code: ReasonCode,
    },
    NotFound {
        message: String,
        reason_code: ReasonCode,
    },
    Validation {
        message: String,
        reason_code: ReasonCode,
    },
    // No copy is on the shelf right now; the same request can succeed once a copy is returned.
    CurrentlyUnavailable {
        message: String,
        reason_code: ReasonCode,
        retryable: bool,
    },
    NotGranted {
        message: String,
        reason_code: ReasonCode,
    },
    Conflict {
        message: String,
        reason_code: ReasonCode,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl LibraryError {
    pub fn invalid_identifier(message: &str) -> LibraryError {
        LibraryError::InvalidIdentifier { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::NotFound { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn unavailable(message: &str, reason_code: ReasonCode, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_granted(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::NotGranted { message: message.to_string(), reason_code }
    }

    pub fn conflict(message: &str, reason_code: ReasonCode) -> LibraryError {
        LibraryError::Conflict { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str) -> LibraryError {
        LibraryError::Runtime { message: message.to_string() }
    }

    pub fn reason_code(&self) -> ReasonCode {
        match self {
            LibraryError::InvalidIdentifier { .. } => { ReasonCode::BlankIdentifier }
            LibraryError::DuplicateKey { reason_code, .. } => { *reason_code }
            LibraryError::NotFound { reason_code, .. } => { *reason_code }
            LibraryError::Validation { reason_code, .. } => { *reason_code }
            LibraryError::CurrentlyUnavailable { reason_code, .. } => { *reason_code }
            LibraryError::NotGranted { reason_code, .. } => { *reason_code }
            LibraryError::Conflict { reason_code, .. } => { *reason_code }
            LibraryError::Serialization { .. } => { ReasonCode::Internal }
            LibraryError::Runtime { .. } => { ReasonCode::Internal }
        }
    }

    // faults are programming or infrastructure errors, everything else is a business rejection
    pub fn is_fault(&self) -> bool {
        matches!(self, LibraryError::InvalidIdentifier { .. }
            | LibraryError::Serialization { .. }
            | LibraryError::Runtime { .. })
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            _ => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidIdentifier { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message, reason_code } => {
                write!(f, "{} {}", message, reason_code)
            }
            LibraryError::NotFound { message, reason_code } => {
                write!(f, "{} {}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {}", message, reason_code)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {} {}", message, reason_code, retryable)
            }
            LibraryError::NotGranted { message, reason_code } => {
                write!(f, "{} {}", message, reason_code)
            }
            LibraryError::Conflict { message, reason_code } => {
                write!(f, "{} {}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;


#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Biography,
    History,
    Fantasy,
}

impl Genre {
    pub const ALL: [Genre; 6] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::SciFi,
        Genre::Biography,
        Genre::History,
        Genre::Fantasy,
    ];
}

impl FromStr for Genre {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Genre::Fiction),
            "Non-Fiction" => Ok(Genre::NonFiction),
            "Sci-Fi" => Ok(Genre::SciFi),
            "Biography" => Ok(Genre::Biography),
            "History" => Ok(Genre::History),
            "Fantasy" => Ok(Genre::Fantasy),
            _ => Err(LibraryError::validation(
                format!("genre '{}' is invalid, valid genres: {:?}", s,
                        Genre::ALL.map(|g| g.to_string())).as_str(), ReasonCode::InvalidGenre)),
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Genre::Fiction => write!(f, "Fiction"),
            Genre::NonFiction => write!(f, "Non-Fiction"),
            Genre::SciFi => write!(f, "Sci-Fi"),
            Genre::Biography => write!(f, "Biography"),
            Genre::History => write!(f, "History"),
            Genre::Fantasy => write!(f, "Fantasy"),
        }
    }
}
