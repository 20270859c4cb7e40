#[derive(Debug, Clone)]
pub enum Message {
    // === PERIOD MESSAGES ===
    PeriodDaily(String),           // formatted day
    PeriodWeekly(String, String),  // first day, last day
    PeriodMonthly(String),         // month and year
    PeriodYearly(i32),             // year
    PeriodWindow(String, String, i64), // start, end, day count

    // === DURATION MESSAGES ===
    DurationSameInstant,
    DurationInvalidRange,
    TenureResult(String, String, String), // from, to, rendered breakdown

    // === RECAP MESSAGES ===
    RecapHeader(String), // period label
    RecapGroupHeader(String, String), // group, period label
    NoSubjectsFound,
    NoSubjectsInGroup(String),
    RecapTotals(usize, usize, f64), // subjects, records, percentage

    // === BILL MESSAGES ===
    StatementHeader(String, String), // subject name, obligation name
    StatementTally {
        satisfied: usize,
        pending: usize,
        overdue: usize,
        inactive: usize,
        received: String,
    },
    SubjectNotFound(String),
    ObligationNotFound(String),
    NoObligationsDefined,
    StatementRangeEmpty(String, String), // from, to

    // === PERMIT MESSAGES ===
    PermitsHeader(String), // reference time
    NoPermitsFound,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigSaveError,

    // === DATASET MESSAGES ===
    DatasetReadFailed(String),  // path
    DatasetParseFailed(String), // path
    DatasetLoaded {
        subjects: usize,
        records: usize,
        obligations: usize,
        fulfillments: usize,
        permits: usize,
    },

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportFailed(String),    // error

    // === INPUT MESSAGES ===
    InvalidDateInput(String),
    InvalidPeriodKeyInput(String),
}
